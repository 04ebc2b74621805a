//! Makruk counting rules.
//!
//! When the material left cannot be expected to produce mate quickly, the
//! stronger side must mate within a fixed number of its own moves or the game
//! is drawn. Detection here pattern-matches the material on the board to pick
//! the attacking side and the move limit; it approximates the official rules.

use crate::{board::Position, types::*};

/// Limit when neither side has Fish left ("board's honor").
pub const BOARD_HONOR_LIMIT: u32 = 64;

/// Countdown owned by the attacking side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountingState {
    pub attacker: Color,
    pub limit: u32,
    pub remaining: u32,
}

impl CountingState {
    pub fn new(attacker: Color, limit: u32) -> Self {
        Self {
            attacker,
            limit,
            remaining: limit,
        }
    }

    /// Counts already used.
    pub fn spent(&self) -> u32 {
        self.limit.saturating_sub(self.remaining)
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    /// State after `mover` completed a move. Only the attacker's moves count.
    pub fn after_move(self, mover: Color) -> Self {
        if mover == self.attacker {
            Self {
                remaining: self.remaining.saturating_sub(1),
                ..self
            }
        } else {
            self
        }
    }
}

/// Limit when the defender is down to a bare king ("pieces' honor").
fn pieces_honor_limit(pos: &Position, attacker: Color) -> u32 {
    let rooks = pos.count(attacker, PieceKind::Rook);
    let bishops = pos.count(attacker, PieceKind::Bishop);
    let knights = pos.count(attacker, PieceKind::Knight);
    if rooks >= 2 {
        8
    } else if rooks == 1 {
        16
    } else if bishops >= 2 {
        22
    } else if knights >= 2 {
        32
    } else if bishops == 1 {
        44
    } else {
        64
    }
}

fn material(pos: &Position, color: Color) -> i32 {
    pos.board
        .iter()
        .flatten()
        .filter(|pc| pc.color == color)
        .map(|pc| pc.kind.value())
        .sum()
}

/// Infers a fresh counting state from the material on the board, or `None`
/// when no count applies.
///
/// Counting only starts once no Fish is left on the board. A bare king
/// against anything then gives a pieces'-honor count; otherwise the
/// materially stronger side counts from [`BOARD_HONOR_LIMIT`], and equal
/// material falls back to the side to move.
pub fn detect(pos: &Position) -> Option<CountingState> {
    let pawns = pos.count(Color::White, PieceKind::Pawn) + pos.count(Color::Black, PieceKind::Pawn);
    if pawns > 0 {
        return None;
    }

    let white = pos.non_king_count(Color::White);
    let black = pos.non_king_count(Color::Black);

    match (white, black) {
        (0, 0) => return None,
        (_, 0) => {
            return Some(CountingState::new(
                Color::White,
                pieces_honor_limit(pos, Color::White),
            ));
        }
        (0, _) => {
            return Some(CountingState::new(
                Color::Black,
                pieces_honor_limit(pos, Color::Black),
            ));
        }
        _ => {}
    }

    let attacker = match material(pos, Color::White).cmp(&material(pos, Color::Black)) {
        std::cmp::Ordering::Greater => Color::White,
        std::cmp::Ordering::Less => Color::Black,
        std::cmp::Ordering::Equal => pos.side_to_move,
    };
    Some(CountingState::new(attacker, BOARD_HONOR_LIMIT))
}

#[cfg(test)]
#[path = "counting_tests.rs"]
mod counting_tests;
