//! Static evaluation.
//!
//! Scores are in centipawns and White-positive. The search converts them to
//! the side to move by multiplying with the color sign.

use makruk_core::{legal_moves_into, x_of, y_of, CountingState, Position};

use crate::repetition::RepetitionTracker;

/// Mobility is counted up to this many legal moves.
pub const MOBILITY_CAP: i32 = 28;

/// Cost per count the attacker has already spent.
pub const COUNT_BURN: i32 = 3;

/// Largest bonus for pushing the defending king to the edge.
pub const EDGE_BONUS_MAX: i32 = 60;

/// Bonus per step of king distance the attacker has closed.
pub const KING_APPROACH: i32 = 8;

/// Full evaluation of `pos`, White-positive.
pub fn evaluate(
    pos: &mut Position,
    rep: &RepetitionTracker,
    counting: Option<CountingState>,
) -> i32 {
    let mut score = material(pos);
    score += mobility(pos);

    // The side that just moved produced the repeated position.
    let mover = pos.side_to_move.other();
    score -= rep.penalty() * mover.sign();

    if let Some(state) = counting {
        score += counting_term(pos, state);
    }
    score
}

/// Material balance, White-positive.
pub fn material(pos: &Position) -> i32 {
    pos.board
        .iter()
        .flatten()
        .map(|pc| pc.kind.value() * pc.color.sign())
        .sum()
}

/// Legal move count of the side to move, capped and signed by that side.
pub fn mobility(pos: &mut Position) -> i32 {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    let n = (moves.len() as i32).min(MOBILITY_CAP);
    n * pos.side_to_move.sign()
}

/// Counting-phase adjustment, White-positive.
///
/// The attacker loses a little for every count burnt and gains for cornering
/// the defending king with its own king close by.
pub fn counting_term(pos: &Position, state: CountingState) -> i32 {
    let attacker = state.attacker;
    let mut term = -COUNT_BURN * state.spent() as i32;

    if let (Some(own), Some(theirs)) = (pos.king_sq(attacker), pos.king_sq(attacker.other())) {
        term += edge_bonus(theirs);
        term += KING_APPROACH * (7 - king_distance(own, theirs));
    }
    term * attacker.sign()
}

/// 0 in the centre, [`EDGE_BONUS_MAX`] on the rim.
fn edge_bonus(sq: u8) -> i32 {
    let dx = (2 * x_of(sq) as i32 - 7).abs();
    let dy = (2 * y_of(sq) as i32 - 7).abs();
    (dx.max(dy) - 1) * EDGE_BONUS_MAX / 6
}

/// Chebyshev distance, 1 for adjacent kings.
fn king_distance(a: u8, b: u8) -> i32 {
    let dx = (x_of(a) - x_of(b)).abs() as i32;
    let dy = (y_of(a) - y_of(b)).abs() as i32;
    dx.max(dy)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
