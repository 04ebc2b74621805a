//! Move ordering: transposition move, captures, killers, history, centre.

use std::cmp::Reverse;

use makruk_core::{x_of, y_of, Move, Position};

/// Deepest ply that keeps killer moves.
pub const MAX_PLY: usize = 64;

const TT_MOVE_SCORE: i32 = 1_000_000;
const CAPTURE_BASE: i32 = 500_000;
const KILLER_SCORES: [i32; 2] = [400_000, 399_000];
const HISTORY_CEILING: u32 = 300_000;

/// Two quiet moves per ply that caused a beta cutoff.
#[derive(Debug, Clone)]
pub struct Killers {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl Default for Killers {
    fn default() -> Self {
        Self {
            slots: [[None; 2]; MAX_PLY],
        }
    }
}

impl Killers {
    /// Records `mv` as the newest killer at `ply`. Duplicates are ignored.
    pub fn store(&mut self, ply: usize, mv: Move) {
        let Some(slot) = self.slots.get_mut(ply) else {
            return;
        };
        if slot[0] == Some(mv) {
            return;
        }
        slot[1] = slot[0];
        slot[0] = Some(mv);
    }

    pub fn at(&self, ply: usize) -> [Option<Move>; 2] {
        self.slots.get(ply).copied().unwrap_or([None; 2])
    }

    pub fn clear(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

/// `[from][to]` counters rewarded on quiet cutoffs.
#[derive(Debug, Clone)]
pub struct History {
    table: Box<[[u32; 64]; 64]>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            table: Box::new([[0; 64]; 64]),
        }
    }
}

impl History {
    pub fn reward(&mut self, mv: Move, depth: u8) {
        let bonus = u32::from(depth) * u32::from(depth);
        let cell = &mut self.table[mv.from as usize][mv.to as usize];
        *cell = cell.saturating_add(bonus);
    }

    pub fn get(&self, mv: Move) -> u32 {
        self.table[mv.from as usize][mv.to as usize]
    }

    /// Halves every counter so older searches weigh less.
    pub fn decay(&mut self) {
        for row in self.table.iter_mut() {
            for cell in row.iter_mut() {
                *cell /= 2;
            }
        }
    }

    pub fn clear(&mut self) {
        for row in self.table.iter_mut() {
            row.fill(0);
        }
    }
}

/// Small bonus for destinations near the centre, 0 in the corners.
pub fn centrality(sq: u8) -> i32 {
    14 - (2 * x_of(sq) as i32 - 7).abs() - (2 * y_of(sq) as i32 - 7).abs()
}

/// Ordering key of `mv`; higher is searched first.
pub fn move_score(
    pos: &Position,
    mv: Move,
    tt_move: Option<Move>,
    killers: [Option<Move>; 2],
    history: &History,
) -> i32 {
    if tt_move == Some(mv) {
        return TT_MOVE_SCORE;
    }
    if let Some(victim) = pos.piece_at(mv.to) {
        return CAPTURE_BASE + victim.kind.value();
    }
    if let Some(i) = killers.iter().position(|&k| k == Some(mv)) {
        return KILLER_SCORES[i];
    }
    history.get(mv).min(HISTORY_CEILING) as i32 + centrality(mv.to)
}

/// Sorts `moves` best-first. The sort is stable so equal keys keep
/// generation order.
pub fn order_moves(
    pos: &Position,
    moves: &mut [Move],
    tt_move: Option<Move>,
    killers: [Option<Move>; 2],
    history: &History,
) {
    moves.sort_by_cached_key(|&mv| Reverse(move_score(pos, mv, tt_move, killers, history)));
}

/// Captures only: most valuable victim first.
pub fn order_captures(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_cached_key(|&mv| Reverse(pos.piece_at(mv.to).map_or(0, |pc| pc.kind.value())));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
