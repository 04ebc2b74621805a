//! Fixed-size transposition table.

use makruk_core::Move;
use tracing::trace;

/// Score for delivering mate at the root. Mate found `n` plies below the
/// root scores `MATE - n`.
pub const MATE: i32 = 100_000;

/// Scores beyond this magnitude encode a mate distance.
pub const MATE_THRESHOLD: i32 = MATE - 1_000;

pub const DEFAULT_TT_CAPACITY: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Failed high: the true score is at least `score`.
    Lower,
    /// Failed low: the true score is at most `score`.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u8,
    /// Stored ply-independent; see [`score_to_tt`].
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
    pub generation: u8,
}

/// What a probe tells the caller at a given depth and window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Miss,
    /// Entry too shallow or not decisive; only the move is useful.
    Hint(Option<Move>),
    /// The window narrowed; continue with the new bounds.
    Narrowed {
        alpha: i32,
        beta: i32,
        best_move: Option<Move>,
    },
    /// The stored score settles this node.
    Cutoff { score: i32, best_move: Option<Move> },
}

pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    mask: usize,
    generation: u8,
    stores: u64,
    rejected: u64,
}

impl TranspositionTable {
    /// Table with `capacity` rounded up to a power of two slots.
    pub fn new(capacity: usize) -> Self {
        let size = capacity.max(1).next_power_of_two();
        Self {
            slots: vec![None; size],
            mask: size - 1,
            generation: 0,
            stores: 0,
            rejected: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Marks every existing entry as belonging to an older search.
    pub fn new_generation(&mut self) {
        trace!(
            generation = self.generation,
            stores = self.stores,
            rejected = self.rejected,
            "transposition table generation closed"
        );
        self.generation = self.generation.wrapping_add(1);
        self.stores = 0;
        self.rejected = 0;
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.generation = 0;
        self.stores = 0;
        self.rejected = 0;
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Raw entry for `key`, if its slot holds that key.
    pub fn get(&self, key: u64) -> Option<TtEntry> {
        self.slots[self.index(key)].filter(|e| e.key == key)
    }

    /// Looks `key` up for a node searched to `depth` at `ply` with window
    /// `(alpha, beta)`.
    pub fn probe(&self, key: u64, depth: u8, alpha: i32, beta: i32, ply: usize) -> Probe {
        let Some(entry) = self.get(key) else {
            return Probe::Miss;
        };
        if entry.depth < depth {
            return Probe::Hint(entry.best_move);
        }

        let score = score_from_tt(entry.score, ply);
        let (mut alpha, mut beta) = (alpha, beta);
        match entry.bound {
            Bound::Exact => {
                return Probe::Cutoff {
                    score,
                    best_move: entry.best_move,
                }
            }
            Bound::Lower => alpha = alpha.max(score),
            Bound::Upper => beta = beta.min(score),
        }
        if alpha >= beta {
            Probe::Cutoff {
                score,
                best_move: entry.best_move,
            }
        } else {
            Probe::Narrowed {
                alpha,
                beta,
                best_move: entry.best_move,
            }
        }
    }

    /// Stores a search result. `score` is relative to `ply` and converted to
    /// a ply-independent mate distance before storing.
    pub fn store(
        &mut self,
        key: u64,
        depth: u8,
        score: i32,
        bound: Bound,
        best_move: Option<Move>,
        ply: usize,
    ) {
        let idx = self.index(key);
        let replace = match self.slots[idx] {
            None => true,
            Some(old) => old.key == key || old.generation != self.generation || old.depth <= depth,
        };
        if !replace {
            self.rejected += 1;
            return;
        }
        self.stores += 1;
        self.slots[idx] = Some(TtEntry {
            key,
            depth,
            score: score_to_tt(score, ply),
            bound,
            best_move,
            generation: self.generation,
        });
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

/// Mate scores are stored as distance from the stored node rather than from
/// the root.
pub fn score_to_tt(score: i32, ply: usize) -> i32 {
    let ply = ply as i32;
    if score >= MATE_THRESHOLD {
        score + ply
    } else if score <= -MATE_THRESHOLD {
        score - ply
    } else {
        score
    }
}

pub fn score_from_tt(score: i32, ply: usize) -> i32 {
    let ply = ply as i32;
    if score >= MATE_THRESHOLD {
        score - ply
    } else if score <= -MATE_THRESHOLD {
        score + ply
    } else {
        score
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
