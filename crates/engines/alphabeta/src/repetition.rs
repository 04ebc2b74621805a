//! Repetition tracking over the current search line.

/// Plies looked back when counting repetitions.
pub const REPETITION_WINDOW: usize = 12;

/// Cost of each earlier occurrence inside the window.
pub const REPEAT_PENALTY: i32 = 15;

/// Cost once the position has already been seen twice.
pub const THREEFOLD_PENALTY: i32 = 300;

/// Stack of position keys along the line being searched. Pushed after every
/// move and popped on undo, so it stays in lockstep with the position.
#[derive(Debug, Clone, Default)]
pub struct RepetitionTracker {
    keys: Vec<u64>,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker whose only entry is the root position.
    pub fn seeded(key: u64) -> Self {
        Self { keys: vec![key] }
    }

    pub fn push(&mut self, key: u64) {
        self.keys.push(key);
    }

    pub fn pop(&mut self) -> Option<u64> {
        self.keys.pop()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// How often the current (last pushed) key appears among the previous
    /// [`REPETITION_WINDOW`] entries.
    pub fn occurrences(&self) -> usize {
        let Some((&current, earlier)) = self.keys.split_last() else {
            return 0;
        };
        earlier
            .iter()
            .rev()
            .take(REPETITION_WINDOW)
            .filter(|&&k| k == current)
            .count()
    }

    /// Penalty charged to the side that produced the current position.
    pub fn penalty(&self) -> i32 {
        match self.occurrences() {
            0 => 0,
            1 => REPEAT_PENALTY,
            _ => THREEFOLD_PENALTY,
        }
    }
}

#[cfg(test)]
#[path = "repetition_tests.rs"]
mod repetition_tests;
