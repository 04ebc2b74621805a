//! Search limits shared by every engine.
//!
//! Engines are bounded by a fixed depth and a node budget. The budget is a
//! cooperative self-limit: once spent, the search stops expanding new nodes
//! and answers with the best move found so far.

use crate::counting::CountingState;

/// Limits for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Nominal search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum number of nodes before the search degrades to static scores
    pub node_budget: u64,
    /// Active counting countdown, if the game is under a counting rule
    pub counting: Option<CountingState>,
}

impl SearchLimits {
    pub const UNLIMITED_NODES: u64 = u64::MAX;

    /// Create limits with only a depth constraint.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            node_budget: Self::UNLIMITED_NODES,
            counting: None,
        }
    }

    /// Create limits with both depth and node constraints.
    pub fn depth_and_nodes(depth: u8, node_budget: u64) -> Self {
        Self {
            depth,
            node_budget,
            counting: None,
        }
    }

    pub fn with_counting(mut self, counting: Option<CountingState>) -> Self {
        self.counting = counting;
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth_and_nodes(3, 120_000)
    }
}
