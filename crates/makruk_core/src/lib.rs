pub mod attacks;
pub mod board;
pub mod counting;
pub mod error;
pub mod limits;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use attacks::attacks_from;
pub use board::*;
pub use counting::CountingState;
pub use error::*;
pub use limits::SearchLimits;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait: implemented by the alpha-beta AI and the random fallback
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the engine's perspective
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether the node budget ran out before the search finished
    pub stopped: bool,
}

/// Trait that all Makruk engines implement.
///
/// Lets the match runner swap the alpha-beta engine for the random one.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `limits` - Search limits (depth, node budget, counting)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "makruk-engine"
    }

    /// Reset internal state for a new game (clear hash tables, history, etc.)
    fn new_game(&mut self) {}
}
