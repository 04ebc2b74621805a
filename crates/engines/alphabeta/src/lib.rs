//! Alpha-beta Makruk engine
//!
//! Negamax with alpha-beta pruning over the rules in `makruk_core`:
//! - Material, mobility, repetition and counting-rule evaluation
//! - Fixed-size transposition table with generation-aware replacement
//! - TT move, MVV captures, killer and history move ordering
//! - Capture-only quiescence search
//! - Node budgets per difficulty and an optional opening book

pub mod ai;
pub mod book;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod eval;
pub mod ordering;
pub mod repetition;
pub mod search;
pub mod tt;

pub use ai::{Ai, EngineConfig, MoveRequest, MoveResponse, MoveSource};
pub use book::OpeningBook;
pub use config::EngineSettings;
pub use difficulty::{Difficulty, SearchBudget};
pub use error::{BookError, ConfigError};
pub use eval::evaluate;
pub use repetition::RepetitionTracker;
pub use search::{search, SearchContext, SearchOutcome};
pub use tt::MATE;
