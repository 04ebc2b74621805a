//! Self-play for Makruk engines
//!
//! Plays matches between any two [`makruk_core::Engine`]s from the start
//! position, adjudicates the game-ending rules and records the games.
//!
//! ```bash
//! cargo run -p selfplay -- match alphabeta random --games 20 --difficulty easy
//! ```

mod config;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
