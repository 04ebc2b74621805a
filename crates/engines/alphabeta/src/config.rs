//! Engine settings loaded from TOML.
//!
//! ```toml
//! tt_capacity = 65536
//! book = "book.json"
//! seed = 7
//!
//! [difficulty.hard]
//! depth = 4
//! node_budget = 200000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::difficulty::{Difficulty, SearchBudget};
use crate::error::ConfigError;
use crate::tt::DEFAULT_TT_CAPACITY;

/// Per-difficulty replacements for the built-in budgets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DifficultyOverrides {
    pub easy: Option<SearchBudget>,
    pub medium: Option<SearchBudget>,
    pub hard: Option<SearchBudget>,
    pub expert: Option<SearchBudget>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Transposition table slots, rounded up to a power of two.
    pub tt_capacity: usize,
    /// Optional opening book (JSON).
    pub book: Option<PathBuf>,
    /// Seed for book sampling. Entropy when absent.
    pub seed: Option<u64>,
    pub difficulty: DifficultyOverrides,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            tt_capacity: DEFAULT_TT_CAPACITY,
            book: None,
            seed: None,
            difficulty: DifficultyOverrides::default(),
        }
    }
}

impl EngineSettings {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let settings: EngineSettings = toml::from_str(s)?;
        if settings.tt_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Budget for `difficulty`, with overrides applied.
    pub fn budget(&self, difficulty: Difficulty) -> SearchBudget {
        let over = match difficulty {
            Difficulty::Easy => self.difficulty.easy,
            Difficulty::Medium => self.difficulty.medium,
            Difficulty::Hard => self.difficulty.hard,
            Difficulty::Expert => self.difficulty.expert,
        };
        over.unwrap_or_else(|| difficulty.budget())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
