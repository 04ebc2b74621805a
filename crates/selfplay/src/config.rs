//! Match configuration, readable from TOML.

use std::fs;
use std::path::Path;

use alphabeta_engine::{Difficulty, SearchBudget};
use makruk_core::{SearchLimits, Variant};
use serde::{Deserialize, Serialize};

use crate::error::SelfplayError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Budget handed to the engines on every move
    pub difficulty: Difficulty,
    /// Replaces the difficulty's depth/node budget when set
    pub budget: Option<SearchBudget>,
    /// Plies before the game is adjudicated a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// `makruk` or `ouk`
    pub variant: String,
    /// Random plies played before the engines take over. Both games of a
    /// color-swapped pair share the same opening.
    pub opening_plies: u32,
    pub seed: u64,
    /// Log each game result at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            difficulty: Difficulty::Medium,
            budget: None,
            max_plies: 300,
            alternate_colors: true,
            variant: Variant::Makruk.name().to_string(),
            opening_plies: 0,
            seed: 0,
            verbose: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, SelfplayError> {
        let config: MatchConfig = toml::from_str(s)?;
        config.variant()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SelfplayError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SelfplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn variant(&self) -> Result<Variant, SelfplayError> {
        Variant::from_name(&self.variant)
            .ok_or_else(|| SelfplayError::UnknownVariant(self.variant.clone()))
    }

    /// Search limits for one move, before counting is attached.
    pub fn search_limits(&self) -> SearchLimits {
        let budget = self.budget.unwrap_or_else(|| self.difficulty.budget());
        SearchLimits::depth_and_nodes(budget.depth, budget.node_budget)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
