//! The AI facade: what callers talk to.
//!
//! A caller hands over a position snapshot and an [`EngineConfig`]; the
//! facade answers with a [`MoveResponse`]. Book moves take priority, then
//! the alpha-beta search runs with the facade's long-lived
//! [`SearchContext`].

use makruk_core::{
    Color, CountingState, Engine, Move, Position, SearchLimits, SearchResult,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::book::OpeningBook;
use crate::config::EngineSettings;
use crate::difficulty::Difficulty;
use crate::repetition::RepetitionTracker;
use crate::search::{search, SearchContext};

/// Search parameters for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub node_budget: u64,
    /// The side the AI plays. Requests for the other side get no move.
    pub ai_side: Color,
    pub counting: Option<CountingState>,
}

#[derive(Clone, Debug)]
pub struct MoveRequest {
    pub position: Position,
    pub config: EngineConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Search,
    /// No move: no legal moves or a rejected request.
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResponse {
    pub best_move: Option<Move>,
    /// Side-relative score; 0 for book moves.
    pub score: i32,
    pub nodes: u64,
    pub source: MoveSource,
    /// True if the node budget cut the search short.
    pub stopped: bool,
}

impl MoveResponse {
    fn none() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
            source: MoveSource::None,
            stopped: false,
        }
    }
}

pub struct Ai {
    ctx: SearchContext,
    book: Option<OpeningBook>,
    rng: StdRng,
    settings: EngineSettings,
    difficulty: Difficulty,
}

impl Ai {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_settings(EngineSettings::default(), difficulty)
    }

    /// Builds the facade from `settings`. A book that cannot be read is
    /// logged and skipped.
    pub fn with_settings(settings: EngineSettings, difficulty: Difficulty) -> Self {
        let book = settings.book.as_ref().and_then(|path| {
            OpeningBook::load(path)
                .map_err(|e| warn!(error = %e, "opening book unavailable"))
                .ok()
        });
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            ctx: SearchContext::new(settings.tt_capacity),
            book,
            rng,
            settings,
            difficulty,
        }
    }

    pub fn with_book(mut self, book: OpeningBook) -> Self {
        self.book = Some(book);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn has_book(&self) -> bool {
        self.book.is_some()
    }

    /// Config for playing the side to move of `pos` at the current
    /// difficulty.
    pub fn config_for(&self, pos: &Position) -> EngineConfig {
        let budget = self.settings.budget(self.difficulty);
        EngineConfig {
            search_depth: budget.depth,
            node_budget: budget.node_budget,
            ai_side: pos.side_to_move,
            counting: None,
        }
    }

    pub fn choose_move(&mut self, request: &MoveRequest) -> MoveResponse {
        let pos = &request.position;
        let config = request.config;

        if config.ai_side != pos.side_to_move {
            warn!(
                ai_side = ?config.ai_side,
                to_move = ?pos.side_to_move,
                "move requested for the wrong side"
            );
            return MoveResponse::none();
        }

        if let Some(mv) = self.book.as_ref().and_then(|b| b.pick(pos, &mut self.rng)) {
            debug!(mv = %mv, "book move");
            return MoveResponse {
                best_move: Some(mv),
                score: 0,
                nodes: 0,
                source: MoveSource::Book,
                stopped: false,
            };
        }

        let limits = SearchLimits::depth_and_nodes(config.search_depth, config.node_budget)
            .with_counting(config.counting);
        let mut rep = RepetitionTracker::seeded(pos.key());
        let outcome = search(&mut self.ctx, pos, &mut rep, limits);

        MoveResponse {
            best_move: outcome.best_move,
            score: outcome.score,
            nodes: outcome.nodes,
            source: if outcome.best_move.is_some() {
                MoveSource::Search
            } else {
                MoveSource::None
            },
            stopped: outcome.stopped,
        }
    }

    /// Best move for the side to move at the current difficulty.
    pub fn best_move(&mut self, pos: &Position) -> Option<Move> {
        let request = MoveRequest {
            position: pos.clone(),
            config: self.config_for(pos),
        };
        self.choose_move(&request).best_move
    }
}

impl Default for Ai {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Engine for Ai {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        let request = MoveRequest {
            position: pos.clone(),
            config: EngineConfig {
                search_depth: limits.depth,
                node_budget: limits.node_budget,
                ai_side: pos.side_to_move,
                counting: limits.counting,
            },
        };
        let response = self.choose_move(&request);
        SearchResult {
            best_move: response.best_move,
            score: response.score,
            depth: limits.depth,
            nodes: response.nodes,
            stopped: response.stopped,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.ctx.clear();
    }
}

#[cfg(test)]
#[path = "ai_tests.rs"]
mod ai_tests;
