//! Match runner for playing games between engines

use std::collections::HashMap;

use alphabeta_engine::Difficulty;
use makruk_core::counting::detect;
use makruk_core::{
    legal_moves, Color, CountingState, Engine, Move, MoveError, Position, Status,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, trace, warn};

use crate::config::MatchConfig;
use crate::error::SelfplayError;
use crate::results::{GameRecord, GameResult, MatchResult, Termination};

/// How a game ended, White's perspective.
pub type Ending = (GameResult, Termination);

/// Counting state after `mover` completed a move into `pos`.
///
/// A running count continues while the same kind of count applies; a new
/// kind (e.g. the defender just lost its last piece) starts over.
pub fn next_counting(
    current: Option<CountingState>,
    pos: &Position,
    mover: Color,
) -> Option<CountingState> {
    let fresh = detect(pos)?;
    match current {
        Some(state) if state.limit == fresh.limit => Some(state.after_move(mover)),
        _ => Some(fresh),
    }
}

/// A game in progress with the bookkeeping needed for adjudication.
pub struct Game {
    pub pos: Position,
    pub moves: Vec<String>,
    pub counting: Option<CountingState>,
    seen: HashMap<u64, u32>,
}

impl Game {
    pub fn new(pos: Position) -> Self {
        let mut seen = HashMap::new();
        seen.insert(pos.key(), 1);
        Self {
            pos,
            moves: Vec::new(),
            counting: None,
            seen,
        }
    }

    pub fn plies(&self) -> u32 {
        self.moves.len() as u32
    }

    /// Plays a validated move and reports whether the game is over.
    pub fn apply(&mut self, mv: Move) -> Result<Option<Ending>, MoveError> {
        let mover = self.pos.side_to_move;
        let played = self.pos.play(mv.from, mv.to)?;
        self.moves.push(mv.to_string());
        self.counting = next_counting(self.counting, &self.pos, mover);
        *self.seen.entry(self.pos.key()).or_insert(0) += 1;
        Ok(self.adjudicate(played.status))
    }

    fn adjudicate(&self, status: Status) -> Option<Ending> {
        match status {
            Status::Checkmate => return Some((loss_for(self.pos.side_to_move), Termination::Checkmate)),
            Status::Stalemate => return Some((GameResult::Draw, Termination::Stalemate)),
            Status::Ongoing | Status::Check => {}
        }
        if self.pos.is_insufficient_material() {
            return Some((GameResult::Draw, Termination::InsufficientMaterial));
        }
        if self.counting.is_some_and(|c| c.expired()) {
            return Some((GameResult::Draw, Termination::CountingExpired));
        }
        if self.seen.get(&self.pos.key()).copied().unwrap_or(0) >= 3 {
            return Some((GameResult::Draw, Termination::Repetition));
        }
        None
    }
}

/// Result, from White's perspective, of `loser` losing.
fn loss_for(loser: Color) -> GameResult {
    match loser {
        Color::White => GameResult::Loss,
        Color::Black => GameResult::Win,
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, SelfplayError> {
        let mut result = MatchResult::new(engine1.name(), engine2.name());

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;
            let opening_seed = self.config.seed.wrapping_add(u64::from(game_num / 2));

            let record = if engine1_white {
                self.play_game(engine1, engine2, opening_seed)?
            } else {
                self.play_game(engine2, engine1, opening_seed)?
            };
            let game_result = if engine1_white {
                record.result
            } else {
                record.result.flip()
            };
            result.record(game_result);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    result = record.result.notation(),
                    termination = ?record.termination,
                    plies = record.moves.len(),
                    score = %format!("{}-{}-{}", result.wins, result.losses, result.draws),
                    "game finished"
                );
            }
            result.games.push(record);
        }

        Ok(result)
    }

    /// Play a single game from the configured variant's start position
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
        opening_seed: u64,
    ) -> Result<GameRecord, SelfplayError> {
        let variant = self.config.variant()?;
        white.new_game();
        black.new_game();

        let mut game = Game::new(Position::startpos_variant(variant));
        let (result, termination) = self
            .play_opening(&mut game, opening_seed)
            .or_else(|| self.play_out(&mut game, white, black))
            .unwrap_or((GameResult::Draw, Termination::MoveLimit));

        Ok(GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            result,
            termination,
            moves: game.moves,
        })
    }

    /// Random opening plies; both games of a color-swapped pair get the same
    /// sequence.
    fn play_opening(&self, game: &mut Game, seed: u64) -> Option<Ending> {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..self.config.opening_plies {
            let moves = legal_moves(&game.pos);
            let mv = *moves.choose(&mut rng)?;
            match game.apply(mv) {
                Ok(Some(ending)) => return Some(ending),
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "opening move rejected");
                    return None;
                }
            }
        }
        None
    }

    fn play_out(
        &self,
        game: &mut Game,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Option<Ending> {
        while game.plies() < self.config.max_plies {
            let limits = self.config.search_limits().with_counting(game.counting);
            let side = game.pos.side_to_move;
            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let result = engine.search(&game.pos, limits);
            let Some(mv) = result.best_move else {
                warn!(engine = engine.name(), "engine returned no move");
                return Some((loss_for(side), Termination::Forfeit));
            };
            trace!(ply = game.plies(), mv = %mv, score = result.score, nodes = result.nodes);

            match game.apply(mv) {
                Ok(Some(ending)) => return Some(ending),
                Ok(None) => {}
                Err(e) => {
                    warn!(engine = engine.name(), mv = %mv, error = %e, "illegal move");
                    return Some((loss_for(side), Termination::Forfeit));
                }
            }
        }
        None
    }
}

/// Quick utility to run a match with default settings
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    difficulty: Difficulty,
) -> Result<MatchResult, SelfplayError> {
    let config = MatchConfig {
        num_games,
        difficulty,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
