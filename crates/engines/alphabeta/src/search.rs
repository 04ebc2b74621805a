//! Negamax search with alpha-beta pruning, transposition table and
//! quiescence.

use makruk_core::{
    legal_captures_into, legal_moves_into, CountingState, Move, Position, SearchLimits,
};
use tracing::debug;

use crate::eval::evaluate;
use crate::ordering::{order_captures, order_moves, History, Killers};
use crate::repetition::RepetitionTracker;
use crate::tt::{Bound, Probe, TranspositionTable, DEFAULT_TT_CAPACITY, MATE};

/// Extra plies quiescence may add below the nominal depth.
pub const QUIESCENCE_MAX_PLY: u8 = 6;

/// Tables that outlive a single search: kept for a whole game.
pub struct SearchContext {
    pub tt: TranspositionTable,
    pub killers: Killers,
    pub history: History,
}

impl SearchContext {
    pub fn new(tt_capacity: usize) -> Self {
        Self {
            tt: TranspositionTable::new(tt_capacity),
            killers: Killers::default(),
            history: History::default(),
        }
    }

    /// Called at the start of every search.
    pub fn begin_search(&mut self) {
        self.tt.new_generation();
        self.history.decay();
    }

    /// Forget everything, e.g. for a new game.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

/// Result of [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best move found (if any legal moves exist)
    pub best_move: Option<Move>,
    /// Score from the side to move's perspective
    pub score: i32,
    pub nodes: u64,
    /// True if the node budget cut part of the tree
    pub stopped: bool,
}

/// Searches `pos` to `limits.depth` plies, at least one. `rep` must end with
/// the key of `pos` and is left as it was passed in.
pub fn search(
    ctx: &mut SearchContext,
    pos: &Position,
    rep: &mut RepetitionTracker,
    limits: SearchLimits,
) -> SearchOutcome {
    ctx.begin_search();

    // A depth-0 root would fall straight into quiescence and pick no move.
    let depth = limits.depth.max(1);
    let mut tmp = pos.clone();
    let color = pos.side_to_move.sign();
    let mut searcher = Searcher::new(ctx, limits.node_budget);
    let (score, best_move) = searcher.negamax(
        &mut tmp,
        rep,
        limits.counting,
        depth,
        -MATE - 1,
        MATE + 1,
        color,
        0,
    );

    let outcome = SearchOutcome {
        best_move,
        score,
        nodes: searcher.nodes,
        stopped: searcher.stopped,
    };
    debug!(
        depth,
        nodes = outcome.nodes,
        score = outcome.score,
        stopped = outcome.stopped,
        best = ?outcome.best_move.map(|m| m.to_string()),
        "search finished"
    );
    outcome
}

/// Table key for `pos` under `counting`. The same board with a different
/// number of counts left is a different node: its score can differ.
pub fn tt_key(pos: &Position, counting: Option<CountingState>) -> u64 {
    match counting {
        None => pos.key(),
        Some(c) => {
            let attacker = (c.attacker.idx() as u64 + 1).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
            let remaining = (u64::from(c.remaining) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            pos.key() ^ (attacker ^ remaining).rotate_left(17)
        }
    }
}

/// State of one search call.
pub struct Searcher<'a> {
    ctx: &'a mut SearchContext,
    node_budget: u64,
    pub nodes: u64,
    /// Set once the budget is exceeded; nothing searched afterwards is
    /// complete, so no further TT stores happen.
    pub stopped: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(ctx: &'a mut SearchContext, node_budget: u64) -> Self {
        Self {
            ctx,
            node_budget,
            nodes: 0,
            stopped: false,
        }
    }

    /// Negamax over `pos`. `color` is +1 when White is to move, -1 otherwise.
    ///
    /// Returns the side-relative score and the best move at this node.
    #[allow(clippy::too_many_arguments)]
    pub fn negamax(
        &mut self,
        pos: &mut Position,
        rep: &mut RepetitionTracker,
        counting: Option<CountingState>,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        color: i32,
        ply: usize,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        let side = pos.side_to_move;

        if pos.king_sq(side).is_none() {
            return (-(MATE - ply as i32), None);
        }
        if ply > 0 {
            if pos.king_sq(side.other()).is_none() {
                return (MATE - ply as i32, None);
            }
            if pos.is_insufficient_material() {
                return (0, None);
            }
        }

        let mut moves = Vec::with_capacity(64);
        legal_moves_into(pos, &mut moves);
        if moves.is_empty() {
            let score = if pos.in_check(side) {
                -(MATE - ply as i32)
            } else {
                0
            };
            return (score, None);
        }
        // Mate on the last count still wins.
        if ply > 0 && counting.is_some_and(|c| c.expired()) {
            return (0, None);
        }

        if ply > 0 && self.nodes > self.node_budget {
            self.stopped = true;
            return (color * evaluate(pos, rep, counting), None);
        }

        let key = tt_key(pos, counting);
        let mut tt_move = None;
        match self.ctx.tt.probe(key, depth, alpha, beta, ply) {
            Probe::Miss => {}
            Probe::Hint(mv) => tt_move = mv,
            Probe::Narrowed {
                alpha: a,
                beta: b,
                best_move,
            } => {
                tt_move = best_move;
                if ply > 0 {
                    alpha = a;
                    beta = b;
                }
            }
            Probe::Cutoff { score, best_move } => {
                if ply > 0 {
                    return (score, best_move);
                }
                tt_move = best_move;
            }
        }

        if depth == 0 {
            return (self.quiesce(pos, rep, counting, alpha, beta, color, 0), None);
        }

        let killers = self.ctx.killers.at(ply);
        order_moves(pos, &mut moves, tt_move, killers, &self.ctx.history);

        let alpha_orig = alpha;
        let mut best = -MATE - 1;
        let mut best_move = None;

        for mv in moves {
            let quiet = pos.piece_at(mv.to).is_none();
            if pos.make_move(mv).is_err() {
                continue;
            }
            rep.push(pos.key());
            let child_counting = counting.map(|c| c.after_move(side));

            let (child, _) = self.negamax(
                pos,
                rep,
                child_counting,
                depth - 1,
                -beta,
                -alpha,
                -color,
                ply + 1,
            );
            let score = -child;

            rep.pop();
            pos.undo();

            if score > best {
                best = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                if quiet {
                    self.ctx.killers.store(ply, mv);
                    self.ctx.history.reward(mv, depth);
                }
                break;
            }
        }

        if !self.stopped {
            let bound = if best <= alpha_orig {
                Bound::Upper
            } else if best >= beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.ctx.tt.store(key, depth, best, bound, best_move, ply);
        }

        (best, best_move)
    }

    /// Capture-only search below the horizon. Never returns less than the
    /// stand-pat score.
    #[allow(clippy::too_many_arguments)]
    pub fn quiesce(
        &mut self,
        pos: &mut Position,
        rep: &mut RepetitionTracker,
        counting: Option<CountingState>,
        mut alpha: i32,
        beta: i32,
        color: i32,
        qply: u8,
    ) -> i32 {
        self.nodes += 1;
        let side = pos.side_to_move;

        let stand_pat = color * evaluate(pos, rep, counting);
        if qply >= QUIESCENCE_MAX_PLY || self.nodes >= self.node_budget.saturating_mul(2) {
            return stand_pat;
        }
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut captures = Vec::with_capacity(16);
        legal_captures_into(pos, &mut captures);
        order_captures(pos, &mut captures);

        for mv in captures {
            if pos.make_move(mv).is_err() {
                continue;
            }
            rep.push(pos.key());
            let child_counting = counting.map(|c| c.after_move(side));
            let score = -self.quiesce(pos, rep, child_counting, -beta, -alpha, -color, qply + 1);
            rep.pop();
            pos.undo();

            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
