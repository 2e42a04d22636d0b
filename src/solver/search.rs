//! Time-boxed iterative-deepening alpha-beta search.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a
//! window [alpha, beta] of scores that still matter. Subtrees proven to fall
//! outside this window are skipped without affecting the final result: the
//! algorithm returns the same evaluation as plain minimax while visiting
//! fewer nodes. Pruning effectiveness depends on the move ordering the game
//! supplies; well-ordered moves cause early cutoffs.
//!
//! # Iterative Deepening
//!
//! The driver runs complete bounded searches at depth 0, 1, 2, … until the
//! evaluation proves a win or the wall-clock alarm fires. The answer is
//! therefore "any-time": whenever the budget runs out, the move from the
//! last completed depth is available. The alarm is polled only between depth
//! iterations, never inside the recursion, so an iteration in progress
//! always runs to completion.
//!
//! # Quiescence Extension
//!
//! At the depth horizon the search does not evaluate immediately; it first
//! plays out the game-changing moves the game reports via
//! `quiescence_moves`, unpruned and without a depth bound, and evaluates the
//! quiet positions where that set is empty. This keeps the horizon from
//! splitting a tactical exchange and mis-scoring it.

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use super::alarm::Alarm;
use crate::game::Game;
use crate::player::Player;
use crate::search_result::{SearchResult, EVAL_MAX, EVAL_MIN};

#[derive(Error, Debug)]
pub enum SearchError {
    /// The root position had no legal moves. Callers are expected to check
    /// `game_over` before searching.
    #[error("no move found for the root position")]
    NoMoveFound,
}

/// Search configuration parameters.
struct SearchConfig {
    /// Hard cap on quiescence recursion depth. `None` trusts the game's
    /// quiescence-move contract and recurses unbounded.
    quiescence_limit: Option<u32>,
}

/// Statistics collected during search.
struct SearchStats {
    nodes: usize,
    quiescence_nodes: usize,
    beta_cutoffs: usize,
    alpha_cutoffs: usize,
    last_depth: Option<u32>,
    last_eval: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn new() -> Self {
        Self {
            nodes: 0,
            quiescence_nodes: 0,
            beta_cutoffs: 0,
            alpha_cutoffs: 0,
            last_depth: None,
            last_eval: None,
            last_duration: None,
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Reusable context for a sequence of searches: configuration plus the
/// statistics of the most recent runs.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            config: SearchConfig {
                quiescence_limit: None,
            },
            stats: SearchStats::new(),
        }
    }

    /// A context whose quiescence search gives up and evaluates in place
    /// after `limit` plies. Defensive hardening for game implementations
    /// whose quiescence-move set is not known to shrink to empty; conforming
    /// games behave identically with or without it.
    pub fn with_quiescence_limit(limit: u32) -> Self {
        Self {
            config: SearchConfig {
                quiescence_limit: Some(limit),
            },
            stats: SearchStats::new(),
        }
    }

    pub fn quiescence_limit(&self) -> Option<u32> {
        self.config.quiescence_limit
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// States visited by the last searches, full-width and quiescence both.
    pub fn searched_node_count(&self) -> usize {
        self.stats.nodes
    }

    pub fn quiescence_node_count(&self) -> usize {
        self.stats.quiescence_nodes
    }

    pub fn beta_cutoff_count(&self) -> usize {
        self.stats.beta_cutoffs
    }

    pub fn alpha_cutoff_count(&self) -> usize {
        self.stats.alpha_cutoffs
    }

    /// Deepest completed iteration of the last [`solve`] call.
    pub fn last_depth(&self) -> Option<u32> {
        self.stats.last_depth
    }

    /// Evaluation returned by the last completed iteration of [`solve`].
    pub fn last_eval(&self) -> Option<i32> {
        self.stats.last_eval
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Searches for the best move within a wall-clock budget.
///
/// Runs complete alpha-beta searches at increasing depth limits until one of
/// them proves a win (`game.win` on the returned evaluation) or the budget
/// elapses, then returns the best move of the last completed depth. The
/// budget is advisory: it is checked between depth iterations only, so the
/// call can overrun by the tail of the iteration in flight.
///
/// # Errors
///
/// [`SearchError::NoMoveFound`] when the root position has no legal moves,
/// which callers should rule out by checking `game.game_over` first.
#[must_use = "search returns the best move found"]
pub fn solve<G: Game>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    budget: Duration,
) -> Result<G::Move, SearchError> {
    let start = Instant::now();
    let on_turn = game.on_turn(state);
    let alarm = Alarm::after(budget);
    debug!("solving: {} to move, budget {:?}", on_turn, budget);

    let mut depth = 0;
    loop {
        let best = search_root(context, game, state, on_turn, depth);
        context.stats.last_depth = Some(depth);
        context.stats.last_eval = Some(best.eval);
        debug!(
            "depth {} complete: eval {} ({} nodes total)",
            depth, best.eval, context.stats.nodes
        );

        if game.win(best.eval) || alarm.fired() {
            context.stats.last_duration = Some(start.elapsed());
            return best.best_move.ok_or(SearchError::NoMoveFound);
        }

        // Past depth zero a bounded search only comes back move-less when
        // the root had no legal moves; deeper iterations cannot change that.
        if depth >= 1 && best.best_move.is_none() {
            context.stats.last_duration = Some(start.elapsed());
            return Err(SearchError::NoMoveFound);
        }

        depth += 1;
    }
}

/// One complete alpha-beta search bounded at `max_depth` plies, with the
/// widest evaluation window and no time limit. Deterministic: the same game,
/// state, and depth always produce the same result.
pub fn search_to_depth<G: Game>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    max_depth: u32,
) -> SearchResult<G::Move> {
    let on_turn = game.on_turn(state);
    search_root(context, game, state, on_turn, max_depth)
}

fn search_root<G: Game>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    on_turn: Player,
    max_depth: u32,
) -> SearchResult<G::Move> {
    if on_turn == Player::X {
        max_search(context, game, state, EVAL_MIN, EVAL_MAX, 0, max_depth)
    } else {
        min_search(context, game, state, EVAL_MIN, EVAL_MAX, 0, max_depth)
    }
}

/// Maximizing player's full-width node.
///
/// At the depth horizon or on a finished game the node hands over to the
/// quiescence search. Otherwise it scans the game's moves in the order
/// given, pairing each move with the evaluation of the opponent's best
/// reply one ply deeper, and keeps the highest. `alpha` rises with the best
/// evaluation found; once it reaches `beta` the minimizer above would never
/// allow this position, so the remaining moves are skipped.
fn max_search<G: Game>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    mut alpha: i32,
    beta: i32,
    depth: u32,
    max_depth: u32,
) -> SearchResult<G::Move> {
    if depth >= max_depth || game.game_over(state) {
        return max_quiescence(context, game, state, 0);
    }
    context.stats.nodes += 1;

    let mut best = SearchResult::MIN;
    for mv in game.moves(state) {
        let child = game.apply_move(state, mv);
        let reply = min_search(context, game, &child, alpha, beta, depth + 1, max_depth);
        if reply.eval > best.eval {
            best = SearchResult::new(mv, reply.eval);
            alpha = alpha.max(best.eval);
        }
        if best.eval >= beta {
            context.stats.beta_cutoffs += 1;
            return best;
        }
    }
    best
}

/// Minimizing player's full-width node, the mirror of [`max_search`]:
/// keeps the lowest reply, narrows `beta`, and stops once `alpha` is met.
fn min_search<G: Game>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    alpha: i32,
    mut beta: i32,
    depth: u32,
    max_depth: u32,
) -> SearchResult<G::Move> {
    if depth >= max_depth || game.game_over(state) {
        return min_quiescence(context, game, state, 0);
    }
    context.stats.nodes += 1;

    let mut best = SearchResult::MAX;
    for mv in game.moves(state) {
        let child = game.apply_move(state, mv);
        let reply = max_search(context, game, &child, alpha, beta, depth + 1, max_depth);
        if reply.eval < best.eval {
            best = SearchResult::new(mv, reply.eval);
            beta = beta.min(best.eval);
        }
        if best.eval <= alpha {
            context.stats.alpha_cutoffs += 1;
            return best;
        }
    }
    best
}

/// Maximizing quiescence node.
///
/// Plays out only the game-changing moves, unpruned. A position with no
/// quiescence moves is quiet: it is evaluated in place and returned with no
/// move attached. Termination relies on the game's obligation that the
/// quiescence-move set shrinks to empty, unless the context's quiescence
/// limit is armed, in which case an overlong line is evaluated where it
/// stands.
fn max_quiescence<G: Game>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    qdepth: u32,
) -> SearchResult<G::Move> {
    context.stats.nodes += 1;
    context.stats.quiescence_nodes += 1;

    if let Some(limit) = context.config.quiescence_limit {
        if qdepth >= limit {
            return SearchResult::leaf(game.eval(state));
        }
    }

    let moves = game.quiescence_moves(state);
    if moves.is_empty() {
        return SearchResult::leaf(game.eval(state));
    }

    let mut best = SearchResult::MIN;
    for mv in moves {
        let child = game.apply_move(state, mv);
        let reply = min_quiescence(context, game, &child, qdepth + 1);
        if reply.eval > best.eval {
            best = SearchResult::new(mv, reply.eval);
        }
    }
    best
}

/// Minimizing quiescence node, the mirror of [`max_quiescence`].
fn min_quiescence<G: Game>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    qdepth: u32,
) -> SearchResult<G::Move> {
    context.stats.nodes += 1;
    context.stats.quiescence_nodes += 1;

    if let Some(limit) = context.config.quiescence_limit {
        if qdepth >= limit {
            return SearchResult::leaf(game.eval(state));
        }
    }

    let moves = game.quiescence_moves(state);
    if moves.is_empty() {
        return SearchResult::leaf(game.eval(state));
    }

    let mut best = SearchResult::MAX;
    for mv in moves {
        let child = game.apply_move(state, mv);
        let reply = max_quiescence(context, game, &child, qdepth + 1);
        if reply.eval < best.eval {
            best = SearchResult::new(mv, reply.eval);
        }
    }
    best
}
