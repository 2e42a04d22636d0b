//! Capability contract between the solver and a concrete game.

use std::fmt::Debug;

use crate::player::Player;

/// A two-player zero-sum game searchable by the solver.
///
/// The solver drives the game exclusively through this trait; it never
/// inspects states or moves beyond what these operations expose, so any game
/// satisfying the contracts below can be solved.
pub trait Game {
    /// One legal transition. Cheap to copy, compared only for equality.
    type Move: Copy + PartialEq + Debug;

    /// A snapshot of the game position. The solver never mutates one:
    /// sibling search branches share their parent's state.
    type State;

    /// The player on turn in `state`. Must be a pure function of `state`.
    fn on_turn(&self, state: &Self::State) -> Player;

    /// All legal moves in `state`, ordered best to worst by the game's own
    /// heuristic. The solver runs faster the better this ordering is; it
    /// performs no reordering of its own.
    fn moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// The moves that can decide the game if left unexplored, like a king
    /// check in chess or an unbroken line of three symbols in gomoku.
    ///
    /// Repeatedly restricting to quiescence moves and applying them must
    /// eventually reach a state whose quiescence-move set is empty. The
    /// quiescence search recurses over this set without a depth bound, so a
    /// set that never shrinks to empty does not terminate (see
    /// [`SearchContext::with_quiescence_limit`] for a defensive cap).
    ///
    /// [`SearchContext::with_quiescence_limit`]: crate::solver::SearchContext::with_quiescence_limit
    fn quiescence_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// The state reached by playing `mv` in `state`. Must not mutate
    /// `state`; the search backtracks by discarding branch states.
    fn apply_move(&self, state: &Self::State, mv: Self::Move) -> Self::State;

    /// Whether the game has ended in `state`.
    fn game_over(&self, state: &Self::State) -> bool;

    /// Evaluation of `state`. Positive values are better for player X,
    /// negative for player O; better positions have greater magnitude for
    /// the favored player, and a realized win has the extreme value for the
    /// winner's sign.
    ///
    /// The scale is absolute, not side-to-move relative: the same position
    /// evaluates to the same number regardless of whose turn it is to be
    /// searched. Nothing here requires the evaluation to negate under a
    /// swap of perspective.
    fn eval(&self, state: &Self::State) -> i32;

    /// Whether `eval` corresponds to a winning position for either side.
    fn win(&self, eval: i32) -> bool;
}
