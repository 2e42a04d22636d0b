//! Move/evaluation pairs threaded through the search recursion.

/// Lower bound on evaluations. One above `i32::MIN` so bound arithmetic on
/// the sentinels cannot overflow.
pub const EVAL_MIN: i32 = i32::MIN + 1;

/// Upper bound on evaluations, one below `i32::MAX`.
pub const EVAL_MAX: i32 = i32::MAX - 1;

/// A move paired with the evaluation of the position it leads to.
///
/// Every interior search node returns one of these; the move is absent only
/// on the two accumulator sentinels and on quiescence leaves. Results are
/// compared by evaluation alone, the move just rides along.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub eval: i32,
}

impl<M> SearchResult<M> {
    /// Accumulator seed for the maximizing side: worse than any real result.
    pub const MIN: Self = Self {
        best_move: None,
        eval: EVAL_MIN,
    };

    /// Accumulator seed for the minimizing side: better than any real result.
    pub const MAX: Self = Self {
        best_move: None,
        eval: EVAL_MAX,
    };

    pub fn new(best_move: M, eval: i32) -> Self {
        Self {
            best_move: Some(best_move),
            eval,
        }
    }

    /// A result with no move, used where a position is evaluated in place.
    pub fn leaf(eval: i32) -> Self {
        Self {
            best_move: None,
            eval,
        }
    }
}
