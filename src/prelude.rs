//! Common types re-exported for convenience.

pub use crate::game::Game;
pub use crate::player::Player;
pub use crate::search_result::{SearchResult, EVAL_MAX, EVAL_MIN};
pub use crate::solver::{search_to_depth, solve, SearchContext, SearchError};
