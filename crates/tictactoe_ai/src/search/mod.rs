//! Exhaustive game-tree search and the Hard-tier move selector.

mod minimax;
mod selector;

pub use minimax::{LOSS, TIE, WIN, minimax};
pub use selector::{TieBreak, best_move, break_tie};
