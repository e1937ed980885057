//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here mutates a board or
//! keeps state between calls.

pub mod status;
pub mod win;

pub use status::check_game_status;
pub use win::{LINES, check_win, winning_line};
