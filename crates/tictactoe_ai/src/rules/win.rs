//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Square, Symbol};

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `symbol` occupies all three cells of any line.
pub fn check_win(board: &Board, symbol: Symbol) -> bool {
    winning_line(board, symbol).is_some()
}

/// Returns the first line (in [`LINES`] order) completed by `symbol`.
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<[Position; 3]> {
    let square = Square::Occupied(symbol);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == square))
}
