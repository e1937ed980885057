//! Terminal-state evaluation.

use super::win::check_win;
use crate::{Board, GameStatus, Symbol};
use tracing::instrument;

/// Evaluates the board from the computer's point of view.
///
/// Checks run in a fixed order: the computer's three-in-a-row, then the
/// opponent's, then a full board. A position where both symbols have a line
/// cannot arise in legal play; it reports the computer's win.
#[instrument(skip(board))]
pub fn check_game_status(board: &Board, computer: Symbol) -> GameStatus {
    let opponent = computer.opponent();

    if check_win(board, computer) {
        return GameStatus::Win(computer);
    }

    if check_win(board, opponent) {
        return GameStatus::Win(opponent);
    }

    if board.is_full() {
        return GameStatus::Draw;
    }

    GameStatus::Ongoing
}
