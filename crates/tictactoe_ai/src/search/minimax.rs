//! Depth-unlimited minimax over a single working board.

use crate::rules::check_win;
use crate::{Board, Position, Symbol};

/// Score of a position the AI has won.
pub const WIN: i32 = 1;
/// Score of a drawn position.
pub const TIE: i32 = 0;
/// Score of a position the opponent has won.
pub const LOSS: i32 = -1;

/// Scores `board` for `ai` by searching every continuation to the end.
///
/// `maximizing` is true when it is the AI's turn to move. `depth` counts plies
/// from the root and does not affect the score, so a quick win and a slow win
/// are worth the same.
///
/// Every trial placement is undone before the next one, so the board is
/// returned exactly as it was passed in.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool, ai: Symbol) -> i32 {
    let opponent = ai.opponent();

    if check_win(board, ai) {
        return WIN;
    }
    if check_win(board, opponent) {
        return LOSS;
    }
    if board.is_full() {
        return TIE;
    }

    let (mover, mut best) = if maximizing {
        (ai, i32::MIN)
    } else {
        (opponent, i32::MAX)
    };

    for pos in Position::ALL {
        if !board.is_vacant(pos) {
            continue;
        }

        board.place(pos, mover);
        let score = minimax(board, depth + 1, !maximizing, ai);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let mut won = Board::from_rows([
            [Some(Symbol::X), Some(Symbol::X), Some(Symbol::X)],
            [Some(Symbol::O), Some(Symbol::O), None],
            [None, None, None],
        ]);
        assert_eq!(minimax(&mut won, 0, false, Symbol::X), WIN);
        assert_eq!(minimax(&mut won, 0, true, Symbol::O), LOSS);

        let mut drawn = Board::from_rows([
            [Some(Symbol::X), Some(Symbol::O), Some(Symbol::X)],
            [Some(Symbol::O), Some(Symbol::X), Some(Symbol::X)],
            [Some(Symbol::O), Some(Symbol::X), Some(Symbol::O)],
        ]);
        assert_eq!(minimax(&mut drawn, 0, true, Symbol::X), TIE);
    }

    #[test]
    fn test_forced_win_for_mover() {
        // X to move can complete the top row.
        let mut board = Board::from_rows([
            [Some(Symbol::X), Some(Symbol::X), None],
            [Some(Symbol::O), Some(Symbol::O), None],
            [None, None, None],
        ]);
        assert_eq!(minimax(&mut board, 0, true, Symbol::X), WIN);
        // O to move wins the middle row instead.
        assert_eq!(minimax(&mut board, 0, false, Symbol::X), LOSS);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut board = Board::new();
        assert_eq!(minimax(&mut board, 0, true, Symbol::X), TIE);
        assert!(board.is_empty());
    }

    #[test]
    fn test_board_restored() {
        let original = Board::from_rows([
            [Some(Symbol::X), None, None],
            [None, Some(Symbol::O), None],
            [None, None, None],
        ]);
        let mut board = original;
        minimax(&mut board, 0, true, Symbol::X);
        assert_eq!(board, original);
        minimax(&mut board, 3, false, Symbol::O);
        assert_eq!(board, original);
    }
}
