//! Behavioral tests for the Hard tier.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_ai::arena::play_match;
use tictactoe_ai::rules::LINES;
use tictactoe_ai::search::best_move;
use tictactoe_ai::{Board, DifficultyTier, Engine, GameStatus, Move, Position, Symbol};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn outside(line: [Position; 3]) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| !line.contains(pos))
        .collect()
}

#[test]
fn test_empty_board_returns_center() {
    let engine = Engine::new();
    for symbol in [Symbol::X, Symbol::O] {
        assert_eq!(
            engine.compute_move_with(&Board::new(), DifficultyTier::Hard, symbol, &mut rng()),
            Move::Place(Position::Center)
        );
    }
}

#[test]
fn test_single_empty_cell_is_chosen() {
    let engine = Engine::new();
    for empty in Position::ALL {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            if pos != empty {
                board.place(pos, if i % 2 == 0 { Symbol::O } else { Symbol::X });
            }
        }
        assert_eq!(best_move(&board, Symbol::X, &mut rng()), Move::Place(empty));
        assert_eq!(
            engine.compute_move_with(&board, DifficultyTier::Hard, Symbol::O, &mut rng()),
            Move::Place(empty)
        );
    }
}

#[test]
fn test_takes_immediate_win() {
    for line in LINES {
        for missing in line {
            let mut board = Board::new();
            for pos in line.into_iter().filter(|pos| *pos != missing) {
                board.place(pos, Symbol::O);
            }
            for pos in outside(line).into_iter().take(2) {
                board.place(pos, Symbol::X);
            }
            assert_eq!(
                best_move(&board, Symbol::O, &mut rng()),
                Move::Place(missing),
                "line {:?}\n{}",
                line,
                board.display()
            );
        }
    }
}

#[test]
fn test_blocks_opponent_win() {
    for line in LINES {
        for missing in line {
            let mut board = Board::new();
            for pos in line.into_iter().filter(|pos| *pos != missing) {
                board.place(pos, Symbol::X);
            }
            board.place(outside(line)[0], Symbol::O);
            assert_eq!(
                best_move(&board, Symbol::O, &mut rng()),
                Move::Place(missing),
                "line {:?}\n{}",
                line,
                board.display()
            );
        }
    }
}

#[test]
fn test_prefers_win_over_block() {
    // O can win on the middle row or block X's top row.
    let board = Board::from_rows([
        [Some(Symbol::X), Some(Symbol::X), None],
        [Some(Symbol::O), Some(Symbol::O), None],
        [Some(Symbol::X), None, None],
    ]);
    assert_eq!(
        best_move(&board, Symbol::O, &mut rng()),
        Move::Place(Position::MiddleRight)
    );
}

#[test]
fn test_hard_self_play_draws() {
    let engine = Engine::new();
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let record = play_match(&engine, DifficultyTier::Hard, DifficultyTier::Hard, &mut rng);
        assert_eq!(*record.status(), GameStatus::Draw);
        assert_eq!(record.moves().len(), 9);
        assert_eq!(record.moves()[0], (Symbol::X, Position::Center));
        assert_eq!(record.moves()[1], (Symbol::O, Position::TopLeft));
        assert!(record.final_board().is_full());
    }
}

#[test]
fn test_hard_never_loses_to_easy() {
    let engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..25 {
        let record = play_match(&engine, DifficultyTier::Easy, DifficultyTier::Hard, &mut rng);
        assert_ne!(*record.status(), GameStatus::Win(Symbol::X));

        let record = play_match(&engine, DifficultyTier::Hard, DifficultyTier::Easy, &mut rng);
        assert_ne!(*record.status(), GameStatus::Win(Symbol::O));
    }
}
