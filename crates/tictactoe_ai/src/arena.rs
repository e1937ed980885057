//! Engine-versus-engine matches.

use crate::{Board, DifficultyTier, Engine, GameStatus, Move, Position, Symbol};
use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

/// A finished match between two computer players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MatchRecord {
    /// Moves in play order.
    moves: Vec<(Symbol, Position)>,
    /// Board when the match ended.
    final_board: Board,
    /// Final status, reported from X's side.
    status: GameStatus,
}

/// Plays X (moving first) against O from an empty board until the game ends.
#[instrument(skip(engine, rng))]
pub fn play_match<R: Rng + ?Sized>(
    engine: &Engine,
    x_tier: DifficultyTier,
    o_tier: DifficultyTier,
    rng: &mut R,
) -> MatchRecord {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(9);
    let mut mover = Symbol::X;

    loop {
        let tier = match mover {
            Symbol::X => x_tier,
            Symbol::O => o_tier,
        };
        let turn = engine.play_turn_with(&board, tier, mover, rng);
        board = *turn.board();

        match *turn.computer_move() {
            Move::Place(pos) => {
                debug!(symbol = %mover, position = %pos, "Move played");
                moves.push((mover, pos));
            }
            Move::NoLegalMove => break,
        }

        if turn.game_status().is_over() {
            break;
        }
        mover = mover.opponent();
    }

    MatchRecord {
        moves,
        status: engine.game_status(&board, Symbol::X),
        final_board: board,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_easy_match_terminates() {
        let engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let record = play_match(&engine, DifficultyTier::Easy, DifficultyTier::Easy, &mut rng);
            assert!(record.status().is_over());
            assert!(record.moves().len() >= 5 && record.moves().len() <= 9);
            assert_eq!(record.final_board().occupied_count(), record.moves().len());
        }
    }

    #[test]
    fn test_moves_alternate() {
        let engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(8);
        let record = play_match(&engine, DifficultyTier::Easy, DifficultyTier::Hard, &mut rng);
        for (i, (symbol, _)) in record.moves().iter().enumerate() {
            let expected = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            assert_eq!(*symbol, expected);
        }
    }
}
