//! Caller-facing engine: move computation with recovery, status, and turns.

use crate::rules::check_game_status;
use crate::strategy::{DifficultyTier, MovePredictor, random_move, select_move};
use crate::{Board, GameStatus, Move, Symbol};
use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Move engine shared by all requests.
///
/// Holds no board state. The only thing configured up front is the optional
/// Medium-tier predictor, so one engine can serve concurrent callers as long
/// as each passes its own board.
#[derive(Default)]
pub struct Engine {
    predictor: Option<Box<dyn MovePredictor>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("has_predictor", &self.has_predictor())
            .finish()
    }
}

/// Result of one computer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct TurnOutcome {
    /// Board after the computer's move.
    board: Board,
    /// The move played, or the sentinel when the game was already over.
    computer_move: Move,
    /// Status after the move.
    game_status: GameStatus,
}

impl Engine {
    /// Creates an engine without a Medium predictor.
    #[instrument]
    pub fn new() -> Self {
        Self { predictor: None }
    }

    /// Creates an engine whose Medium tier asks `predictor`.
    #[instrument(skip(predictor))]
    pub fn with_predictor(predictor: impl MovePredictor + 'static) -> Self {
        info!("Engine created with move predictor");
        Self {
            predictor: Some(Box::new(predictor)),
        }
    }

    /// True if a Medium predictor is installed.
    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// Computes the computer's move using the thread-local RNG.
    pub fn compute_move(&self, board: &Board, tier: DifficultyTier, computer: Symbol) -> Move {
        self.compute_move_with(board, tier, computer, &mut rand::rng())
    }

    /// Computes the computer's move for `tier`.
    ///
    /// Whenever the chosen strategy cannot name an empty cell (the predictor
    /// is missing, fails, or points off the board or at an occupied cell),
    /// the Easy strategy picks instead. The result is only
    /// [`Move::NoLegalMove`] when the board is full.
    #[instrument(skip(self, board, rng))]
    pub fn compute_move_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        tier: DifficultyTier,
        computer: Symbol,
        rng: &mut R,
    ) -> Move {
        match select_move(tier, board, computer, self.predictor.as_deref(), rng) {
            Ok(Move::Place(pos)) if board.is_vacant(pos) => Move::Place(pos),
            Ok(Move::Place(pos)) => {
                warn!(position = %pos, %tier, "Strategy chose an occupied cell, falling back to Easy");
                random_move(board, rng)
            }
            Ok(Move::NoLegalMove) => Move::NoLegalMove,
            Err(err) => {
                warn!(error = %err, %tier, "Strategy unavailable, falling back to Easy");
                random_move(board, rng)
            }
        }
    }

    /// Status of `board` as seen by the computer.
    pub fn game_status(&self, board: &Board, computer: Symbol) -> GameStatus {
        check_game_status(board, computer)
    }

    /// Plays one computer turn using the thread-local RNG.
    pub fn play_turn(&self, board: &Board, tier: DifficultyTier, computer: Symbol) -> TurnOutcome {
        self.play_turn_with(board, tier, computer, &mut rand::rng())
    }

    /// Plays one computer turn on a copy of `board`.
    ///
    /// A finished game is returned unchanged with the sentinel move.
    /// Otherwise the computed move is applied and the status re-evaluated.
    #[instrument(skip(self, board, rng))]
    pub fn play_turn_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        tier: DifficultyTier,
        computer: Symbol,
        rng: &mut R,
    ) -> TurnOutcome {
        let mut next = *board;
        let status = self.game_status(&next, computer);
        if status.is_over() {
            debug!(%status, "Game already over, no move made");
            return TurnOutcome {
                board: next,
                computer_move: Move::NoLegalMove,
                game_status: status,
            };
        }

        let computer_move = self.compute_move_with(&next, tier, computer, rng);
        if let Move::Place(pos) = computer_move {
            next.place(pos, computer);
        }
        let game_status = self.game_status(&next, computer);
        info!(%computer_move, %game_status, "Computer turn played");

        TurnOutcome {
            board: next,
            computer_move,
            game_status,
        }
    }
}
