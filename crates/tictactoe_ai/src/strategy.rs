//! Difficulty tiers and the strategy each one plays.

use crate::error::{EngineError, PredictorError};
use crate::search::best_move;
use crate::{Board, Move, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Computer difficulty setting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum DifficultyTier {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Move suggested by an external predictor.
    Medium,
    /// Exhaustive search with a fixed tie-break order.
    Hard,
}

impl DifficultyTier {
    /// Parses a tier name, mapping anything unrecognized to [`DifficultyTier::Easy`].
    ///
    /// Matches older callers that sent free-form difficulty strings. Use
    /// [`str::parse`] for strict, case-sensitive parsing.
    #[instrument]
    pub fn parse_or_easy(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!(value, "Unknown difficulty level, using Easy");
            DifficultyTier::Easy
        })
    }

    /// Strict parse that reports the rejected input.
    pub fn parse_strict(value: &str) -> Result<Self, EngineError> {
        value.parse().map_err(|_| EngineError::UnknownTier {
            value: value.to_string(),
        })
    }
}

/// Source of Medium-tier moves.
///
/// Receives the row-major feature encoding from [`Board::to_features`] and
/// returns a predicted `(row, col)`. Implementations may return coordinates
/// off the board or on occupied cells; the engine checks legality.
pub trait MovePredictor: Send + Sync {
    /// Predicts a move for the encoded board.
    fn predict(&self, features: &[i8; 9]) -> Result<(i32, i32), PredictorError>;
}

impl<F> MovePredictor for F
where
    F: Fn(&[i8; 9]) -> Result<(i32, i32), PredictorError> + Send + Sync,
{
    fn predict(&self, features: &[i8; 9]) -> Result<(i32, i32), PredictorError> {
        self(features)
    }
}

/// Picks a uniformly random empty cell.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Move {
    board.empty_positions().choose(rng).copied().into()
}

/// Asks the predictor for a move.
///
/// Fails with [`EngineError::StrategyUnavailable`] when no predictor is
/// installed, the predictor errors, or the prediction is off the board.
/// A prediction on an occupied cell is passed through unchanged.
pub fn predicted_move(
    board: &Board,
    predictor: Option<&dyn MovePredictor>,
) -> Result<Move, EngineError> {
    let predictor = predictor.ok_or_else(|| EngineError::StrategyUnavailable {
        reason: "no predictor loaded".to_string(),
    })?;

    let (row, col) = predictor.predict(&board.to_features())?;
    debug!(row, col, "Predictor suggested move");

    match Move::from_pair(row, col) {
        Move::NoLegalMove => Err(EngineError::StrategyUnavailable {
            reason: format!("prediction ({}, {}) is off the board", row, col),
        }),
        placed => Ok(placed),
    }
}

/// Runs the strategy for `tier` without any fallback.
#[instrument(skip(board, predictor, rng))]
pub fn select_move<R: Rng + ?Sized>(
    tier: DifficultyTier,
    board: &Board,
    computer: Symbol,
    predictor: Option<&dyn MovePredictor>,
    rng: &mut R,
) -> Result<Move, EngineError> {
    match tier {
        DifficultyTier::Easy => Ok(random_move(board, rng)),
        DifficultyTier::Medium => predicted_move(board, predictor),
        DifficultyTier::Hard => Ok(best_move(board, computer, rng)),
    }
}
