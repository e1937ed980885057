//! Error types for the move engine.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors raised at the engine boundary.
///
/// Running out of moves is not an error; see [`Move::NoLegalMove`](crate::Move).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A board cell is neither empty, `"X"` nor `"O"`.
    #[display("Invalid symbol {value:?} at row {row}, column {col}")]
    InvalidSymbol {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected cell value.
        value: String,
    },

    /// The raw board is not a 3x3 matrix.
    #[display("Malformed board: {reason}")]
    MalformedBoard {
        /// What was wrong with the shape.
        reason: String,
    },

    /// A requested player symbol is not `"X"` or `"O"`.
    #[display("Invalid computer symbol {value:?}")]
    UnknownSymbol {
        /// The rejected input.
        value: String,
    },

    /// A requested difficulty is not `"Easy"`, `"Medium"` or `"Hard"`.
    #[display("Invalid difficulty level {value:?}")]
    UnknownTier {
        /// The rejected input.
        value: String,
    },

    /// The Medium-tier predictor could not produce a move.
    #[display("Move predictor unavailable: {reason}")]
    StrategyUnavailable {
        /// Why the predictor failed.
        reason: String,
    },
}

/// Failure reported by a [`MovePredictor`](crate::MovePredictor).
#[derive(Debug, Clone, Display, Error)]
#[display("Predictor error: {} at {}:{}", message, file, line)]
pub struct PredictorError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PredictorError {
    /// Creates a new predictor error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        debug!(error_message = %message, "Predictor error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<PredictorError> for EngineError {
    fn from(err: PredictorError) -> Self {
        EngineError::StrategyUnavailable {
            reason: err.message,
        }
    }
}
