//! Table-backed move predictor for the Medium tier.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tictactoe_ai::{MovePredictor, PredictorError};
use tracing::{info, instrument};

/// One recorded move: a feature-encoded board and the move played on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableRecord {
    /// Row-major board encoding, X = 1, O = -1, empty = 0.
    pub features: [i8; 9],
    /// Row of the recorded move.
    pub row: i32,
    /// Column of the recorded move.
    pub col: i32,
}

/// Predicts the move most often recorded for a board.
#[derive(Debug, Clone, Default)]
pub struct TablePredictor {
    moves: HashMap<[i8; 9], (i32, i32)>,
}

impl TablePredictor {
    /// Builds the table; per board the most frequent move wins, ties go to
    /// the one recorded first.
    pub fn from_records(records: impl IntoIterator<Item = TableRecord>) -> Self {
        let mut tallies: HashMap<[i8; 9], Vec<((i32, i32), usize)>> = HashMap::new();
        for record in records {
            let tally = tallies.entry(record.features).or_default();
            let mv = (record.row, record.col);
            match tally.iter_mut().find(|(seen, _)| *seen == mv) {
                Some((_, count)) => *count += 1,
                None => tally.push((mv, 1)),
            }
        }

        let moves = tallies
            .into_iter()
            .filter_map(|(features, tally)| {
                // max_by_key keeps the last maximum, so scan in reverse
                tally
                    .iter()
                    .rev()
                    .max_by_key(|(_, count)| *count)
                    .map(|(mv, _)| (features, *mv))
            })
            .collect();

        Self { moves }
    }

    /// Loads a JSON array of [`TableRecord`]s.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PredictorError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PredictorError::new(format!("Failed to read move table: {}", e)))?;
        let records: Vec<TableRecord> = serde_json::from_str(&content)
            .map_err(|e| PredictorError::new(format!("Failed to parse move table: {}", e)))?;

        let predictor = Self::from_records(records);
        info!(boards = predictor.len(), "Move table loaded");
        Ok(predictor)
    }

    /// Number of distinct boards in the table.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if the table holds no boards.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl MovePredictor for TablePredictor {
    fn predict(&self, features: &[i8; 9]) -> Result<(i32, i32), PredictorError> {
        self.moves
            .get(features)
            .copied()
            .ok_or_else(|| PredictorError::new("board not in move table"))
    }
}
