//! Conversion from raw caller input into a [`Board`].

use crate::error::EngineError;
use crate::{Board, Position, Symbol};
use serde_json::Value;
use tracing::instrument;

/// Parses a 3x3 matrix of `None`, `"X"` or `"O"` into a board.
///
/// Symbols are case-sensitive. Any other string fails with
/// [`EngineError::InvalidSymbol`]; a matrix that is not 3x3 fails with
/// [`EngineError::MalformedBoard`].
#[instrument(skip(raw))]
pub fn parse_board<S: AsRef<str>>(raw: &[Vec<Option<S>>]) -> Result<Board, EngineError> {
    check_rows(raw.len())?;

    let mut board = Board::new();
    for (row, cells) in raw.iter().enumerate() {
        check_cols(row, cells.len())?;
        for (col, cell) in cells.iter().enumerate() {
            if let Some(value) = cell {
                place_parsed(&mut board, row, col, value.as_ref())?;
            }
        }
    }
    Ok(board)
}

/// Parses a board from arbitrary JSON, as received from a web client.
///
/// Accepts the same shape as [`parse_board`]; non-string, non-null cells are
/// reported as [`EngineError::InvalidSymbol`] with their JSON text.
#[instrument(skip(value))]
pub fn parse_board_value(value: &Value) -> Result<Board, EngineError> {
    let rows = value.as_array().ok_or_else(|| EngineError::MalformedBoard {
        reason: "expected an array of rows".to_string(),
    })?;
    check_rows(rows.len())?;

    let mut board = Board::new();
    for (row, cells) in rows.iter().enumerate() {
        let cells = cells.as_array().ok_or_else(|| EngineError::MalformedBoard {
            reason: format!("row {} is not an array", row),
        })?;
        check_cols(row, cells.len())?;
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Value::Null => {}
                Value::String(s) => place_parsed(&mut board, row, col, s)?,
                other => {
                    return Err(EngineError::InvalidSymbol {
                        row,
                        col,
                        value: other.to_string(),
                    });
                }
            }
        }
    }
    Ok(board)
}

/// Parses the computer's symbol, exact match on `"X"` or `"O"`.
pub fn parse_symbol(value: &str) -> Result<Symbol, EngineError> {
    value.parse().map_err(|_| EngineError::UnknownSymbol {
        value: value.to_string(),
    })
}

fn check_rows(len: usize) -> Result<(), EngineError> {
    if len != 3 {
        return Err(EngineError::MalformedBoard {
            reason: format!("expected 3 rows, got {}", len),
        });
    }
    Ok(())
}

fn check_cols(row: usize, len: usize) -> Result<(), EngineError> {
    if len != 3 {
        return Err(EngineError::MalformedBoard {
            reason: format!("row {} has {} cells, expected 3", row, len),
        });
    }
    Ok(())
}

fn place_parsed(board: &mut Board, row: usize, col: usize, value: &str) -> Result<(), EngineError> {
    let symbol: Symbol = value.parse().map_err(|_| EngineError::InvalidSymbol {
        row,
        col,
        value: value.to_string(),
    })?;
    // row and col are bounded by the shape checks above
    if let Some(pos) = Position::from_coords(row, col) {
        board.place(pos, symbol);
    }
    Ok(())
}
