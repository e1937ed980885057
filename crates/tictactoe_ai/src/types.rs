//! Core domain types for the move engine.

use crate::error::EngineError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two player symbols.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Symbol {
    /// Player X (moves first).
    X,
    /// Player O.
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Feature value used by the Medium predictor encoding.
    fn feature(self) -> i8 {
        match self {
            Symbol::X => 1,
            Symbol::O => -1,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Symbol),
}

impl Square {
    /// Returns the occupying symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Always holds exactly nine squares. Serializes as a 3x3 array of
/// `null`, `"X"` or `"O"`; deserialization goes through
/// [`parse_board_value`](crate::parse_board_value) and rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Option<Symbol>>>", try_from = "serde_json::Value")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from rows of optional symbols.
    pub fn from_rows(rows: [[Option<Symbol>; 3]; 3]) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            if let Some(symbol) = rows[pos.row()][pos.col()] {
                board.place(pos, symbol);
            }
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Places a symbol at the given position, overwriting whatever was there.
    pub fn place(&mut self, pos: Position, symbol: Symbol) {
        self.set(pos, Square::Occupied(symbol));
    }

    /// Resets the given position to empty.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a single square is empty.
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// True iff every square is empty.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// True iff no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_vacant(*pos))
            .collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Row-major feature vector: X = 1, O = -1, empty = 0.
    #[instrument(skip(self))]
    pub fn to_features(&self) -> [i8; 9] {
        self.squares
            .map(|square| square.symbol().map_or(0, Symbol::feature))
    }

    /// Returns the board as rows of optional symbols.
    pub fn to_rows(&self) -> [[Option<Symbol>; 3]; 3] {
        let mut rows = [[None; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos).symbol();
        }
        rows
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(symbol) => symbol.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<Board> for Vec<Vec<Option<Symbol>>> {
    fn from(board: Board) -> Self {
        board.to_rows().iter().map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<serde_json::Value> for Board {
    type Error = EngineError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        crate::parse_board_value(&value)
    }
}

/// Status of a game, derived from a board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameStatus {
    /// Game is still being played.
    #[display("ongoing")]
    Ongoing,
    /// Board is full with no three-in-a-row.
    #[display("draw")]
    Draw,
    /// The symbol has three in a row.
    #[display("win-{_0}")]
    Win(Symbol),
}

impl GameStatus {
    /// True when no further moves should be made.
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl Serialize for GameStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A computer move: a cell to play, or nothing when the board is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Place the symbol at this position.
    Place(Position),
    /// No empty cell remains.
    NoLegalMove,
}

impl Move {
    /// Wire form of [`Move::NoLegalMove`].
    pub const SENTINEL: (i32, i32) = (-1, -1);

    /// Returns `(row, col)`, or `(-1, -1)` when there is no move.
    pub fn as_pair(self) -> (i32, i32) {
        match self {
            Move::Place(pos) => (pos.row() as i32, pos.col() as i32),
            Move::NoLegalMove => Self::SENTINEL,
        }
    }

    /// Builds a move from a wire pair; the sentinel and anything off the board
    /// map to [`Move::NoLegalMove`].
    pub fn from_pair(row: i32, col: i32) -> Self {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => Position::from_coords(row, col).map_or(Move::NoLegalMove, Move::Place),
            _ => Move::NoLegalMove,
        }
    }

    /// Returns the position, if this is a placement.
    pub fn position(self) -> Option<Position> {
        match self {
            Move::Place(pos) => Some(pos),
            Move::NoLegalMove => None,
        }
    }
}

impl From<Option<Position>> for Move {
    fn from(pos: Option<Position>) -> Self {
        pos.map_or(Move::NoLegalMove, Move::Place)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (row, col) = self.as_pair();
        write!(f, "({}, {})", row, col)
    }
}

impl Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (row, col) = self.as_pair();
        [row, col].serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
        assert_eq!(Symbol::X.opponent().opponent(), Symbol::X);
    }

    #[test]
    fn test_symbol_parse_is_case_sensitive() {
        assert_eq!("X".parse::<Symbol>().ok(), Some(Symbol::X));
        assert_eq!("O".parse::<Symbol>().ok(), Some(Symbol::O));
        assert!("x".parse::<Symbol>().is_err());
        assert!("0".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_empty_and_full() {
        let mut board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());

        board.place(Position::Center, Symbol::X);
        assert!(!board.is_empty());
        assert!(!board.is_full());

        for pos in Position::ALL {
            board.place(pos, Symbol::O);
        }
        assert!(!board.is_empty());
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }

    #[test]
    fn test_features_encoding() {
        let board = Board::from_rows([
            [Some(Symbol::X), None, None],
            [None, Some(Symbol::O), None],
            [None, None, Some(Symbol::X)],
        ]);
        assert_eq!(board.to_features(), [1, 0, 0, 0, -1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = [
            [Some(Symbol::X), Some(Symbol::O), None],
            [None, None, None],
            [None, Some(Symbol::X), Some(Symbol::O)],
        ];
        assert_eq!(Board::from_rows(rows).to_rows(), rows);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Ongoing.to_string(), "ongoing");
        assert_eq!(GameStatus::Draw.to_string(), "draw");
        assert_eq!(GameStatus::Win(Symbol::X).to_string(), "win-X");
        assert_eq!(GameStatus::Win(Symbol::O).to_string(), "win-O");
    }

    #[test]
    fn test_move_pairs() {
        assert_eq!(Move::Place(Position::Center).as_pair(), (1, 1));
        assert_eq!(Move::Place(Position::BottomLeft).as_pair(), (2, 0));
        assert_eq!(Move::NoLegalMove.as_pair(), (-1, -1));
        assert_eq!(Move::from_pair(-1, -1), Move::NoLegalMove);
        assert_eq!(Move::from_pair(3, 0), Move::NoLegalMove);
        assert_eq!(Move::from_pair(0, 2), Move::Place(Position::TopRight));
    }

    #[test]
    fn test_move_serializes_as_pair() {
        let json = serde_json::to_string(&Move::Place(Position::MiddleRight)).unwrap();
        assert_eq!(json, "[1,2]");
        let json = serde_json::to_string(&Move::NoLegalMove).unwrap();
        assert_eq!(json, "[-1,-1]");
    }
}
