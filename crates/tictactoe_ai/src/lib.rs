//! Tic-tac-toe move engine.
//!
//! Computer move selection for a 3x3 board at three difficulty tiers.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: win and terminal-state detection ([`rules`])
//! - **Search**: exhaustive minimax and the Hard-tier selector ([`search`])
//! - **Strategy**: tier dispatch and the Medium predictor seam ([`strategy`])
//! - **Engine**: the caller-facing surface with fallback and turn handling
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{DifficultyTier, Engine, GameStatus, Move, Position, Symbol, parse_board};
//!
//! let raw = vec![
//!     vec![Some("X"), Some("X"), None],
//!     vec![Some("O"), None, None],
//!     vec![Some("O"), None, None],
//! ];
//! let board = parse_board(&raw).unwrap();
//! let engine = Engine::new();
//!
//! let mv = engine.compute_move(&board, DifficultyTier::Hard, Symbol::X);
//! assert_eq!(mv, Move::Place(Position::TopRight));
//! assert_eq!(engine.game_status(&board, Symbol::X), GameStatus::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod parse;
mod position;
mod types;

pub mod arena;
pub mod rules;
pub mod search;
pub mod strategy;

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, GameStatus, Move, Square, Symbol};

// Crate-level exports - Errors
pub use error::{EngineError, PredictorError};

// Crate-level exports - Caller surface
pub use engine::{Engine, TurnOutcome};
pub use parse::{parse_board, parse_board_value, parse_symbol};
pub use strategy::{DifficultyTier, MovePredictor};
