//! Hard-tier move selection with a fixed tie-break order.

use super::minimax::minimax;
use crate::rules::check_win;
use crate::{Board, Move, Position, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Which rule settled a tie between equally scored moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TieBreak {
    /// Only one move had the best score.
    Unique,
    /// The move takes a cell the opponent could have won on.
    Block,
    /// The move is the center.
    Center,
    /// The move is the first tied corner in preference order.
    Corner,
    /// Picked at random among the tied moves.
    Random,
}

/// Picks the AI's move using exhaustive search.
///
/// An empty board always gets the center. Otherwise every empty cell is
/// tried in row-major order; a cell that wins on the spot is returned at
/// once, the rest are scored with [`minimax`]. Ties on the best score go
/// through [`break_tie`].
#[instrument(skip(board, rng))]
pub fn best_move<R: Rng + ?Sized>(board: &Board, ai: Symbol, rng: &mut R) -> Move {
    if board.is_empty() {
        debug!("Empty board, opening in the center");
        return Move::Place(Position::CENTER);
    }

    let mut work = *board;
    let mut best_score = i32::MIN;
    let mut best_moves: Vec<Position> = Vec::new();

    for pos in Position::ALL {
        if !work.is_vacant(pos) {
            continue;
        }

        work.place(pos, ai);
        if check_win(&work, ai) {
            work.clear(pos);
            debug!(position = %pos, "Immediate win");
            return Move::Place(pos);
        }
        let score = minimax(&mut work, 0, false, ai);
        work.clear(pos);

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(pos);
        } else if score == best_score {
            best_moves.push(pos);
        }
    }

    debug!(best_score, candidates = best_moves.len(), "Search complete");

    match break_tie(&work, &best_moves, ai, rng) {
        Some((pos, rule)) => {
            debug!(position = %pos, rule = %rule, "Move selected");
            Move::Place(pos)
        }
        None => Move::NoLegalMove,
    }
}

/// Chooses among equally scored candidates.
///
/// Rules apply in order and the first match wins: a blocking cell (the
/// opponent would complete a line there), the center, the first corner of
/// [`Position::CORNERS`] that is a candidate, then a uniform random pick.
/// A single candidate is returned as is. Returns `None` for an empty list.
pub fn break_tie<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Position],
    ai: Symbol,
    rng: &mut R,
) -> Option<(Position, TieBreak)> {
    if let [only] = candidates {
        return Some((*only, TieBreak::Unique));
    }

    let opponent = ai.opponent();
    let mut probe = *board;
    for &pos in candidates {
        probe.place(pos, opponent);
        let blocks = check_win(&probe, opponent);
        probe.clear(pos);
        if blocks {
            return Some((pos, TieBreak::Block));
        }
    }

    if candidates.contains(&Position::CENTER) {
        return Some((Position::CENTER, TieBreak::Center));
    }

    if let Some(corner) = Position::CORNERS
        .into_iter()
        .find(|corner| candidates.contains(corner))
    {
        return Some((corner, TieBreak::Corner));
    }

    candidates
        .choose(rng)
        .map(|pos| (*pos, TieBreak::Random))
}
