//! Legal move generation.
//!
//! Enumerates every legal move for the side to move, across all of that
//! side's pieces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Direction, MoveError, PIECE_COUNT};

/// A single move: which piece, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub index: usize,
    pub direction: Direction,
}

impl Move {
    pub const fn new(index: usize, direction: Direction) -> Self {
        Move { index, direction }
    }

    /// Returns the state after this move, with the turn passed.
    pub fn play(self, state: &BoardState) -> Result<BoardState, MoveError> {
        state.play(self.index, self.direction)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.direction)
    }
}

/// Generates all legal moves for the current mover.
///
/// Pieces are visited in index order and directions in canonical order, so
/// the result is deterministic for a given state.
pub fn legal_moves(state: &BoardState) -> Vec<Move> {
    let mut moves = Vec::new();
    for (index, piece) in state.pieces().iter().enumerate() {
        if piece.kind() != state.mover() {
            continue;
        }
        for &direction in piece.allowed_directions() {
            if matches!(state.can_move(index, direction), Ok(true)) {
                moves.push(Move::new(index, direction));
            }
        }
    }
    moves
}

/// Returns true if the mover has at least one legal move.
pub fn has_legal_move(state: &BoardState) -> bool {
    (0..PIECE_COUNT).any(|index| {
        state
            .possible_moves(index)
            .is_ok_and(|directions| !directions.is_empty())
    })
}
