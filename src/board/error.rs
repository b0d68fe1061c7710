//! Errors raised by board construction and move handling.
//!
//! `BoardError` covers caller misuse: bad indices, impossible directions,
//! and layouts that break the board invariants. `MoveError` is only used by
//! the checked move API, where an illegal but well-formed move is reported
//! instead of silently ignored.

use super::coord::{Coordinate, Direction};
use super::piece::PieceKind;

/// Invalid-argument errors for board construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("piece index {index} is out of range")]
    IndexOutOfRange { index: usize },

    #[error("expected 5 pieces, got {0}")]
    WrongPieceCount(usize),

    #[error("first piece must be the fox, got {0}")]
    FoxNotFirst(PieceKind),

    #[error("piece at index {index} must be a dog")]
    NotADog { index: usize },

    #[error("piece at index {index} is off the board at {position}")]
    OffBoard { index: usize, position: Coordinate },

    #[error("pieces {first} and {second} share the square {position}")]
    DuplicatePosition {
        first: usize,
        second: usize,
        position: Coordinate,
    },

    #[error("unrecognized direction: ({row_delta},{col_delta})")]
    UnrecognizedDirection { row_delta: i32, col_delta: i32 },

    #[error("dog at index {index} cannot move {direction}")]
    BackwardDogMove { index: usize, direction: Direction },
}

/// Errors from the checked move API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("moving piece {index} {direction} is not legal in this state")]
    Illegal { index: usize, direction: Direction },

    #[error(transparent)]
    Invalid(#[from] BoardError),
}
