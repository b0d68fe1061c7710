//! Piece kinds and pieces.
//!
//! A piece pairs a fixed kind with a position. Moving a piece produces a
//! new value; the kind never changes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::{Coordinate, Direction, ALL_DIRECTIONS, FORWARD_DIRECTIONS};

/// The kind of a piece, also used to name whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Fox,
    Dog,
}

impl PieceKind {
    /// Returns the kind that moves after this one.
    pub const fn opponent(self) -> PieceKind {
        match self {
            PieceKind::Fox => PieceKind::Dog,
            PieceKind::Dog => PieceKind::Fox,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Fox => f.write_str("FOX"),
            PieceKind::Dog => f.write_str("DOG"),
        }
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    position: Coordinate,
}

impl Piece {
    pub const fn new(kind: PieceKind, position: Coordinate) -> Self {
        Piece { kind, position }
    }

    pub const fn fox(position: Coordinate) -> Self {
        Piece::new(PieceKind::Fox, position)
    }

    pub const fn dog(position: Coordinate) -> Self {
        Piece::new(PieceKind::Dog, position)
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Returns the same piece standing on `position`.
    pub const fn moved_to(self, position: Coordinate) -> Piece {
        Piece {
            kind: self.kind,
            position,
        }
    }

    /// Directions this kind of piece may ever move in, in canonical order.
    ///
    /// The Fox moves diagonally both ways; Dogs only move toward row 0.
    pub fn allowed_directions(&self) -> &'static [Direction] {
        match self.kind {
            PieceKind::Fox => &ALL_DIRECTIONS,
            PieceKind::Dog => &FORWARD_DIRECTIONS,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.position)
    }
}
