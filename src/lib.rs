//! Fox Catcher rules kernel.
//!
//! One Fox and four Dogs on an 8×8 board, moving diagonally. This crate
//! tracks the side to move, decides which moves are legal, applies them,
//! and detects both win conditions. Turn sequencing, presentation, and move
//! choice belong to the caller.

pub mod board;
pub mod movegen;

pub use board::{BoardError, BoardState, Coordinate, Direction, Layout, MoveError, Piece, PieceKind};
