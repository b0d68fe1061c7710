//! Board representation and game-state types.
//!
//! Contains coordinates and directions, pieces, the error types, the
//! serializable layout form, and the board state that enforces the rules.

pub mod coord;
pub mod error;
pub mod layout;
pub mod piece;
pub mod state;

pub use coord::{Coordinate, Direction, ALL_DIRECTIONS, BOARD_SIZE, FORWARD_DIRECTIONS};
pub use error::{BoardError, MoveError};
pub use layout::Layout;
pub use piece::{Piece, PieceKind};
pub use state::{BoardState, FOX_INDEX, PIECE_COUNT, STARTING_DOGS, STARTING_FOX};
