//! Serializable starting layouts.
//!
//! A `Layout` is the unvalidated form of a board: a side to move and a list
//! of pieces. It is what `BoardState` serializes to and deserializes from,
//! so a state read back in always passes through [`Layout::build`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::BoardError;
use super::piece::{Piece, PieceKind};
use super::state::{BoardState, STARTING_DOGS, STARTING_FOX};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub mover: PieceKind,
    pub pieces: Vec<Piece>,
}

impl Layout {
    /// The standard starting layout with the given side to move.
    pub fn standard(mover: PieceKind) -> Self {
        let mut pieces = Vec::with_capacity(STARTING_DOGS.len() + 1);
        pieces.push(Piece::fox(STARTING_FOX));
        pieces.extend(STARTING_DOGS.iter().map(|&pos| Piece::dog(pos)));
        Layout { mover, pieces }
    }

    /// Validates the layout and turns it into a board state.
    pub fn build(&self) -> Result<BoardState, BoardError> {
        BoardState::from_pieces(self.mover, &self.pieces).inspect_err(|err| {
            debug!(%err, pieces = self.pieces.len(), "rejected layout");
        })
    }
}

impl From<BoardState> for Layout {
    fn from(state: BoardState) -> Self {
        Layout {
            mover: state.mover(),
            pieces: state.pieces().to_vec(),
        }
    }
}
