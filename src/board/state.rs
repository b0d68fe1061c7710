//! Game state representation and rules.
//!
//! A `BoardState` is the five pieces plus the kind that moves next. It is a
//! `Copy` value of a few dozen bytes, so callers can keep as many snapshots
//! as they like; nothing inside is shared.
//!
//! Index 0 is always the Fox and indices 1-4 are the Dogs, in whatever order
//! the caller supplied them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::coord::{Coordinate, Direction, ALL_DIRECTIONS};
use super::error::{BoardError, MoveError};
use super::layout::Layout;
use super::piece::{Piece, PieceKind};

/// The number of pieces in every game.
pub const PIECE_COUNT: usize = 5;

/// Index of the Fox within the piece array.
pub const FOX_INDEX: usize = 0;

/// Fox starting square in the standard layout.
pub const STARTING_FOX: Coordinate = Coordinate::new(0, 2);

/// Dog starting squares in the standard layout.
pub const STARTING_DOGS: [Coordinate; PIECE_COUNT - 1] = [
    Coordinate::new(7, 1),
    Coordinate::new(7, 3),
    Coordinate::new(7, 5),
    Coordinate::new(7, 7),
];

/// Complete game state: piece positions and whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Layout", into = "Layout")]
pub struct BoardState {
    pieces: [Piece; PIECE_COUNT],
    mover: PieceKind,
}

impl BoardState {
    /// Creates the standard starting position with the given side to move.
    pub fn new(mover: PieceKind) -> Self {
        BoardState {
            pieces: [
                Piece::fox(STARTING_FOX),
                Piece::dog(STARTING_DOGS[0]),
                Piece::dog(STARTING_DOGS[1]),
                Piece::dog(STARTING_DOGS[2]),
                Piece::dog(STARTING_DOGS[3]),
            ],
            mover,
        }
    }

    /// Creates a state from an arbitrary layout, validating every invariant.
    ///
    /// `pieces` must hold the Fox first followed by exactly four Dogs, all on
    /// the board and on distinct squares.
    pub fn from_pieces(mover: PieceKind, pieces: &[Piece]) -> Result<Self, BoardError> {
        let pieces: [Piece; PIECE_COUNT] = pieces
            .try_into()
            .map_err(|_| BoardError::WrongPieceCount(pieces.len()))?;

        let fox_kind = pieces[FOX_INDEX].kind();
        if fox_kind != PieceKind::Fox {
            return Err(BoardError::FoxNotFirst(fox_kind));
        }
        for (index, piece) in pieces.iter().enumerate().skip(1) {
            if piece.kind() != PieceKind::Dog {
                return Err(BoardError::NotADog { index });
            }
        }

        for (index, piece) in pieces.iter().enumerate() {
            let position = piece.position();
            if !position.is_on_board() {
                return Err(BoardError::OffBoard { index, position });
            }
            for (second, other) in pieces.iter().enumerate().skip(index + 1) {
                if other.position() == position {
                    return Err(BoardError::DuplicatePosition {
                        first: index,
                        second,
                        position,
                    });
                }
            }
        }

        Ok(BoardState { pieces, mover })
    }

    pub const fn piece_count(&self) -> usize {
        PIECE_COUNT
    }

    /// Returns a copy of the piece at `index`.
    pub fn piece(&self, index: usize) -> Result<Piece, BoardError> {
        self.pieces
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange { index })
    }

    /// Returns a copy of all pieces, Fox first.
    pub const fn pieces(&self) -> [Piece; PIECE_COUNT] {
        self.pieces
    }

    pub const fn fox(&self) -> Piece {
        self.pieces[FOX_INDEX]
    }

    /// Iterates over the four Dogs in stored order.
    pub fn dogs(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces[1..].iter().copied()
    }

    /// Returns the kind allowed to move next.
    pub const fn mover(&self) -> PieceKind {
        self.mover
    }

    /// Returns this state with a different side to move.
    pub const fn with_mover(self, mover: PieceKind) -> Self {
        BoardState {
            pieces: self.pieces,
            mover,
        }
    }

    /// Hands the turn to the other side.
    pub fn pass_turn(&mut self) {
        self.mover = self.mover.opponent();
    }

    /// Returns true if no piece stands on `position`.
    pub fn is_square_empty(&self, position: Coordinate) -> bool {
        self.pieces.iter().all(|p| p.position() != position)
    }

    /// Returns true if the piece at `index` has an on-board, empty square
    /// one step away in `direction`. Ignores turn order and piece kind.
    fn is_reachable(&self, index: usize, direction: Direction) -> bool {
        let target = self.pieces[index].position().at(direction);
        target.is_on_board() && self.is_square_empty(target)
    }

    /// Returns whether the piece at `index` may move one step in `direction`.
    ///
    /// Fails if `index` is not a valid piece index, or if a Dog is asked to
    /// move away from row 0. A move that is merely blocked by the board, or
    /// attempted out of turn, yields `Ok(false)`.
    pub fn can_move(&self, index: usize, direction: Direction) -> Result<bool, BoardError> {
        let piece = self.piece(index)?;
        // Checked before the mover, so a backward Dog move is an error even
        // on the Fox's turn rather than a plain `Ok(false)`.
        if piece.kind() == PieceKind::Dog && !direction.is_forward() {
            return Err(BoardError::BackwardDogMove { index, direction });
        }
        if self.mover != piece.kind() {
            return Ok(false);
        }
        Ok(self.is_reachable(index, direction))
    }

    /// Moves the piece at `index` one step in `direction` if that move is legal.
    ///
    /// An illegal but well-formed move is silently ignored and still returns
    /// `Ok(())`; callers that need to know must check [`BoardState::can_move`]
    /// first or use [`BoardState::try_move`]. The mover is never changed here.
    pub fn move_piece(&mut self, index: usize, direction: Direction) -> Result<(), BoardError> {
        if self.can_move(index, direction)? {
            self.apply(index, direction);
        } else {
            debug!(index, %direction, state = %self, "ignoring illegal move");
        }
        Ok(())
    }

    /// Like [`BoardState::move_piece`], but reports an illegal move as an error.
    pub fn try_move(&mut self, index: usize, direction: Direction) -> Result<(), MoveError> {
        if !self.can_move(index, direction)? {
            return Err(MoveError::Illegal { index, direction });
        }
        self.apply(index, direction);
        Ok(())
    }

    /// Returns the state after a legal move, with the turn passed to the
    /// other side. `self` is left as it was.
    pub fn play(&self, index: usize, direction: Direction) -> Result<BoardState, MoveError> {
        let mut next = *self;
        next.try_move(index, direction)?;
        next.pass_turn();
        Ok(next)
    }

    fn apply(&mut self, index: usize, direction: Direction) {
        let piece = self.pieces[index];
        let target = piece.position().at(direction);
        trace!(index, %direction, from = %piece.position(), to = %target, "move");
        self.pieces[index] = piece.moved_to(target);
    }

    /// Lists every direction the piece at `index` may legally move in, in
    /// canonical order. Dogs are only tried in their forward directions.
    pub fn possible_moves(&self, index: usize) -> Result<Vec<Direction>, BoardError> {
        let piece = self.piece(index)?;
        let mut directions = Vec::with_capacity(ALL_DIRECTIONS.len());
        for &direction in piece.allowed_directions() {
            if self.can_move(index, direction)? {
                directions.push(direction);
            }
        }
        Ok(directions)
    }

    /// True if the Fox's row is greater than every Dog's row.
    pub fn fox_wins(&self) -> bool {
        let fox_row = self.fox().position().row;
        self.dogs().all(|dog| fox_row > dog.position().row)
    }

    /// True if the Fox has no reachable square, whoever is to move.
    pub fn dog_wins(&self) -> bool {
        !ALL_DIRECTIONS
            .iter()
            .any(|&direction| self.is_reachable(FOX_INDEX, direction))
    }

    /// True if either side has won. Both may hold at once for a hand-built
    /// layout; callers that care should test the two predicates separately.
    pub fn is_goal(&self) -> bool {
        self.fox_wins() || self.dog_wins()
    }
}

impl Default for BoardState {
    /// The standard starting position with the Fox to move.
    fn default() -> Self {
        BoardState::new(PieceKind::Fox)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}", self.mover)?;
        for piece in &self.pieces {
            write!(f, ", [{}]", piece)?;
        }
        f.write_str("}")
    }
}

impl TryFrom<Layout> for BoardState {
    type Error = BoardError;

    fn try_from(layout: Layout) -> Result<Self, Self::Error> {
        layout.build()
    }
}
