//! Board coordinates and the four diagonal directions.
//!
//! A `Coordinate` is a plain value; shifting one never checks bounds.
//! Whether the result lies on the board is up to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// The number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// A square on the grid, addressed by row and column.
///
/// Row 0 is the Fox's starting edge; row 7 is the Dogs' back edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// Returns the coordinate one diagonal step away in `direction`.
    ///
    /// Components wrap at the `i32` limits instead of panicking; a wrapped
    /// result is always off the board.
    pub const fn at(self, direction: Direction) -> Coordinate {
        Coordinate {
            row: self.row.wrapping_add(direction.row_delta()),
            col: self.col.wrapping_add(direction.col_delta()),
        }
    }

    pub const fn up_left(self) -> Coordinate {
        self.at(Direction::UpLeft)
    }

    pub const fn up_right(self) -> Coordinate {
        self.at(Direction::UpRight)
    }

    pub const fn down_left(self) -> Coordinate {
        self.at(Direction::DownLeft)
    }

    pub const fn down_right(self) -> Coordinate {
        self.at(Direction::DownRight)
    }

    /// Returns true if both components lie in `[0, BOARD_SIZE)`.
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four diagonal movement vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// All directions in canonical order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

/// The directions a Dog may move in, in canonical order.
pub const FORWARD_DIRECTIONS: [Direction; 2] = [Direction::UpLeft, Direction::UpRight];

impl Direction {
    pub const fn row_delta(self) -> i32 {
        match self {
            Direction::UpLeft | Direction::UpRight => -1,
            Direction::DownLeft | Direction::DownRight => 1,
        }
    }

    pub const fn col_delta(self) -> i32 {
        match self {
            Direction::UpLeft | Direction::DownLeft => -1,
            Direction::UpRight | Direction::DownRight => 1,
        }
    }

    /// Looks up the direction with exactly the given deltas.
    pub fn of(row_delta: i32, col_delta: i32) -> Result<Direction, BoardError> {
        match (row_delta, col_delta) {
            (-1, -1) => Ok(Direction::UpLeft),
            (-1, 1) => Ok(Direction::UpRight),
            (1, -1) => Ok(Direction::DownLeft),
            (1, 1) => Ok(Direction::DownRight),
            _ => Err(BoardError::UnrecognizedDirection { row_delta, col_delta }),
        }
    }

    /// Returns true for directions toward row 0.
    pub const fn is_forward(self) -> bool {
        matches!(self, Direction::UpLeft | Direction::UpRight)
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::UpLeft => "UP_LEFT",
            Direction::UpRight => "UP_RIGHT",
            Direction::DownLeft => "DOWN_LEFT",
            Direction::DownRight => "DOWN_RIGHT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_shifts_by_deltas() {
        let c = Coordinate::new(3, 4);
        assert_eq!(c.at(Direction::UpLeft), Coordinate::new(2, 3));
        assert_eq!(c.at(Direction::UpRight), Coordinate::new(2, 5));
        assert_eq!(c.at(Direction::DownLeft), Coordinate::new(4, 3));
        assert_eq!(c.at(Direction::DownRight), Coordinate::new(4, 5));
    }

    #[test]
    fn shorthands_match_at() {
        let c = Coordinate::new(5, 5);
        assert_eq!(c.up_left(), c.at(Direction::UpLeft));
        assert_eq!(c.up_right(), c.at(Direction::UpRight));
        assert_eq!(c.down_left(), c.at(Direction::DownLeft));
        assert_eq!(c.down_right(), c.at(Direction::DownRight));
    }

    #[test]
    fn at_does_not_check_bounds() {
        let corner = Coordinate::new(0, 0);
        let off = corner.at(Direction::UpLeft);
        assert_eq!(off, Coordinate::new(-1, -1));
        assert!(!off.is_on_board());
    }

    #[test]
    fn at_wraps_at_integer_limits() {
        let far = Coordinate::new(i32::MAX, 0);
        let stepped = far.at(Direction::DownRight);
        assert_eq!(stepped, Coordinate::new(i32::MIN, 1));
        assert!(!stepped.is_on_board());

        let low = Coordinate::new(0, i32::MIN);
        assert_eq!(low.at(Direction::UpLeft), Coordinate::new(-1, i32::MAX));
        assert!(!low.at(Direction::UpLeft).is_on_board());
    }

    #[test]
    fn on_board_edges() {
        assert!(Coordinate::new(0, 0).is_on_board());
        assert!(Coordinate::new(7, 7).is_on_board());
        assert!(!Coordinate::new(8, 0).is_on_board());
        assert!(!Coordinate::new(0, 8).is_on_board());
        assert!(!Coordinate::new(-1, 3).is_on_board());
    }

    #[test]
    fn of_inverts_deltas() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::of(d.row_delta(), d.col_delta()).unwrap(), d);
        }
    }

    #[test]
    fn of_rejects_non_diagonal() {
        for (dr, dc) in [(1, 0), (0, 1), (0, 0), (-1, 0), (2, 2), (-2, 1)] {
            assert_eq!(
                Direction::of(dr, dc),
                Err(BoardError::UnrecognizedDirection { row_delta: dr, col_delta: dc })
            );
        }
    }

    #[test]
    fn forward_is_toward_row_zero() {
        for d in ALL_DIRECTIONS {
            assert_eq!(d.is_forward(), d.row_delta() < 0);
        }
        assert!(FORWARD_DIRECTIONS.iter().all(|d| d.is_forward()));
    }

    #[test]
    fn opposite_undoes_a_step() {
        let c = Coordinate::new(4, 4);
        for d in ALL_DIRECTIONS {
            assert_eq!(c.at(d).at(d.opposite()), c);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn coordinate_display() {
        assert_eq!(Coordinate::new(0, 2).to_string(), "(0,2)");
        assert_eq!(Coordinate::new(-1, 7).to_string(), "(-1,7)");
    }
}
