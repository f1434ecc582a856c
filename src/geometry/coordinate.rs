//! Square addressing on an `N x N` board.
//!
//! A `Coordinate` is a plain `(row, col)` pair. Arithmetic on it never fails:
//! shifting may produce a coordinate off the board, and it is up to the
//! caller to check it against a board size before using it as an index.

use std::fmt;

use crate::geometry::delta::Delta;

/// Immutable `(row, col)` address. Row 0 is the Light home row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Pure arithmetic shift; the result may be out of bounds.
    #[inline]
    pub const fn shift(self, delta: Delta) -> Self {
        Self {
            row: self.row.saturating_add(delta.d_row),
            col: self.col.saturating_add(delta.d_col),
        }
    }

    #[inline]
    pub const fn is_in_bounds(self, board_size: u8) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as i16) < board_size as i16 && (self.col as i16) < board_size as i16
    }

    /// Step vector from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Coordinate) -> Delta {
        Delta::new(other.row - self.row, other.col - self.col)
    }

    /// Row-major index into a board of `board_size` columns.
    ///
    /// Only meaningful for in-bounds coordinates.
    #[inline]
    pub const fn index(self, board_size: u8) -> usize {
        self.row as usize * board_size as usize + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize, board_size: u8) -> Self {
        let n = board_size as usize;
        Self::new((index / n) as i8, (index % n) as i8)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;
    use crate::geometry::delta::Delta;

    #[test]
    fn shift_may_leave_the_board() {
        let corner = Coordinate::new(0, 0);
        let shifted = corner.shift(Delta::new(-1, 2));
        assert_eq!(shifted, Coordinate::new(-1, 2));
        assert!(!shifted.is_in_bounds(8));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Coordinate::new(7, 7).is_in_bounds(8));
        assert!(!Coordinate::new(8, 0).is_in_bounds(8));
        assert!(!Coordinate::new(0, 8).is_in_bounds(8));
        assert!(Coordinate::new(9, 9).is_in_bounds(10));
    }

    #[test]
    fn index_round_trips_through_row_major_layout() {
        let c = Coordinate::new(3, 5);
        assert_eq!(c.index(8), 29);
        assert_eq!(Coordinate::from_index(29, 8), c);
    }
}
