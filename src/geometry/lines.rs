//! Line classifiers over pairs of coordinates.
//!
//! All of these are pure predicates: no board, no occupancy, no bounds. A
//! coordinate paired with itself is never on any line.

use crate::geometry::coordinate::Coordinate;

#[inline]
pub fn is_diagonal(a: Coordinate, b: Coordinate) -> bool {
    let d = a.delta_to(b);
    a != b && d.d_row.abs() == d.d_col.abs()
}

#[inline]
pub fn is_horizontal(a: Coordinate, b: Coordinate) -> bool {
    a.row == b.row && a.col != b.col
}

#[inline]
pub fn is_vertical(a: Coordinate, b: Coordinate) -> bool {
    a.col == b.col && a.row != b.row
}

#[inline]
pub fn is_orthogonal(a: Coordinate, b: Coordinate) -> bool {
    is_horizontal(a, b) || is_vertical(a, b)
}

#[inline]
pub fn is_knight_shaped(a: Coordinate, b: Coordinate) -> bool {
    let d = a.delta_to(b);
    matches!((d.d_row.abs(), d.d_col.abs()), (2, 1) | (1, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i8, col: i8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn same_square_is_on_no_line() {
        let a = c(3, 3);
        assert!(!is_diagonal(a, a));
        assert!(!is_horizontal(a, a));
        assert!(!is_vertical(a, a));
        assert!(!is_knight_shaped(a, a));
    }

    #[test]
    fn classifies_each_line_kind() {
        assert!(is_diagonal(c(2, 2), c(5, 5)));
        assert!(is_diagonal(c(2, 2), c(0, 4)));
        assert!(!is_diagonal(c(2, 2), c(3, 5)));

        assert!(is_horizontal(c(4, 0), c(4, 7)));
        assert!(!is_horizontal(c(4, 0), c(5, 7)));

        assert!(is_vertical(c(0, 6), c(7, 6)));
        assert!(!is_vertical(c(0, 6), c(7, 5)));

        assert!(is_knight_shaped(c(4, 4), c(6, 5)));
        assert!(is_knight_shaped(c(4, 4), c(3, 2)));
        assert!(!is_knight_shaped(c(4, 4), c(6, 6)));
    }
}
