use crate::geometry::coordinate::Coordinate;
use crate::geometry::lines::is_orthogonal;

/// A rook reaches anything on its row or column.
#[inline]
pub fn rook_reaches(origin: Coordinate, destination: Coordinate) -> bool {
    is_orthogonal(origin, destination)
}
