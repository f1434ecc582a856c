use crate::geometry::coordinate::Coordinate;
use crate::geometry::lines::is_diagonal;

#[inline]
pub fn bishop_reaches(origin: Coordinate, destination: Coordinate) -> bool {
    is_diagonal(origin, destination)
}
