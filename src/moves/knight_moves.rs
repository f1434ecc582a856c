use crate::geometry::coordinate::Coordinate;
use crate::geometry::lines::is_knight_shaped;

#[inline]
pub fn knight_reaches(origin: Coordinate, destination: Coordinate) -> bool {
    is_knight_shaped(origin, destination)
}
