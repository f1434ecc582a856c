use crate::geometry::coordinate::Coordinate;

/// One step in any of the eight directions.
#[inline]
pub fn king_reaches(origin: Coordinate, destination: Coordinate) -> bool {
    origin != destination && origin.delta_to(destination).chebyshev_norm() == 1
}
