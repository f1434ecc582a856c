use crate::geometry::coordinate::Coordinate;
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::rook_moves::rook_reaches;

#[inline]
pub fn queen_reaches(origin: Coordinate, destination: Coordinate) -> bool {
    rook_reaches(origin, destination) || bishop_reaches(origin, destination)
}
