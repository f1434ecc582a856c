//! Pawn geometry.
//!
//! Pawns are the only rank whose shape depends on the team: they advance
//! toward the opponent one row at a time, two from their home row, and
//! capture one row forward on either diagonal. Whether a square is actually
//! empty or holds an enemy is the walker's business, not this module's.

use crate::game_state::chess_types::Team;
use crate::geometry::coordinate::Coordinate;
use crate::geometry::delta::Delta;

/// Straight advance step for `team`.
#[inline]
pub const fn pawn_push(team: Team) -> Delta {
    Delta::new(team.forward(), 0)
}

/// The two diagonal capture steps for `team`.
#[inline]
pub const fn pawn_capture_steps(team: Team) -> [Delta; 2] {
    [Delta::new(team.forward(), -1), Delta::new(team.forward(), 1)]
}

#[inline]
pub fn is_pawn_push(team: Team, origin: Coordinate, destination: Coordinate, board_size: u8) -> bool {
    let d = origin.delta_to(destination);
    if d.d_col != 0 {
        return false;
    }
    d.d_row == team.forward()
        || (d.d_row == 2 * team.forward() && origin.row == team.pawn_home_row(board_size))
}

#[inline]
pub fn is_pawn_capture(team: Team, origin: Coordinate, destination: Coordinate) -> bool {
    let d = origin.delta_to(destination);
    d.d_row == team.forward() && d.d_col.abs() == 1
}

pub fn pawn_reaches(team: Team, origin: Coordinate, destination: Coordinate, board_size: u8) -> bool {
    is_pawn_push(team, origin, destination, board_size) || is_pawn_capture(team, origin, destination)
}
