//! Shape-only legality: could a piece of this rank ever move like this?
//!
//! Obstruction is ignored here; the path walker owns it.

use crate::game_state::chess_types::{Rank, Team};
use crate::geometry::coordinate::Coordinate;
use crate::moves::bishop_moves::bishop_reaches;
use crate::moves::king_moves::king_reaches;
use crate::moves::knight_moves::knight_reaches;
use crate::moves::pawn_moves::pawn_reaches;
use crate::moves::queen_moves::queen_reaches;
use crate::moves::rook_moves::rook_reaches;

pub fn is_reachable(
    rank: Rank,
    team: Team,
    origin: Coordinate,
    destination: Coordinate,
    board_size: u8,
) -> bool {
    if origin == destination {
        return false;
    }

    match rank {
        Rank::Pawn => pawn_reaches(team, origin, destination, board_size),
        Rank::Knight => knight_reaches(origin, destination),
        Rank::Bishop => bishop_reaches(origin, destination),
        Rank::Rook => rook_reaches(origin, destination),
        Rank::Queen => queen_reaches(origin, destination),
        Rank::King => king_reaches(origin, destination),
    }
}
