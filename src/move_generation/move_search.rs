//! Destination search.
//!
//! For every direction a piece's rank walks, run the path walker and union
//! what comes back. Blocking is never inspected here directly, only through
//! the walker, and each candidate is re-checked against the rank's shape.
//!
//! The result never contains a friendly-occupied or off-board square. It
//! does *not* account for leaving one's own king in check.

use std::collections::BTreeSet;

use crate::errors::ErrorKind;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Rank;
use crate::game_state::piece::Piece;
use crate::geometry::coordinate::Coordinate;
use crate::ids::PieceId;
use crate::move_generation::legal_moves_pawn::pawn_destinations;
use crate::move_generation::path_walker::PathWalker;
use crate::moves::reachability::is_reachable;

pub type SearchResult<T> = Result<T, ErrorKind>;

/// Legal destinations for the piece with id `piece`.
pub fn destinations(board: &Board, piece: PieceId) -> SearchResult<BTreeSet<Coordinate>> {
    let piece = board
        .piece(piece)
        .ok_or(ErrorKind::NullActor { actor: piece })?;
    destinations_of(board, piece)
}

pub fn destinations_of(board: &Board, piece: &Piece) -> SearchResult<BTreeSet<Coordinate>> {
    let origin = piece
        .position()
        .ok_or(ErrorKind::NullActor { actor: piece.id() })?;

    let mut out = BTreeSet::new();
    match piece.rank() {
        Rank::Pawn => pawn_destinations(board, piece, origin, &mut out),
        rank => {
            for &delta in rank.directions() {
                out.extend(PathWalker::new(board, piece.team(), origin, delta, rank.traversal()));
            }
        }
    }

    out.retain(|&to| is_reachable(piece.rank(), piece.team(), origin, to, board.size()));
    Ok(out)
}

/// Whether `to` is among the piece's current destinations.
pub fn can_reach(board: &Board, piece: &Piece, to: Coordinate) -> SearchResult<bool> {
    Ok(destinations_of(board, piece)?.contains(&to))
}
