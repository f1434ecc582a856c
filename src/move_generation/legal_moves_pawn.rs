use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::geometry::coordinate::Coordinate;
use crate::move_generation::path_walker::{CapturePolicy, PathWalker};
use crate::moves::pawn_moves::{pawn_capture_steps, pawn_push};

/// Pushes (one square, two from the home row) onto vacant squares, plus
/// diagonal steps onto enemy-held squares.
pub fn pawn_destinations(board: &Board, pawn: &Piece, origin: Coordinate, out: &mut BTreeSet<Coordinate>) {
    let team = pawn.team();
    let push_limit = if origin.row == team.pawn_home_row(board.size()) {
        2
    } else {
        1
    };

    out.extend(
        PathWalker::sliding(board, team, origin, pawn_push(team))
            .with_max_steps(push_limit)
            .with_capture_policy(CapturePolicy::QuietOnly),
    );

    for step in pawn_capture_steps(team) {
        out.extend(
            PathWalker::stepping(board, team, origin, step).with_capture_policy(CapturePolicy::CaptureOnly),
        );
    }
}
