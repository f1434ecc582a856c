//! Terminal-oriented Unicode board renderer.
//!
//! Draws a [`BoardView`] with file letters and rank numbers, top row first.

use crate::game_state::board_view::{BoardView, ViewPiece};
use crate::game_state::chess_types::{Rank, Team};
use crate::geometry::coordinate::Coordinate;

pub fn render_board(view: &BoardView) -> String {
    let size = view.size();
    let files: String = (0..size)
        .map(|f| char::from(b'a' + f).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("   ");
    out.push_str(&files);
    out.push('\n');

    for row in (0..size as i8).rev() {
        out.push_str(&format!("{:>2} ", row + 1));
        for col in 0..size as i8 {
            match view.at(Coordinate::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if col < size as i8 - 1 {
                out.push(' ');
            }
        }
        out.push_str(&format!(" {}\n", row + 1));
    }

    out.push_str("   ");
    out.push_str(&files);
    out
}

fn piece_to_unicode(piece: ViewPiece) -> char {
    match (piece.team, piece.rank) {
        (Team::Light, Rank::Pawn) => '♙',
        (Team::Light, Rank::Knight) => '♘',
        (Team::Light, Rank::Bishop) => '♗',
        (Team::Light, Rank::Rook) => '♖',
        (Team::Light, Rank::Queen) => '♕',
        (Team::Light, Rank::King) => '♔',
        (Team::Dark, Rank::Pawn) => '♟',
        (Team::Dark, Rank::Knight) => '♞',
        (Team::Dark, Rank::Bishop) => '♝',
        (Team::Dark, Rank::Rook) => '♜',
        (Team::Dark, Rank::Queen) => '♛',
        (Team::Dark, Rank::King) => '♚',
    }
}
