//! Read-only occupancy projection handed to renderers and other callers.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Rank, Team};
use crate::geometry::coordinate::Coordinate;
use crate::ids::PieceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPiece {
    pub id: PieceId,
    pub team: Team,
    pub rank: Rank,
}

/// Snapshot of who stands where. Two views compare equal when every square
/// holds the same piece with the same rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    size: u8,
    cells: Vec<Option<ViewPiece>>,
}

impl BoardView {
    pub fn capture(board: &Board) -> Self {
        let cells = board
            .squares()
            .map(|square| {
                square
                    .occupant()
                    .and_then(|id| board.piece(id))
                    .map(|piece| ViewPiece {
                        id: piece.id(),
                        team: piece.team(),
                        rank: piece.rank(),
                    })
            })
            .collect();

        Self {
            size: board.size(),
            cells,
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn at(&self, at: Coordinate) -> Option<ViewPiece> {
        if !at.is_in_bounds(self.size) {
            return None;
        }
        self.cells[at.index(self.size)]
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, ViewPiece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|p| (Coordinate::from_index(index, self.size), p)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
