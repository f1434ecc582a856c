//! Pieces and their position history.
//!
//! A piece is created once and lives for the whole game inside the board's
//! piece arena. Capturing a piece retires it: it leaves the board but keeps
//! its id, team, rank and full trail of squares for auditing.

use crate::game_state::chess_types::{Rank, Team};
use crate::geometry::coordinate::Coordinate;
use crate::ids::PieceId;

/// Push-only trail of squares a piece has stood on. The top is the current
/// square.
///
/// Invariant: a piece is on the board exactly when its trail is non-empty
/// and it has not been retired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHistory {
    trail: Vec<Coordinate>,
    retired: bool,
}

impl PositionHistory {
    #[inline]
    pub fn current(&self) -> Option<Coordinate> {
        if self.retired {
            None
        } else {
            self.trail.last().copied()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    #[inline]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Every square in arrival order, including for retired pieces.
    pub fn trail(&self) -> &[Coordinate] {
        &self.trail
    }

    pub(crate) fn push(&mut self, at: Coordinate) {
        self.trail.push(at);
    }

    /// Undo of [`push`](Self::push). Only the transaction rollback uses it.
    pub(crate) fn pop(&mut self) -> Option<Coordinate> {
        self.trail.pop()
    }

    pub(crate) fn set_retired(&mut self, retired: bool) {
        self.retired = retired;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    team: Team,
    rank: Rank,
    history: PositionHistory,
}

impl Piece {
    /// A fresh, off-board piece.
    pub fn new(id: PieceId, team: Team, rank: Rank) -> Self {
        Self {
            id,
            team,
            rank,
            history: PositionHistory::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    #[inline]
    pub fn position(&self) -> Option<Coordinate> {
        self.history.current()
    }

    #[inline]
    pub fn is_on_board(&self) -> bool {
        self.position().is_some()
    }

    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.team != other.team
    }

    pub(crate) fn history_mut(&mut self) -> &mut PositionHistory {
        &mut self.history
    }

    /// Returns the previous rank.
    pub(crate) fn swap_rank(&mut self, rank: Rank) -> Rank {
        std::mem::replace(&mut self.rank, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_is_off_board() {
        let p = Piece::new(PieceId(1), Team::Light, Rank::Rook);
        assert!(!p.is_on_board());
        assert!(p.history().is_empty());
    }

    #[test]
    fn retired_piece_keeps_its_trail() {
        let mut p = Piece::new(PieceId(1), Team::Dark, Rank::Knight);
        p.history_mut().push(Coordinate::new(7, 1));
        p.history_mut().push(Coordinate::new(5, 2));
        assert_eq!(p.position(), Some(Coordinate::new(5, 2)));

        p.history_mut().set_retired(true);
        assert!(!p.is_on_board());
        assert_eq!(p.history().len(), 2);
        assert_eq!(p.history().trail()[0], Coordinate::new(7, 1));

        p.history_mut().set_retired(false);
        assert_eq!(p.position(), Some(Coordinate::new(5, 2)));
    }

    #[test]
    fn swap_rank_keeps_identity() {
        let mut p = Piece::new(PieceId(9), Team::Light, Rank::Pawn);
        let previous = p.swap_rank(Rank::Queen);
        assert_eq!(previous, Rank::Pawn);
        assert_eq!(p.rank(), Rank::Queen);
        assert_eq!(p.id(), PieceId(9));
    }
}
