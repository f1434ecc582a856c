//! Fixed-size square grid plus the arena of every piece in the game.
//!
//! The board is a passive store. It keeps the "one occupant per square"
//! invariant on every mutation and can audit itself against the pieces'
//! position histories, but it never decides whether a move is legal.

use std::collections::BTreeMap;

use crate::errors::BoardError;
use crate::game_state::chess_rules::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
use crate::game_state::chess_types::{Rank, Team};
use crate::game_state::piece::Piece;
use crate::geometry::coordinate::Coordinate;
use crate::ids::PieceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    coordinate: Coordinate,
    occupant: Option<PieceId>,
}

impl Square {
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    size: u8,
    // Row-major, always exactly size * size entries.
    squares: Vec<Square>,
    pieces: BTreeMap<PieceId, Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_valid_size(STANDARD_BOARD_SIZE)
    }
}

impl Board {
    pub fn new(size: u8) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::with_valid_size(size))
    }

    fn with_valid_size(size: u8) -> Self {
        let count = size as usize * size as usize;
        let squares = (0..count)
            .map(|index| Square {
                coordinate: Coordinate::from_index(index, size),
                occupant: None,
            })
            .collect();

        Self {
            size,
            squares,
            pieces: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        at.is_in_bounds(self.size)
    }

    pub fn square_at(&self, at: Coordinate) -> Result<&Square, BoardError> {
        if !self.contains(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        Ok(&self.squares[at.index(self.size)])
    }

    fn square_mut(&mut self, at: Coordinate) -> Result<&mut Square, BoardError> {
        if !self.contains(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        let index = at.index(self.size);
        Ok(&mut self.squares[index])
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> + '_ {
        self.squares.iter()
    }

    /// Occupant id, or `None` for vacant and off-board coordinates.
    pub fn occupant_at(&self, at: Coordinate) -> Option<PieceId> {
        self.square_at(at).ok().and_then(Square::occupant)
    }

    pub fn occupant_piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.occupant_at(at).and_then(|id| self.pieces.get(&id))
    }

    /// False for off-board coordinates.
    pub fn is_vacant(&self, at: Coordinate) -> bool {
        self.square_at(at).map(Square::is_vacant).unwrap_or(false)
    }

    /// Puts a registered piece on a vacant square. Occupancy only: the
    /// piece's history is left alone.
    pub fn place(&mut self, piece: PieceId, at: Coordinate) -> Result<(), BoardError> {
        if !self.pieces.contains_key(&piece) {
            return Err(BoardError::UnknownPiece(piece));
        }
        let square = self.square_mut(at)?;
        if let Some(occupant) = square.occupant {
            return Err(BoardError::SquareOccupied { at, occupant });
        }
        square.occupant = Some(piece);
        Ok(())
    }

    /// Clears a square, returning whoever stood there.
    pub fn remove(&mut self, at: Coordinate) -> Option<PieceId> {
        self.square_mut(at).ok().and_then(|square| square.occupant.take())
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(&id)
    }

    /// Every piece ever registered, on-board or not, in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values()
    }

    pub fn pieces_on_board(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces
            .values()
            .filter(move |p| p.team() == team && p.is_on_board())
    }

    pub fn retired_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values().filter(|p| p.history().is_retired())
    }

    /// Adds an off-board piece to the arena.
    pub fn register(&mut self, piece: Piece) -> Result<PieceId, BoardError> {
        let id = piece.id();
        if self.pieces.contains_key(&id) {
            return Err(BoardError::DuplicatePiece(id));
        }
        if !piece.history().is_empty() {
            return Err(BoardError::Inconsistent(format!(
                "{id} registered with a non-empty history"
            )));
        }
        self.pieces.insert(id, piece);
        Ok(id)
    }

    /// Creates a piece and stands it on `at` as its first position.
    pub fn setup_piece(
        &mut self,
        id: PieceId,
        team: Team,
        rank: Rank,
        at: Coordinate,
    ) -> Result<PieceId, BoardError> {
        if let Some(occupant) = self.square_at(at)?.occupant() {
            return Err(BoardError::SquareOccupied { at, occupant });
        }
        self.register(Piece::new(id, team, rank))?;
        self.place(id, at)?;
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.history_mut().push(at);
        }
        Ok(id)
    }

    /// Audits squares against piece histories.
    ///
    /// Every occupied square must hold a known piece whose current position
    /// is that square, and every on-board piece must be found on its square.
    pub fn verify_consistency(&self) -> Result<(), BoardError> {
        for square in &self.squares {
            let Some(id) = square.occupant else { continue };
            let piece = self.pieces.get(&id).ok_or(BoardError::UnknownPiece(id))?;
            if piece.position() != Some(square.coordinate) {
                return Err(BoardError::Inconsistent(format!(
                    "{} holds {id} but its history says {:?}",
                    square.coordinate,
                    piece.position()
                )));
            }
        }

        for piece in self.pieces.values() {
            let Some(at) = piece.position() else { continue };
            if self.occupant_at(at) != Some(piece.id()) {
                return Err(BoardError::Inconsistent(format!(
                    "{} claims {at} but the square holds {:?}",
                    piece.id(),
                    self.occupant_at(at)
                )));
            }
        }

        Ok(())
    }
}
