//! Team and rank vocabulary shared by every layer of the arbiter.
//!
//! A rank is plain data: how it traverses the board, which directions it
//! walks, and what it is worth. Movement rules dispatch on it with `match`
//! instead of per-piece types, so adding a rank means adding a variant and
//! filling in its rows below.

use std::fmt;

use crate::geometry::delta::{Delta, DIAGONAL_STEPS, KING_STEPS, KNIGHT_JUMPS, ORTHOGONAL_STEPS};

/// Side affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    Light,
    Dark,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::Light => 0,
            Team::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::Light => Team::Dark,
            Team::Dark => Team::Light,
        }
    }

    /// Row direction pawns of this team advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::Light => 1,
            Team::Dark => -1,
        }
    }

    /// Row pawns start on (and may double-step from).
    #[inline]
    pub const fn pawn_home_row(self, board_size: u8) -> i8 {
        match self {
            Team::Light => 1,
            Team::Dark => board_size as i8 - 2,
        }
    }

    /// Row a pawn must reach to promote.
    #[inline]
    pub const fn far_row(self, board_size: u8) -> i8 {
        match self {
            Team::Light => board_size as i8 - 1,
            Team::Dark => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Light => write!(f, "light"),
            Team::Dark => write!(f, "dark"),
        }
    }
}

/// How a rank covers ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Repeats its step until an edge or obstruction.
    Sliding,
    /// Takes exactly one step per move.
    Stepping,
}

/// Movement class of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 6] = [
    Rank::Pawn,
    Rank::Knight,
    Rank::Bishop,
    Rank::Rook,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    #[inline]
    pub const fn traversal(self) -> Traversal {
        match self {
            Rank::Bishop | Rank::Rook | Rank::Queen => Traversal::Sliding,
            Rank::Pawn | Rank::Knight | Rank::King => Traversal::Stepping,
        }
    }

    /// Team-independent walking directions. Pawns depend on their team and
    /// are handled by the pawn generator, so they have none here.
    pub fn directions(self) -> &'static [Delta] {
        match self {
            Rank::Pawn => &[],
            Rank::Knight => &KNIGHT_JUMPS,
            Rank::Bishop => &DIAGONAL_STEPS,
            Rank::Rook => &ORTHOGONAL_STEPS,
            Rank::Queen | Rank::King => &KING_STEPS,
        }
    }

    /// Material value in centipawns. Used for comparisons, never for legality.
    #[inline]
    pub const fn capture_value(self) -> u32 {
        match self {
            Rank::Pawn => 100,
            Rank::Knight => 320,
            Rank::Bishop => 330,
            Rank::Rook => 500,
            Rank::Queen => 900,
            Rank::King => 20_000,
        }
    }

    #[inline]
    pub const fn is_promotion_eligible(self) -> bool {
        matches!(self, Rank::Pawn)
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(self, Rank::Knight | Rank::Bishop | Rank::Rook | Rank::Queen)
    }

    /// Lowercase letter used by placement strings.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Rank::Pawn => 'p',
            Rank::Knight => 'n',
            Rank::Bishop => 'b',
            Rank::Rook => 'r',
            Rank::Queen => 'q',
            Rank::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Rank> {
        ALL_RANKS
            .into_iter()
            .find(|rank| rank.letter() == letter.to_ascii_lowercase())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Pawn => "pawn",
            Rank::Knight => "knight",
            Rank::Bishop => "bishop",
            Rank::Rook => "rook",
            Rank::Queen => "queen",
            Rank::King => "king",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliding_ranks_are_the_line_movers() {
        let sliding: Vec<Rank> = ALL_RANKS
            .into_iter()
            .filter(|r| r.traversal() == Traversal::Sliding)
            .collect();
        assert_eq!(sliding, vec![Rank::Bishop, Rank::Rook, Rank::Queen]);
    }

    #[test]
    fn team_rows_on_standard_board() {
        assert_eq!(Team::Light.pawn_home_row(8), 1);
        assert_eq!(Team::Dark.pawn_home_row(8), 6);
        assert_eq!(Team::Light.far_row(8), 7);
        assert_eq!(Team::Dark.far_row(8), 0);
        assert_eq!(Team::Dark.opposite(), Team::Light);
    }

    #[test]
    fn promotion_targets_exclude_king_and_pawn() {
        assert!(!Rank::King.is_promotion_target());
        assert!(!Rank::Pawn.is_promotion_target());
        assert!(Rank::Queen.is_promotion_target());
        assert!(Rank::Pawn.is_promotion_eligible());
        assert!(!Rank::Queen.is_promotion_eligible());
    }

    #[test]
    fn letters_round_trip() {
        for rank in ALL_RANKS {
            assert_eq!(Rank::from_letter(rank.letter()), Some(rank));
            assert_eq!(Rank::from_letter(rank.letter().to_ascii_uppercase()), Some(rank));
        }
        assert_eq!(Rank::from_letter('x'), None);
    }
}
