//! Immutable move requests.
//!
//! A request names an actor and what it wants to do: step onto a vacant
//! square, attack an enemy, or promote. Requests are compared by id only.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::ErrorKind;
use crate::game_state::chess_types::Rank;
use crate::geometry::coordinate::Coordinate;
use crate::ids::{PieceId, RequestId};

/// Who or where an attack is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackTarget {
    Square(Coordinate),
    Piece(PieceId),
}

impl From<Coordinate> for AttackTarget {
    fn from(value: Coordinate) -> Self {
        AttackTarget::Square(value)
    }
}

impl From<PieceId> for AttackTarget {
    fn from(value: PieceId) -> Self {
        AttackTarget::Piece(value)
    }
}

impl fmt::Display for AttackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackTarget::Square(at) => write!(f, "{at}"),
            AttackTarget::Piece(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Move onto a vacant square.
    Occupy { to: Coordinate },
    /// Move onto an enemy's square, capturing it.
    Attack { target: AttackTarget },
    /// Swap rank, either in place (`to` is the actor's square) or on arrival.
    Promote { to: Coordinate, rank: Rank },
}

#[derive(Debug, Clone, Copy)]
pub struct MoveRequest {
    id: RequestId,
    actor: PieceId,
    kind: RequestKind,
}

impl MoveRequest {
    pub fn occupy(id: RequestId, actor: PieceId, to: Coordinate) -> Self {
        Self {
            id,
            actor,
            kind: RequestKind::Occupy { to },
        }
    }

    pub fn attack(id: RequestId, actor: PieceId, target: impl Into<AttackTarget>) -> Self {
        Self {
            id,
            actor,
            kind: RequestKind::Attack {
                target: target.into(),
            },
        }
    }

    /// Fails at build time if `rank` is not something a piece may become.
    pub fn promote(id: RequestId, actor: PieceId, to: Coordinate, rank: Rank) -> Result<Self, ErrorKind> {
        if !rank.is_promotion_target() {
            return Err(ErrorKind::InvalidPromotion {
                rank,
                reason: "not a promotion target",
            });
        }
        Ok(Self {
            id,
            actor,
            kind: RequestKind::Promote { to, rank },
        })
    }

    #[inline]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[inline]
    pub fn actor(&self) -> PieceId {
        self.actor
    }

    #[inline]
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

impl PartialEq for MoveRequest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MoveRequest {}

impl Hash for MoveRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RequestKind::Occupy { to } => write!(f, "{} {} occupies {to}", self.id, self.actor),
            RequestKind::Attack { target } => write!(f, "{} {} attacks {target}", self.id, self.actor),
            RequestKind::Promote { to, rank } => {
                write!(f, "{} {} promotes to {rank} at {to}", self.id, self.actor)
            }
        }
    }
}
