//! Errors used throughout the arbiter.
//!
//! There are two error types:
//!
//! - [`ErrorKind`] is the rule-level taxonomy every rejected or rolled-back
//!   request reports. Each variant names a specific reason so a caller can
//!   explain *why* a move is illegal, not just that it is.
//! - [`BoardError`] is what the passive board store reports when a mutation
//!   would break its own invariants (bad index, double occupancy, unknown
//!   piece). The transaction layer converts these into `ErrorKind`.
//!
//! `ErrorKind::TransactionConsistency` is the odd one out: it means board and
//! piece bookkeeping disagreed mid-transaction, which is an engine bug rather
//! than an illegal move. Callers should surface it separately.

use thiserror::Error;

use crate::game_state::chess_types::{Rank, Team};
use crate::geometry::coordinate::Coordinate;
use crate::ids::PieceId;
use crate::requests::move_request::AttackTarget;
use crate::transactions::step_hooks::TransactionStep;

/// Rule-level reason a request was rejected or rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Destination or target lies outside the board.
    #[error("{at} is outside the board")]
    OutOfBounds { at: Coordinate },

    /// Destination holds a piece of the mover's own team.
    #[error("{at} is occupied by a friendly piece")]
    OccupiedByFriend { at: Coordinate },

    /// An occupy request targeted a square holding an enemy. Captures must
    /// be submitted as attacks.
    #[error("{at} is occupied by an enemy piece; submit an attack instead")]
    OccupiedByEnemy { at: Coordinate },

    /// An attack request named a square or piece with no enemy to capture.
    #[error("no enemy piece to attack at {target}")]
    NoAttackTarget { target: AttackTarget },

    /// The actor cannot get from `from` to `to` this turn.
    #[error("{to} is not reachable from {from}")]
    UnreachableDestination { from: Coordinate, to: Coordinate },

    /// The actor is unknown or is not on the board.
    #[error("{actor} is not on the board")]
    NullActor { actor: PieceId },

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Team, actual: Team },

    #[error("invalid promotion of {rank}: {reason}")]
    InvalidPromotion { rank: Rank, reason: &'static str },

    /// Kings are never captured directly.
    #[error("the king at {at} cannot be attacked directly")]
    AttackOnKing { at: Coordinate },

    /// Board and piece state diverged mid-transaction.
    #[error("engine bug: {0}")]
    TransactionConsistency(ConsistencyFault),
}

impl ErrorKind {
    /// True for the bug-indicating class that must be reported loudly.
    #[inline]
    pub fn is_engine_bug(&self) -> bool {
        matches!(self, ErrorKind::TransactionConsistency(_))
    }

    pub fn consistency(step: Option<TransactionStep>, detail: impl Into<String>) -> Self {
        ErrorKind::TransactionConsistency(ConsistencyFault {
            step,
            detail: detail.into(),
        })
    }
}

/// Details of a board/piece invariant breach.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}{}", during(.step))]
pub struct ConsistencyFault {
    pub step: Option<TransactionStep>,
    pub detail: String,
}

fn during(step: &Option<TransactionStep>) -> String {
    step.map(|step| format!(" (during {step:?})")).unwrap_or_default()
}

/// Failures of the passive board store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{0} is outside the board")]
    OutOfBounds(Coordinate),

    #[error("{at} is already occupied by {occupant}")]
    SquareOccupied { at: Coordinate, occupant: PieceId },

    #[error("no such piece: {0}")]
    UnknownPiece(PieceId),

    #[error("{0} is already registered")]
    DuplicatePiece(PieceId),

    #[error("unsupported board size {0}")]
    InvalidSize(u8),

    #[error("board state is inconsistent: {0}")]
    Inconsistent(String),
}

impl From<BoardError> for ErrorKind {
    fn from(value: BoardError) -> Self {
        match value {
            BoardError::OutOfBounds(at) => ErrorKind::OutOfBounds { at },
            other => ErrorKind::consistency(None, other.to_string()),
        }
    }
}
