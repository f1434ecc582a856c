//! Commit payloads.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::Rank;
use crate::geometry::coordinate::Coordinate;
use crate::ids::{PieceId, RequestId, TransactionId};

/// What a committed transaction changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDelta {
    pub transaction: TransactionId,
    pub request: RequestId,
    pub actor: PieceId,
    pub from: Coordinate,
    pub to: Coordinate,
    /// Retired enemy, if the move captured.
    pub captured: Option<PieceId>,
    /// `(before, after)` if the actor was promoted.
    pub promotion: Option<(Rank, Rank)>,
    pub committed_at: DateTime<Utc>,
}

impl BoardDelta {
    #[inline]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
