use crate::game_state::chess_types::Rank;
use crate::geometry::coordinate::Coordinate;
use crate::ids::PieceId;
use crate::transactions::step_hooks::TransactionStep;

/// Single undo record for a step a transaction has applied.
///
/// Rollback replays these newest-first, each one restoring exactly what its
/// step changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoState {
    DetachedActor { actor: PieceId, from: Coordinate },
    RetiredTarget { target: PieceId, at: Coordinate },
    AttachedActor { actor: PieceId, at: Coordinate },
    PushedHistory { actor: PieceId, at: Coordinate },
    SwappedRank { actor: PieceId, previous: Rank },
}

impl UndoState {
    pub fn step(&self) -> TransactionStep {
        match self {
            UndoState::DetachedActor { .. } => TransactionStep::DetachActor,
            UndoState::RetiredTarget { .. } => TransactionStep::RetireTarget,
            UndoState::AttachedActor { .. } => TransactionStep::AttachActor,
            UndoState::PushedHistory { .. } => TransactionStep::PushHistory,
            UndoState::SwappedRank { .. } => TransactionStep::SwapRank,
        }
    }
}
