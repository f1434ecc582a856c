//! Atomic application of a validated request.
//!
//! A transaction moves `Pending -> Running -> {Committed, RolledBack}`. While
//! running, it applies its steps in a fixed order and records an
//! [`UndoState`] for each one. If any step or hook fails, the recorded steps
//! are undone newest-first and the board is left exactly as it was.
//!
//! Both terminal states are final. Undoing a committed move is a new
//! transaction, not a rollback.

use chrono::Utc;

use crate::errors::ErrorKind;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::geometry::coordinate::Coordinate;
use crate::ids::{PieceId, TransactionId};
use crate::requests::validation::ValidatedRequest;
use crate::transactions::board_delta::BoardDelta;
use crate::transactions::step_hooks::{StepHook, TransactionStep};
use crate::transactions::undo_state::UndoState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    Pending,
    Running,
    Committed,
    RolledBack,
}

impl TransactionState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TransactionState::Committed | TransactionState::RolledBack)
    }
}

/// Outcome of submitting a request. Exactly one of a delta or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionResult {
    Committed(BoardDelta),
    /// Failed validation; nothing was attempted.
    Rejected(ErrorKind),
    /// Failed mid-transaction; every applied step was undone.
    RolledBack(ErrorKind),
}

impl TransactionResult {
    #[inline]
    pub fn is_committed(&self) -> bool {
        matches!(self, TransactionResult::Committed(_))
    }

    pub fn delta(&self) -> Option<&BoardDelta> {
        match self {
            TransactionResult::Committed(delta) => Some(delta),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorKind> {
        match self {
            TransactionResult::Committed(_) => None,
            TransactionResult::Rejected(e) | TransactionResult::RolledBack(e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub struct Transaction {
    id: TransactionId,
    validated: ValidatedRequest,
    state: TransactionState,
    applied: Vec<UndoState>,
}

impl Transaction {
    pub fn new(id: TransactionId, validated: ValidatedRequest) -> Self {
        Self {
            id,
            validated,
            state: TransactionState::Pending,
            applied: Vec::with_capacity(5),
        }
    }

    #[inline]
    pub fn id(&self) -> TransactionId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Runs the transaction to a terminal state.
    ///
    /// With `verify_invariants` the board is audited before the first step
    /// and again before committing; a failed audit is treated like any other
    /// failed step.
    pub fn run(&mut self, board: &mut Board, hooks: &mut dyn StepHook, verify_invariants: bool) -> TransactionResult {
        if self.state != TransactionState::Pending {
            return TransactionResult::Rejected(ErrorKind::consistency(
                None,
                format!("{} is {:?}, not pending", self.id, self.state),
            ));
        }
        self.state = TransactionState::Running;

        if verify_invariants {
            if let Err(e) = board.verify_consistency() {
                self.state = TransactionState::RolledBack;
                return TransactionResult::RolledBack(ErrorKind::consistency(
                    None,
                    format!("board inconsistent before {}: {e}", self.id),
                ));
            }
        }

        let outcome = self.apply_steps(board, hooks).and_then(|delta| {
            if verify_invariants {
                board
                    .verify_consistency()
                    .map_err(|e| ErrorKind::consistency(None, format!("board inconsistent after steps: {e}")))?;
            }
            Ok(delta)
        });

        match outcome {
            Ok(delta) => {
                self.state = TransactionState::Committed;
                self.applied.clear();
                TransactionResult::Committed(delta)
            }
            Err(error) => {
                let result = match self.rollback(board) {
                    Ok(()) => error,
                    Err(rollback_error) => {
                        ErrorKind::consistency(None, format!("{error}; rollback also failed: {rollback_error}"))
                    }
                };
                self.state = TransactionState::RolledBack;
                TransactionResult::RolledBack(result)
            }
        }
    }

    fn apply_steps(&mut self, board: &mut Board, hooks: &mut dyn StepHook) -> Result<BoardDelta, ErrorKind> {
        let plan = *self.validated.plan();

        if plan.moves() {
            // 1. detach actor
            take_expected(board, plan.origin, plan.actor, TransactionStep::DetachActor)?;
            self.record(
                UndoState::DetachedActor {
                    actor: plan.actor,
                    from: plan.origin,
                },
                hooks,
            )?;

            // 2. retire target
            if let Some(target) = plan.captured {
                piece_mut(board, target, TransactionStep::RetireTarget)?;
                take_expected(board, plan.destination, target, TransactionStep::RetireTarget)?;
                piece_mut(board, target, TransactionStep::RetireTarget)?
                    .history_mut()
                    .set_retired(true);
                self.record(
                    UndoState::RetiredTarget {
                        target,
                        at: plan.destination,
                    },
                    hooks,
                )?;
            }

            // 3. attach actor
            board
                .place(plan.actor, plan.destination)
                .map_err(|e| ErrorKind::consistency(Some(TransactionStep::AttachActor), e.to_string()))?;
            self.record(
                UndoState::AttachedActor {
                    actor: plan.actor,
                    at: plan.destination,
                },
                hooks,
            )?;

            // 4. history
            piece_mut(board, plan.actor, TransactionStep::PushHistory)?
                .history_mut()
                .push(plan.destination);
            self.record(
                UndoState::PushedHistory {
                    actor: plan.actor,
                    at: plan.destination,
                },
                hooks,
            )?;
        }

        // 5. promotion
        let mut promotion = None;
        if let Some(rank) = plan.promotion {
            let previous = piece_mut(board, plan.actor, TransactionStep::SwapRank)?.swap_rank(rank);
            promotion = Some((previous, rank));
            self.record(
                UndoState::SwappedRank {
                    actor: plan.actor,
                    previous,
                },
                hooks,
            )?;
        }

        Ok(BoardDelta {
            transaction: self.id,
            request: self.validated.request().id(),
            actor: plan.actor,
            from: plan.origin,
            to: plan.destination,
            captured: plan.captured,
            promotion,
            committed_at: Utc::now(),
        })
    }

    /// Records an applied step, then lets the hook veto it.
    fn record(&mut self, undo: UndoState, hooks: &mut dyn StepHook) -> Result<(), ErrorKind> {
        self.applied.push(undo);
        hooks.after_step(undo.step())
    }

    /// Undoes every applied step newest-first. Keeps going past failures and
    /// reports the first one.
    fn rollback(&mut self, board: &mut Board) -> Result<(), ErrorKind> {
        let mut first_failure = None;

        while let Some(undo) = self.applied.pop() {
            if let Err(e) = revert(board, undo) {
                first_failure.get_or_insert(e);
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn revert(board: &mut Board, undo: UndoState) -> Result<(), ErrorKind> {
    let step = Some(undo.step());
    match undo {
        UndoState::DetachedActor { actor, from } => board
            .place(actor, from)
            .map_err(|e| ErrorKind::consistency(step, format!("restoring {actor}: {e}"))),
        UndoState::RetiredTarget { target, at } => {
            piece_mut(board, target, TransactionStep::RetireTarget)?
                .history_mut()
                .set_retired(false);
            board
                .place(target, at)
                .map_err(|e| ErrorKind::consistency(step, format!("reinstating {target}: {e}")))
        }
        UndoState::AttachedActor { actor, at } => match board.remove(at) {
            Some(id) if id == actor => Ok(()),
            other => Err(ErrorKind::consistency(
                step,
                format!("expected {actor} on {at}, found {other:?}"),
            )),
        },
        UndoState::PushedHistory { actor, at } => {
            let popped = piece_mut(board, actor, TransactionStep::PushHistory)?
                .history_mut()
                .pop();
            if popped == Some(at) {
                Ok(())
            } else {
                Err(ErrorKind::consistency(
                    step,
                    format!("{actor} history top was {popped:?}, expected {at}"),
                ))
            }
        }
        UndoState::SwappedRank { actor, previous } => {
            piece_mut(board, actor, TransactionStep::SwapRank)?.swap_rank(previous);
            Ok(())
        }
    }
}

/// Removes `expected` from `at`, putting back anything else found there.
fn take_expected(
    board: &mut Board,
    at: Coordinate,
    expected: PieceId,
    step: TransactionStep,
) -> Result<(), ErrorKind> {
    match board.remove(at) {
        Some(id) if id == expected => Ok(()),
        Some(other) => {
            board
                .place(other, at)
                .map_err(|e| ErrorKind::consistency(Some(step), e.to_string()))?;
            Err(ErrorKind::consistency(
                Some(step),
                format!("expected {expected} on {at}, found {other}"),
            ))
        }
        None => Err(ErrorKind::consistency(
            Some(step),
            format!("expected {expected} on {at}, square was vacant"),
        )),
    }
}

fn piece_mut(board: &mut Board, id: PieceId, step: TransactionStep) -> Result<&mut Piece, ErrorKind> {
    board
        .piece_mut(id)
        .ok_or_else(|| ErrorKind::consistency(Some(step), format!("{id} is not registered")))
}
