//! Transaction steps and the hook called after each one is applied.
//!
//! Hooks let tooling and tests observe a running transaction or force it to
//! fail at a chosen point, which exercises the rollback path.

use crate::errors::ErrorKind;

/// The fixed, ordered steps of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionStep {
    DetachActor,
    RetireTarget,
    AttachActor,
    PushHistory,
    SwapRank,
}

pub const TRANSACTION_STEPS: [TransactionStep; 5] = [
    TransactionStep::DetachActor,
    TransactionStep::RetireTarget,
    TransactionStep::AttachActor,
    TransactionStep::PushHistory,
    TransactionStep::SwapRank,
];

pub trait StepHook: Send + Sync {
    /// Called after `step` has been applied. An error aborts the
    /// transaction and rolls back everything applied so far, `step` included.
    fn after_step(&mut self, step: TransactionStep) -> Result<(), ErrorKind>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl StepHook for NoHooks {
    fn after_step(&mut self, _step: TransactionStep) -> Result<(), ErrorKind> {
        Ok(())
    }
}

/// Injects a consistency fault right after `0` is applied.
#[derive(Debug, Clone, Copy)]
pub struct FailAfter(pub TransactionStep);

impl StepHook for FailAfter {
    fn after_step(&mut self, step: TransactionStep) -> Result<(), ErrorKind> {
        if step == self.0 {
            return Err(ErrorKind::consistency(Some(step), "injected fault"));
        }
        Ok(())
    }
}

/// Remembers which steps ran, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordSteps {
    pub seen: Vec<TransactionStep>,
}

impl StepHook for RecordSteps {
    fn after_step(&mut self, step: TransactionStep) -> Result<(), ErrorKind> {
        self.seen.push(step);
        Ok(())
    }
}
