//! Caller-facing entry point.
//!
//! An [`Arbiter`] owns one board and funnels every request through
//! validation and a single transaction at a time. It is the only thing UIs,
//! game loops and engines need to talk to:
//!
//! - [`Arbiter::search_destinations`] (read-only)
//! - [`Arbiter::submit_request`] (validate, execute, commit or roll back)
//! - [`Arbiter::board_snapshot`] (read-only occupancy view)
//!
//! Mutation takes `&mut self`, so a plain `Arbiter` is single-owner. Wrap it
//! in a [`SharedArbiter`] to let many readers search concurrently while at
//! most one writer runs a transaction.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::ArbiterConfig;
use crate::diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticSink, NullSink, StderrSink, Tee};
use crate::errors::{BoardError, ErrorKind};
use crate::game_state::board::Board;
use crate::game_state::board_view::BoardView;
use crate::game_state::chess_types::{Rank, Team};
use crate::geometry::coordinate::Coordinate;
use crate::ids::{IdGenerator, PieceId, RequestId, SequentialIds, TransactionId};
use crate::move_generation::move_search::{destinations, SearchResult};
use crate::requests::move_request::{AttackTarget, MoveRequest};
use crate::requests::validation::{validate, ValidationContext};
use crate::transactions::board_delta::BoardDelta;
use crate::transactions::step_hooks::{NoHooks, StepHook};
use crate::transactions::transaction::{Transaction, TransactionResult};
use crate::turn_order::{AlternatingTurns, FreePlay, TurnAuthority};
use crate::utils::placement_parser::parse_placement;

pub struct Arbiter {
    config: ArbiterConfig,
    board: Board,
    ids: Box<dyn IdGenerator>,
    turns: Box<dyn TurnAuthority>,
    sink: Box<dyn DiagnosticSink>,
    hooks: Box<dyn StepHook>,
    committed: Vec<BoardDelta>,
}

impl Arbiter {
    /// Empty board of the configured size with default collaborators.
    pub fn new(config: ArbiterConfig) -> Result<Self, BoardError> {
        Self::with_id_service(config, SequentialIds::default())
    }

    /// Empty board whose piece, request and transaction ids all come from
    /// `ids`. The generator is fixed for the arbiter's lifetime.
    pub fn with_id_service(config: ArbiterConfig, ids: impl IdGenerator + 'static) -> Result<Self, BoardError> {
        let turns: Box<dyn TurnAuthority> = if config.enforce_turns {
            Box::new(AlternatingTurns::starting_with(config.first_mover))
        } else {
            Box::new(FreePlay)
        };

        let mut arbiter = Self {
            config,
            board: Board::new(config.board_size)?,
            ids: Box::new(ids),
            turns,
            sink: Box::new(NullSink),
            hooks: Box::new(NoHooks),
            committed: Vec::new(),
        };
        arbiter.install_sink(NullSink);
        Ok(arbiter)
    }

    /// Arbiter whose board is set up from a placement string.
    pub fn from_placement(config: ArbiterConfig, placement: &str) -> Result<Self, String> {
        Self::from_placement_with_ids(config, placement, SequentialIds::default())
    }

    pub fn from_placement_with_ids(
        config: ArbiterConfig,
        placement: &str,
        ids: impl IdGenerator + 'static,
    ) -> Result<Self, String> {
        let mut arbiter = Self::with_id_service(config, ids).map_err(|e| e.to_string())?;
        arbiter.load_placement(placement)?;
        Ok(arbiter)
    }

    pub fn with_turns(mut self, turns: impl TurnAuthority + 'static) -> Self {
        self.turns = Box::new(turns);
        self
    }

    /// Routes diagnostics to `sink`, and to stderr as well when
    /// `echo_diagnostics` is set.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.install_sink(sink);
        self
    }

    pub fn with_hooks(mut self, hooks: impl StepHook + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    fn install_sink(&mut self, sink: impl DiagnosticSink + 'static) {
        self.sink = if self.config.echo_diagnostics {
            Box::new(Tee(StderrSink, sink))
        } else {
            Box::new(sink)
        };
    }

    /// Replaces the board with a freshly parsed one and starts the game over:
    /// the audit trail is cleared and the turn order goes back to its first
    /// mover. Piece ids keep counting from the same id service.
    pub fn load_placement(&mut self, placement: &str) -> Result<(), String> {
        self.board = parse_placement(placement, self.config.board_size, self.ids.as_mut())?;
        self.committed.clear();
        self.turns.reset();
        Ok(())
    }

    /// Creates a piece on `at` with an id from the id service.
    pub fn spawn_piece(&mut self, team: Team, rank: Rank, at: Coordinate) -> Result<PieceId, BoardError> {
        let id = PieceId::next(self.ids.as_mut());
        self.board.setup_piece(id, team, rank, at)
    }

    #[inline]
    pub fn config(&self) -> &ArbiterConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mover_of_record(&self) -> Option<Team> {
        self.turns.mover_of_record()
    }

    /// Every committed change, oldest first.
    pub fn committed(&self) -> &[BoardDelta] {
        &self.committed
    }

    pub fn search_destinations(&self, piece: PieceId) -> SearchResult<BTreeSet<Coordinate>> {
        destinations(&self.board, piece)
    }

    pub fn board_snapshot(&self) -> BoardView {
        BoardView::capture(&self.board)
    }

    pub fn next_request_id(&mut self) -> RequestId {
        RequestId::next(self.ids.as_mut())
    }

    pub fn occupy(&mut self, actor: PieceId, to: Coordinate) -> MoveRequest {
        MoveRequest::occupy(self.next_request_id(), actor, to)
    }

    pub fn attack(&mut self, actor: PieceId, target: impl Into<AttackTarget>) -> MoveRequest {
        MoveRequest::attack(self.next_request_id(), actor, target)
    }

    pub fn promote(&mut self, actor: PieceId, to: Coordinate, rank: Rank) -> Result<MoveRequest, ErrorKind> {
        MoveRequest::promote(self.next_request_id(), actor, to, rank)
    }

    /// Validates and, if accepted, executes `request` as one transaction.
    pub fn submit_request(&mut self, request: &MoveRequest) -> TransactionResult {
        let context = ValidationContext {
            mover_of_record: self.turns.mover_of_record(),
        };

        let validated = match validate(&self.board, request, &context) {
            Ok(validated) => validated,
            Err(error) => {
                let level = if error.is_engine_bug() {
                    DiagnosticLevel::Error
                } else {
                    DiagnosticLevel::Warn
                };
                self.emit(level, format!("rejected {request}: {error}"));
                return TransactionResult::Rejected(error);
            }
        };

        let mut transaction = Transaction::new(TransactionId::next(self.ids.as_mut()), validated);
        let result = transaction.run(&mut self.board, self.hooks.as_mut(), self.config.verify_invariants);

        match &result {
            TransactionResult::Committed(delta) => {
                self.turns.advance();
                self.committed.push(delta.clone());
                self.emit(
                    DiagnosticLevel::Info,
                    format!("{} committed {request}", transaction.id()),
                );
            }
            TransactionResult::RolledBack(error) | TransactionResult::Rejected(error) => {
                self.emit(
                    DiagnosticLevel::Error,
                    format!("{} rolled back {request}: {error}", transaction.id()),
                );
            }
        }

        result
    }

    fn emit(&self, level: DiagnosticLevel, message: String) {
        self.sink.emit(Diagnostic::now(level, message));
    }
}

/// Many readers, one writer.
#[derive(Clone)]
pub struct SharedArbiter {
    inner: Arc<RwLock<Arbiter>>,
}

impl SharedArbiter {
    pub fn new(arbiter: Arbiter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(arbiter)),
        }
    }

    pub fn search_destinations(&self, piece: PieceId) -> SearchResult<BTreeSet<Coordinate>> {
        self.read(|arbiter| arbiter.search_destinations(piece))
    }

    pub fn board_snapshot(&self) -> BoardView {
        self.read(Arbiter::board_snapshot)
    }

    /// Holds the write lock for the whole transaction.
    pub fn submit_request(&self, request: &MoveRequest) -> TransactionResult {
        self.write(|arbiter| arbiter.submit_request(request))
    }

    pub fn read<R>(&self, f: impl FnOnce(&Arbiter) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Arbiter) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
