//! Obstruction-aware traversal along a single direction.
//!
//! This is the only code that decides what blocks a piece. A walk steps away
//! from its origin until it runs off the board, reaches its step limit, or
//! meets an occupied square:
//!
//! - an enemy square is yielded as the final element (it can be captured),
//! - a friendly square ends the walk without being yielded.
//!
//! Sliding ranks walk without a limit; stepping ranks take a single step.
//! Pawns additionally restrict what a step may land on through
//! [`CapturePolicy`].

use std::iter::FusedIterator;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Team, Traversal};
use crate::geometry::coordinate::Coordinate;
use crate::geometry::delta::Delta;

/// What a step is allowed to land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePolicy {
    /// Vacant squares and a final enemy square.
    MayCapture,
    /// Vacant squares only; any occupant blocks (pawn pushes).
    QuietOnly,
    /// Enemy squares only (pawn diagonal captures).
    CaptureOnly,
}

/// Lazy, finite walk from `origin` along `delta`.
///
/// Cloning a walker or calling [`restart`](Self::restart) replays the walk
/// from the origin.
#[derive(Debug, Clone)]
pub struct PathWalker<'a> {
    board: &'a Board,
    team: Team,
    origin: Coordinate,
    delta: Delta,
    max_steps: u8,
    capture: CapturePolicy,
    cursor: Coordinate,
    taken: u8,
    finished: bool,
}

impl<'a> PathWalker<'a> {
    pub fn new(board: &'a Board, team: Team, origin: Coordinate, delta: Delta, traversal: Traversal) -> Self {
        let max_steps = match traversal {
            Traversal::Sliding => board.size(),
            Traversal::Stepping => 1,
        };

        Self {
            board,
            team,
            origin,
            delta,
            max_steps,
            capture: CapturePolicy::MayCapture,
            cursor: origin,
            taken: 0,
            // A zero delta would never leave the origin.
            finished: delta.is_zero(),
        }
    }

    pub fn sliding(board: &'a Board, team: Team, origin: Coordinate, delta: Delta) -> Self {
        Self::new(board, team, origin, delta, Traversal::Sliding)
    }

    pub fn stepping(board: &'a Board, team: Team, origin: Coordinate, delta: Delta) -> Self {
        Self::new(board, team, origin, delta, Traversal::Stepping)
    }

    pub fn with_max_steps(mut self, max_steps: u8) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_capture_policy(mut self, capture: CapturePolicy) -> Self {
        self.capture = capture;
        self
    }

    pub fn restart(&mut self) {
        self.cursor = self.origin;
        self.taken = 0;
        self.finished = self.delta.is_zero();
    }

    #[inline]
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    #[inline]
    pub fn delta(&self) -> Delta {
        self.delta
    }

    fn stop(&mut self) -> Option<Coordinate> {
        self.finished = true;
        None
    }
}

impl Iterator for PathWalker<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.finished || self.taken >= self.max_steps {
            return self.stop();
        }

        let next = self.cursor.shift(self.delta);
        if !self.board.contains(next) {
            return self.stop();
        }

        match self.board.occupant_piece_at(next).map(|p| p.team()) {
            None => {
                if self.capture == CapturePolicy::CaptureOnly {
                    return self.stop();
                }
                self.cursor = next;
                self.taken += 1;
                Some(next)
            }
            Some(team) if team == self.team => self.stop(),
            Some(_) => {
                self.finished = true;
                match self.capture {
                    CapturePolicy::QuietOnly => None,
                    CapturePolicy::MayCapture | CapturePolicy::CaptureOnly => Some(next),
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.max_steps.saturating_sub(self.taken) as usize))
        }
    }
}

impl FusedIterator for PathWalker<'_> {}
