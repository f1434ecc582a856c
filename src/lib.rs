//! Crate root module declarations for the Plum Arbiter move-legality engine.
//!
//! This file exposes the board model, geometry helpers, reachability rules,
//! obstruction-aware destination search, request validation, the
//! transactional executor, and the caller-facing [`arbiter::Arbiter`] so
//! game loops, tools, and tests can import stable module paths.

pub mod arbiter;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod ids;
pub mod turn_order;

pub mod geometry {
    pub mod coordinate;
    pub mod delta;
    pub mod lines;
}

pub mod game_state {
    pub mod board;
    pub mod board_view;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod reachability;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_moves_pawn;
    pub mod move_search;
    pub mod path_walker;
}

pub mod requests {
    pub mod move_request;
    pub mod validation;
}

pub mod transactions {
    pub mod board_delta;
    pub mod step_hooks;
    pub mod transaction;
    pub mod undo_state;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement_parser;
    pub mod render_board;
}
