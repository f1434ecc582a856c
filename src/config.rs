//! Arbiter options.
//!
//! Options are set by name with string values, the same way an engine
//! front-end forwards `setoption` commands, and can be seeded from
//! `PLUM_ARBITER_*` environment variables.

use crate::game_state::chess_rules::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
use crate::game_state::chess_types::Team;

pub const ENV_PREFIX: &str = "PLUM_ARBITER_";

pub const OPTION_NAMES: [&str; 5] = [
    "BoardSize",
    "EnforceTurns",
    "FirstMover",
    "VerifyInvariants",
    "EchoDiagnostics",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbiterConfig {
    pub board_size: u8,
    /// Reject requests from the team that does not have the move.
    pub enforce_turns: bool,
    pub first_mover: Team,
    /// Audit board/piece consistency around every transaction.
    pub verify_invariants: bool,
    /// Also print diagnostics to stderr.
    pub echo_diagnostics: bool,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            enforce_turns: true,
            first_mover: Team::Light,
            verify_invariants: true,
            echo_diagnostics: false,
        }
    }
}

impl ArbiterConfig {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        match name.trim().to_ascii_lowercase().replace(['_', ' '], "").as_str() {
            "boardsize" => {
                let size = value
                    .parse::<u8>()
                    .map_err(|_| format!("Invalid board size: {value}"))?;
                if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
                    return Err(format!(
                        "Board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
                    ));
                }
                self.board_size = size;
            }
            "enforceturns" => self.enforce_turns = parse_bool(value)?,
            "firstmover" => self.first_mover = parse_team(value)?,
            "verifyinvariants" => self.verify_invariants = parse_bool(value)?,
            "echodiagnostics" => self.echo_diagnostics = parse_bool(value)?,
            _ => return Err(format!("Unknown option: {name}")),
        }
        Ok(())
    }

    /// Defaults overridden by any `PLUM_ARBITER_<OPTION>` variables that are
    /// set (e.g. `PLUM_ARBITER_BOARD_SIZE=10`).
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();
        for name in OPTION_NAMES {
            let key = format!("{ENV_PREFIX}{}", screaming_snake(name));
            if let Some(value) = lookup(&key) {
                config.set_option(name, &value)?;
            }
        }
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("Invalid boolean: {value}")),
    }
}

fn parse_team(value: &str) -> Result<Team, String> {
    match value.to_ascii_lowercase().as_str() {
        "light" | "white" | "w" => Ok(Team::Light),
        "dark" | "black" | "b" => Ok(Team::Dark),
        _ => Err(format!("Invalid team: {value}")),
    }
}

fn screaming_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}
