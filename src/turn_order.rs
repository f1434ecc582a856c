//! Who has the move.

use crate::game_state::chess_types::Team;

pub trait TurnAuthority: Send + Sync {
    /// Team allowed to move now, or `None` if anyone may.
    fn mover_of_record(&self) -> Option<Team>;

    /// Called once per committed transaction.
    fn advance(&mut self);

    /// Back to the first move, for a freshly loaded position.
    fn reset(&mut self);
}

/// Strict alternation starting with `to_move`.
#[derive(Debug, Clone, Copy)]
pub struct AlternatingTurns {
    first: Team,
    to_move: Team,
    plies: u32,
}

impl AlternatingTurns {
    pub fn starting_with(team: Team) -> Self {
        Self {
            first: team,
            to_move: team,
            plies: 0,
        }
    }

    #[inline]
    pub fn plies(&self) -> u32 {
        self.plies
    }
}

impl TurnAuthority for AlternatingTurns {
    fn mover_of_record(&self) -> Option<Team> {
        Some(self.to_move)
    }

    fn advance(&mut self) {
        self.to_move = self.to_move.opposite();
        self.plies = self.plies.saturating_add(1);
    }

    fn reset(&mut self) {
        self.to_move = self.first;
        self.plies = 0;
    }
}

/// No turn enforcement.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreePlay;

impl TurnAuthority for FreePlay {
    fn mover_of_record(&self) -> Option<Team> {
        None
    }

    fn advance(&mut self) {}

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternation_flips_each_ply() {
        let mut turns = AlternatingTurns::starting_with(Team::Dark);
        assert_eq!(turns.mover_of_record(), Some(Team::Dark));
        turns.advance();
        assert_eq!(turns.mover_of_record(), Some(Team::Light));
        turns.advance();
        assert_eq!(turns.mover_of_record(), Some(Team::Dark));
        assert_eq!(turns.plies(), 2);
    }

    #[test]
    fn reset_returns_to_the_first_mover() {
        let mut turns = AlternatingTurns::starting_with(Team::Light);
        turns.advance();
        turns.advance();
        turns.advance();
        turns.reset();
        assert_eq!(turns.mover_of_record(), Some(Team::Light));
        assert_eq!(turns.plies(), 0);
    }

    #[test]
    fn free_play_never_restricts() {
        let mut turns = FreePlay;
        turns.advance();
        assert_eq!(turns.mover_of_record(), None);
    }
}
