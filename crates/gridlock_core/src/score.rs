//! Score tallying across games.

use crate::session::MoveOutcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counters across games.
///
/// Counters only ever increase. Undo and reset never decrement them;
/// the tally is cleared only by restarting the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a win for the given player.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, winner: Player) {
        match winner {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, "Win recorded");
    }

    /// Records a draw.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.draws += 1;
        debug!(draws = self.draws, "Draw recorded");
    }

    /// Records a terminal move outcome; non-terminal outcomes are ignored.
    pub fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Won { winner, .. } => self.record_win(*winner),
            MoveOutcome::Draw => self.record_draw(),
            MoveOutcome::Moved => {}
        }
    }
}
