//! First-class invariants for the game session.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are checked with `debug_assert!` after every mutating session
//! operation and are testable independently.

use crate::session::GameSession;
use crate::types::{Cell, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the history matches the board.
///
/// Every recorded move's cell holds that player's mark, and the number of
/// occupied cells equals the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.board().occupied_count() != session.history().len() {
            return false;
        }

        session
            .history()
            .iter()
            .all(|mov| session.board().get(mov.position) == Cell::Occupied(mov.player))
    }

    fn description() -> &'static str {
        "Move history matches the occupied cells on the board"
    }
}

/// Invariant: players alternate turns.
///
/// Move history must show X, O, X, O, ... with X first, and while the game
/// is active the player to move follows from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if *session.active() {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            return *session.to_move() == expected;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (HistoryConsistentInvariant, AlternatingTurnInvariant);
