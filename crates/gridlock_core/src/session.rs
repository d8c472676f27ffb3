//! Game session: the move engine, history stack, and reset.

use crate::action::{Move, MoveError};
use crate::position::{Line, Position};
use crate::rules;
use crate::types::{Board, Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of applying a single move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues; the turn has flipped to the other player.
    Moved,
    /// The move completed one or more lines and won the game.
    Won {
        /// The winning player.
        winner: Player,
        /// Every line completed by the winning move.
        lines: Vec<Line>,
    },
    /// The board filled with no winner.
    Draw,
}

/// Status of a session, derived for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Game is accepting moves.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended in a draw.
    Drawn,
}

/// A single game of tic-tac-toe.
///
/// Holds the board, whose turn it is, whether the game is still accepting
/// moves, and the ordered move history that enables single-step undo.
/// Win/draw tallies live outside the session in
/// [`ScoreBoard`](crate::ScoreBoard), so undo and reset never touch them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    active: bool,
    history: Vec<Move>,
    winning_lines: Vec<Line>,
}

impl GameSession {
    /// Creates a new session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            active: true,
            history: Vec::new(),
            winning_lines: Vec::new(),
        }
    }

    /// Derived status of the session.
    pub fn status(&self) -> SessionStatus {
        if self.active {
            SessionStatus::InProgress
        } else if let Some(mov) = self.history.last()
            && !self.winning_lines.is_empty()
        {
            SessionStatus::Won(mov.player)
        } else {
            SessionStatus::Drawn
        }
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Applies a move for the current player at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the session is no longer active
    /// and [`MoveError::CellOccupied`] if the cell is taken. Callers that
    /// treat invalid moves as silent no-ops simply drop the error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if !self.active {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Cell::Occupied(player));
        self.history.push(Move::new(player, pos));

        let lines = rules::completed_lines(&self.board, player);
        let outcome = if !lines.is_empty() {
            debug!(winner = %player, lines = lines.len(), "Game won");
            self.active = false;
            self.winning_lines = lines.clone();
            MoveOutcome::Won {
                winner: player,
                lines,
            }
        } else if rules::is_draw(&self.board) {
            debug!("Board full, game drawn");
            self.active = false;
            MoveOutcome::Draw
        } else {
            self.to_move = player.opponent();
            MoveOutcome::Moved
        };

        self.check_invariants();
        Ok(outcome)
    }

    /// Undoes the most recent move.
    ///
    /// Pops the move, clears its cell, hands the turn back to the player
    /// who made it, and reactivates the session if it had ended. Returns
    /// the undone move, or `None` when the history is empty.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mov = self.history.pop()?;
        debug!(%mov, "Undoing move");
        self.board.set(mov.position, Cell::Empty);
        self.to_move = mov.player;
        self.active = true;
        self.winning_lines.clear();
        self.check_invariants();
        Some(mov)
    }

    /// Resets the session to a fresh game: empty board, empty history,
    /// X to move, active.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting session");
        *self = Self::new();
    }

    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};
            debug_assert!(
                SessionInvariants::check_all(self).is_ok(),
                "session invariant violated"
            );
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_apply_flips_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.apply(Position::Center).unwrap(),
            MoveOutcome::Moved
        );
        assert_eq!(*session.to_move(), Player::O);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut session = GameSession::new();
        session.apply(Position::Center).unwrap();
        assert_eq!(
            session.apply(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_inactive_session_rejects_moves() {
        let mut session = GameSession::new();
        // X wins the top row.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            session.apply(pos).unwrap();
        }
        assert!(!session.active());
        assert_eq!(session.apply(Position::BottomLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_win_records_lines() {
        let mut session = GameSession::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            session.apply(pos).unwrap();
        }
        let outcome = session.apply(Position::TopRight).unwrap();
        match outcome {
            MoveOutcome::Won { winner, lines } => {
                assert_eq!(winner, Player::X);
                assert_eq!(lines, session.winning_lines().clone());
            }
            other => panic!("Expected win, got {:?}", other),
        }
        assert_eq!(session.status(), SessionStatus::Won(Player::X));
    }

    #[test]
    fn test_undo_restores_prior_state() {
        let mut session = GameSession::new();
        session.apply(Position::Center).unwrap();
        let before = session.clone();
        session.apply(Position::TopLeft).unwrap();

        let undone = session.undo().expect("History not empty");
        assert_eq!(undone, Move::new(Player::O, Position::TopLeft));
        assert_eq!(session, before);
    }

    #[test]
    fn test_undo_reactivates_won_game() {
        let mut session = GameSession::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            session.apply(pos).unwrap();
        }
        assert!(!session.active());

        session.undo().unwrap();
        assert!(*session.active());
        assert_eq!(*session.to_move(), Player::X);
        assert!(session.winning_lines().is_empty());
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut session = GameSession::new();
        assert_eq!(session.undo(), None);
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_reset() {
        let mut session = GameSession::new();
        session.apply(Position::Center).unwrap();
        session.apply(Position::TopLeft).unwrap();
        session.reset();
        assert_eq!(session, GameSession::new());
    }
}
