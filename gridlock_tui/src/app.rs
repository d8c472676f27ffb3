//! Application state and event handlers.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use gridlock_core::{cpu, GameSession, MoveOutcome, Player, Position, ScoreBoard};
use tracing::{debug, info, instrument};

use crate::input::move_cursor;
use crate::mode::Mode;
use crate::theme::Theme;

/// What the event loop should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSignal {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
    /// Schedule a CPU move after the visual delay.
    ///
    /// Carries the session epoch at scheduling time so a stale timer can
    /// be recognized when it fires.
    ScheduleCpu {
        /// Epoch the timer belongs to.
        epoch: u64,
    },
}

/// Deferred events delivered back into the app by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A scheduled CPU move timer fired.
    CpuDue {
        /// Epoch the timer was scheduled under.
        epoch: u64,
    },
}

/// Main application state.
///
/// The epoch identifies the current game session: undo, reset, and mode
/// switches bump it, which invalidates any CPU timer still in flight.
/// Without the guard, a reset during the delay window would be clobbered
/// by the pending CPU move firing against the fresh board.
#[derive(Debug, Getters)]
pub struct App {
    session: GameSession,
    scores: ScoreBoard,
    mode: Mode,
    theme: Theme,
    cursor: Position,
    status_message: String,
    epoch: u64,
}

impl App {
    /// Creates a new application with the given mode and theme.
    #[instrument]
    pub fn new(mode: Mode, theme: Theme) -> Self {
        Self {
            session: GameSession::new(),
            scores: ScoreBoard::new(),
            mode,
            theme,
            cursor: Position::Center,
            status_message: turn_message(Player::X),
            epoch: 0,
        }
    }

    /// Whether the undo hint should be shown: history non-empty and the
    /// game still accepting moves.
    pub fn undo_available(&self) -> bool {
        !self.session.history().is_empty() && *self.session.active()
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppSignal {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Quit requested");
                AppSignal::Quit
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                AppSignal::Continue
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match Position::from_index(index) {
                    Some(pos) => self.play(pos),
                    None => AppSignal::Continue,
                }
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.undo();
                AppSignal::Continue
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
                AppSignal::Continue
            }
            // Digits are taken by direct cell play, so mode keys are letters.
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.set_mode(Mode::TwoPlayer);
                AppSignal::Continue
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.set_mode(Mode::Cpu);
                AppSignal::Continue
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.set_theme(Theme::Light);
                AppSignal::Continue
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.set_theme(Theme::Dark);
                AppSignal::Continue
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_theme(Theme::Neon);
                AppSignal::Continue
            }
            _ => AppSignal::Continue,
        }
    }

    /// Handles a deferred event from the event loop.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CpuDue { epoch } => self.cpu_due(epoch),
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Invalid moves (occupied cell, game over) are silent no-ops.
    fn play(&mut self, pos: Position) -> AppSignal {
        let outcome = match self.session.apply(pos) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(%e, "Move ignored");
                return AppSignal::Continue;
            }
        };

        self.scores.record(&outcome);
        self.update_status(&outcome);

        // Hand the turn to the CPU when it plays O.
        if self.mode == Mode::Cpu
            && *self.session.active()
            && *self.session.to_move() == Player::O
        {
            debug!(epoch = self.epoch, "Scheduling CPU move");
            return AppSignal::ScheduleCpu { epoch: self.epoch };
        }

        AppSignal::Continue
    }

    /// Applies the CPU's move if the timer is still current.
    fn cpu_due(&mut self, epoch: u64) {
        if epoch != self.epoch {
            debug!(
                fired = epoch,
                current = self.epoch,
                "Dropping stale CPU timer"
            );
            return;
        }
        if self.mode != Mode::Cpu
            || !*self.session.active()
            || *self.session.to_move() != Player::O
        {
            debug!("CPU timer fired but preconditions no longer hold");
            return;
        }

        let Some(pos) = cpu::pick_move(self.session.board(), &mut rand::thread_rng()) else {
            return;
        };
        info!(%pos, "CPU plays");
        if let Ok(outcome) = self.session.apply(pos) {
            self.scores.record(&outcome);
            self.update_status(&outcome);
        }
    }

    /// Undoes the most recent move. No-op on empty history.
    fn undo(&mut self) {
        if let Some(mov) = self.session.undo() {
            debug!(%mov, "Move undone");
            self.epoch += 1;
            self.status_message = turn_message(*self.session.to_move());
        }
    }

    /// Resets the board for a fresh game. Scores are untouched.
    fn reset(&mut self) {
        self.session.reset();
        self.epoch += 1;
        self.status_message = turn_message(Player::X);
    }

    /// Switches mode; always resets the game as a side effect.
    fn set_mode(&mut self, mode: Mode) {
        info!(mode = mode.label(), "Mode selected");
        self.mode = mode;
        self.reset();
    }

    /// Switches theme; purely cosmetic.
    fn set_theme(&mut self, theme: Theme) {
        info!(theme = theme.label(), "Theme selected");
        self.theme = theme;
    }

    fn update_status(&mut self, outcome: &MoveOutcome) {
        self.status_message = match outcome {
            MoveOutcome::Moved => turn_message(*self.session.to_move()),
            MoveOutcome::Won { winner, .. } => format!("{} Wins!", winner),
            MoveOutcome::Draw => "It's a Draw!".to_string(),
        };
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s Turn", player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, c: char) -> AppSignal {
        app.handle_key(key(KeyCode::Char(c)))
    }

    #[test]
    fn test_digit_places_mark() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        press(&mut app, '5');
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(*app.session().to_move(), Player::O);
        assert_eq!(app.status_message(), "Player O's Turn");
    }

    #[test]
    fn test_occupied_cell_is_silent_noop() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        press(&mut app, '5');
        press(&mut app, '5');
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(*app.session().to_move(), Player::O);
    }

    #[test]
    fn test_human_move_schedules_cpu_in_cpu_mode() {
        let mut app = App::new(Mode::Cpu, Theme::Light);
        let signal = press(&mut app, '5');
        assert_eq!(signal, AppSignal::ScheduleCpu { epoch: 0 });
    }

    #[test]
    fn test_no_cpu_schedule_in_two_player_mode() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        assert_eq!(press(&mut app, '5'), AppSignal::Continue);
    }

    #[test]
    fn test_cpu_due_applies_move() {
        let mut app = App::new(Mode::Cpu, Theme::Light);
        press(&mut app, '5');
        app.handle_event(AppEvent::CpuDue { epoch: 0 });
        assert_eq!(app.session().history().len(), 2);
        assert_eq!(*app.session().to_move(), Player::X);
    }

    #[test]
    fn test_stale_cpu_timer_dropped_after_reset() {
        let mut app = App::new(Mode::Cpu, Theme::Light);
        press(&mut app, '5');
        press(&mut app, 'r');
        // The timer scheduled before the reset fires against the new game.
        app.handle_event(AppEvent::CpuDue { epoch: 0 });
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_stale_cpu_timer_dropped_after_undo() {
        let mut app = App::new(Mode::Cpu, Theme::Light);
        press(&mut app, '5');
        press(&mut app, 'u');
        app.handle_event(AppEvent::CpuDue { epoch: 0 });
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_mode_switch_resets_game() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        press(&mut app, '5');
        press(&mut app, 'c');
        assert_eq!(*app.mode(), Mode::Cpu);
        assert!(app.session().history().is_empty());
        assert_eq!(*app.session().to_move(), Player::X);
    }

    #[test]
    fn test_two_player_key_leaves_cpu_mode() {
        let mut app = App::new(Mode::Cpu, Theme::Light);
        press(&mut app, '5');
        press(&mut app, 't');
        assert_eq!(*app.mode(), Mode::TwoPlayer);
        assert!(app.session().history().is_empty());
        assert_eq!(*app.session().to_move(), Player::X);
    }

    #[test]
    fn test_digit_two_plays_top_center() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        press(&mut app, '2');
        assert_eq!(*app.mode(), Mode::TwoPlayer);
        assert_eq!(
            app.session().last_move().map(|m| m.position),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_theme_switch_leaves_session_untouched() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        press(&mut app, '5');
        let session = app.session().clone();
        press(&mut app, 'n');
        assert_eq!(*app.theme(), Theme::Neon);
        assert_eq!(*app.session(), session);
    }

    #[test]
    fn test_win_updates_status_and_scores() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, c);
        }
        assert_eq!(app.status_message(), "X Wins!");
        assert_eq!(*app.scores().x_wins(), 1);
        assert!(!*app.session().active());
    }

    #[test]
    fn test_undo_after_win_reactivates_but_keeps_score() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, c);
        }
        press(&mut app, 'u');
        assert!(*app.session().active());
        assert_eq!(*app.session().to_move(), Player::X);
        assert_eq!(*app.scores().x_wins(), 1);
    }

    #[test]
    fn test_undo_hint_visibility() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        assert!(!app.undo_available());
        press(&mut app, '5');
        assert!(app.undo_available());
        // X completes the middle row (cells 4, 3, 5); game over hides the hint.
        for c in ['1', '4', '2', '6'] {
            press(&mut app, c);
        }
        assert!(!*app.session().active());
        assert!(!app.undo_available());
    }

    #[test]
    fn test_cursor_play_via_enter() {
        let mut app = App::new(Mode::TwoPlayer, Theme::Light);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.session().last_move().map(|m| m.position),
            Some(Position::TopCenter)
        );
    }
}
