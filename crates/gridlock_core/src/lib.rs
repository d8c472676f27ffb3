//! Gridlock core - tic-tac-toe game logic
//!
//! Pure game logic with no terminal or async dependencies:
//!
//! - **Board**: 3x3 grid of cells, indices 0-8 row-major
//! - **Session**: move engine with win/draw detection, single-step undo,
//!   and reset
//! - **CPU**: uniform random move selection among empty cells
//! - **Scores**: monotonic win/draw tally across games
//!
//! # Example
//!
//! ```
//! use gridlock_core::{GameSession, MoveOutcome, Position};
//!
//! let mut session = GameSession::new();
//! let outcome = session.apply(Position::Center)?;
//! assert_eq!(outcome, MoveOutcome::Moved);
//! let undone = session.undo();
//! assert!(undone.is_some());
//! # Ok::<(), gridlock_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod cpu;
pub mod invariants;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use position::{LINES, Line, Position};
pub use score::ScoreBoard;
pub use session::{GameSession, MoveOutcome, SessionStatus};
pub use types::{Board, Cell, Player};
