//! Win detection logic.

use crate::position::{LINES, Line};
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Returns every winning line completed by `player`.
///
/// A single move can complete more than one line at once (for example a
/// row and a column meeting at the played cell); all of them are returned
/// so the presentation layer can highlight each one.
#[instrument(skip(board))]
pub fn completed_lines(board: &Board, player: Player) -> Vec<Line> {
    LINES
        .iter()
        .copied()
        .filter(|line| {
            line.iter()
                .all(|&pos| board.get(pos) == Cell::Occupied(player))
        })
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if either player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Occupied(player) => Some(player),
                Cell::Empty => None,
            };
        }
    }

    None
}
