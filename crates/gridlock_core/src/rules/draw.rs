//! Draw detection logic.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is a draw: full with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
