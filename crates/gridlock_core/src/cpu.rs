//! CPU opponent: uniform random move selection.

use crate::types::Board;
use crate::Position;
use rand::Rng;
use tracing::instrument;

/// Picks a move for the CPU: uniformly at random among empty cells.
///
/// Returns `None` when the board is full. The RNG is injected so tests
/// can use a seeded generator.
#[instrument(skip(board, rng))]
pub fn pick_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    let available = Position::valid_moves(board);
    if available.is_empty() {
        return None;
    }
    let choice = rng.gen_range(0..available.len());
    Some(available[choice])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_picks_only_empty_cells() {
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
            Position::BottomLeft,
            Position::BottomCenter,
        ] {
            board.set(pos, Cell::Occupied(Player::X));
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick_move(&board, &mut rng), Some(Position::BottomRight));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Player::O));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_move(&board, &mut rng), None);
    }

    #[test]
    fn test_choice_is_always_valid() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::X));
        board.set(Position::TopLeft, Cell::Occupied(Player::O));

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let pos = pick_move(&board, &mut rng).expect("Board not full");
            assert!(board.is_empty(pos));
        }
    }
}
