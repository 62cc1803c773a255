use crate::game::{Board, Player};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Stores count double, seeds still in play count once:
/// `2 * (own store - opponent store) + (own pits - opponent pits)`.
///
/// Independent of whose turn it is; only `player` sets the sign.
pub struct StoreHeuristic;

impl Heuristic for StoreHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let opponent = player.other();
        let store_diff = i32::from(board.store(player)) - i32::from(board.store(opponent));
        let pit_diff = board.pit_total(player) as i32 - board.pit_total(opponent) as i32;
        2 * store_diff + pit_diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CELLS, STORE_A, STORE_B};

    #[test]
    fn heuristic_initial_board_is_zero() {
        let board = Board::new();
        assert_eq!(StoreHeuristic.evaluate(&board, Player::A), 0);
        assert_eq!(StoreHeuristic.evaluate(&board, Player::B), 0);
    }

    #[test]
    fn heuristic_weights_stores_double() {
        let mut cells = [0u8; CELLS];
        cells[STORE_A] = 10;
        cells[STORE_B] = 4;
        cells[0] = 3;
        cells[9] = 5;
        let board = Board::from_cells(cells);
        // 2 * (10 - 4) + (3 - 5)
        assert_eq!(StoreHeuristic.evaluate(&board, Player::A), 10);
    }

    #[test]
    fn heuristic_is_antisymmetric() {
        let mut cells = [1u8; CELLS];
        cells[STORE_A] = 7;
        cells[STORE_B] = 2;
        cells[3] = 6;
        let board = Board::from_cells(cells);
        let a = StoreHeuristic.evaluate(&board, Player::A);
        let b = StoreHeuristic.evaluate(&board, Player::B);
        assert_eq!(a, -b);
        assert!(a > 0);
    }
}
