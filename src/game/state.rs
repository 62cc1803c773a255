use super::board::{Board, CELLS, TOTAL_SEEDS};
use super::player::Player;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The last seed landed in the mover's store; the mover plays again.
    pub extra_turn: bool,
    /// One side ran out of seeds and the board was swept.
    pub ended: bool,
}

/// Board plus the side to move. `Copy`, so search nodes are plain stack copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    to_move: Player,
    ended: bool,
}

impl GameState {
    /// Four seeds in every pit, empty stores, A to move
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            to_move: Player::A, // A starts
            ended: false,
        }
    }

    /// Build a position from raw cell counts. A position that is already
    /// terminal is marked as ended but not swept.
    ///
    /// The cells must hold at most `TOTAL_SEEDS` seeds between them, which
    /// keeps every count within `u8` while sowing.
    pub fn from_parts(cells: [u8; CELLS], to_move: Player) -> Self {
        let board = Board::from_cells(cells);
        debug_assert!(
            board.total() <= TOTAL_SEEDS,
            "position holds {} seeds, more than {TOTAL_SEEDS}",
            board.total()
        );
        GameState {
            board,
            to_move,
            ended: board.side_empty(Player::A) || board.side_empty(Player::B),
        }
    }

    /// Side whose pit is sown next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current pit and store counts
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a move has ended the game (or the position was built terminal)
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// True iff either side's six pits are all empty
    pub fn is_terminal(&self) -> bool {
        self.board.side_empty(Player::A) || self.board.side_empty(Player::B)
    }

    /// Pits `player` may sow from, in ascending order
    pub fn legal_moves(&self, player: Player) -> Vec<usize> {
        player.pits().filter(|&pit| self.board.get(pit) > 0).collect()
    }

    /// Hand the move to the other side without sowing
    pub fn pass_turn(&mut self) {
        self.to_move = self.to_move.other();
    }

    /// Sow from `pit` for the side to move, applying extra-turn, capture and
    /// end-of-game rules. The state is left untouched on error.
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        let mover = self.to_move;
        if !mover.owns(pit) {
            return Err(MoveError::WrongOwner { pit, player: mover });
        }
        if self.board.get(pit) == 0 {
            return Err(MoveError::EmptyPit { pit });
        }

        let last = self.board.sow(pit, mover);

        let extra_turn = last == mover.store();
        if !extra_turn {
            self.board.capture(last, mover);
        }

        if self.is_terminal() {
            self.board.sweep();
            self.ended = true;
            return Ok(MoveOutcome {
                extra_turn,
                ended: true,
            });
        }

        if !extra_turn {
            self.to_move = mover.other();
        }

        Ok(MoveOutcome {
            extra_turn,
            ended: false,
        })
    }

    /// Compare the two stores. Only meaningful once the game has ended.
    pub fn winner(&self) -> GameOutcome {
        let a = self.board.store(Player::A);
        let b = self.board.store(Player::B);
        if a > b {
            GameOutcome::Winner(Player::A)
        } else if b > a {
            GameOutcome::Winner(Player::B)
        } else {
            GameOutcome::Draw
        }
    }

    /// Store comparison, once a move has ended the game
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.ended.then(|| self.winner())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{STORE_A, STORE_B};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.to_move(), Player::A);
        assert!(!state.is_terminal());
        assert!(!state.has_ended());
        assert_eq!(state.legal_moves(Player::A), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(state.legal_moves(Player::B), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_legal_moves_skip_empty_pits() {
        let mut cells = [0u8; CELLS];
        cells[1] = 2;
        cells[4] = 1;
        cells[9] = 3;
        let state = GameState::from_parts(cells, Player::A);
        assert_eq!(state.legal_moves(Player::A), vec![1, 4]);
        assert_eq!(state.legal_moves(Player::B), vec![9]);
    }

    #[test]
    fn test_extra_turn_from_initial() {
        let mut state = GameState::initial();
        let outcome = state.apply_move(2).unwrap();

        assert!(outcome.extra_turn);
        assert!(!outcome.ended);
        assert_eq!(state.board().get(2), 0);
        for pit in 3..=5 {
            assert_eq!(state.board().get(pit), 5);
        }
        assert_eq!(state.board().get(STORE_A), 1);
        assert_eq!(state.to_move(), Player::A);
    }

    #[test]
    fn test_plain_move_passes_turn() {
        let mut state = GameState::initial();
        let outcome = state.apply_move(0).unwrap();

        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(state.to_move(), Player::B);
        assert_eq!(state.board().get(0), 0);
        assert_eq!(state.board().get(4), 5);
    }

    #[test]
    fn test_no_capture_when_empty_pit_is_passed_over() {
        let mut cells = [4u8; CELLS];
        cells[STORE_A] = 0;
        cells[STORE_B] = 0;
        cells[1] = 0;
        let mut state = GameState::from_parts(cells, Player::A);

        // Only the landing pit can capture; pit 1 is filled on the way to 4.
        let outcome = state.apply_move(0).unwrap();
        assert!(!outcome.extra_turn);
        assert_eq!(state.board().get(1), 1);
        assert_eq!(state.board().get(STORE_A), 0);
        assert_eq!(state.to_move(), Player::B);
    }

    #[test]
    fn test_capture_takes_opposite_pit() {
        let mut cells = [4u8; CELLS];
        cells[STORE_A] = 0;
        cells[STORE_B] = 0;
        cells[0] = 1;
        cells[1] = 0;
        let mut state = GameState::from_parts(cells, Player::A);

        let outcome = state.apply_move(0).unwrap();
        assert!(!outcome.extra_turn);
        assert!(!outcome.ended);
        assert_eq!(state.board().get(0), 0);
        assert_eq!(state.board().get(1), 0);
        assert_eq!(state.board().get(11), 0);
        assert_eq!(state.board().get(STORE_A), 5);
        assert_eq!(state.to_move(), Player::B);
    }

    #[test]
    fn test_wrong_owner_rejected() {
        let mut state = GameState::initial();
        let before = state;
        assert_eq!(
            state.apply_move(8),
            Err(MoveError::WrongOwner {
                pit: 8,
                player: Player::A
            })
        );
        assert_eq!(
            state.apply_move(STORE_A),
            Err(MoveError::WrongOwner {
                pit: STORE_A,
                player: Player::A
            })
        );
        assert!(matches!(
            state.apply_move(99),
            Err(MoveError::WrongOwner { pit: 99, .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_pit_rejected() {
        let mut state = GameState::initial();
        state.apply_move(0).unwrap();
        state.apply_move(7).unwrap();
        let before = state;
        assert_eq!(state.apply_move(0), Err(MoveError::EmptyPit { pit: 0 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_game_end_sweeps_board() {
        // B's side is empty after A's last move lands in its store.
        let mut cells = [0u8; CELLS];
        cells[5] = 1;
        cells[2] = 3;
        cells[STORE_A] = 20;
        cells[STORE_B] = 24;
        let mut state = GameState::from_parts(cells, Player::A);
        assert!(state.is_terminal());

        let mut cells = [0u8; CELLS];
        cells[5] = 1;
        cells[2] = 3;
        cells[12] = 1;
        cells[STORE_A] = 20;
        cells[STORE_B] = 23;
        state = GameState::from_parts(cells, Player::B);
        assert!(!state.is_terminal());

        // B sows its last seed into its own store, emptying its row.
        let outcome = state.apply_move(12).unwrap();
        assert!(outcome.extra_turn);
        assert!(outcome.ended);
        assert!(state.has_ended());
        assert_eq!(state.board().get(STORE_A), 24);
        assert_eq!(state.board().get(STORE_B), 24);
        for pit in Player::A.pits().chain(Player::B.pits()) {
            assert_eq!(state.board().get(pit), 0);
        }
        assert_eq!(state.to_move(), Player::B);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_winner_compares_stores() {
        let mut cells = [0u8; CELLS];
        cells[STORE_A] = 25;
        cells[STORE_B] = 23;
        let state = GameState::from_parts(cells, Player::A);
        assert_eq!(state.winner(), GameOutcome::Winner(Player::A));

        cells[STORE_A] = 20;
        cells[STORE_B] = 28;
        let state = GameState::from_parts(cells, Player::A);
        assert_eq!(state.winner(), GameOutcome::Winner(Player::B));
    }

    #[test]
    fn test_outcome_hidden_until_ended() {
        let state = GameState::initial();
        assert_eq!(state.winner(), GameOutcome::Draw);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "more than 48")]
    fn test_from_parts_rejects_surplus_seeds() {
        let mut cells = [0u8; CELLS];
        cells[3] = 200;
        cells[9] = 250;
        let _ = GameState::from_parts(cells, Player::A);
    }

    #[test]
    fn test_pass_turn() {
        let mut state = GameState::initial();
        state.pass_turn();
        assert_eq!(state.to_move(), Player::B);
        assert_eq!(state.board().total(), TOTAL_SEEDS);
    }
}
