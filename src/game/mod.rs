//! Kalah rules: the 14-cell board, the two sides, and the state machine that
//! sows, captures, grants extra turns and ends the game.

mod board;
mod player;
mod state;

pub use board::{
    opposite, Board, CELLS, PITS_PER_SIDE, SEEDS_PER_PIT, STORE_A, STORE_B, TOTAL_SEEDS,
};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveOutcome};

pub use crate::error::MoveError;
