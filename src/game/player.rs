use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::board::{PITS_PER_SIDE, STORE_A, STORE_B};

/// One of the two sides of the board. A sows from pits 0-5 into store 6,
/// B from pits 7-12 into store 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Index of this player's store
    pub fn store(self) -> usize {
        match self {
            Player::A => STORE_A,
            Player::B => STORE_B,
        }
    }

    /// Indices of this player's six pits, in sowing order
    pub fn pits(self) -> Range<usize> {
        let start = match self {
            Player::A => 0,
            Player::B => STORE_A + 1,
        };
        start..start + PITS_PER_SIDE
    }

    /// Whether `pit` is one of this player's six pits (stores excluded)
    pub fn owns(self, pit: usize) -> bool {
        self.pits().contains(&pit)
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "Player A",
            Player::B => "Player B",
        }
    }
}
