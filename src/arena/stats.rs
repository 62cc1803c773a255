use std::fmt;

use crate::game::{GameOutcome, Player};

use super::game::GameRecord;

/// Tally of finished games between the same two agents.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    wins_a: usize,
    wins_b: usize,
    draws: usize,
    aborted: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        self.total_moves += game.len();
        match game.outcome {
            Some(GameOutcome::Winner(Player::A)) => self.wins_a += 1,
            Some(GameOutcome::Winner(Player::B)) => self.wins_b += 1,
            Some(GameOutcome::Draw) => self.draws += 1,
            None => self.aborted += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins_a + self.wins_b + self.draws + self.aborted
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::A => self.wins_a,
            Player::B => self.wins_b,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn aborted(&self) -> usize {
        self.aborted
    }

    /// Share of all recorded games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / n as f32
    }

    /// Average number of moves per game, extra turns included.
    pub fn average_length(&self) -> f32 {
        let n = self.games();
        if n == 0 {
            return 0.0;
        }
        self.total_moves as f32 / n as f32
    }
}

impl fmt::Display for MatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: A {} ({:.1}%), B {} ({:.1}%), draws {}",
            self.games(),
            self.wins_a,
            self.win_rate(Player::A) * 100.0,
            self.wins_b,
            self.win_rate(Player::B) * 100.0,
            self.draws,
        )?;
        if self.aborted > 0 {
            write!(f, ", aborted {}", self.aborted)?;
        }
        write!(f, ", avg length {:.1} moves", self.average_length())
    }
}
