//! Headless play: whole games between two agents and win/draw tallies over a
//! series of them.

mod game;
mod runner;
mod stats;

pub use game::{play_game, GameRecord, MoveRecord};
pub use runner::{run_match, ArenaConfig};
pub use stats::MatchStats;
