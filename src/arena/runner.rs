use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::ai::{build_agent, AgentKind, SearchConfig};
use crate::game::{GameState, Player};

use super::game::play_game;
use super::stats::MatchStats;

/// Settings for a series of headless games, loadable from the `[arena]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub agent_a: AgentKind,
    pub agent_b: AgentKind,
    /// Base seed for random choices; game `i` uses `seed + i`.
    pub seed: Option<u64>,
    /// Print a progress line every N games (0 disables).
    pub log_interval: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 100,
            agent_a: AgentKind::Minimax,
            agent_b: AgentKind::Random,
            seed: None,
            log_interval: 10,
        }
    }
}

/// Play `config.games` games from the initial position with fresh agents
/// each game.
pub fn run_match(config: &ArenaConfig, search: &SearchConfig) -> MatchStats {
    let mut stats = MatchStats::new();

    for game in 0..config.games {
        let seed = config.seed.map(|s| s.wrapping_add(game as u64));
        // Offset B's seed so two random agents don't mirror each other.
        let seed_b = seed.map(|s| s.wrapping_add(1 << 32));
        let mut agent_a = build_agent(config.agent_a, Player::A, search, seed);
        let mut agent_b = build_agent(config.agent_b, Player::B, search, seed_b);

        let record = play_game(agent_a.as_mut(), agent_b.as_mut(), GameState::initial());
        debug!(
            "game {} finished after {} moves: {:?}",
            game + 1,
            record.len(),
            record.outcome
        );
        stats.record(&record);

        if config.log_interval > 0 && (game + 1) % config.log_interval == 0 {
            info!("{stats}");
        }
    }

    stats
}
