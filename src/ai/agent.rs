use serde::{Deserialize, Serialize};

use crate::game::{GameState, Player};

use super::minimax::{MinimaxAgent, SearchConfig};
use super::random::RandomAgent;

/// Anything that picks moves for the side to move.
pub trait Agent {
    /// Select a pit for the side to move. `None` only when there is no legal
    /// move to make.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Which move-selection strategy to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Minimax,
}

/// Build an agent of `kind` playing `player`. `seed` makes random choices
/// reproducible.
pub fn build_agent(
    kind: AgentKind,
    player: Player,
    search: &SearchConfig,
    seed: Option<u64>,
) -> Box<dyn Agent> {
    let random = match seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };
    match kind {
        AgentKind::Random => Box::new(random),
        AgentKind::Minimax => Box::new(
            MinimaxAgent::new(player, search.max_depth)
                .with_node_limit(search.node_limit)
                .with_fallback(random),
        ),
    }
}
