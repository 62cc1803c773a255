//! Move selection: the `Agent` capability, a uniform random player, the store
//! heuristic, and the minimax search engine built on them.

mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::{build_agent, Agent, AgentKind};
pub use heuristic::{Heuristic, StoreHeuristic};
pub use minimax::{MinimaxAgent, SearchConfig, SearchStats, BEST_SCORE, WORST_SCORE};
pub use random::RandomAgent;
