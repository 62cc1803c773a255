//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The engine always scores positions from its own side's point of view:
//! nodes where that side moves maximize, the opponent's nodes minimize.
//! A move that earns an extra turn does not use up a ply.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::game::{GameState, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, StoreHeuristic};
use super::random::RandomAgent;

/// Stands in for negative infinity.
pub const WORST_SCORE: i32 = i32::MIN;
/// Stands in for positive infinity.
pub const BEST_SCORE: i32 = i32::MAX;

/// Search settings, loadable from the `[search]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Ply budget for a move decision. Must be at least 1.
    pub max_depth: usize,
    /// Most recursive calls a single decision may make; past it, nodes are
    /// scored statically.
    pub node_limit: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 6,
            node_limit: 5_000_000,
        }
    }
}

/// Bookkeeping from the most recent `choose_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub score: Option<i32>,
    /// The node limit was reached and part of the tree was cut short.
    pub capped: bool,
}

/// Minimax agent with alpha-beta pruning, playing a fixed side.
pub struct MinimaxAgent {
    player: Player,
    max_depth: usize,
    node_limit: u64,
    heuristic: Box<dyn Heuristic>,
    fallback: RandomAgent,
    nodes: u64,
    capped: bool,
    last: SearchStats,
}

impl MinimaxAgent {
    pub fn new(player: Player, max_depth: usize) -> Self {
        Self::with_heuristic(player, max_depth, Box::new(StoreHeuristic))
    }

    pub fn with_heuristic(player: Player, max_depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(max_depth > 0, "search depth must be at least 1");
        MinimaxAgent {
            player,
            max_depth,
            node_limit: u64::MAX,
            heuristic,
            fallback: RandomAgent::new(),
            nodes: 0,
            capped: false,
            last: SearchStats::default(),
        }
    }

    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    pub fn with_fallback(mut self, fallback: RandomAgent) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn last_search(&self) -> SearchStats {
        self.last
    }

    /// Pick a pit for this agent's side. Every candidate is scored with a
    /// fresh full window; ties keep the lowest pit.
    pub fn choose_move(&mut self, state: &GameState) -> Option<usize> {
        self.nodes = 0;
        self.capped = false;

        let mut root = *state;
        if root.to_move() != self.player {
            warn!(
                "asked to move for {} while {} is to move; searching as {}",
                self.player.name(),
                root.to_move().name(),
                self.player.name()
            );
            root.pass_turn();
        }

        let mut best: Option<(usize, i32)> = None;
        for pit in root.legal_moves(self.player) {
            let mut child = root;
            if child.apply_move(pit).is_err() {
                continue;
            }
            let score = self.minimax_value(
                &child,
                self.max_depth - 1,
                WORST_SCORE,
                BEST_SCORE,
                child.to_move(),
            );
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pit, score));
            }
        }

        self.last = SearchStats {
            nodes: self.nodes,
            score: best.map(|(_, score)| score),
            capped: self.capped,
        };

        match best {
            Some((pit, score)) => {
                debug!(
                    "{} picks pit {pit} (score {score}, {} nodes{})",
                    self.player.name(),
                    self.nodes,
                    if self.capped { ", node limit hit" } else { "" }
                );
                Some(pit)
            }
            None => {
                warn!("search found no move for {}, choosing at random", self.player.name());
                self.fallback.select_action(&root)
            }
        }
    }

    /// Value of `state` for this agent's side, searching `depth` more plies
    /// with `side` to move.
    pub fn minimax_value(
        &mut self,
        state: &GameState,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        side: Player,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || state.is_terminal() {
            return self.heuristic.evaluate(state.board(), self.player);
        }
        if self.nodes > self.node_limit {
            self.capped = true;
            return self.heuristic.evaluate(state.board(), self.player);
        }

        let moves = state.legal_moves(side);
        if moves.is_empty() {
            // Unreachable under the end-of-game rule; hand the move over.
            let mut passed = *state;
            passed.pass_turn();
            return self.minimax_value(&passed, depth - 1, alpha, beta, side.other());
        }

        let maximizing = side == self.player;
        let mut best = if maximizing { WORST_SCORE } else { BEST_SCORE };

        for pit in moves {
            let mut child = *state;
            let Ok(outcome) = child.apply_move(pit) else {
                continue;
            };
            let next_depth = if outcome.extra_turn { depth } else { depth - 1 };
            let value = self.minimax_value(&child, next_depth, alpha, beta, child.to_move());

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        self.choose_move(state)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
