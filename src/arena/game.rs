use log::{trace, warn};

use crate::ai::Agent;
use crate::game::{GameOutcome, GameState, Player};

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub pit: usize,
    pub extra_turn: bool,
}

/// Result of playing a single game between two agents.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<MoveRecord>,
    pub final_state: GameState,
    /// `None` when the game was aborted before it ended.
    pub outcome: Option<GameOutcome>,
}

impl GameRecord {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn aborted(&self) -> bool {
        self.outcome.is_none()
    }
}

/// Play from `initial` until the game ends. `agent_a` moves for A and
/// `agent_b` for B; an extra turn goes back to the same agent. An agent that
/// returns no move or an illegal one aborts the game.
pub fn play_game<'a>(
    agent_a: &'a mut dyn Agent,
    agent_b: &'a mut dyn Agent,
    initial: GameState,
) -> GameRecord {
    let mut state = initial;
    let mut moves = Vec::new();

    while !state.has_ended() {
        let player = state.to_move();
        let agent = match player {
            Player::A => &mut *agent_a,
            Player::B => &mut *agent_b,
        };

        let Some(pit) = agent.select_action(&state) else {
            warn!("{} ({}) returned no move", agent.name(), player.name());
            break;
        };

        match state.apply_move(pit) {
            Ok(outcome) => {
                trace!(
                    "{} sows pit {pit}{}",
                    player.name(),
                    if outcome.extra_turn { " (extra turn)" } else { "" }
                );
                moves.push(MoveRecord {
                    player,
                    pit,
                    extra_turn: outcome.extra_turn,
                });
            }
            Err(e) => {
                warn!("{} ({}) chose an illegal move: {e}", agent.name(), player.name());
                break;
            }
        }
    }

    GameRecord {
        moves,
        final_state: state,
        outcome: state.outcome(),
    }
}
