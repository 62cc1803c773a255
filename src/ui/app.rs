use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use serde::{Deserialize, Serialize};

use crate::ai::{build_agent, Agent, AgentKind, SearchConfig};
use crate::game::{GameOutcome, GameState, Player, PITS_PER_SIDE};

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    /// A is human, B is the AI.
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    pub fn is_ai(self, player: Player) -> bool {
        match self {
            GameMode::HumanVsHuman => false,
            GameMode::HumanVsAi => player == Player::B,
            GameMode::AiVsAi => true,
        }
    }

    pub fn next(self) -> GameMode {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsAi,
            GameMode::HumanVsAi => GameMode::AiVsAi,
            GameMode::AiVsAi => GameMode::HumanVsHuman,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }
}

/// Interactive play settings, loadable from the `[play]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub mode: GameMode,
    /// Pause before each automatic move so it can be followed on screen.
    pub ai_delay_ms: u64,
    pub ai_agent: AgentKind,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            mode: GameMode::HumanVsAi,
            ai_delay_ms: 1000,
            ai_agent: AgentKind::Minimax,
        }
    }
}

pub struct App {
    game_state: GameState,
    mode: GameMode,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    play: PlayConfig,
    search: SearchConfig,
    agent_a: Box<dyn Agent>,
    agent_b: Box<dyn Agent>,
    next_ai_move: Instant,
}

impl App {
    pub fn new(play: PlayConfig, search: SearchConfig) -> Self {
        let mode = play.mode;
        App {
            game_state: GameState::initial(),
            mode,
            selected_column: 0,
            should_quit: false,
            message: None,
            agent_a: build_agent(play.ai_agent, Player::A, &search, None),
            agent_b: build_agent(play.ai_agent, Player::B, &search, None),
            next_ai_move: Instant::now() + Duration::from_millis(play.ai_delay_ms),
            play,
            search,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < PITS_PER_SIDE {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move();
            }
            KeyCode::Char('r') => {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.next();
                self.reset();
                self.message = Some(format!("Mode: {}", self.mode.label()));
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.game_state = GameState::initial();
        self.selected_column = 0;
        self.agent_a = build_agent(self.play.ai_agent, Player::A, &self.search, None);
        self.agent_b = build_agent(self.play.ai_agent, Player::B, &self.search, None);
        self.schedule_ai();
    }

    fn schedule_ai(&mut self) {
        self.next_ai_move = Instant::now() + Duration::from_millis(self.play.ai_delay_ms);
    }

    /// Pit under the cursor for the side to move. B's row is drawn right to
    /// left, so its columns map onto pits 12 down to 7.
    pub fn selected_pit(&self) -> usize {
        let row = self.game_state.to_move().pits();
        match self.game_state.to_move() {
            Player::A => row.start + self.selected_column,
            Player::B => row.end - 1 - self.selected_column,
        }
    }

    /// Sow from the selected pit on behalf of a human player
    fn human_move(&mut self) {
        if self.game_state.has_ended() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.mode.is_ai(self.game_state.to_move()) {
            self.message = Some("Wait for the AI to move.".to_string());
            return;
        }
        let pit = self.selected_pit();
        self.play_pit(pit);
    }

    /// Let the AI move when it is its turn and the delay has passed
    pub fn tick(&mut self, now: Instant) {
        let player = self.game_state.to_move();
        if self.game_state.has_ended() || !self.mode.is_ai(player) || now < self.next_ai_move {
            return;
        }

        let agent = match player {
            Player::A => &mut self.agent_a,
            Player::B => &mut self.agent_b,
        };
        let choice = agent.select_action(&self.game_state);
        match choice {
            Some(pit) => self.play_pit(pit),
            None => self.message = Some(format!("{} has no move.", player.name())),
        }
    }

    fn play_pit(&mut self, pit: usize) {
        let player = self.game_state.to_move();
        match self.game_state.apply_move(pit) {
            Ok(outcome) => {
                self.message = if outcome.ended {
                    Some(result_message(self.game_state.winner()))
                } else if outcome.extra_turn {
                    Some(format!("{} gets another turn", player.name()))
                } else {
                    None
                };
                self.schedule_ai();
            }
            Err(e) => {
                self.message = Some(format!("Invalid move: {e}"));
            }
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.mode,
        );
    }
}

/// Final result line shown once the game ends
pub fn result_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
        GameOutcome::Draw => "It's a draw!".to_string(),
    }
}
