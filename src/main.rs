use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kalah::config::AppConfig;
use kalah::ui::{App, GameMode};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Kalah in the terminal.
#[derive(Parser)]
#[command(name = "kalah", about = "Play Kalah against a person or the minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "kalah.toml")]
    config: PathBuf,

    /// Override the game mode: human-vs-human, human-vs-ai or ai-vs-ai
    #[arg(long)]
    mode: Option<String>,

    /// Override the AI search depth
    #[arg(long)]
    depth: Option<usize>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(mode) = cli.mode {
        config.play.mode = match mode.as_str() {
            "human-vs-human" => GameMode::HumanVsHuman,
            "human-vs-ai" => GameMode::HumanVsAi,
            "ai-vs-ai" => GameMode::AiVsAi,
            other => anyhow::bail!(
                "unknown mode '{}' (expected 'human-vs-human', 'human-vs-ai' or 'ai-vs-ai')",
                other
            ),
        };
    }
    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    config.validate()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config.play, config.search);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
