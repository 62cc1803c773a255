use std::cmp::max;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use kalah::ai::AgentKind;
use kalah::arena::run_match;
use kalah::config::AppConfig;
use kalah::game::Player;

/// Play a series of headless Kalah games between two agents.
#[derive(Parser, Debug)]
#[command(name = "arena", about = "Pit two Kalah agents against each other")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "kalah.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override search depth for minimax agents
    #[arg(long)]
    depth: Option<usize>,

    /// Agent playing side A
    #[arg(long, value_enum)]
    agent_a: Option<AgentKind>,

    /// Agent playing side B
    #[arg(long, value_enum)]
    agent_b: Option<AgentKind>,

    /// Base seed for reproducible random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug mode. Raises the log level to at least `Debug`.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Set the log level for the application.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        max(LevelFilter::Debug, cli.log_level)
    } else {
        cli.log_level
    };
    let mut config_builder = simplelog::ConfigBuilder::new();
    config_builder.set_time_level(LevelFilter::Off);
    config_builder.set_thread_level(LevelFilter::Off);
    config_builder.set_target_level(LevelFilter::Off);
    config_builder.set_location_level(LevelFilter::Off);
    TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    log::debug!("Parsed arguments: {cli:?}");

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    if let Some(kind) = cli.agent_a {
        config.arena.agent_a = kind;
    }
    if let Some(kind) = cli.agent_b {
        config.arena.agent_b = kind;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    config.validate()?;

    println!(
        "{:?} (A) vs {:?} (B), {} games, depth {}",
        config.arena.agent_a, config.arena.agent_b, config.arena.games, config.search.max_depth
    );
    println!("-------------------------------------------");

    let started = Instant::now();
    let stats = run_match(&config.arena, &config.search);
    let elapsed = started.elapsed();

    println!("-------------------------------------------");
    println!("{stats}");
    println!(
        "A win rate {:.1}%, B win rate {:.1}%, {:.2}s total",
        stats.win_rate(Player::A) * 100.0,
        stats.win_rate(Player::B) * 100.0,
        elapsed.as_secs_f64()
    );

    Ok(())
}
