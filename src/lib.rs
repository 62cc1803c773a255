//! # Kalah
//!
//! The six-pit, four-seed Mancala variant with an alpha-beta minimax opponent.
//! Ships a terminal UI built with Ratatui and a headless arena for pitting
//! agents against each other.
//!
//! ## Modules
//!
//! - [`game`] - Rules engine: board, sides, sowing, captures, extra turns, end of game
//! - [`ai`] - Agent trait, random agent, store heuristic, minimax search
//! - [`arena`] - Headless games between agents and match statistics
//! - [`ui`] - Terminal UI: board view, human and automatic players
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
