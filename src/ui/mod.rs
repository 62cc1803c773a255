//! Terminal UI for playing Kalah against another person or the AI, or for
//! watching two AIs play.

mod app;
mod game_view;

pub use app::{result_message, App, GameMode, PlayConfig};
pub use game_view::status_line;
