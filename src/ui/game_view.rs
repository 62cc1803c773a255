use crate::game::{Board, GameState, Player, PITS_PER_SIDE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{result_message, GameMode};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    mode: GameMode,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, mode, chunks[0]);
    let cursor = (!game_state.has_ended() && !mode.is_ai(game_state.to_move()))
        .then_some(selected_column);
    render_board(frame, game_state, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Cyan,
        Player::B => Color::Magenta,
    }
}

/// Status text for the header: whose turn it is, or the result.
pub fn status_line(game_state: &GameState) -> String {
    match game_state.outcome() {
        Some(outcome) => result_message(outcome),
        None => format!("Turn: {}", game_state.to_move().name()),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, mode: GameMode, area: Rect) {
    let color = if game_state.has_ended() {
        Color::Yellow
    } else {
        player_color(game_state.to_move())
    };

    let header = Paragraph::new(format!("{}  |  {}", status_line(game_state), mode.label()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Kalah"));

    frame.render_widget(header, area);
}

fn pit_span(board: &Board, pit: usize, player: Player, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(player_color(player))
    };
    Span::styled(format!(" {:>2} ", board.get(pit)), style)
}

fn render_board(frame: &mut Frame, game_state: &GameState, cursor: Option<usize>, area: Rect) {
    let board = game_state.board();
    let to_move = game_state.to_move();
    let selected = |player: Player, column: usize| cursor == Some(column) && to_move == player;

    let rule = format!("      +{}", "----+".repeat(PITS_PER_SIDE));
    let mut lines = Vec::new();

    // B's row, drawn right to left so the board reads counter-clockwise.
    let mut top = vec![Span::raw("  B   |")];
    for (column, pit) in Player::B.pits().rev().enumerate() {
        top.push(pit_span(board, pit, Player::B, selected(Player::B, column)));
        top.push(Span::raw("|"));
    }
    lines.push(Line::from(rule.clone()));
    lines.push(Line::from(top));

    // Stores on the flanks.
    lines.push(Line::from(vec![
        Span::styled(
            format!(" [{:>2}] ", board.store(Player::B)),
            Style::default()
                .fg(player_color(Player::B))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(PITS_PER_SIDE * 5 - 1)),
        Span::styled(
            format!("  [{:>2}]", board.store(Player::A)),
            Style::default()
                .fg(player_color(Player::A))
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let mut bottom = vec![Span::raw("  A   |")];
    for (column, pit) in Player::A.pits().enumerate() {
        bottom.push(pit_span(board, pit, Player::A, selected(Player::A, column)));
        bottom.push(Span::raw("|"));
    }
    lines.push(Line::from(bottom));
    lines.push(Line::from(rule));

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Select pit  |  Enter: Sow  |  M: Mode  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
