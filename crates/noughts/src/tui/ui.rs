//! Stateless rendering of derived state.
//!
//! Everything on screen is a function of the application snapshot: the
//! derived game, the scores, and the cursor. Re-rendering after a state
//! change redraws the whole frame.

use super::app::App;
use crate::config::{AppConfig, ColorToken};
use noughts_core::{Game, PlayerId, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strum::IntoEnumIterator;

/// Renders one frame from an application snapshot.
pub fn draw(frame: &mut Frame, app: &App, config: &AppConfig) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Turn panel
            Constraint::Min(11),    // Board
            Constraint::Length(5),  // Scores
            Constraint::Length(3),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_turn_panel(frame, chunks[1], app.game(), config);
    draw_board(frame, chunks[2], app.game(), app.cursor(), config);
    draw_scores(frame, chunks[3], app, config);
    draw_help(frame, chunks[4]);

    if app.game().is_complete {
        draw_modal(frame, area, app.game(), config);
    }
}

/// Player who owns the mark on a cell, by parity of its turn index.
fn mark_at(game: &Game, cell: Position) -> Option<PlayerId> {
    game.moves
        .iter()
        .position(|&played| played == cell)
        .map(PlayerId::from_parity)
}

fn draw_turn_panel(frame: &mut Frame, area: Rect, game: &Game, config: &AppConfig) {
    let next = config.profile(game.next_player);
    let text = Line::from(vec![
        Span::styled(
            format!("{} ", next.icon()),
            Style::default()
                .fg(color(*next.color()))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}, you're up!", next.name())),
    ]);
    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &Game, cursor: Position, config: &AppConfig) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let cells: Vec<Position> = Position::iter().collect();
    draw_row(frame, rows[0], game, cursor, config, &cells[0..3]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], game, cursor, config, &cells[3..6]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], game, cursor, config, &cells[6..9]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Position,
    config: &AppConfig,
    cells: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], game, cursor, config, cells[0]);
    draw_vertical_separator(frame, cols[1]);
    draw_cell(frame, cols[2], game, cursor, config, cells[1]);
    draw_vertical_separator(frame, cols[3]);
    draw_cell(frame, cols[4], game, cursor, config, cells[2]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Position,
    config: &AppConfig,
    cell: Position,
) {
    let (symbol, base_style) = match mark_at(game, cell) {
        None => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Some(player) => {
            let profile = config.profile(player);
            (
                format!(" {} ", profile.icon()),
                Style::default()
                    .fg(color(*profile.color()))
                    .add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if cell == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App, config: &AppConfig) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let one = config.profile(PlayerId::One);
    let two = config.profile(PlayerId::Two);
    let scores = app.scores();

    draw_score_box(
        frame,
        cols[0],
        one.name(),
        format!("{} wins", scores.player1_wins),
        color(*one.color()),
    );
    draw_score_box(
        frame,
        cols[1],
        "Ties",
        format!("{} ties", scores.ties),
        Color::White,
    );
    draw_score_box(
        frame,
        cols[2],
        two.name(),
        format!("{} wins", scores.player2_wins),
        color(*two.color()),
    );
}

fn draw_score_box(frame: &mut Frame, area: Rect, title: &str, value: String, fg: Color) {
    let text = Paragraph::new(value)
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(text, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("arrows move · enter play · r reset · n new round · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn draw_modal(frame: &mut Frame, area: Rect, game: &Game, config: &AppConfig) {
    let modal_area = center_rect(area, 34, 6);
    frame.render_widget(Clear, modal_area);

    let headline = match game.winner {
        Some(winner) => format!("{} wins!", config.profile(winner).name()),
        None => "Tie!".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Play again [Enter]",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game over"));
    frame.render_widget(modal, modal_area);
}

/// Maps a color token onto the terminal palette.
fn color(token: ColorToken) -> Color {
    match token {
        ColorToken::Turquoise => Color::Cyan,
        ColorToken::Yellow => Color::Yellow,
        ColorToken::Blue => Color::Blue,
        ColorToken::Red => Color::Red,
        ColorToken::Green => Color::Green,
        ColorToken::Magenta => Color::Magenta,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
