//! Screen rendering.

mod board;

use crate::app::{App, Screen};
use oxo_core::Player;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the current screen.
pub fn draw(f: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Setup => draw_setup(f, app),
        Screen::Game => draw_game(f, app),
    }
}

fn draw_setup(f: &mut Frame, app: &App) {
    let area = board::center_rect(f.area(), 44, 9);

    let mark_span = |mark: Player| {
        let style = if app.picker() == mark {
            mark_style(mark).add_modifier(Modifier::REVERSED)
        } else {
            mark_style(mark)
        };
        Span::styled(format!("  {}  ", mark.mark()), style)
    };

    let lines = vec![
        Line::raw(""),
        Line::raw("Play as:"),
        Line::raw(""),
        Line::from(vec![mark_span(Player::X), Span::raw("   "), mark_span(Player::O)]),
        Line::raw(""),
        Line::styled(
            "arrows to choose, Enter to start, q to quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("oxo").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn draw_game(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(4),
        ])
        .split(f.area());

    draw_score_bar(f, rows[0], app);
    board::render_board(f, rows[1], app.board(), Some(app.cursor()), app.win_line());
    draw_status(f, rows[2], app);
}

fn draw_score_bar(f: &mut Frame, area: Rect, app: &App) {
    let scores = app.scores();
    let line = Line::from(vec![
        Span::styled(
            format!("You ({}) {}", app.human().mark(), scores.human()),
            mark_style(app.human()),
        ),
        Span::raw(format!("   Draws {}   ", scores.draws())),
        Span::styled(
            format!("AI ({}) {}", app.ai().mark(), scores.ai()),
            mark_style(app.ai()),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title("score").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::raw(app.status().to_string()),
        Line::styled(
            "1-9 or arrows + Enter to place, m for menu, q to quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn mark_style(mark: Player) -> Style {
    match mark {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
