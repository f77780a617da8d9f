//! TUI rendering with ratatui
//!
//! Visualizations for the memory game interface.

use super::app::{App, BOARD_COLUMNS, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board grid
            Constraint::Length(3), // Progress gauge
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_progress(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Memory Lane — Domino Matching")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (row_index, row) in app.board.tiles().chunks(BOARD_COLUMNS).enumerate() {
        let mut spans: Vec<Span> = Vec::new();

        for (offset, tile) in row.iter().enumerate() {
            let index = row_index * BOARD_COLUMNS + offset;
            let flipped = app.first_pick == Some(index)
                || app.mismatch.is_some_and(|pair| pair.contains(&index));

            let (label, mut style) = if tile.is_revealed() {
                (
                    format!("[{}|{}]", tile.low(), tile.high()),
                    Style::default().fg(Color::Green),
                )
            } else if flipped {
                (
                    format!("[{}|{}]", tile.low(), tile.high()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("[ ? ]".to_string(), Style::default().fg(Color::DarkGray))
            };

            if index == app.cursor && app.input_mode == InputMode::Picking {
                style = style.add_modifier(Modifier::REVERSED);
            }

            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Board "),
    );
    f.render_widget(board, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.pairs_found();
    let total = app.total_pairs();
    let ratio = if total == 0 {
        0.0
    } else {
        found as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Pairs matched "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{found}/{total}"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|message| {
            let style = match message.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(message.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Messages "));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Picking => "←↑↓→ move · Enter flip · n new board · q quit",
        InputMode::WinCelebration => "n new board · q quit",
    };

    let status = if let Some(best) = app.stats.best_attempts {
        format!(
            "Attempts: {} │ Games: {} │ Best: {best} │ {hints}",
            app.attempts, app.stats.games_completed
        )
    } else {
        format!("Attempts: {} │ {hints}", app.attempts)
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
