//! TUI rendering with ratatui
//!
//! Board grid, keyboard and the solutions panel.

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, ROWS, WORD_LEN};
use crate::game::{GameState, Mode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and keyboard
            Constraint::Percentage(50), // Solutions and messages
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.game.mode() {
        Mode::Play => "🎯 WORDLE FINDER - Play",
        Mode::Assist => "🎯 WORDLE FINDER - Assist",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ROWS as u16 + 2), // Board
            Constraint::Min(5),                  // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn status_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Green => Style::new().fg(Color::Black).bg(Color::Green),
        CellStatus::Yellow => Style::new().fg(Color::Black).bg(Color::Yellow),
        CellStatus::Gray => Style::new().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Unguessed => Style::new().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.game.board();
    let (cursor_row, _) = app.game.cursor();

    let lines: Vec<Line> = (0..ROWS)
        .map(|row| {
            let cells = (0..WORD_LEN).map(|col| {
                let letter = board
                    .letter(row, col)
                    .map_or('_', |l| char::from(l).to_ascii_uppercase());
                let mut style = status_style(board.status(row, col)).add_modifier(Modifier::BOLD);
                if app.game.mode() == Mode::Assist && app.selected == (row, col) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled(format!(" {letter} "), style)
            });

            let marker = if row == cursor_row && app.game.state() == GameState::Playing {
                Span::styled("▶ ", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("  ")
            };
            Line::from(std::iter::once(marker).chain(cells).collect::<Vec<_>>())
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let statuses = app.game.letter_statuses();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            Line::from(
                keys.bytes()
                    .map(|key| {
                        Span::styled(
                            format!(" {} ", char::from(key).to_ascii_uppercase()),
                            status_style(statuses.get(key)),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Solutions
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    render_solutions(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let solutions = app.solutions();
    let title = format!(" Possible solutions: {} ", solutions.total);

    let content: Vec<Line> = if !app.show_solutions {
        vec![Line::from(Span::styled(
            "Hidden - press Tab to show",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if !app.game.board().is_scannable() {
        vec![Line::from("Finish the row to update")]
    } else if solutions.is_empty() {
        vec![Line::from(Span::styled(
            "No words match - check the colours",
            Style::default().fg(Color::Red),
        ))]
    } else {
        let mut lines: Vec<Line> = solutions
            .top(app.limit)
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(vec![
                    Span::raw(format!("{:>3}. ", i + 1)),
                    Span::styled(word.text().to_uppercase(), style),
                ])
            })
            .collect();
        if solutions.total > app.limit {
            lines.push(Line::from(Span::styled(
                format!("  … and {} more", solutions.total - app.limit),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    if let Some(answer) = app.revealed_answer() {
        messages.insert(
            0,
            ListItem::new(format!("Answer: {}", answer.text().to_uppercase()))
                .style(Style::default().fg(Color::Yellow)),
        );
    }

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = format!("Difficulty: {}", app.game.difficulty());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.game.stats();
    let stats_text = format!(
        "Games: {} | Win: {:.0}% | Streak: {} (best {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.longest_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.game.mode() {
        Mode::Play => "Esc: Quit | Enter: Submit | Tab: Solutions | ^N: New | ^D: Difficulty",
        Mode::Assist => "Esc: Quit | Arrows: Select | Space: Colour | ^N: New",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
