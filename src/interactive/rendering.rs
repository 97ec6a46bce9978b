//! TUI rendering with ratatui
//!
//! Gallows, board and message panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::game::MAX_MISSES;
use crate::output::formatters::{gallows, incorrect_letters, spaced_mask};
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
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Board and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_main_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let misses = app.session.round().incorrect().len();
    let color = if misses > MAX_MISSES {
        Color::Red
    } else if misses >= MAX_MISSES - 1 {
        Color::Yellow
    } else {
        Color::White
    };

    let lines: Vec<Line> = gallows(misses)
        .iter()
        .map(|&row| Line::from(Span::styled(row, Style::default().fg(color))))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Word and wrong letters
            Constraint::Length(3), // Misses gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_misses(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();

    let word_line = if round.status().is_over() {
        Span::styled(
            format!(
                "{}   ({})",
                spaced_mask(round.mask()).to_uppercase(),
                round.word().text().to_uppercase()
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            spaced_mask(round.mask()).to_uppercase(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut content = vec![
        Line::from(""),
        Line::from(word_line),
        Line::from(""),
        Line::from(vec![
            Span::raw("Wrong letters: "),
            Span::styled(
                incorrect_letters(round.incorrect()).to_uppercase(),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    if let Some(hint) = app.hint {
        content.push(Line::from(vec![
            Span::raw("Hint: "),
            Span::styled(
                hint.letter.to_string().to_uppercase(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  ({:.0}% of {} candidates)",
                hint.hit_chance(),
                hint.candidates
            )),
        ]));
    }

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_misses(f: &mut Frame, app: &App, area: Rect) {
    let misses = app.session.round().incorrect().len();
    let allowed = MAX_MISSES + 1;
    let progress_pct = ((misses * 100) / allowed).min(100) as u16;

    let gauge = Gauge::default()
        .block(Block::default().title(" Misses ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .percent(progress_pct)
        .label(format!("{misses}/{allowed}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type a letter to guess | ? or TAB for a hint ",
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over! Press 'y' to play again, any other key to quit ",
            Color::Green,
        ),
    };

    let input = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats = app.session.stats();
    let record = Paragraph::new(format!("Wins: {} | Losses: {}", stats.wins, stats.losses))
        .alignment(Alignment::Center);
    f.render_widget(record, chunks[0]);

    let rate = Paragraph::new(format!("Win Rate: {:.0}%", stats.win_rate()))
        .alignment(Alignment::Center);
    f.render_widget(rate, chunks[1]);

    let help = Paragraph::new("Esc: Quit | ?: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
