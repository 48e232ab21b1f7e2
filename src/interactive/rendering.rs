//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, LetterState, MAX_ATTEMPTS, WORD_LENGTH, WordSource};
use crate::output::formatters::{HELP_LINES, progress_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Board and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_help {
        render_help(f);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎤 SHOUTDLE")
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

fn tile_style(state: Option<LetterState>) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match state {
        Some(LetterState::Correct) => style.bg(Color::Green).fg(Color::Black),
        Some(LetterState::Present) => style.bg(Color::Yellow).fg(Color::Black),
        Some(LetterState::Absent) => style.bg(Color::DarkGray).fg(Color::White),
        None => style.bg(Color::Black).fg(Color::White),
    }
}

fn render_board<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for (index, row) in session.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some(row) = row {
            for result in row.letters() {
                spans.push(Span::styled(
                    format!(" {} ", result.letter()),
                    tile_style(Some(result.state())),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            // The row being typed shows the typed letters
            let typed: Vec<char> = if index == session.attempts_used()
                && app.input_mode == InputMode::Typing
                && !session.is_over()
            {
                app.input_buffer.chars().collect()
            } else {
                Vec::new()
            };

            for i in 0..WORD_LENGTH {
                let letter = typed.get(i).copied().unwrap_or('·');
                spans.push(Span::styled(format!(" {letter} "), tile_style(None)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
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

fn render_statistics<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![Line::from(format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    ))];

    for guesses in 1..=MAX_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(count.min(20)), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_input<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, color) = if app.session.is_over() {
        match app.session.status() {
            GameStatus::Won => (" 🎉 You won! | n: new game  q: quit ", Color::Green),
            _ => (" Game over | n: new game  q: quit ", Color::Red),
        }
    } else {
        match app.input_mode {
            InputMode::Typing => (" Type your guess | TAB: voice mode ", Color::Yellow),
            InputMode::Voice => (" 🎤 Transcript | TAB: typing mode ", Color::Magenta),
        }
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let progress = progress_label(&app.session).unwrap_or_else(|| "Round finished".to_string());
    f.render_widget(Paragraph::new(progress).alignment(Alignment::Center), chunks[0]);

    let help = Paragraph::new("Enter: submit | Ctrl-N: new game | ?: help | Ctrl-C: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(f.area(), 60, 12);

    let mut lines: Vec<Line> = HELP_LINES.iter().map(|&l| Line::from(l)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc or F1 to close",
        Style::default().fg(Color::DarkGray),
    )));

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" How to Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
