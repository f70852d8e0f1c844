//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CellState, Letter};
use crate::output::formatters::create_progress_bar;
use crate::recommender::{Analysis, WordScore};
use crate::settings::SettingsRepository;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: SettingsRepository>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_suggestion_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 SOLVLE - Wordle Assistant")
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

fn render_board_panel<R: SettingsRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn cell_style(state: CellState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        CellState::Blank => Style::default().fg(Color::DarkGray),
        CellState::Neutral => base.fg(Color::White).bg(Color::Black),
        CellState::Excluded => base.fg(Color::Gray).bg(Color::DarkGray),
        CellState::Unsure => base.fg(Color::Black).bg(Color::Yellow),
        CellState::Known => base.fg(Color::Black).bg(Color::Green),
        CellState::Contradiction => base.fg(Color::White).bg(Color::Red),
    }
}

fn render_board<R: SettingsRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let board = app.board.board();
    let cursor = app.board.cursor();

    let lines: Vec<Line> = (0..board.attempts())
        .map(|attempt| {
            let mut spans = Vec::with_capacity(board.word_length() + 2);
            for pos in 0..board.word_length() {
                let text = board
                    .get(attempt, pos)
                    .map_or_else(|| " · ".to_string(), |l| format!(" {l} "));
                let mut style = cell_style(app.board.cell_state(attempt, pos));
                if app.selection == Some((attempt, pos)) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                if cursor.attempt == attempt && cursor.letter == pos {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(" "));
            }
            spans.push(row_score_span(app, attempt));
            Line::from(spans)
        })
        .collect();

    let title = format!(
        " Board {}x{} ",
        app.board.attempts(),
        app.board.word_length()
    );
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn row_score_span<R: SettingsRepository>(app: &App<R>, attempt: usize) -> Span<'static> {
    if let Some(score) = app.board.row_score(attempt) {
        Span::styled(
            format!(
                " [{}] {:.0}% ~{:.1} left",
                create_progress_bar(score.fishing_score, 1.0, 8),
                score.fishing_score * 100.0,
                score.remaining_words
            ),
            Style::default().fg(Color::Cyan),
        )
    } else if app.board.row_score_pending(attempt) {
        Span::styled(" scoring…", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw("")
    }
}

fn render_keyboard<R: SettingsRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
    let store = app.board.store();

    let lines: Vec<Line> = ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .filter_map(Letter::from_char)
                .map(|letter| {
                    let style = if !store.is_available(letter) {
                        Style::default().fg(Color::DarkGray)
                    } else if (0..store.word_length()).any(|pos| store.is_known_at(pos, letter)) {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else if store.is_placed_anywhere(letter) {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!("{letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<R: SettingsRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
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

fn render_suggestion_panel<R: SettingsRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let Some(analysis) = app.board.latest_analysis() else {
        let text = app.board.last_error().map_or_else(
            || "Waiting for suggestions…".to_string(),
            |e| format!("Recommender unavailable: {e}"),
        );
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Suggestions ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let limit = app.board.settings().results;
    let viable_len = analysis.word_list.len().min(limit);
    let fishing_len = analysis.fishing_words.len().min(limit);

    render_word_pane(
        f,
        chunks[0],
        &format!(" Viable words ({}) ", analysis.total_words),
        &analysis.word_list[..viable_len],
        app.highlight,
        Color::Green,
    );
    render_word_pane(
        f,
        chunks[1],
        " Fishing words ",
        &analysis.fishing_words[..fishing_len],
        app.highlight.and_then(|i| i.checked_sub(viable_len)),
        Color::Yellow,
    );
    let best = analysis.best_words.as_deref().unwrap_or_default();
    render_word_pane(
        f,
        chunks[2],
        " Best partitioning ",
        &best[..best.len().min(limit)],
        app.highlight
            .and_then(|i| i.checked_sub(viable_len + fishing_len)),
        Color::Magenta,
    );
    render_ruts(f, analysis, chunks[3]);
}

fn render_word_pane(
    f: &mut Frame,
    area: Rect,
    title: &str,
    words: &[WordScore],
    highlight: Option<usize>,
    color: Color,
) {
    let items: Vec<ListItem> = words
        .iter()
        .enumerate()
        .map(|(i, ws)| {
            let line = format!("{:<9} {:.3}", ws.word.to_uppercase(), ws.freq_score);
            let style = if highlight == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_ruts(f: &mut Frame, analysis: &Analysis, area: Rect) {
    let lines: Vec<Line> = analysis
        .known_positions
        .iter()
        .flatten()
        .map(|rut| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", rut.position),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(rut.words.join(" ").to_uppercase()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Ruts ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_input<R: SettingsRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match &app.input_mode {
        InputMode::Board => (
            " Type letters | Enter: submit row | Backspace: delete ".to_string(),
            String::new(),
            Color::Yellow,
        ),
        InputMode::Solution(text) => (
            " Auto-colour solution (empty to turn off) | ESC to cancel ".to_string(),
            text.clone(),
            Color::Cyan,
        ),
        InputMode::Feedback { attempt, text } => (
            format!(" Feedback for row {} (G=Green Y=Yellow -=Gray) | ESC to cancel ", attempt + 1),
            text.clone(),
            Color::Magenta,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status<R: SettingsRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let restriction = Paragraph::new(app.board.restriction())
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().title(" Restriction ").borders(Borders::ALL));
    f.render_widget(restriction, chunks[0]);

    let selected = app
        .selected_state()
        .map_or_else(|| "-".to_string(), |state| state.label().to_string());
    let auto = app
        .board
        .auto_color()
        .map_or_else(String::new, |w| format!(" | auto {w}"));
    let cell = Paragraph::new(format!("Cell: {selected}{auto}"))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(cell, chunks[1]);

    let help = Paragraph::new(
        "Space mark | Tab pick | ^W use | F2 auto | F3 colours | F5 reset | F6 excl | F7-10 size | Esc quit",
    )
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
