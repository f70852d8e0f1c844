//! TUI application state and logic

use crate::controller::{BoardController, Outgoing};
use crate::core::{CellState, Letter, Pattern};
use crate::recommender::{Dispatcher, Reply};
use crate::settings::SettingsRepository;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

const MAX_MESSAGES: usize = 5;
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App<R: SettingsRepository> {
    pub board: BoardController<R>,
    /// Cell picked with the arrow keys, `(attempt, pos)`
    pub selection: Option<(usize, usize)>,
    /// Index into `suggestions()`
    pub highlight: Option<usize>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing on the board
    Board,
    /// Entering the auto-colour solution
    Solution(String),
    /// Entering a feedback pattern for a row
    Feedback { attempt: usize, text: String },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: SettingsRepository> App<R> {
    #[must_use]
    pub fn new(board: BoardController<R>) -> Self {
        let mut app = Self {
            board,
            selection: None,
            highlight: None,
            input_mode: InputMode::Board,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type a guess and press Enter. Arrows + Space mark letters.",
            MessageStyle::Info,
        );
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Every suggested word across the panes, in display order
    #[must_use]
    pub fn suggestions(&self) -> Vec<&str> {
        let Some(analysis) = self.board.latest_analysis() else {
            return Vec::new();
        };
        let limit = self.board.settings().results;

        let viable = analysis.word_list.iter().take(limit);
        let fishing = analysis.fishing_words.iter().take(limit);
        let best = analysis.best_words.iter().flatten().take(limit);
        viable
            .chain(fishing)
            .chain(best)
            .map(|ws| ws.word.as_str())
            .collect()
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('w') => self.pick_highlighted(),
                _ => {}
            }
            return;
        }

        match self.input_mode.clone() {
            InputMode::Board => self.handle_board_key(key.code),
            InputMode::Solution(text) => self.handle_solution_key(key.code, text),
            InputMode::Feedback { attempt, text } => {
                self.handle_feedback_key(key.code, attempt, text);
            }
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char(c) => {
                if let Some(letter) = Letter::from_char(c) {
                    self.board.select_letter(letter);
                }
            }
            KeyCode::Backspace => {
                self.board.delete_letter();
            }
            KeyCode::Enter => {
                if !self.board.enter_row() {
                    self.add_message("Row is not complete", MessageStyle::Error);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => self.move_selection(code),
            KeyCode::Tab => self.cycle_highlight(true),
            KeyCode::BackTab => self.cycle_highlight(false),
            KeyCode::F(2) => {
                let current = self.board.auto_color().map(ToString::to_string).unwrap_or_default();
                self.input_mode = InputMode::Solution(current);
            }
            KeyCode::F(3) => self.start_feedback(),
            KeyCode::F(5) => {
                self.board.reset();
                self.selection = None;
                self.highlight = None;
                self.add_message("Board reset", MessageStyle::Info);
            }
            KeyCode::F(6) => {
                let excluded = self.board.exclude_all();
                if excluded.is_empty() {
                    self.add_message("Nothing to exclude", MessageStyle::Info);
                } else {
                    self.add_message(&format!("Excluded {excluded}"), MessageStyle::Info);
                }
            }
            KeyCode::F(7) => self.resize(|wl, a| (wl.saturating_sub(1), a)),
            KeyCode::F(8) => self.resize(|wl, a| (wl + 1, a)),
            KeyCode::F(9) => self.resize(|wl, a| (wl, a.saturating_sub(1))),
            KeyCode::F(10) => self.resize(|wl, a| (wl, a + 1)),
            _ => {}
        }
    }

    fn handle_solution_key(&mut self, code: KeyCode, mut text: String) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Board,
            KeyCode::Enter => {
                self.input_mode = InputMode::Board;
                match self.board.set_auto_color(&text) {
                    Ok(()) if text.is_empty() => {
                        self.add_message("Auto-colour off", MessageStyle::Info);
                    }
                    Ok(()) => self.add_message(
                        &format!("Auto-colour against {}", text.to_uppercase()),
                        MessageStyle::Success,
                    ),
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
            KeyCode::Backspace => {
                text.pop();
                self.input_mode = InputMode::Solution(text);
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                text.push(c.to_ascii_uppercase());
                self.input_mode = InputMode::Solution(text);
            }
            _ => {}
        }
    }

    fn handle_feedback_key(&mut self, code: KeyCode, attempt: usize, mut text: String) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Board,
            KeyCode::Enter => {
                self.input_mode = InputMode::Board;
                let Some(pattern) = Pattern::parse(&text) else {
                    self.add_message("Invalid pattern! Use G/Y/-", MessageStyle::Error);
                    return;
                };
                match self.board.apply_feedback(attempt, &pattern) {
                    Ok(true) => self.add_message(
                        &format!("Row {} marked {}", attempt + 1, pattern.to_emoji()),
                        MessageStyle::Success,
                    ),
                    Ok(false) => self.add_message("Row is not complete", MessageStyle::Error),
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
            KeyCode::Backspace => {
                text.pop();
                self.input_mode = InputMode::Feedback { attempt, text };
            }
            KeyCode::Char(c) => {
                text.push(c);
                self.input_mode = InputMode::Feedback { attempt, text };
            }
            _ => {}
        }
    }

    fn start_feedback(&mut self) {
        let cursor = self.board.cursor();
        let attempt = self.selection.map_or_else(
            || {
                if cursor.letter == 0 {
                    cursor.attempt.saturating_sub(1)
                } else {
                    cursor.attempt
                }
            },
            |(attempt, _)| attempt,
        );
        self.input_mode = InputMode::Feedback {
            attempt,
            text: String::new(),
        };
    }

    fn toggle_selected(&mut self) {
        let Some((attempt, pos)) = self.selection else {
            self.add_message("Select a cell with the arrow keys first", MessageStyle::Info);
            return;
        };
        if self.board.toggle_cell(attempt, pos).is_none() {
            self.add_message("That cell cannot be marked", MessageStyle::Error);
        }
    }

    fn move_selection(&mut self, code: KeyCode) {
        let last_row = self.board.cursor().attempt;
        let last_col = self.board.word_length() - 1;
        let (row, col) = self.selection.unwrap_or((last_row, 0));

        self.selection = Some(match code {
            KeyCode::Up => (row.saturating_sub(1), col),
            KeyCode::Down => ((row + 1).min(last_row), col),
            KeyCode::Left => (row, col.saturating_sub(1)),
            KeyCode::Right => (row, (col + 1).min(last_col)),
            _ => (row, col),
        });
    }

    fn cycle_highlight(&mut self, forward: bool) {
        let count = self.suggestions().len();
        if count == 0 {
            self.highlight = None;
            return;
        }
        self.highlight = Some(match self.highlight {
            None if forward => 0,
            None => count - 1,
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
        });
    }

    fn pick_highlighted(&mut self) {
        let Some(word) = self
            .highlight
            .and_then(|i| self.suggestions().get(i).map(|w| (*w).to_string()))
        else {
            return;
        };
        match self.board.select_word(&word) {
            Ok(true) => self.highlight = None,
            Ok(false) => self.add_message("Board is full", MessageStyle::Error),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn resize(&mut self, change: impl FnOnce(usize, usize) -> (usize, usize)) {
        let (word_length, attempts) = change(self.board.word_length(), self.board.attempts());
        let result = self.board.update_settings(|s| {
            s.word_length = word_length;
            s.attempts = attempts;
        });
        match result {
            Ok(()) => {
                self.selection = None;
                self.highlight = None;
                self.add_message(
                    &format!("Board is now {attempts} x {word_length}"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Feed a finished request back into the board
    pub fn handle_reply(&mut self, reply: Reply) {
        match reply {
            Reply::Analysis {
                request,
                result: Ok(analysis),
            } => {
                if self.board.accept_analysis(&request, analysis) {
                    self.highlight = None;
                }
            }
            Reply::Analysis {
                request,
                result: Err(e),
            } => {
                if self.board.record_failure(&request, &e) {
                    self.add_message(&format!("Suggestions unavailable: {e}"), MessageStyle::Error);
                }
            }
            Reply::RowScore {
                attempt,
                word,
                result: Ok(score),
            } => {
                self.board.accept_row_score(attempt, &word, score);
            }
            Reply::RowScore {
                attempt,
                word,
                result: Err(e),
            } => self.board.record_row_score_failure(attempt, &word, &e),
        }
    }

    /// State of the selected cell, for the status bar
    #[must_use]
    pub fn selected_state(&self) -> Option<CellState> {
        self.selection
            .map(|(attempt, pos)| self.board.cell_state(attempt, pos))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: SettingsRepository>(app: App<R>, dispatcher: &Dispatcher) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, dispatcher);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: SettingsRepository>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
    dispatcher: &Dispatcher,
) -> Result<()> {
    loop {
        for outgoing in app.board.take_outgoing() {
            match outgoing {
                Outgoing::Analysis { request, .. } => dispatcher.request_analysis(request),
                Outgoing::RowScore {
                    attempt,
                    word,
                    request,
                } => dispatcher.request_row_score(attempt, word, request),
            }
        }

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        while let Some(reply) = dispatcher.try_recv() {
            app.handle_reply(reply);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Request;
    use crate::recommender::{Analysis, RecommenderError, WordScore};
    use crate::settings::MemorySettingsRepository;

    fn app() -> App<MemorySettingsRepository> {
        App::new(BoardController::new(MemorySettingsRepository::default()).unwrap())
    }

    fn press(app: &mut App<MemorySettingsRepository>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<MemorySettingsRepository>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn scores(words: &[&str]) -> Vec<WordScore> {
        words
            .iter()
            .map(|w| WordScore {
                word: (*w).to_string(),
                freq_score: 1.0,
            })
            .collect()
    }

    fn give_suggestions(app: &mut App<MemorySettingsRepository>, viable: &[&str], fishing: &[&str]) {
        let analysis = Analysis {
            restriction_string: app.board.restriction(),
            total_words: viable.len(),
            word_list: scores(viable),
            fishing_words: scores(fishing),
            best_words: None,
            known_positions: None,
        };
        let request = current_request(app);
        app.handle_reply(Reply::Analysis {
            request,
            result: Ok(analysis),
        });
    }

    fn current_request(app: &mut App<MemorySettingsRepository>) -> Request {
        app.board.take_outgoing();
        app.board.last_requested().unwrap().clone()
    }

    #[test]
    fn typing_and_entering_a_row() {
        let mut app = app();
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.board().row_text(0), "CRANE");
        assert_eq!(app.board.cursor().attempt, 1);
    }

    #[test]
    fn incomplete_row_reports_error() {
        let mut app = app();
        type_text(&mut app, "cr");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn arrows_and_space_mark_cells() {
        let mut app = app();
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selection, Some((0, 1)));

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selected_state(), Some(CellState::Excluded));
    }

    #[test]
    fn selection_cannot_pass_the_cursor_row() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selection, Some((0, 0)));
    }

    #[test]
    fn tab_cycles_and_ctrl_w_picks() {
        let mut app = app();
        give_suggestions(&mut app, &["slate", "crane"], &["moist"]);
        assert_eq!(app.suggestions(), vec!["slate", "crane", "moist"]);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.highlight, Some(1));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.highlight, Some(2));

        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(app.board.board().row_text(0), "MOIST");
        assert_eq!(app.highlight, None);
    }

    #[test]
    fn function_keys_resize_the_board() {
        let mut app = app();
        press(&mut app, KeyCode::F(8));
        assert_eq!(app.board.word_length(), 6);
        press(&mut app, KeyCode::F(10));
        assert_eq!(app.board.attempts(), 7);

        for _ in 0..6 {
            press(&mut app, KeyCode::F(7));
        }
        assert_eq!(app.board.word_length(), 3);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn solution_mode_sets_auto_colour() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        type_text(&mut app, "crate");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Board);
        assert_eq!(app.board.auto_color().unwrap().to_string(), "CRATE");

        type_text(&mut app, "trace");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.cell_state(0, 1), CellState::Known);
    }

    #[test]
    fn feedback_mode_marks_last_entered_row() {
        let mut app = app();
        type_text(&mut app, "slate");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::F(3));
        assert_eq!(
            app.input_mode,
            InputMode::Feedback {
                attempt: 0,
                text: String::new()
            }
        );
        type_text(&mut app, "-Y-GG");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.board.store().known(3), Letter::from_char('t'));
    }

    #[test]
    fn failed_analysis_keeps_previous_suggestions() {
        let mut app = app();
        give_suggestions(&mut app, &["slate"], &[]);
        let request = current_request(&mut app);
        app.handle_reply(Reply::Analysis {
            request,
            result: Err(RecommenderError::NotABase("x".to_string())),
        });
        assert_eq!(app.suggestions(), vec!["slate"]);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn failure_of_replaced_request_is_silent() {
        let mut app = app();
        let old = current_request(&mut app);
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        app.board.toggle_cell(0, 0);
        current_request(&mut app);
        let before = app.messages.len();

        app.handle_reply(Reply::Analysis {
            request: old,
            result: Err(RecommenderError::NotABase("x".to_string())),
        });
        assert_eq!(app.messages.len(), before);
        assert!(app.board.last_error().is_none());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
