//! TUI application state and logic

use crate::config::TargetPicker;
use crate::core::{GameSession, GameStatus, WORD_LENGTH, WordSource, normalize_utterance};
use crate::output::formatters::{outcome_message, rejection_message};
use crate::stats::Statistics;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Longest transcript accepted in voice mode
const MAX_TRANSCRIPT_LEN: usize = 40;

/// Application state
pub struct App<'a, S: WordSource + ?Sized> {
    pub words: &'a S,
    pub picker: TargetPicker,
    pub session: GameSession,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go straight into the guess
    Typing,
    /// The buffer is a transcript and is normalised on submit
    Voice,
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

impl<'a, S: WordSource + ?Sized> App<'a, S> {
    #[must_use]
    pub fn new(words: &'a S, mut picker: TargetPicker) -> Self {
        let session = GameSession::start(picker.next_target(words));

        Self {
            words,
            picker,
            session,
            input_buffer: String::new(),
            input_mode: InputMode::Typing,
            show_help: false,
            messages: vec![Message {
                text: format!("Guess the {WORD_LENGTH}-letter word! Press ? for help."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);

        let guess = match self.input_mode {
            InputMode::Typing => raw,
            InputMode::Voice => {
                if let Some(word) = normalize_utterance(&raw) {
                    self.add_message(&format!("🎤 Heard: {word}"), MessageStyle::Info);
                    word
                } else {
                    self.add_message(
                        &format!("🎤 Didn't catch a {WORD_LENGTH}-letter word"),
                        MessageStyle::Error,
                    );
                    return;
                }
            }
        };

        if let Some(e) = self.session.submit_guess(&guess, self.words).err() {
            self.add_message(&rejection_message(&e), MessageStyle::Error);
            return;
        }

        if let Some(outcome) = outcome_message(&self.session) {
            self.stats.record(&self.session);
            let style = match self.session.status() {
                GameStatus::Won => MessageStyle::Success,
                _ => MessageStyle::Error,
            };
            self.add_message(&outcome, style);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        let target = self.picker.next_target(self.words);
        self.session.reset(target);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn toggle_voice(&mut self) {
        self.input_buffer.clear();
        self.input_mode = match self.input_mode {
            InputMode::Typing => {
                self.add_message(
                    "Voice mode: type or paste what the recogniser heard",
                    MessageStyle::Info,
                );
                InputMode::Voice
            }
            InputMode::Voice => InputMode::Typing,
        };
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            _ if self.show_help => {}
            _ if self.session.is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            },
            KeyCode::Char('?') if self.input_mode == InputMode::Typing => self.show_help = true,
            KeyCode::Tab => self.toggle_voice(),
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }

    fn push_char(&mut self, c: char) {
        match self.input_mode {
            InputMode::Typing => {
                if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            InputMode::Voice => {
                if self.input_buffer.chars().count() < MAX_TRANSCRIPT_LEN {
                    self.input_buffer.push(c);
                }
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource + ?Sized>(app: App<'_, S>) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<'_, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource + ?Sized,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            debug!(games = app.stats.total_games, "leaving TUI");
            break;
        }
    }

    Ok(())
}
