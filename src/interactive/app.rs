//! TUI application state and logic

use crate::core::{LENGTH, sanitize};
use crate::game::{GameSession, GameStatus, GuessError};
use crate::output::formatters::plural;
use crate::rules::Mode;
use crate::scores::{ScoreRecord, ScoreStore, record_win};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub scores: ScoreRecord,
    pub should_quit: bool,
    pub input_mode: InputMode,
    store: Box<dyn ScoreStore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
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

impl App {
    #[must_use]
    pub fn new(mode: Mode, store: Box<dyn ScoreStore>) -> Self {
        Self::with_session(GameSession::new(mode), store)
    }

    /// Start from an existing session
    #[must_use]
    pub fn with_session(session: GameSession, store: Box<dyn ScoreStore>) -> Self {
        let scores = store.record();
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            scores,
            should_quit: false,
            input_mode: InputMode::Typing,
            store,
        };
        app.add_message(
            "Guess the 5-digit number (00000-99999) in 6 tries.",
            MessageStyle::Info,
        );
        app.add_message(
            &format!("Mode: {} - {}", app.session.mode(), app.session.mode().description()),
            MessageStyle::Info,
        );
        app
    }

    /// Append typed text, keeping only digits and at most five of them
    pub fn push_input(&mut self, c: char) {
        self.input_buffer.push(c);
        self.input_buffer = sanitize(&self.input_buffer);
    }

    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Ok(turn) => {
                self.input_buffer.clear();
                match turn.status {
                    GameStatus::Won { tries } => {
                        self.scores = record_win(self.store.as_mut(), tries as u32);
                        self.input_mode = InputMode::GameOver;

                        let celebration = match tries {
                            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            &format!(
                                "Solved in {tries} {}. Press 'n' for new game or 'q' to quit.",
                                plural(tries as u32, "try", "tries")
                            ),
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!("Out of guesses! The number was {}.", self.session.secret()),
                            MessageStyle::Error,
                        );
                    }
                    GameStatus::InProgress | GameStatus::GaveUp => {
                        let left = self.session.remaining_guesses();
                        self.add_message(
                            &format!("{left} {} left", plural(left as u32, "guess", "guesses")),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(GuessError::Malformed(e)) => self.add_message(&e.to_string(), MessageStyle::Error),
            Err(GuessError::Rejected(rejection)) => {
                self.add_message(
                    &format!("{} mode: {rejection}", self.session.mode()),
                    MessageStyle::Error,
                );
            }
            Err(GuessError::GameOver) => {
                self.input_mode = InputMode::GameOver;
                self.add_message(&GuessError::GameOver.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn give_up(&mut self) {
        if self.session.status().is_over() {
            return;
        }
        self.session.give_up();
        self.input_buffer.clear();
        self.input_mode = InputMode::GameOver;
        self.add_message(
            &format!("You gave up. The number was {}.", self.session.secret()),
            MessageStyle::Error,
        );
    }

    pub fn cycle_mode(&mut self) {
        let mode = self.session.mode().next();
        self.session.set_mode(mode);
        self.add_message(
            &format!("Mode: {mode} - {}", mode.description()),
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.session.mode());
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started! A fresh number is waiting.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Whether the input row holds a full guess
    #[must_use]
    pub fn input_complete(&self) -> bool {
        self.input_buffer.len() == LENGTH
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('m') => self.cycle_mode(),
            _ if self.input_mode == InputMode::GameOver => {}
            KeyCode::Char('g') => self.give_up(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.push_input(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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
            break;
        }
    }

    Ok(())
}
