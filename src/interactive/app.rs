//! TUI application state and logic

use crate::game::{Resolution, RoundStatus, Session};
use crate::solver::{Solver, Suggestion};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub solver: Solver<'a>,
    pub hint: Option<Suggestion>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        let solver = Solver::new(session.words());
        Self {
            session,
            solver,
            hint: None,
            messages: vec![Message {
                text: "Type a letter to guess. '?' for a hint, Esc to quit.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Play a typed character as a guess
    pub fn handle_guess(&mut self, c: char) {
        match self.session.submit(&c.to_string()) {
            Ok(turn) => {
                self.hint = None;
                match turn.resolution {
                    Resolution::Hit { .. } => {
                        let text = format!("Yes! '{}' is in the word.", turn.letter);
                        self.add_message(&text, MessageStyle::Success);
                    }
                    Resolution::Miss => {
                        let text = format!("Incorrect! No '{}'.", turn.letter);
                        self.add_message(&text, MessageStyle::Error);
                    }
                }

                let word = self.session.round().word().text().to_uppercase();
                match turn.status {
                    RoundStatus::Won => {
                        let text = format!("🎉 You won! The word was {word}.");
                        self.add_message(&text, MessageStyle::Success);
                        self.round_over();
                    }
                    RoundStatus::Lost => {
                        let text = format!("💀 Sorry, you lost! The word was {word}.");
                        self.add_message(&text, MessageStyle::Error);
                        self.round_over();
                    }
                    RoundStatus::InProgress => {}
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn round_over(&mut self) {
        self.input_mode = InputMode::RoundOver;
        self.add_message("Play again? (y/n)", MessageStyle::Info);
    }

    /// Ask the solver for the next letter
    pub fn show_hint(&mut self) {
        self.hint = self.solver.suggest(self.session.round());
        match self.hint {
            Some(hint) => {
                let text = format!(
                    "Try '{}' ({:.0}% of {} candidates)",
                    hint.letter,
                    hint.hit_chance(),
                    hint.candidates
                );
                self.add_message(&text, MessageStyle::Info);
            }
            None => self.add_message("No hint available!", MessageStyle::Error),
        }
    }

    pub fn new_round(&mut self) {
        self.session.start_round();
        self.hint = None;
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round started!", MessageStyle::Info);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
            debug!("key {:?} in {:?}", key.code, app.input_mode);

            match (key.code, app.input_mode) {
                (KeyCode::Char('c'), _) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (KeyCode::Esc, _) => {
                    app.should_quit = true;
                }
                (KeyCode::Char('?') | KeyCode::Tab, InputMode::Guessing) => {
                    app.show_hint();
                }
                (KeyCode::Char(c), InputMode::Guessing) => {
                    app.handle_guess(c);
                }
                (KeyCode::Char('y' | 'Y'), InputMode::RoundOver) => {
                    app.new_round();
                }
                (KeyCode::Char(_) | KeyCode::Enter, InputMode::RoundOver) => {
                    app.should_quit = true;
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
