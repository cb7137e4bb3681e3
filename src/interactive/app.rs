//! TUI application state and logic

use crate::dictionary::DictionaryChecker;
use crate::engine::{GameEngine, SubmissionResult};
use crate::output::formatters::result_message;
use crate::wordlists::RootWordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the input box accepts
const MAX_INPUT_LEN: usize = 24;

/// Application state
pub struct App<D: DictionaryChecker, R: RootWordSource> {
    pub engine: GameEngine<D, R>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Rules,
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

impl<D: DictionaryChecker, R: RootWordSource> App<D, R> {
    #[must_use]
    pub fn new(engine: GameEngine<D, R>) -> Self {
        Self {
            engine,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Make words from the letters up top. Press ? for scoring.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Submit the input buffer as a word
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let result = self.engine.submit(&input);

        let Some((title, message)) = result_message(result) else {
            return;
        };

        if let SubmissionResult::Accepted(points) = result {
            self.add_message(
                &format!("{} +{points}", input.trim().to_lowercase()),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("{title} {message}"), MessageStyle::Error);
            // Keep the rejected word so it can be corrected
            self.input_buffer = input;
        }
    }

    pub fn new_round(&mut self) {
        self.engine.start_new_round();
        self.input_buffer.clear();
        self.add_message(
            &format!("New word: {}", self.engine.root_word().to_uppercase()),
            MessageStyle::Info,
        );
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT_LEN && !c.is_control() {
            self.input_buffer.push(c);
        }
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
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Rules => {
                // Any key closes the legend
                self.input_mode = InputMode::Typing;
            }
            InputMode::Typing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.input_mode = InputMode::Rules,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: DictionaryChecker, R: RootWordSource>(app: App<D, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(total) => println!("Final score: {total}"),
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut app: App<D, R>) -> Result<u32>
where
    B: ratatui::backend::Backend,
    D: DictionaryChecker,
    R: RootWordSource,
{
    if app.engine.round() == 0 {
        app.engine.start_new_round();
    }

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.engine.total_score())
}
