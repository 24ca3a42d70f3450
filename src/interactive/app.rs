//! TUI application state and logic

use crate::commands::{
    TextResult, WordResult, process_text, process_word, text_artifact, word_artifact,
    write_artifact,
};
use crate::error::{InputError, Warning};
use crate::output::formatters::warning_line;
use crate::resolver::ResolveOptions;
use crate::session::Session;
use crate::source::SynonymSource;
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
use std::path::PathBuf;

/// Default file name for saved results
pub const DEFAULT_SAVE_PATH: &str = "synonym_replaced_text.txt";

/// Application state
pub struct App<'a, S: SynonymSource> {
    pub session: Session,
    pub source: &'a S,
    pub options: ResolveOptions,
    pub mode: LookupMode,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub path_buffer: String,
    pub output: Option<Output>,
    pub messages: Vec<Message>,
    pub save_path: PathBuf,
    pub scroll: u16,
    pub should_quit: bool,
}

/// What a submission does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Replace words in the whole text
    Text,
    /// List synonyms for one word
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    DictionaryPath,
}

/// Last successful result
#[derive(Debug, Clone)]
pub enum Output {
    Word(WordResult),
    Text(TextResult),
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

impl<'a, S: SynonymSource> App<'a, S> {
    #[must_use]
    pub fn new(session: Session, source: &'a S, options: ResolveOptions) -> Self {
        let intro = format!(
            "{} | Enter: submit | Tab: switch mode | Ctrl+O: dictionary | Ctrl+S: save",
            session.messages().title
        );

        Self {
            session,
            source,
            options,
            mode: LookupMode::Text,
            input_mode: InputMode::Editing,
            input_buffer: String::new(),
            path_buffer: String::new(),
            output: None,
            messages: vec![Message {
                text: intro,
                style: MessageStyle::Info,
            }],
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LookupMode::Text => LookupMode::Word,
            LookupMode::Word => LookupMode::Text,
        };
    }

    /// Process the input buffer in the current mode
    pub fn submit(&mut self) {
        let messages = self.session.messages();
        self.scroll = 0;

        match self.mode {
            LookupMode::Word => {
                match process_word(&self.input_buffer, &self.session, self.source) {
                    Ok(result) => {
                        self.report_warnings(&result.warnings);
                        if result.candidates.is_empty() {
                            self.add_message(messages.no_synonyms, MessageStyle::Info);
                        }
                        self.output = Some(Output::Word(result));
                    }
                    Err(error) => self.report_input_error(&error),
                }
            }
            LookupMode::Text => {
                match process_text(&self.input_buffer, &self.session, self.source, self.options) {
                    Ok(result) => {
                        self.report_warnings(&result.warnings);
                        if result.has_replacements() {
                            self.add_message(
                                &format!("{}: {}", messages.replaced_words, result.report.len()),
                                MessageStyle::Success,
                            );
                        } else {
                            self.add_message(messages.no_replacements, MessageStyle::Info);
                        }
                        self.output = Some(Output::Text(result));
                    }
                    Err(error) => self.report_input_error(&error),
                }
            }
        }
    }

    /// Load the dictionary named in the path buffer
    pub fn load_dictionary(&mut self) {
        let messages = self.session.messages();
        let path = self.path_buffer.trim().to_string();

        match self.session.load_dictionary(&path) {
            Ok(count) => self.add_message(&messages.loaded(count), MessageStyle::Success),
            Err(error) => self.add_message(
                &format!("{}: {error}", messages.dictionary_error),
                MessageStyle::Error,
            ),
        }

        self.path_buffer.clear();
        self.input_mode = InputMode::Editing;
    }

    /// Plain-text artifact for the current output, if there is one to save
    #[must_use]
    pub fn artifact(&self) -> Option<String> {
        let messages = self.session.messages();
        match &self.output {
            Some(Output::Word(result)) => {
                Some(word_artifact(result, messages)).filter(|text| !text.is_empty())
            }
            Some(Output::Text(result)) => text_artifact(result).map(str::to_string),
            None => None,
        }
    }

    /// Write the current artifact to `save_path`
    pub fn save(&mut self) {
        let messages = self.session.messages();
        let Some(content) = self.artifact() else {
            self.add_message(messages.nothing_to_save, MessageStyle::Error);
            return;
        };

        match write_artifact(&self.save_path, &content) {
            Ok(()) => self.add_message(
                &format!("{} {}", messages.saved_to, self.save_path.display()),
                MessageStyle::Success,
            ),
            Err(error) => self.add_message(&error.to_string(), MessageStyle::Error),
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

    fn report_warnings(&mut self, warnings: &[Warning]) {
        let messages = self.session.messages();
        for warning in warnings {
            self.add_message(&warning_line(warning, messages), MessageStyle::Error);
        }
    }

    fn report_input_error(&mut self, error: &InputError) {
        let messages = self.session.messages();
        let text = messages.input_error(error, self.mode == LookupMode::Word);
        self.add_message(text, MessageStyle::Error);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SynonymSource>(app: App<'_, S>) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<'_, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: SynonymSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode {
                InputMode::DictionaryPath => match key.code {
                    KeyCode::Esc => {
                        app.path_buffer.clear();
                        app.input_mode = InputMode::Editing;
                    }
                    KeyCode::Enter => app.load_dictionary(),
                    KeyCode::Backspace => {
                        app.path_buffer.pop();
                    }
                    KeyCode::Char(c) if !ctrl => app.path_buffer.push(c),
                    _ => {}
                },
                InputMode::Editing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('o') if ctrl => app.input_mode = InputMode::DictionaryPath,
                    KeyCode::Char('s') if ctrl => app.save(),
                    KeyCode::Char('l') if ctrl => app.input_buffer.clear(),
                    KeyCode::Tab => app.toggle_mode(),
                    KeyCode::Up => app.scroll = app.scroll.saturating_sub(1),
                    KeyCode::Down => app.scroll = app.scroll.saturating_add(1),
                    KeyCode::Enter => {
                        // Lookups block, so show the pending state first
                        app.messages.push(Message {
                            text: "…".to_string(),
                            style: MessageStyle::Info,
                        });
                        terminal.draw(|f| super::rendering::ui(f, &app))?;
                        app.messages.pop();
                        app.submit();
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Char(c) if !ctrl => app.input_buffer.push(c),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
