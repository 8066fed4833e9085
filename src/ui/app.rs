//! Main TUI application state and logic

use crate::session::{Outcome, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Rows moved by one PageUp/PageDown
const SCROLL_STEP: usize = 5;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Transcript,
    Memory,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Transcript => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Transcript,
        }
    }

    pub fn prev(self) -> Self {
        // Two panes: both directions land on the other one
        self.next()
    }
}

/// The main application state
pub struct App {
    /// The session every submitted line runs in
    pub session: Session,

    /// Text currently being edited
    pub input: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub transcript_scroll: usize,
    pub memory_scroll: usize,

    /// Previously submitted lines, oldest first
    history: Vec<String>,

    /// Position in `history` while recalling, `None` when editing fresh input
    history_index: Option<usize>,

    /// Whether the transcript shows the unparsed form of each line
    pub show_unparsed: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Error kind of the last submitted line, `None` if it succeeded
    pub last_error: Option<&'static str>,
}

impl App {
    pub fn new(session: Session, show_unparsed: bool) -> Self {
        App {
            session,
            input: String::new(),
            focused_pane: FocusedPane::Transcript,
            transcript_scroll: 0,
            memory_scroll: 0,
            history: Vec::new(),
            history_index: None,
            show_unparsed,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_error: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes, input box, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        super::panes::render_transcript_pane(
            frame,
            columns[0],
            self.session.transcript(),
            self.show_unparsed,
            self.focused_pane == FocusedPane::Transcript,
            &mut self.transcript_scroll,
        );

        super::panes::render_memory_pane(
            frame,
            columns[1],
            self.session.context(),
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        super::panes::render_input_line(
            frame,
            main_chunks[1],
            &self.input,
            self.history_index.is_some(),
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.context().len(),
            self.session.transcript_len(),
            self.last_error,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('C') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) => {
                self.history_index = None;
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.history_index = None;
                self.input.pop();
            }
            KeyCode::Up => self.recall_older(),
            KeyCode::Down => self.recall_newer(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::PageUp => {
                let offset = self.focused_scroll();
                *offset = offset.saturating_sub(SCROLL_STEP);
            }
            KeyCode::PageDown => {
                let offset = self.focused_scroll();
                *offset = offset.saturating_add(SCROLL_STEP);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Transcript => &mut self.transcript_scroll,
            FocusedPane::Memory => &mut self.memory_scroll,
        }
    }

    /// Submit the input line to the session
    fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.history_index = None;

        let trimmed = line.trim();
        if !trimmed.is_empty() && self.history.last().map(String::as_str) != Some(trimmed) {
            self.history.push(trimmed.to_string());
            if self.history.len() > self.session.config().history_limit {
                self.history.remove(0);
            }
        }

        match self.session.submit(&line) {
            Ok(Outcome::Empty) => {}
            Ok(Outcome::Quit) => {
                self.should_quit = true;
            }
            Ok(Outcome::Value { rendered, value }) => {
                self.status_message = format!("{} → {}", rendered, value);
                self.last_error = None;
            }
            Err(err) => {
                self.status_message = format!("Error: {}", err);
                self.last_error = Some(err.kind());
            }
        }

        // Follow the newest entry
        self.transcript_scroll = usize::MAX;
    }

    fn recall_older(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input = self.history[index].clone();
    }

    fn recall_newer(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.input = self.history[index + 1].clone();
        } else {
            self.history_index = None;
            self.input.clear();
        }
    }
}
