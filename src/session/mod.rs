//! Interactive session driver
//!
//! A [`Session`] owns one [`EvaluationContext`] for its whole lifetime and
//! feeds it one input line at a time, keeping a bounded transcript of what was
//! entered and what came back. Both front ends (the line REPL and the TUI) sit
//! on top of this type.

use crate::interpreter::constants::{DEFAULT_ADDRESS_BASE, DEFAULT_HISTORY_LIMIT};
use crate::interpreter::engine::evaluate;
use crate::interpreter::errors::RuntimeError;
use crate::memory::{Address, EvaluationContext};
use crate::parser::parse::ParseError;
use crate::parser::parse_exp;
use crate::printer::render;
use log::{info, warn};
use std::collections::VecDeque;
use std::fmt;

/// Word that ends a session when entered on its own
pub const QUIT_COMMAND: &str = "quit";

/// Runtime settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Address given to the first name the session allocates
    pub address_base: Address,
    /// Maximum number of transcript entries retained
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            address_base: DEFAULT_ADDRESS_BASE,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// What a submitted line turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing happened
    Empty,
    /// The quit command was entered
    Quit,
    /// The line parsed and evaluated
    Value { rendered: String, value: i32 },
}

/// A line that failed either to parse or to evaluate
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl SessionError {
    /// Short category name; runtime errors report their own kind
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::Parse(_) => "ParseError",
            SessionError::Runtime(err) => err.kind(),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Parse(err) => write!(f, "{}", err),
            SessionError::Runtime(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Parse(err) => Some(err),
            SessionError::Runtime(err) => Some(err),
        }
    }
}

impl From<ParseError> for SessionError {
    fn from(err: ParseError) -> Self {
        SessionError::Parse(err)
    }
}

impl From<RuntimeError> for SessionError {
    fn from(err: RuntimeError) -> Self {
        SessionError::Runtime(err)
    }
}

/// One submitted line and its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub input: String,
    /// Unparsed form; `None` when the line did not parse
    pub rendered: Option<String>,
    /// The value, or the error message
    pub result: Result<i32, String>,
}

impl TranscriptEntry {
    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }
}

/// A running interpreter session
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    context: EvaluationContext,
    transcript: VecDeque<TranscriptEntry>,
    dropped: usize,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            config,
            context: EvaluationContext::with_base(config.address_base),
            transcript: VecDeque::new(),
            dropped: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The memory model every line is evaluated against
    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    /// Retained entries, oldest first
    pub fn transcript(&self) -> impl Iterator<Item = &TranscriptEntry> + '_ {
        self.transcript.iter()
    }

    pub fn transcript_len(&self) -> usize {
        self.transcript.len()
    }

    /// Number of entries discarded to stay within the history limit
    pub fn dropped_entries(&self) -> usize {
        self.dropped
    }

    /// Process one line of input and record it in the transcript
    pub fn submit(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let input = line.trim();

        if input.is_empty() {
            return Ok(Outcome::Empty);
        }
        if input == QUIT_COMMAND {
            return Ok(Outcome::Quit);
        }

        let expr = match parse_exp(input) {
            Ok(expr) => expr,
            Err(err) => {
                self.record(TranscriptEntry {
                    input: input.to_string(),
                    rendered: None,
                    result: Err(err.to_string()),
                });
                return Err(err.into());
            }
        };

        let rendered = render(&expr);
        let result = evaluate(&expr, &mut self.context);

        match &result {
            Ok(value) => info!("{} => {}", rendered, value),
            Err(err) => info!("{} failed: {}", rendered, err),
        }

        self.record(TranscriptEntry {
            input: input.to_string(),
            rendered: Some(rendered.clone()),
            result: result.clone().map_err(|err| err.to_string()),
        });

        let value = result?;
        Ok(Outcome::Value { rendered, value })
    }

    /// Parse and evaluate `source` against the session context without
    /// touching the transcript
    pub fn evaluate_line(&mut self, source: &str) -> Result<i32, SessionError> {
        let expr = parse_exp(source)?;
        Ok(evaluate(&expr, &mut self.context)?)
    }

    fn record(&mut self, entry: TranscriptEntry) {
        self.transcript.push_back(entry);

        let mut dropped_now = 0;
        while self.transcript.len() > self.config.history_limit {
            self.transcript.pop_front();
            dropped_now += 1;
        }

        if dropped_now > 0 {
            self.dropped += dropped_now;
            warn!(
                "Transcript limit of {} reached; dropped {} oldest entr{}",
                self.config.history_limit,
                dropped_now,
                if dropped_now == 1 { "y" } else { "ies" }
            );
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionConfig::default())
    }
}
