//! Line sources and numeric parsing for the interactive shell.

use std::io::{BufRead, Write};

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use thiserror::Error;

/// A source of input lines, one per prompt.
pub trait LineSource {
    /// Shows `prompt` and reads one line without its terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input with line editing and in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// Creates a line editor on the controlling terminal.
    pub fn new() -> Result<Self> {
        let config = Config::builder().auto_add_history(true).build();
        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // CTRL-C and CTRL-D both end the session
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Plain buffered input; prompts are written to a separate sink.
pub struct ReaderSource<R, W> {
    reader: R,
    prompts: W,
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    /// Reads lines from `reader`, echoing prompts to `prompts`.
    pub fn new(reader: R, prompts: W) -> Self {
        Self { reader, prompts }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompts, "{prompt}")?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}

/// Errors in user-typed numbers. Reported and re-prompted, never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a valid number of terms")]
    InvalidCount(String),

    #[error("'{0}' is not a valid coefficient")]
    InvalidCoefficient(String),

    #[error("'{0}' is not a valid exponent (expected a non-negative integer)")]
    InvalidExponent(String),
}

/// Parses the number of terms of a polynomial.
pub fn parse_count(s: &str) -> Result<usize, InputError> {
    let s = s.trim();
    s.parse().map_err(|_| InputError::InvalidCount(s.to_string()))
}

/// Parses a finite real coefficient.
pub fn parse_coefficient(s: &str) -> Result<f64, InputError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(c) if c.is_finite() => Ok(c),
        _ => Err(InputError::InvalidCoefficient(s.to_string())),
    }
}

/// Parses a non-negative integer exponent.
pub fn parse_exponent(s: &str) -> Result<u32, InputError> {
    let s = s.trim();
    s.parse().map_err(|_| InputError::InvalidExponent(s.to_string()))
}
