//! Line-oriented terminal I/O with typed parsing of numeric entry.
//!
//! Nothing here panics on bad input: every read returns a `PromptError`
//! that the dispatcher prints before carrying on.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,

    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The console's input and output streams.
pub struct Terminal<'a> {
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}

impl<'a> Terminal<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Terminal { input, output }
    }

    /// Prints `prompt` and reads one line with its line ending removed.
    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Reads a value, falling back to `default` on an empty line.
    pub fn ask_or<T: FromStr>(&mut self, prompt: &str, default: T) -> Result<T, PromptError> {
        match self.read_line(prompt)? {
            None => Err(PromptError::Closed),
            Some(line) if line.trim().is_empty() => Ok(default),
            Some(line) => parse_value(&line),
        }
    }

    /// Reads a value that has no default.
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<T, PromptError> {
        match self.read_line(prompt)? {
            None => Err(PromptError::Closed),
            Some(line) => parse_value(&line),
        }
    }
}

/// Parses trimmed `text`, reporting the offending input on failure.
pub fn parse_value<T: FromStr>(text: &str) -> Result<T, PromptError> {
    let trimmed = text.trim();
    trimmed.parse::<T>().map_err(|_| PromptError::NotANumber(trimmed.to_string()))
}
