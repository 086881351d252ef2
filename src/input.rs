use std::collections::VecDeque;
use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("expected an integer, found `{0}`")]
    NotAnInteger(String),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Whitespace-separated tokens pulled from a reader one line at a time, so an
/// interactive session never blocks on more input than it needs.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    pub fn next_int(&mut self) -> Result<i64, InputError> {
        let tok = self.next_token()?;
        tok.parse().map_err(|_| InputError::NotAnInteger(tok))
    }
}
