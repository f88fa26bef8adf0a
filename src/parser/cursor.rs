//! Clamped cursor over a lexed token sequence.
//!
//! All reads clamp into the token buffer, so a peek at any offset answers
//! with the SOF or EOF sentinel instead of panicking. The cursor also tracks
//! whether the statement in progress was declared multiline, a flag that
//! self-clears on the first line change.

use super::error::CursorError;
use super::lexer::{Token, EOF, SOF};

pub struct Cursor {
    tokens: Vec<Token>,
    index: usize,
    in_multiline_stmt: bool,
}

impl Cursor {
    /// Wraps a lexed token sequence. An empty input is normalized to a
    /// sentinel-only sequence so every read has something to clamp to.
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = if tokens.is_empty() {
            vec![SOF.clone(), EOF.clone()]
        } else {
            tokens
        };
        Self {
            tokens,
            index: 0,
            in_multiline_stmt: false,
        }
    }

    fn clamp(&self, offset: isize) -> usize {
        let target = self.index as isize + offset;
        target.clamp(0, self.tokens.len() as isize - 1) as usize
    }

    /// The token at the given signed offset from the cursor, clamped to the
    /// sequence bounds.
    pub fn peek(&self, offset: isize) -> &Token {
        &self.tokens[self.clamp(offset)]
    }

    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    pub fn current_text(&self) -> &str {
        self.current_token().text()
    }

    pub fn current_line(&self) -> i32 {
        self.current_token().line()
    }

    pub fn current_column(&self) -> i32 {
        self.current_token().column()
    }

    pub fn current_token_matches(&self, text: &str) -> bool {
        self.current_token().matches(text)
    }

    pub fn current_token_matches_any(&self, texts: &[&str]) -> bool {
        self.current_token().matches_any(texts)
    }

    pub fn peek_matches(&self, offset: isize, text: &str) -> bool {
        self.peek(offset).matches(text)
    }

    pub fn peek_matches_any(&self, offset: isize, texts: &[&str]) -> bool {
        self.peek(offset).matches_any(texts)
    }

    /// True if the token at the given offset is the EOF sentinel.
    pub fn at_eof(&self, offset: isize) -> bool {
        self.peek(offset).is_eof()
    }

    /// True if the current token is the last one on its source line.
    pub fn at_end_of_line(&self) -> bool {
        self.at_eof(0) || self.peek(1).line() != self.current_line()
    }

    /// True if the current token is the first one on its source line.
    pub fn at_start_of_line(&self) -> bool {
        self.index == 0 || self.peek(-1).line() != self.current_line()
    }

    /// Moves the cursor one token forward. Fails when the cursor already
    /// stands on the EOF sentinel; the cursor is unchanged on failure.
    /// Crossing a line boundary clears the multiline-statement flag.
    pub fn advance(&mut self) -> Result<(), CursorError> {
        if self.index + 1 >= self.tokens.len() {
            return Err(CursorError::AtEof);
        }
        let previous_line = self.current_line();
        self.index += 1;
        if self.current_line() != previous_line {
            self.in_multiline_stmt = false;
        }
        Ok(())
    }

    /// Moves the cursor forward by `count` tokens, stopping at the first
    /// failed step.
    pub fn advance_by(&mut self, count: usize) -> Result<(), CursorError> {
        for _ in 0..count {
            self.advance()?;
        }
        Ok(())
    }

    /// If the current token's text equals `expected`, consumes it and returns
    /// it; otherwise fails without moving.
    pub fn consume(&mut self, expected: &str) -> Result<Token, CursorError> {
        if !self.current_token_matches(expected) {
            return Err(CursorError::TokenMismatch {
                expected: expected.to_string(),
                found: self.current_token().clone(),
            });
        }
        let consumed = self.current_token().clone();
        self.advance()?;
        Ok(consumed)
    }

    /// Marks the statement in progress as spanning multiple lines; the mark
    /// clears automatically when the cursor crosses a line boundary.
    pub fn set_multiline_stmt(&mut self) {
        self.in_multiline_stmt = true;
    }

    pub fn in_multiline_stmt(&self) -> bool {
        self.in_multiline_stmt
    }

    /// The token at an absolute index, clamped to the sequence bounds.
    pub fn token_at(&self, index: usize) -> &Token {
        &self.tokens[index.min(self.tokens.len() - 1)]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
