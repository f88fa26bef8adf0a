//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use blucc::parser::{Token, EOF, SOF};

/// Builds token sequences directly, bypassing the lexer, so cursor and parser
/// tests can state their input token by token.
pub struct TokenBuilder {
    tokens: Vec<Token>,
    next_line: i32,
}

impl TokenBuilder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            next_line: 1,
        }
    }

    /// Adds one token at an explicit position.
    pub fn token(mut self, line: i32, column: i32, text: &str) -> Self {
        self.tokens.push(Token::new(None, line, column, text));
        self
    }

    /// Adds a prebuilt token as-is.
    pub fn raw(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    /// Adds one line of whitespace-separated tokens, tracking line numbers
    /// across calls and deriving each token's column from its position in the
    /// line text.
    pub fn line(mut self, text: &str) -> Self {
        let line = self.next_line;
        let chars: Vec<char> = text.chars().collect();
        let mut index = 0;
        while index < chars.len() {
            if chars[index].is_whitespace() {
                index += 1;
                continue;
            }
            let start = index;
            while index < chars.len() && !chars[index].is_whitespace() {
                index += 1;
            }
            let word: String = chars[start..index].iter().collect();
            self.tokens
                .push(Token::new(None, line, (start + 1) as i32, &word));
        }
        self.next_line += 1;
        self
    }

    /// Wraps the accumulated tokens in the SOF and EOF sentinels.
    pub fn build(self) -> Vec<Token> {
        let mut tokens = vec![SOF.clone()];
        tokens.extend(self.tokens);
        tokens.push(EOF.clone());
        tokens
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
