//! Lexer for the Bluc language.
//!
//! A single left-to-right pass over already-decommented source lines. The
//! state machine tracks string mode, a one-shot escape flag, and a one-shot
//! lookahead flag that glues two-character operators such as `==` and `<=`
//! into a single token.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use super::error::LexError;

/// Single-character tokens that always stand alone.
pub const PUNCTUATION_CHARS: &[char] = &['(', ')', '{', '}', '[', ']', ','];

/// Characters that may start a one- or two-character operator token.
pub const OPERATOR_CHARS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '!', '<', '>', '|', '&', '^',
];

/// Synthetic start-of-file marker; always the first token of a lexed sequence.
pub static SOF: Lazy<Token> = Lazy::new(|| Token {
    kind: TokenKind::Sof,
    file_path: None,
    line: -1,
    column: -1,
    text: "__BLUC_SOF__".to_string(),
});

/// Synthetic end-of-file marker; always the last token of a lexed sequence.
pub static EOF: Lazy<Token> = Lazy::new(|| Token {
    kind: TokenKind::Eof,
    file_path: None,
    line: -1,
    column: -1,
    text: "__BLUC_EOF__".to_string(),
});

/// Returns true if `text` is a lone punctuation mark token.
pub fn is_punctuation(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if PUNCTUATION_CHARS.contains(&c)
    )
}

/// Returns true if `text` consists entirely of operator-class characters.
pub fn is_operator(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| OPERATOR_CHARS.contains(&c))
}

/// Distinguishes the two sentinels from tokens produced by lexing. Sentinels
/// are recognized by kind, never by text, so source text that happens to spell
/// a sentinel's text cannot be mistaken for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Sof,
    Eof,
    Lexed,
}

/// A classified, position-tagged lexeme. Immutable once produced by the
/// lexer; `Clone` is the deep copy used by error values and test fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    file_path: Option<PathBuf>,
    line: i32,
    column: i32,
    text: String,
}

impl Token {
    /// Creates a lexed token. Line and column are 1-based and refer to the
    /// first character that contributed to the token.
    pub fn new(
        file_path: Option<PathBuf>,
        line: i32,
        column: i32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: TokenKind::Lexed,
            file_path,
            line,
            column,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn line(&self) -> i32 {
        self.line
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_sof(&self) -> bool {
        self.kind == TokenKind::Sof
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if this token's text equals `text_to_match`.
    pub fn matches(&self, text_to_match: &str) -> bool {
        self.text == text_to_match
    }

    /// Returns true if this token's text equals any string in `texts_to_match`.
    pub fn matches_any(&self, texts_to_match: &[&str]) -> bool {
        texts_to_match.iter().any(|text| self.text == *text)
    }
}

/// Mutable state of one lexing pass.
struct LexerState {
    tokens: Vec<Token>,
    file_path: Option<PathBuf>,
    line_num: i32,
    column: i32,
    in_string: bool,
    last_char_was_escape: bool,
    check_next_token: bool,
    word_so_far: String,
    word_line: i32,
    word_column: i32,
}

impl LexerState {
    fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            tokens: Vec::new(),
            file_path,
            line_num: 1,
            column: 0,
            in_string: false,
            last_char_was_escape: false,
            check_next_token: false,
            word_so_far: String::new(),
            word_line: 1,
            word_column: 1,
        }
    }

    /// Appends the current character to the pending word, recording the word's
    /// start position if the word was empty.
    fn push_char(&mut self, c: char) {
        if self.word_so_far.is_empty() {
            self.word_line = self.line_num;
            self.word_column = self.column;
        }
        self.word_so_far.push(c);
    }

    /// Replaces the pending word with the current character.
    fn set_word_to_char(&mut self, c: char) {
        self.word_so_far.clear();
        self.push_char(c);
    }

    /// Emits the pending word as a token if it isn't blank.
    fn flush_word(&mut self) {
        if !self.word_so_far.trim().is_empty() {
            self.emit_word();
        } else {
            self.word_so_far.clear();
        }
    }

    /// Emits the pending word unconditionally. String contents must never be
    /// dropped by the blank-word skip, so string termination comes here.
    fn emit_word(&mut self) {
        if self.word_so_far.is_empty() {
            return;
        }
        let token = Token::new(
            self.file_path.clone(),
            self.word_line,
            self.word_column,
            std::mem::take(&mut self.word_so_far),
        );
        self.tokens.push(token);
    }
}

/// Lexes decommented source lines into a token sequence for the parser.
pub struct Lexer {
    state: LexerState,
}

impl Lexer {
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            state: LexerState::new(file_path),
        }
    }

    /// Lexes the given lines into a token sequence bounded by the SOF and EOF
    /// sentinels. Each line is treated as newline-terminated. A lex error
    /// discards all partial output.
    pub fn tokenize(mut self, lines: &[String]) -> Result<Vec<Token>, LexError> {
        self.state.tokens.push(SOF.clone());

        let line_count = lines.len();
        for (index, line) in lines.iter().enumerate() {
            self.state.line_num = (index + 1) as i32;
            self.state.column = 0;

            for c in line.chars().chain(std::iter::once('\n')) {
                self.state.column += 1;
                self.lex_char(c);
            }

            if self.state.in_string && index + 1 == line_count {
                return Err(LexError::UnexpectedEof {
                    line: line.clone(),
                    line_num: self.state.line_num,
                    column: self.state.column,
                });
            }
        }

        self.state.tokens.push(EOF.clone());
        Ok(self.state.tokens)
    }

    fn lex_char(&mut self, c: char) {
        if c == '"' {
            self.lex_quote_char();
        } else if self.state.in_string {
            self.lex_string_char(c);
        } else {
            self.lex_plain_char(c);
        }
    }

    fn lex_quote_char(&mut self) {
        let state = &mut self.state;
        if !state.in_string {
            // The quote joins whatever word is pending, so `x="hi"` lexes as
            // `x`, `="hi"`.
            state.push_char('"');
            state.in_string = true;
            state.check_next_token = false;
        } else if state.last_char_was_escape {
            state.push_char('"');
            state.last_char_was_escape = false;
        } else {
            state.push_char('"');
            state.emit_word();
            state.in_string = false;
        }
    }

    fn lex_string_char(&mut self, c: char) {
        if c == '\\' && !self.state.last_char_was_escape {
            // Escapes the next character; the backslash itself is dropped.
            self.state.last_char_was_escape = true;
        } else {
            self.state.push_char(c);
            self.state.last_char_was_escape = false;
        }
    }

    fn lex_plain_char(&mut self, c: char) {
        let state = &mut self.state;
        if c.is_whitespace() {
            state.flush_word();
            state.check_next_token = false;
        } else if PUNCTUATION_CHARS.contains(&c) {
            state.flush_word();
            state.set_word_to_char(c);
            state.emit_word();
            state.check_next_token = false;
        } else if OPERATOR_CHARS.contains(&c) {
            if state.check_next_token {
                // Second character of a candidate two-character operator.
                state.push_char(c);
                state.flush_word();
                state.check_next_token = false;
            } else {
                state.flush_word();
                state.set_word_to_char(c);
                state.check_next_token = true;
            }
        } else {
            state.push_char(c);
        }
    }
}
