//! Error types for the lexing and parsing phases.
//!
//! Each phase has its own error enum; outer phases wrap the inner ones
//! explicitly so that every failure surfaces with the context of the phase
//! that observed it.

use thiserror::Error;

use super::lexer::{Token, EOF};

/// Builds the short source excerpt quoted by lex error messages: up to ten
/// characters of the offending line, ending at the failure column.
fn lookback_window(line: &str, column: i32) -> String {
    let chars: Vec<char> = line.chars().collect();
    let end = (column.max(0) as usize).min(chars.len());
    let start = end.saturating_sub(10);
    chars[start..end].iter().collect()
}

/// Failures detected while lexing source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error(
        "[LEXER ERROR, line {line_num}, col {column}]: Unexpected EOF while inside a string. \
         Expected string terminator near:\n\t`{}`.",
        lookback_window(.line, *.column)
    )]
    UnexpectedEof {
        line: String,
        line_num: i32,
        column: i32,
    },
}

/// Failures raised by token cursor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cannot advance past the end of the token sequence")]
    AtEof,

    #[error("expected `{expected}` but found `{found}` at line {line}, col {column}",
        found = .found.text(), line = .found.line(), column = .found.column())]
    TokenMismatch { expected: String, found: Token },
}

/// Failures raised while parsing an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("missing `)` for `(` at line {line}, col {column}",
        line = .open.line(), column = .open.column())]
    MissingClosingParenthesis { open: Token },

    #[error("no expression rule matches `{text}` at line {line}, col {column}",
        text = .token.text(), line = .token.line(), column = .token.column())]
    NoRuleMatches { token: Token },

    #[error(transparent)]
    Cursor(#[from] CursorError),
}

/// Failures raised by the statement parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parser has already run; construct a new parser per token sequence")]
    AlreadyRan,

    #[error("unexpected token `{text}` at line {line}, col {column}",
        text = .token.text(), line = .token.line(), column = .token.column())]
    FatalUnknown { token: Token },

    #[error("unexpected end of input while parsing a statement")]
    UnexpectedEof,

    #[error(transparent)]
    Cursor(CursorError),

    #[error(transparent)]
    Expr(ExprError),
}

impl ParseError {
    /// Maps a cursor failure into a parse error, attributing `AtEof` to the
    /// token sequence end.
    pub fn from_cursor(error: CursorError) -> Self {
        match error {
            CursorError::AtEof => ParseError::UnexpectedEof,
            mismatch @ CursorError::TokenMismatch { .. } => ParseError::Cursor(mismatch),
        }
    }

    /// Maps an expression failure into a parse error.
    pub fn from_expr(error: ExprError) -> Self {
        match error {
            ExprError::Cursor(cursor) => Self::from_cursor(cursor),
            other @ (ExprError::MissingClosingParenthesis { .. }
            | ExprError::NoRuleMatches { .. }) => ParseError::Expr(other),
        }
    }

    /// The token most relevant to this error, for diagnostics. EOF-shaped
    /// errors report the EOF sentinel.
    pub fn token(&self) -> Token {
        match self {
            ParseError::FatalUnknown { token } => token.clone(),
            ParseError::Cursor(CursorError::TokenMismatch { found, .. }) => found.clone(),
            ParseError::Expr(ExprError::MissingClosingParenthesis { open }) => open.clone(),
            ParseError::Expr(ExprError::NoRuleMatches { token }) => token.clone(),
            ParseError::Expr(ExprError::Cursor(CursorError::TokenMismatch { found, .. })) => {
                found.clone()
            }
            ParseError::AlreadyRan
            | ParseError::UnexpectedEof
            | ParseError::Cursor(CursorError::AtEof)
            | ParseError::Expr(ExprError::Cursor(CursorError::AtEof)) => EOF.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_eof_message_quotes_a_short_window() {
        let err = LexError::UnexpectedEof {
            line: "x = \"this is a very long line".to_string(),
            line_num: 3,
            column: 30,
        };
        let message = err.to_string();
        assert!(message.starts_with("[LEXER ERROR, line 3, col 30]:"));
        assert!(message.ends_with("` long line`."), "{message}");
    }

    #[test]
    fn lookback_window_clamps_to_line_bounds() {
        assert_eq!(lookback_window("short", 99), "short");
        assert_eq!(lookback_window("short", 3), "sho");
        assert_eq!(lookback_window("", 5), "");
    }

    #[test]
    fn token_mismatch_reports_expected_and_found() {
        let err = CursorError::TokenMismatch {
            expected: "{".to_string(),
            found: Token::new(None, 2, 7, ")"),
        };
        let message = err.to_string();
        assert!(message.contains("expected `{`"));
        assert!(message.contains("found `)`"));
        assert!(message.contains("line 2"));
    }

    #[test]
    fn cursor_eof_maps_to_parse_eof() {
        let err = ParseError::from_cursor(CursorError::AtEof);
        assert_eq!(err, ParseError::UnexpectedEof);
        assert!(err.token().is_eof());
    }

    #[test]
    fn expr_cursor_errors_pass_through() {
        let inner = CursorError::TokenMismatch {
            expected: ")".to_string(),
            found: Token::new(None, 1, 1, "}"),
        };
        let err = ParseError::from_expr(ExprError::Cursor(inner.clone()));
        assert_eq!(err, ParseError::Cursor(inner));
    }

    #[test]
    fn translated_errors_keep_the_offending_token() {
        let found = Token::new(None, 4, 2, ")");
        let err = ParseError::from_cursor(CursorError::TokenMismatch {
            expected: "{".to_string(),
            found: found.clone(),
        });
        assert_eq!(err.token(), found);

        let open = Token::new(None, 1, 9, "(");
        let err = ParseError::from_expr(ExprError::MissingClosingParenthesis {
            open: open.clone(),
        });
        assert_eq!(err.token(), open);

        let bad = Token::new(None, 2, 3, "==");
        let err = ParseError::from_expr(ExprError::NoRuleMatches { token: bad.clone() });
        assert_eq!(err.token(), bad);
    }
}
