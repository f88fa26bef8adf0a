use thiserror::Error;

use crate::parser::error::{LexError, ParseError};

/// Result type for blucc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the blucc front end
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{message}")]
    Lex { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl Error {
    /// Create a lex error from a preformatted message
    pub fn lex_error(message: impl Into<String>) -> Self {
        Self::Lex { message: message.into() }
    }

    /// Create a parse error from a preformatted message
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Error::lex_error(error.to_string())
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::parse_error(error.to_string())
    }
}
