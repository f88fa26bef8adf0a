//! The Bluc front-end pipeline: comment removal, lexing, statement parsing.

pub mod comments;
pub mod context;
pub mod cursor;
pub mod error;
pub mod expr;
pub mod lexer;
pub mod stmt;

use std::path::Path;

use crate::ast::Ast;
use crate::config::Config;
use crate::error::Result;

pub use comments::strip_comments;
pub use context::ContextStack;
pub use cursor::Cursor;
pub use error::{CursorError, ExprError, LexError, ParseError};
pub use expr::{ExprParser, ExprRule};
pub use lexer::{Lexer, Token, TokenKind, EOF, SOF};
pub use stmt::StmtParser;

/// Strips comments and lexes source lines into a sentinel-bounded token
/// sequence.
pub fn tokenize_lines(lines: &[String], file_path: Option<&Path>) -> Result<Vec<Token>> {
    let decommented = strip_comments(lines);
    let tokens = Lexer::new(file_path.map(Path::to_path_buf)).tokenize(&decommented)?;
    Ok(tokens)
}

/// Runs the full front end over a source string with the default
/// configuration.
pub fn parse_source(source: &str, file_path: Option<&Path>) -> Result<Ast> {
    parse_source_with_config(source, file_path, &Config::default())
}

/// Runs the full front end over a source string.
pub fn parse_source_with_config(
    source: &str,
    file_path: Option<&Path>,
    config: &Config,
) -> Result<Ast> {
    let lines: Vec<String> = source.lines().map(str::to_string).collect();
    let tokens = tokenize_lines(&lines, file_path)?;
    let ast = StmtParser::with_config(tokens, config.clone()).parse()?;
    Ok(ast)
}
