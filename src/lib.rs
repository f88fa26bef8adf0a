//! blucc, a compiler front end for the Bluc language.
//!
//! The pipeline has three phases: comment removal, lexing, and statement
//! parsing. `parse_file` and `parse_source` run all three and return the
//! statement tree; the phases are also exposed individually under
//! [`parser`].

pub mod ast;
pub mod config;
pub mod error;
pub mod parser;

use std::fs;

pub use ast::{Ast, AstPrinter, Expr, ExprPrinter, StmtId, StmtKind};
pub use config::{Config, RecoveryMode};
pub use error::{Error, Result};
pub use parser::{parse_source, parse_source_with_config, tokenize_lines};

/// Reads and parses a Bluc source file.
pub fn parse_file(input_path: &str, config: &Config) -> Result<Ast> {
    eprintln!("BLUCC: parsing file: {input_path}");
    let source = fs::read_to_string(input_path)?;
    parse_source_with_config(&source, Some(std::path::Path::new(input_path)), config)
}
