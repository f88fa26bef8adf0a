use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use blucc::ast::AstPrinter;
use blucc::parser::tokenize_lines;
use blucc::Config;

#[derive(Parser)]
#[command(name = "blucc")]
#[command(about = "Bluc language compiler front end")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a .bluc file and show the statement tree
    Parse {
        /// Input .bluc file
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        input: PathBuf,

        /// Also show the lexer output before parsing
        #[arg(long)]
        tokens: bool,

        /// Stop at the first parse error instead of scanning to the end
        #[arg(long)]
        abort_on_first_error: bool,
    },

    /// Lex a .bluc file and show the token sequence
    Lex {
        /// Input .bluc file
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            tokens,
            abort_on_first_error,
        } => {
            if tokens {
                print_lexer_output(&input)?;
            }
            let config = if abort_on_first_error {
                Config::abort_on_first_error()
            } else {
                Config::new()
            };
            let path = input.display().to_string();
            let ast = blucc::parse_file(&path, &config)
                .with_context(|| format!("failed to parse {path}"))?;
            print!("{}", AstPrinter::new().print(&ast));
        }
        Commands::Lex { input } => {
            print_lexer_output(&input)?;
        }
    }

    Ok(())
}

fn print_lexer_output(input: &Path) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let lines: Vec<String> = source.lines().map(str::to_string).collect();
    let tokens = tokenize_lines(&lines, Some(input))?;

    let rendered: Vec<String> = tokens
        .iter()
        .map(|token| format!("`{}`", token.text()))
        .collect();
    println!("Lexer output is ...< {} >...", rendered.join(", "));
    Ok(())
}
