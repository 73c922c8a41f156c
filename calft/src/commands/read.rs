//! The `read` subcommand: print each read value in surface syntax.

use std::io::{self, Write};
use std::path::PathBuf;

use calf_lex::Lexer;
use calf_par::Parser;
use calf_read::Reader;
use tracing::debug;

use crate::commands::common::load_input;
use crate::error::Result;

/// Arguments for the read subcommand.
#[derive(Debug)]
pub struct ReadArgs {
    /// Input file, `-` or absent for standard input.
    pub file: Option<PathBuf>,
    /// Override for the recorded source name.
    pub source_name: Option<String>,
}

/// Read the input and print one value per line.
pub fn run_read(args: ReadArgs) -> Result<()> {
    let input = load_input(args.file.as_deref(), args.source_name.as_deref())?;
    debug!(source = %input.source_name, "reading");

    let lexer = Lexer::from_str(&input.text).with_source_name(&input.source_name);
    let reader = Reader::new(Parser::new(lexer));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for item in reader {
        let value = item?;
        writeln!(out, "{value}")?;
    }
    Ok(())
}
