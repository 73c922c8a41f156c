//! The `lex` subcommand: dump the token stream.

use std::io::{self, Write};
use std::path::PathBuf;

use calf_lex::{Lexer, Token};
use tracing::debug;

use crate::commands::common::load_input;
use crate::error::Result;

/// Arguments for the lex subcommand.
#[derive(Debug)]
pub struct LexArgs {
    /// Input file, `-` or absent for standard input.
    pub file: Option<PathBuf>,
    /// Override for the recorded source name.
    pub source_name: Option<String>,
}

/// Lex the input and print one line per token.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let input = load_input(args.file.as_deref(), args.source_name.as_deref())?;
    debug!(source = %input.source_name, bytes = input.text.len(), "lexing");

    let lexer = Lexer::from_str(&input.text).with_source_name(&input.source_name);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;
    for item in lexer {
        let token = item?;
        write_token(&mut out, &token)?;
        count += 1;
    }
    debug!(tokens = count, "lexing finished");
    Ok(())
}

fn write_token(out: &mut impl Write, token: &Token) -> io::Result<()> {
    writeln!(out, "{} {} {:?}", token.kind, token.start, token.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calf_lex::lex_str;

    #[test]
    fn test_write_token_format() {
        let token = lex_str("foo").next().unwrap().unwrap();
        let mut buffer = Vec::new();
        write_token(&mut buffer, &token).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "SYMBOL 1:1 \"foo\"\n");
    }
}
