//! The `parse` subcommand: dump each top-level form as an indented tree.

use std::io::{self, Write};
use std::path::PathBuf;

use calf_lex::Lexer;
use calf_par::{Form, Parser};
use tracing::debug;

use crate::commands::common::load_input;
use crate::error::Result;

/// Arguments for the parse subcommand.
#[derive(Debug)]
pub struct ParseArgs {
    /// Input file, `-` or absent for standard input.
    pub file: Option<PathBuf>,
    /// Override for the recorded source name.
    pub source_name: Option<String>,
    /// Keep whitespace and comment tokens in the tree.
    pub keep_whitespace: bool,
}

/// Parse the input and print each top-level form.
pub fn run_parse(args: ParseArgs) -> Result<()> {
    let input = load_input(args.file.as_deref(), args.source_name.as_deref())?;
    debug!(source = %input.source_name, keep_whitespace = args.keep_whitespace, "parsing");

    let lexer = Lexer::from_str(&input.text).with_source_name(&input.source_name);
    let parser = Parser::new(lexer).discard_whitespace(!args.keep_whitespace);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for item in parser {
        let form = item?;
        write_form(&mut out, &form, 0)?;
    }
    Ok(())
}

fn write_form(out: &mut impl Write, form: &Form, depth: usize) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    match form {
        Form::List(seq) | Form::SqList(seq) => {
            writeln!(out, "{indent}{} {}..{}", form.kind_name(), seq.start, seq.end)?;
            for child in &seq.forms {
                write_form(out, child, depth + 1)?;
            }
            Ok(())
        }
        Form::Dict(dict) => {
            writeln!(out, "{indent}{} {}..{}", form.kind_name(), dict.start, dict.end)?;
            for (key, value) in &dict.pairs {
                write_form(out, key, depth + 1)?;
                write_form(out, value, depth + 1)?;
            }
            Ok(())
        }
        Form::Int(lit) => writeln!(out, "{indent}INTEGER {} {}", lit.token.start, lit.value),
        Form::Float(lit) => writeln!(out, "{indent}FLOAT {} {:?}", lit.token.start, lit.value),
        Form::Str(lit) => writeln!(out, "{indent}STRING {} {:?}", lit.token.start, lit.value),
        Form::Atom(token) => writeln!(out, "{indent}{} {} {:?}", token.kind, token.start, token.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calf_par::parse_str;

    fn dump(text: &str) -> String {
        let mut buffer = Vec::new();
        for form in parse_str(text) {
            write_form(&mut buffer, &form.unwrap(), 0).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_dump_scalar() {
        assert_eq!(dump("42"), "INTEGER 1:1 42\n");
    }

    #[test]
    fn test_dump_list_tree() {
        let rendered = dump("(1 x)");
        assert_eq!(
            rendered,
            "LIST 1:1..1:5\n  INTEGER 1:2 1\n  SYMBOL 1:4 \"x\"\n"
        );
    }

    #[test]
    fn test_dump_dict_pairs_in_order() {
        let rendered = dump("{:a 1}");
        assert_eq!(
            rendered,
            "DICT 1:1..1:6\n  KEYWORD 1:2 \":a\"\n  INTEGER 1:5 1\n"
        );
    }
}
