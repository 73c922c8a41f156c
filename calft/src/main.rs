//! Calft CLI - the command-line front end for the Calf pipeline.
//!
//! This is the main entry point for the calft application. It uses
//! clap for argument parsing and dispatches to the `lex`, `parse`, and
//! `read` command handlers. Usage errors exit with code 2 (clap's
//! default); pipeline errors print a positioned diagnostic on standard
//! error and exit with code 1.

mod commands;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    lex::{run_lex, LexArgs},
    parse::{run_parse, ParseArgs},
    read::{run_read, ReadArgs},
};
use error::{CalftError, Result};

/// Calft - a CLI for the Calf lexer, parser, and reader
///
/// Each subcommand runs the pipeline up to one stage and dumps what
/// that stage produces, one item per line, reading a named file or
/// standard input.
#[derive(Parser, Debug)]
#[command(name = "calft")]
#[command(author = "Calf Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex, parse, and read Calf source text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CALFT_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "CALFT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the calft CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the flat token stream
    Lex(LexCommand),

    /// Dump the parse tree of each top-level form
    Parse(ParseCommand),

    /// Read each top-level form into a value and print it
    Read(ReadCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Input file (default or `-`: standard input)
    file: Option<PathBuf>,

    /// Source name to record on tokens (default: the file path)
    #[arg(short, long)]
    source_name: Option<String>,
}

/// Arguments for the parse subcommand.
#[derive(Parser, Debug)]
struct ParseCommand {
    /// Input file (default or `-`: standard input)
    file: Option<PathBuf>,

    /// Source name to record on tokens (default: the file path)
    #[arg(short, long)]
    source_name: Option<String>,

    /// Keep whitespace and comment tokens in the tree
    #[arg(long)]
    keep_whitespace: bool,
}

/// Arguments for the read subcommand.
#[derive(Parser, Debug)]
struct ReadCommand {
    /// Input file (default or `-`: standard input)
    file: Option<PathBuf>,

    /// Source name to record on tokens (default: the file path)
    #[arg(short, long)]
    source_name: Option<String>,
}

/// Main entry point for the calft CLI.
///
/// Parses command-line arguments, initializes logging, and dispatches
/// to the selected command handler, mapping pipeline failures to exit
/// code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    execute_command(cli.command)?;
    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CalftError::Logging(e.to_string()))?;

    Ok(())
}

/// Execute the selected command.
fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Lex(args) => run_lex(LexArgs {
            file: args.file,
            source_name: args.source_name,
        }),
        Commands::Parse(args) => run_parse(ParseArgs {
            file: args.file,
            source_name: args.source_name,
            keep_whitespace: args.keep_whitespace,
        }),
        Commands::Read(args) => run_read(ReadArgs {
            file: args.file,
            source_name: args.source_name,
        }),
    }
}
