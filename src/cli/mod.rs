//! CLI module for the Rill front-end
//!
//! ## Commands
//!
//! - `tokenize <file>` - Scan a source file and print its token sequence
//! - `parse <file>` - Scan and parse a source file and print the AST
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `miette::Result` instead of calling `process::exit`;
//! only the top-level `run()` function handles errors and exits.

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rill", version, about = "Front-end for the Rill programming language")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source file and print one token per line
    Tokenize {
        /// Path to the source file
        file: PathBuf,
        /// Bind the instrumentation trace to stderr
        #[arg(long)]
        trace: bool,
    },
    /// Scan and parse a source file and pretty-print the AST
    Parse {
        /// Path to the source file
        file: PathBuf,
        /// Bind the instrumentation trace to stderr
        #[arg(long)]
        trace: bool,
    },
}

/// Parse arguments, dispatch to the selected command, and exit non-zero on
/// failure after rendering the diagnostic.
pub fn run() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Tokenize { file, trace } => commands::tokenize_file(&file, trace),
        Commands::Parse { file, trace } => commands::parse_file(&file, trace),
    };
    if let Err(report) = result {
        eprintln!("{report:?}");
        process::exit(1);
    }
}
