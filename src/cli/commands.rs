//! Command implementations for the Rill CLI.
//!
//! Each command runs the front-end pipeline as far as requested and prints
//! the result: `tokenize` stops after scanning, `parse` goes on to the AST.
//! Syntax errors are rendered as miette diagnostics with the source file
//! attached, so the offending span is shown in context.

use std::fs;
use std::io;
use std::path::Path;

use miette::{Diagnostic, IntoDiagnostic, NamedSource, Result, SourceSpan, WrapErr};
use thiserror::Error;

use rill_syntax::SyntaxError;
use rill_syntax::parser::Parser;
use rill_syntax::tokenizer::{Token, Tokenizer};

/// Scan `path` and print one token per line (`literal kind line:column`).
pub fn tokenize_file(path: &Path, trace: bool) -> Result<()> {
    let source = read_source(path)?;
    let tokens = scan(path, &source, trace)?;
    tracing::debug!(tokens = tokens.len(), "scan complete");
    for token in &tokens {
        println!("{token}");
    }
    Ok(())
}

/// Scan and parse `path`, then pretty-print the AST.
pub fn parse_file(path: &Path, trace: bool) -> Result<()> {
    let source = read_source(path)?;
    let tokens = scan(path, &source, trace)?;

    let mut parser = Parser::new();
    if trace {
        parser.set_trace_sink(Box::new(io::stderr())).map_err(miette::Report::new)?;
        parser.set_trace_enabled(true).map_err(miette::Report::new)?;
    }
    parser.configure(tokens).map_err(|e| attach(e, path, &source))?;
    let file = parser.parse().map_err(|e| attach(e, path, &source))?;
    tracing::debug!(statements = file.statements.len(), "parse complete");

    println!("{file:#?}");
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn scan(path: &Path, source: &str, trace: bool) -> Result<Vec<Token>> {
    let mut tokenizer = Tokenizer::new();
    if trace {
        tokenizer.set_trace_sink(Box::new(io::stderr())).map_err(miette::Report::new)?;
        tokenizer.set_trace_enabled(true).map_err(miette::Report::new)?;
    }
    tokenizer.configure(source).map_err(|e| attach(e, path, source))?;
    tokenizer.scan().map_err(|e| attach(e, path, source))
}

/// A syntax error rendered against its source file.
#[derive(Debug, Error, Diagnostic)]
#[error("{inner}")]
struct SourceDiagnostic {
    inner: SyntaxError,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
}

/// Attach the source file to a syntax error so miette can render the span.
fn attach(err: SyntaxError, path: &Path, source: &str) -> miette::Report {
    match err.position() {
        Some(position) => miette::Report::new(SourceDiagnostic {
            src: NamedSource::new(path.display().to_string(), source.to_string()),
            span: (byte_offset(source, position.offset), 1).into(),
            inner: err,
        }),
        None => miette::Report::new(err),
    }
}

/// Translate a character offset into the byte offset miette spans expect.
fn byte_offset(source: &str, char_offset: usize) -> usize {
    source
        .char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_handles_multibyte_prefixes() {
        // "é" is two bytes; the character after it starts at byte 2.
        assert_eq!(byte_offset("é!", 1), 2);
        assert_eq!(byte_offset("abc", 1), 1);
        assert_eq!(byte_offset("ab", 5), 2);
    }
}
