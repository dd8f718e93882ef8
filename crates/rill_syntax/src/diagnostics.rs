//! Syntax errors for the Rill front-end.
//!
//! Both components share one closed error taxonomy. Every error is fatal to
//! the in-flight run: there is no recovery, no resynchronization, and no
//! partial token/AST output. Positioned variants carry line, column, and
//! absolute offset for diagnostic rendering.

use miette::Diagnostic;
use thiserror::Error;

use crate::tokenizer::tokens::{Position, Token, TokenKind};

/// A fatal front-end error.
///
/// ## Notes
/// - `BusyViolation` and `EmptyInput` guard configuration; the rest abort a
///   run in progress.
/// - The CLI attaches source text and renders these as labeled diagnostics;
///   see [`SyntaxError::position`].
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum SyntaxError {
    /// No tokenizer strategy claimed the current position.
    #[error("illegal character {found:?} at {position}")]
    #[diagnostic(code(rill::tokenize::illegal_character))]
    IllegalCharacter { found: char, position: Position },

    /// A strategy partially committed, then found an invalid continuation
    /// (e.g. a numeric literal with a dangling decimal point).
    #[error("malformed literal at {position}: {reason}")]
    #[diagnostic(code(rill::tokenize::malformed_literal))]
    MalformedLiteral { reason: String, position: Position },

    /// The parser required one of a literal/kind set and found another token.
    #[error(
        "expected {}, found {} {:?} at {}",
        render_expectation(.literals, .kinds),
        .found.kind,
        .found.literal,
        .found.position
    )]
    #[diagnostic(code(rill::parse::expectation))]
    Expectation {
        literals: Vec<String>,
        kinds: Vec<TokenKind>,
        found: Token,
    },

    /// Syntactically legal input with a disallowed shape.
    #[error("{reason} at {position}")]
    #[diagnostic(code(rill::parse::structural_violation))]
    StructuralViolation { reason: String, position: Position },

    /// Reconfiguration or re-entry was attempted while a run is in progress.
    #[error("component is busy with an in-flight run")]
    #[diagnostic(
        code(rill::busy),
        help("finish the in-flight run before reconfiguring")
    )]
    BusyViolation,

    /// The component was configured with empty input, or never configured.
    #[error("configured with empty or unset input")]
    #[diagnostic(
        code(rill::empty_input),
        help("configure the component with non-empty input first")
    )]
    EmptyInput,

    /// The read cursor would move past the final token.
    #[error("token sequence ended unexpectedly at {position}")]
    #[diagnostic(code(rill::parse::unexpected_end))]
    UnexpectedEnd { position: Position },

    /// The instrumentation sink rejected a write.
    #[error("trace sink write failed: {0}")]
    #[diagnostic(code(rill::trace::write_failed))]
    TraceWrite(String),
}

impl SyntaxError {
    /// The source position this error points at, when it carries one.
    pub fn position(&self) -> Option<Position> {
        match self {
            SyntaxError::IllegalCharacter { position, .. }
            | SyntaxError::MalformedLiteral { position, .. }
            | SyntaxError::StructuralViolation { position, .. }
            | SyntaxError::UnexpectedEnd { position } => Some(*position),
            SyntaxError::Expectation { found, .. } => Some(found.position),
            SyntaxError::BusyViolation | SyntaxError::EmptyInput | SyntaxError::TraceWrite(_) => {
                None
            }
        }
    }
}

/// Render the attempted literal/kind sets of an expectation error.
fn render_expectation(literals: &[String], kinds: &[TokenKind]) -> String {
    let mut parts = Vec::with_capacity(literals.len() + kinds.len());
    parts.extend(literals.iter().map(|l| format!("{l:?}")));
    parts.extend(kinds.iter().map(|k| k.to_string()));
    if parts.len() == 1 {
        parts.remove(0)
    } else {
        format!("one of [{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expectation_message_reports_sets_and_found_token() {
        let err = SyntaxError::Expectation {
            literals: vec!["(".to_string()],
            kinds: vec![TokenKind::Identifier],
            found: Token::new("}", TokenKind::Separator, Position::new(3, 1, 14)),
        };
        let message = err.to_string();
        assert!(message.contains("\"(\""), "message: {message}");
        assert!(message.contains("identifier"), "message: {message}");
        assert!(message.contains("3:1"), "message: {message}");
    }

    #[test]
    fn test_positioned_variants_expose_their_position() {
        let err = SyntaxError::IllegalCharacter {
            found: '@',
            position: Position::new(1, 5, 4),
        };
        assert_eq!(err.position(), Some(Position::new(1, 5, 4)));
        assert_eq!(SyntaxError::BusyViolation.position(), None);
    }
}
