//! Token types for the Rill tokenizer.
//!
//! A token is literal text plus a closed kind tag plus a source position.
//! Reserved-word identity (keywords/type names/separators) comes from the
//! `rill_core::lang` registries; the kind tag only records which strategy
//! claimed the literal.

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
///
/// ## Notes
/// - `Eof` terminates every successful scan, exactly once.
/// - `Illegal` is produced by the strategy dispatcher when no strategy claims
///   the current position; the scan loop converts it into an error, so it
///   never appears in a successful token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Integer,
    Float,
    Type,
    Keyword,
    Separator,
    Eof,
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Type => "type",
            TokenKind::Keyword => "keyword",
            TokenKind::Separator => "separator",
            TokenKind::Eof => "eof",
            TokenKind::Illegal => "illegal",
        };
        write!(f, "{name}")
    }
}

/// Source position: 1-based line and column plus 0-based absolute offset.
///
/// Offsets count characters of the buffered source. Positions attached to a
/// token sequence are monotonically non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl Default for Position {
    /// The position of the first character of a buffer.
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token: literal text, kind tag, and the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub literal: String,
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(literal: impl Into<String>, kind: TokenKind, position: Position) -> Self {
        Self {
            literal: literal.into(),
            kind,
            position,
        }
    }

    /// Return `true` if this token is the given separator or keyword spelling.
    pub fn is(&self, literal: &str) -> bool {
        self.literal == literal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.literal, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position_is_buffer_start() {
        let p = Position::default();
        assert_eq!((p.line, p.column, p.offset), (1, 1, 0));
    }

    #[test]
    fn test_token_display_is_literal_kind_position() {
        let t = Token::new("42", TokenKind::Integer, Position::new(2, 5, 9));
        assert_eq!(t.to_string(), "42 integer 2:5");
    }
}
