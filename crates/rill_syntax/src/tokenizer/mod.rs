//! Tokenizer for the Rill language.
//!
//! Converts buffered source text into an Eof-terminated token sequence by
//! trying an ordered list of strategies at each position:
//!
//! 1. type name, 2. keyword, 3. number, 4. identifier, 5. separator.
//!
//! The first strategy to claim the position wins. Word strategies backtrack
//! exactly (cursor, line, and column) when their candidate is not reserved
//! vocabulary, so the identifier strategy can re-attempt the same span.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Position)
//! - `strategies` - The ordered strategy implementations

mod strategies;
pub mod tokens;

pub use tokens::{Position, Token, TokenKind};

use std::io::Write;

use crate::diagnostics::SyntaxError;
use crate::trace::Trace;
use strategies::{STRATEGIES, Strategy};

// ============================================================================
// CURSOR AND SCAN CONTEXT
// ============================================================================

/// Scan cursor: absolute character offset plus the 1-based line/column it
/// corresponds to. Copyable so strategies can snapshot and restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Cursor {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }
}

/// Explicit per-run context handed to every strategy call.
///
/// Borrows the buffered source, the owning tokenizer's cursor, and its trace
/// handle; there is no shared or global scanner state.
pub(crate) struct ScanContext<'a> {
    chars: &'a [char],
    cursor: &'a mut Cursor,
    trace: &'a mut Trace,
}

impl<'a> ScanContext<'a> {
    fn new(chars: &'a [char], cursor: &'a mut Cursor, trace: &'a mut Trace) -> Self {
        Self { chars, cursor, trace }
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.cursor.offset).copied()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.offset >= self.chars.len()
    }

    /// Advance one character, tracking line and column.
    pub fn advance(&mut self) {
        let Some(c) = self.current() else { return };
        self.cursor.offset += 1;
        if c == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 1;
        } else {
            self.cursor.column += 1;
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Snapshot the cursor before a tentative attempt.
    pub fn snapshot(&self) -> Cursor {
        *self.cursor
    }

    /// Restore a snapshot, undoing everything consumed since it was taken.
    pub fn restore(&mut self, snapshot: Cursor) {
        *self.cursor = snapshot;
    }

    /// The source text between two character offsets.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Return `true` if the source at the cursor starts with `literal`.
    pub fn matches_literal(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, c)| self.chars.get(self.cursor.offset + i) == Some(&c))
    }

    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    pub fn trace(&mut self, message: std::fmt::Arguments<'_>) -> Result<(), SyntaxError> {
        self.trace.emit(message)
    }

    /// Try each strategy in priority order; the first match wins.
    ///
    /// Yields an `Illegal` token when nothing claims the position; the scan
    /// loop converts that into an `IllegalCharacter` error.
    fn next_token(&mut self, strategies: &[Strategy]) -> Result<Token, SyntaxError> {
        for strategy in strategies {
            if let Some(token) = (strategy.run)(self)? {
                self.trace(format_args!(
                    "{} strategy claimed {:?}",
                    strategy.name, token.literal
                ))?;
                return Ok(token);
            }
        }
        Ok(Token::new("", TokenKind::Illegal, self.position()))
    }
}

// ============================================================================
// TOKENIZER
// ============================================================================

/// Tokenizer for Rill source code.
///
/// Owns the fully buffered source, the scan cursor, and the ordered strategy
/// list. Single-threaded and run-to-completion: a scan either returns the
/// whole Eof-terminated token sequence or a fatal error, never a partial
/// result.
pub struct Tokenizer {
    source: Option<Vec<char>>,
    cursor: Cursor,
    strategies: &'static [Strategy],
    busy: bool,
    trace: Trace,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create an unconfigured tokenizer with the standard strategy order.
    pub fn new() -> Self {
        Self {
            source: None,
            cursor: Cursor::default(),
            strategies: STRATEGIES,
            busy: false,
            trace: Trace::default(),
        }
    }

    /// Buffer `source` for the next scan and reset the cursor.
    ///
    /// ## Errors
    /// - [`SyntaxError::EmptyInput`] if `source` is empty.
    /// - [`SyntaxError::BusyViolation`] if a scan is in progress.
    pub fn configure(&mut self, source: &str) -> Result<(), SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        if source.is_empty() {
            return Err(SyntaxError::EmptyInput);
        }
        self.source = Some(source.chars().collect());
        self.cursor = Cursor::default();
        Ok(())
    }

    /// Scan the configured source into an Eof-terminated token sequence.
    ///
    /// ## Errors
    /// - [`SyntaxError::BusyViolation`] if a scan is already in progress.
    /// - [`SyntaxError::EmptyInput`] if no source was configured.
    /// - Any strategy failure ([`SyntaxError::IllegalCharacter`],
    ///   [`SyntaxError::MalformedLiteral`], [`SyntaxError::TraceWrite`])
    ///   aborts the whole scan with no partial output.
    pub fn scan(&mut self) -> Result<Vec<Token>, SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        if self.source.is_none() {
            return Err(SyntaxError::EmptyInput);
        }
        self.busy = true;
        let result = self.run_scan();
        self.busy = false;
        result
    }

    fn run_scan(&mut self) -> Result<Vec<Token>, SyntaxError> {
        self.cursor = Cursor::default();
        let strategies = self.strategies;
        let chars = match self.source.as_deref() {
            Some(chars) => chars,
            None => return Err(SyntaxError::EmptyInput),
        };

        let mut ctx = ScanContext::new(chars, &mut self.cursor, &mut self.trace);
        ctx.trace(format_args!("starting scan"))?;

        let mut tokens = Vec::new();
        loop {
            ctx.skip_whitespace();
            if ctx.is_at_end() {
                break;
            }
            let token = ctx.next_token(strategies)?;
            if token.kind == TokenKind::Illegal {
                // The dispatcher leaves the cursor on the unclaimed character.
                let found = ctx.current().unwrap_or('\0');
                return Err(SyntaxError::IllegalCharacter {
                    found,
                    position: token.position,
                });
            }
            tokens.push(token);
        }

        tokens.push(Token::new("", TokenKind::Eof, ctx.position()));
        ctx.trace(format_args!("scan produced {} tokens", tokens.len()))?;
        Ok(tokens)
    }

    /// Report whether instrumentation is enabled.
    pub fn trace_enabled(&self) -> bool {
        self.trace.enabled()
    }

    /// Toggle instrumentation. Fails with [`SyntaxError::BusyViolation`]
    /// while a scan is in progress.
    pub fn set_trace_enabled(&mut self, on: bool) -> Result<(), SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        self.trace.set_enabled(on);
        Ok(())
    }

    /// Rebind the instrumentation sink. Fails with
    /// [`SyntaxError::BusyViolation`] while a scan is in progress.
    pub fn set_trace_sink(&mut self, sink: Box<dyn Write>) -> Result<(), SyntaxError> {
        if self.busy {
            return Err(SyntaxError::BusyViolation);
        }
        self.trace.set_sink(sink);
        Ok(())
    }
}

/// Convenience function to tokenize a source string.
///
/// This is a shorthand for configuring a fresh [`Tokenizer`] and scanning.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.configure(source)?;
    tokenizer.scan()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn literals(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.literal.as_str()).collect()
    }

    #[test]
    fn test_scan_always_terminates_with_single_eof() {
        for source in ["42", "x := 2", "func f() {}", "   \n\t 1"] {
            let tokens = tokenize(source).unwrap();
            assert!(!tokens.is_empty());
            assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
            assert_eq!(
                tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
                1,
                "exactly one Eof for {source:?}"
            );
        }
    }

    #[test]
    fn test_integer_literal() {
        let tokens = tokenize("42").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Integer, TokenKind::Eof]);
        assert_eq!(tokens[0].literal, "42");
    }

    #[test]
    fn test_float_literal() {
        let tokens = tokenize("3.14").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(tokens[0].literal, "3.14");
    }

    #[test]
    fn test_dangling_decimal_point_is_malformed() {
        let err = tokenize("3.").unwrap_err();
        assert!(matches!(err, SyntaxError::MalformedLiteral { .. }), "got {err:?}");
    }

    #[test]
    fn test_digit_required_after_dot_mid_input() {
        let err = tokenize("1.x").unwrap_err();
        match err {
            SyntaxError::MalformedLiteral { position, .. } => {
                assert_eq!(position.offset, 2);
            }
            other => panic!("expected MalformedLiteral, got {other:?}"),
        }
    }

    #[test]
    fn test_keyword_is_never_an_identifier() {
        let tokens = tokenize("func").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Keyword, TokenKind::Eof]);
        assert_eq!(tokens[0].literal, "func");
    }

    #[test]
    fn test_keyword_prefix_backtracks_to_identifier() {
        let tokens = tokenize("funcX").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(tokens[0].literal, "funcX");
        // Backtracking restored the attempt start exactly.
        assert_eq!(tokens[0].position, Position::new(1, 1, 0));
    }

    #[test]
    fn test_type_names_take_priority() {
        let tokens = tokenize("int string").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Type, TokenKind::Type, TokenKind::Eof]
        );
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let tokens = tokenize("_tmp2").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(tokens[0].literal, "_tmp2");
    }

    #[test]
    fn test_multi_char_separators_match_before_single() {
        let tokens = tokenize("... . // / :=").unwrap();
        assert_eq!(literals(&tokens), vec!["...", ".", "//", "/", ":=", ""]);
        assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Separator));
    }

    #[test]
    fn test_short_declaration_scans_as_three_tokens() {
        let tokens = tokenize("x := 2").unwrap();
        assert_eq!(literals(&tokens), vec!["x", ":=", "2", ""]);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Separator,
                TokenKind::Integer,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_illegal_character_reports_position() {
        let err = tokenize("x @").unwrap_err();
        match err {
            SyntaxError::IllegalCharacter { found, position } => {
                assert_eq!(found, '@');
                assert_eq!(position, Position::new(1, 3, 2));
            }
            other => panic!("expected IllegalCharacter, got {other:?}"),
        }
    }

    #[test]
    fn test_lone_colon_is_illegal() {
        let err = tokenize("x : 2").unwrap_err();
        assert!(matches!(err, SyntaxError::IllegalCharacter { found: ':', .. }));
    }

    #[test]
    fn test_positions_track_lines_and_columns() {
        let tokens = tokenize("x\n  y").unwrap();
        assert_eq!(tokens[0].position, Position::new(1, 1, 0));
        assert_eq!(tokens[1].position, Position::new(2, 3, 4));
    }

    #[test]
    fn test_positions_are_monotonic() {
        let tokens = tokenize("func add(a int, b int) int { a + b }").unwrap();
        assert!(
            tokens.windows(2).all(|w| w[0].position.offset <= w[1].position.offset),
            "offsets must be non-decreasing"
        );
    }

    #[test]
    fn test_trailing_whitespace_is_not_an_error() {
        let tokens = tokenize("1  \n").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Integer, TokenKind::Eof]);
    }

    #[test]
    fn test_configure_rejects_empty_source() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.configure(""), Err(SyntaxError::EmptyInput));
    }

    #[test]
    fn test_scan_without_configure_is_empty_input() {
        let mut tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.scan(), Err(SyntaxError::EmptyInput));
    }

    #[test]
    fn test_reconfigure_while_busy_is_a_violation() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.configure("1").unwrap();
        tokenizer.busy = true;
        assert_eq!(tokenizer.configure("2"), Err(SyntaxError::BusyViolation));
        assert_eq!(tokenizer.scan(), Err(SyntaxError::BusyViolation));
        assert_eq!(
            tokenizer.set_trace_enabled(true),
            Err(SyntaxError::BusyViolation)
        );
        tokenizer.busy = false;
        assert!(tokenizer.configure("2").is_ok());
        assert!(tokenizer.scan().is_ok());
    }

    #[test]
    fn test_rescan_after_reconfigure_starts_fresh() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.configure("1 2").unwrap();
        assert_eq!(tokenizer.scan().unwrap().len(), 3);
        tokenizer.configure("x").unwrap();
        let tokens = tokenizer.scan().unwrap();
        assert_eq!(literals(&tokens), vec!["x", ""]);
        assert_eq!(tokens[0].position, Position::new(1, 1, 0));
    }

    #[test]
    fn test_failed_scan_leaves_tokenizer_idle() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.configure("@").unwrap();
        assert!(tokenizer.scan().is_err());
        // The busy flag must be cleared on the error path too.
        assert!(tokenizer.configure("1").is_ok());
    }

    #[test]
    fn test_enabled_sink_receives_messages() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Shared(Rc<RefCell<Vec<u8>>>);
        impl Write for Shared {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.borrow_mut().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = Rc::new(RefCell::new(Vec::new()));
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_trace_sink(Box::new(Shared(buffer.clone()))).unwrap();
        tokenizer.set_trace_enabled(true).unwrap();
        tokenizer.configure("1 + 2").unwrap();
        tokenizer.scan().unwrap();

        let written = String::from_utf8(buffer.borrow().clone()).unwrap();
        assert!(written.contains("starting scan"), "trace: {written}");
        assert!(written.contains("strategy claimed"), "trace: {written}");
    }

    #[test]
    fn test_failing_sink_aborts_the_scan() {
        struct Failing;
        impl Write for Failing {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut tokenizer = Tokenizer::new();
        tokenizer.set_trace_sink(Box::new(Failing)).unwrap();
        tokenizer.set_trace_enabled(true).unwrap();
        tokenizer.configure("1").unwrap();
        assert!(matches!(
            tokenizer.scan(),
            Err(SyntaxError::TraceWrite(_))
        ));
    }
}
