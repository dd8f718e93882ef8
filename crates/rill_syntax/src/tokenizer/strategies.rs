//! The ordered tokenizer strategies.
//!
//! Each strategy inspects the scan context and either claims a token,
//! declines (`Ok(None)`), or fails the whole scan. Word strategies that
//! tentatively consume characters restore the cursor exactly before
//! declining, so a later strategy can re-attempt the same span.

use rill_core::lang;

use super::{ScanContext, tokens::{Token, TokenKind}};
use crate::diagnostics::SyntaxError;

/// A single recognizer tried by the dispatcher.
pub(crate) struct Strategy {
    pub name: &'static str,
    pub run: fn(&mut ScanContext<'_>) -> Result<Option<Token>, SyntaxError>,
}

/// The fixed priority order. Type and keyword checks run strictly before the
/// identifier check so reserved spellings can never become identifiers.
pub(crate) const STRATEGIES: &[Strategy] = &[
    Strategy { name: "type", run: scan_type_name },
    Strategy { name: "keyword", run: scan_keyword },
    Strategy { name: "number", run: scan_number },
    Strategy { name: "identifier", run: scan_identifier },
    Strategy { name: "separator", run: scan_separator },
];

fn scan_type_name(ctx: &mut ScanContext<'_>) -> Result<Option<Token>, SyntaxError> {
    scan_reserved_word(ctx, lang::types::TYPES, TokenKind::Type)
}

fn scan_keyword(ctx: &mut ScanContext<'_>) -> Result<Option<Token>, SyntaxError> {
    scan_reserved_word(ctx, lang::keywords::KEYWORDS, TokenKind::Keyword)
}

/// Tentatively consume a letter run and test membership in a closed word
/// list, committing only once membership is confirmed.
fn scan_reserved_word(
    ctx: &mut ScanContext<'_>,
    vocabulary: &[&str],
    kind: TokenKind,
) -> Result<Option<Token>, SyntaxError> {
    if !ctx.current().is_some_and(char::is_alphabetic) {
        return Ok(None);
    }
    let saved = ctx.snapshot();
    while ctx.current().is_some_and(char::is_alphabetic) {
        ctx.advance();
    }
    let word = ctx.slice(saved.offset, ctx.offset());
    if vocabulary.binary_search(&word.as_str()).is_ok() {
        Ok(Some(Token::new(word, kind, saved.position())))
    } else {
        ctx.restore(saved);
        Ok(None)
    }
}

/// Numeric literals: a digit run, optionally a decimal point followed by at
/// least one digit. The literal slice is exactly the consumed run.
fn scan_number(ctx: &mut ScanContext<'_>) -> Result<Option<Token>, SyntaxError> {
    if !ctx.current().is_some_and(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    let start = ctx.snapshot();
    while ctx.current().is_some_and(|c| c.is_ascii_digit()) {
        ctx.advance();
    }

    let mut kind = TokenKind::Integer;
    if ctx.current() == Some('.') {
        ctx.advance();
        if !ctx.current().is_some_and(|c| c.is_ascii_digit()) {
            // Committed past the dot; the whole scan fails here.
            return Err(SyntaxError::MalformedLiteral {
                reason: "expected a digit after the decimal point".to_string(),
                position: ctx.position(),
            });
        }
        while ctx.current().is_some_and(|c| c.is_ascii_digit()) {
            ctx.advance();
        }
        kind = TokenKind::Float;
    }

    let literal = ctx.slice(start.offset, ctx.offset());
    Ok(Some(Token::new(literal, kind, start.position())))
}

fn scan_identifier(ctx: &mut ScanContext<'_>) -> Result<Option<Token>, SyntaxError> {
    if !ctx.current().is_some_and(|c| c.is_alphabetic() || c == '_') {
        return Ok(None);
    }
    let saved = ctx.snapshot();
    while ctx.current().is_some_and(|c| c.is_alphanumeric() || c == '_') {
        ctx.advance();
    }
    let word = ctx.slice(saved.offset, ctx.offset());
    if lang::is_reserved(&word) {
        // Reserved spellings are claimed by the type/keyword strategies,
        // which run strictly before this one.
        ctx.restore(saved);
        return Ok(None);
    }
    Ok(Some(Token::new(word, TokenKind::Identifier, saved.position())))
}

/// Separators: multi-character spellings are matched before single-character
/// ones, both from the closed registry sets.
fn scan_separator(ctx: &mut ScanContext<'_>) -> Result<Option<Token>, SyntaxError> {
    let start = ctx.snapshot();
    for sep in lang::separators::MULTI_CHAR {
        if ctx.matches_literal(sep) {
            ctx.advance_by(sep.chars().count());
            return Ok(Some(Token::new(*sep, TokenKind::Separator, start.position())));
        }
    }

    let Some(c) = ctx.current() else {
        return Ok(None);
    };
    let literal = c.to_string();
    if lang::separators::SINGLE_CHAR.binary_search(&literal.as_str()).is_ok() {
        ctx.advance();
        return Ok(Some(Token::new(literal, TokenKind::Separator, start.position())));
    }
    Ok(None)
}
