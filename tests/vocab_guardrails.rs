//! Guardrail tests keeping the vocabulary registries and the tokenizer in
//! lock-step: every registered spelling must scan to a single token of the
//! registered kind.

use rill::TokenKind;
use rill::tokenizer;
use rill_core::lang::{keywords, separators, types};

fn single_token(source: &str) -> (String, TokenKind) {
    let tokens = tokenizer::tokenize(source)
        .unwrap_or_else(|e| panic!("tokenize({source:?}) failed: {e}"));
    assert_eq!(
        tokens.len(),
        2,
        "expected token + Eof for {source:?}, got {tokens:?}"
    );
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    (tokens[0].literal.clone(), tokens[0].kind)
}

#[test]
fn test_keyword_registry_parity() {
    for keyword in keywords::KEYWORDS {
        let (literal, kind) = single_token(keyword);
        assert_eq!(literal, *keyword);
        assert_eq!(kind, TokenKind::Keyword, "keyword {keyword:?}");
    }
}

#[test]
fn test_type_registry_parity() {
    for ty in types::TYPES {
        let (literal, kind) = single_token(ty);
        assert_eq!(literal, *ty);
        assert_eq!(kind, TokenKind::Type, "type name {ty:?}");
    }
}

#[test]
fn test_separator_registry_parity() {
    for sep in separators::MULTI_CHAR.iter().chain(separators::SINGLE_CHAR) {
        let (literal, kind) = single_token(sep);
        assert_eq!(literal, *sep);
        assert_eq!(kind, TokenKind::Separator, "separator {sep:?}");
    }
}

#[test]
fn test_keyword_and_type_vocabularies_are_disjoint() {
    for keyword in keywords::KEYWORDS {
        assert!(
            !types::TYPES.contains(keyword),
            "{keyword:?} is registered as both keyword and type"
        );
    }
}

#[test]
fn test_reserved_words_never_scan_as_identifiers() {
    for word in keywords::KEYWORDS.iter().chain(types::TYPES) {
        let (_, kind) = single_token(word);
        assert_ne!(kind, TokenKind::Identifier, "{word:?} leaked to identifier");
    }
}
