//! Define the separator vocabulary for the Rill language.
//!
//! Separators cover all punctuation and operator spellings: delimiters,
//! statement markers, the arithmetic operators, and the multi-character
//! markers (`...`, `//`, `:=`). The tokenizer matches multi-character
//! spellings before single-character ones, so `...` never scans as three
//! dots and `//` never scans as two slashes.
//!
//! ## Examples
//! ```rust
//! use rill_core::lang::separators;
//!
//! assert!(separators::is_separator("..."));
//! assert!(separators::is_separator("+"));
//! assert!(!separators::is_separator(":"));
//! ```

/// Multi-character separators, tried before [`SINGLE_CHAR`].
pub const MULTI_CHAR: &[&str] = &["...", "//", ":="];

/// Single-character separators.
pub const SINGLE_CHAR: &[&str] = &[
    "(", ")", "*", "+", ",", "-", ".", "/", ";", "=", "[", "]", "{", "}",
];

/// Marker introducing a short variable declaration (`x := 2`).
pub const SHORT_DECLARATION: &str = ":=";

/// Marker binding an initializer in a long-form declaration (`var x = 2`).
pub const ASSIGN: &str = "=";

/// Marker flagging a variadic function parameter (`args ...int`).
pub const VARIADIC: &str = "...";

/// Marker starting a line comment.
pub const COMMENT: &str = "//";

/// Return `true` if `literal` is a separator spelling (either length).
pub fn is_separator(literal: &str) -> bool {
    MULTI_CHAR.contains(&literal) || SINGLE_CHAR.binary_search(&literal).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_registry_is_sorted() {
        assert!(SINGLE_CHAR.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_multi_char_entries_are_multi_char() {
        for sep in MULTI_CHAR {
            assert!(sep.chars().count() > 1, "{sep:?} belongs in SINGLE_CHAR");
        }
    }

    #[test]
    fn test_markers_are_registered() {
        assert!(is_separator(SHORT_DECLARATION));
        assert!(is_separator(VARIADIC));
        assert!(is_separator(COMMENT));
    }

    #[test]
    fn test_single_char_entries_are_single_char() {
        for sep in SINGLE_CHAR {
            assert_eq!(sep.chars().count(), 1);
        }
    }
}
