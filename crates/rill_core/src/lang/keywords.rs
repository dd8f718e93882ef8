//! Define the reserved keyword vocabulary for the Rill language.
//!
//! This module is the single source of truth for reserved words. The
//! tokenizer's keyword strategy and the parser's statement dispatcher both
//! consult it, so a word added here is reserved everywhere at once.
//!
//! ## Notes
//! - Lookup via [`is_keyword`] is **case-sensitive**; `Func` is an ordinary
//!   identifier.
//! - The table is kept sorted so membership is a binary search.
//!
//! ## Examples
//! ```rust
//! use rill_core::lang::keywords;
//!
//! assert!(keywords::is_keyword("func"));
//! assert!(!keywords::is_keyword("funcX"));
//! ```

/// Registry of all reserved keywords, sorted lexicographically.
pub const KEYWORDS: &[&str] = &[
    "break", "case", "const", "continue", "default", "else", "for", "func", "if", "import", "map",
    "package", "range", "return", "switch", "type", "var",
];

/// Keyword starting a long-form variable declaration.
pub const DECLARATION: &str = "var";

/// Keyword starting a function declaration or an anonymous function literal.
pub const FUNCTION: &str = "func";

/// Return `true` if `word` is a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}
