//! Rill language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved
//! keywords, primitive type names, separators, and naming conventions.
//!
//! The design goal is to avoid stringly-typed membership checks scattered
//! across the tokenizer and parser. Callers ask the registries, and the
//! registries stay in one place.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side
//!   effects.
//! - The tokenizer/parser enforce syntax; registries provide spellings for
//!   shared use (scanning, diagnostics, docs).
//!
//! ## Examples
//! ```rust
//! use rill_core::lang;
//!
//! assert!(lang::keywords::is_keyword("func"));
//! assert!(lang::types::is_type_name("int"));
//! assert!(!lang::is_reserved("funcX"));
//! ```

pub mod conventions;
pub mod keywords;
pub mod separators;
pub mod types;

/// Return `true` if `word` is claimed vocabulary: a reserved keyword or a
/// primitive type name. Reserved words can never be identifiers.
pub fn is_reserved(word: &str) -> bool {
    keywords::is_keyword(word) || types::is_type_name(word)
}
