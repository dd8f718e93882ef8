//! Syntax frontend for the Rill language: tokenizer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI and
//! future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does no name resolution,
//!   type checking, or execution, and it serializes nothing; callers decide
//!   how tokens and AST nodes leave the process.
//! - Vocabulary identity (keywords/type names/separators) comes from the
//!   `rill_core::lang` registries.
//!
//! ## Examples
//! ```rust,no_run
//! use rill_syntax::{parser, tokenizer};
//!
//! let tokens = tokenizer::tokenize("x := 2").unwrap();
//! let file = parser::parse(tokens).unwrap();
//! assert_eq!(file.statements.len(), 1);
//! ```
//!
//! ## See also
//! - `rill_core::lang` for the registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod parser;
pub mod tokenizer;
pub mod trace;

pub use diagnostics::SyntaxError;
pub use tokenizer::{Position, Token, TokenKind};
