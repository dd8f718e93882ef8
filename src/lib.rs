#![forbid(unsafe_code)]
//! Rill Programming Language Front-End
//!
//! Rill is a small curly-brace language. This crate provides the front-end
//! pipeline (tokenizer, parser, AST) plus the thin CLI that drives it.
//! Semantic analysis, type checking, and execution are intentionally absent.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` /
//!   `map_err`; syntax failures travel as `SyntaxError`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use rill_syntax::ast;
pub use rill_syntax::diagnostics;
pub use rill_syntax::parser;
pub use rill_syntax::tokenizer;

pub use rill_syntax::{Position, SyntaxError, Token, TokenKind};
