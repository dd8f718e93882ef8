//! Parser for the Rill language.
//!
//! Converts a materialized, Eof-terminated token sequence into an AST
//! [`File`](crate::ast::File) by recursive descent, with expression parsing
//! done by precedence climbing.
//!
//! ## Notes
//! - The parser is single-pass and run-to-completion: the first sub-parser
//!   failure aborts the whole parse with no partial AST and no recovery.
//! - Two-token lookahead disambiguates short declarations, calls, and type
//!   conversions.

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::tokenizer::tokens::{Position, Token, TokenKind};
use crate::trace::Trace;
use rill_core::lang::{conventions, keywords, separators};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
