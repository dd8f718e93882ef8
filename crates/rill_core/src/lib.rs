//! Provide the canonical language vocabulary for the Rill front-end and tooling.
//!
//! This crate is intentionally small and dependency-free. It is the single
//! source of truth for the reserved-word sets the tokenizer and parser agree
//! on: keywords, primitive type names, separators, and naming conventions.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no syntax
//!   types. The tokenizer/parser in `rill_syntax` own syntactic legality;
//!   this crate only answers membership questions.

pub mod lang;
