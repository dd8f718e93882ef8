//! Define the primitive type-name vocabulary for the Rill language.
//!
//! Type names are reserved words with their own token kind: the tokenizer's
//! type strategy runs before the keyword and identifier strategies, so these
//! spellings can never become identifiers.
//!
//! ## Examples
//! ```rust
//! use rill_core::lang::types;
//!
//! assert!(types::is_type_name("int"));
//! assert!(!types::is_type_name("integer"));
//! ```

/// Registry of all primitive type names, sorted lexicographically.
pub const TYPES: &[&str] = &["bool", "float", "int", "rune", "string"];

/// Return `true` if `word` is a primitive type name.
pub fn is_type_name(word: &str) -> bool {
    TYPES.binary_search(&word).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted() {
        assert!(TYPES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_type_names_are_not_keywords() {
        use crate::lang::keywords;
        for ty in TYPES {
            assert!(
                !keywords::is_keyword(ty),
                "type name {ty:?} must not also be a keyword"
            );
        }
    }
}
