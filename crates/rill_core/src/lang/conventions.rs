//! Shared naming conventions (well-known spellings and derived properties).

/// Entry point function name.
pub const ENTRYPOINT_NAME: &str = "main";

/// Return `true` if a declared name is exported by convention.
///
/// Export status is not separate syntax: a name whose first character is
/// uppercase is visible outside its declaring scope.
///
/// ## Examples
/// ```rust
/// use rill_core::lang::conventions;
///
/// assert!(conventions::is_exported("Greet"));
/// assert!(!conventions::is_exported("greet"));
/// assert!(!conventions::is_exported("_Greet"));
/// ```
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
