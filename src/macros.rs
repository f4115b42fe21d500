//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_LOOKUP!` - Builds a lexeme-to-tag lookup map from a table slice
//! - `MK_MUNCH!` - Builds a longest-first trial order from a table slice
//!
//! These macros reduce boilerplate in the lexer's classification tables.

/// Builds a `HashMap` from a `&[(&str, T)]` table slice.
///
/// # Example
///
/// ```ignore
/// lazy_static! {
///     static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> =
///         MK_LOOKUP!(KEYWORDS);
/// }
/// ```
#[macro_export]
macro_rules! MK_LOOKUP {
    ($table:expr) => {{
        let mut map = std::collections::HashMap::new();
        for (lexeme, tag) in $table.iter() {
            map.insert(*lexeme, *tag);
        }
        map
    }};
}

/// Sorts a `&[(&str, T)]` table slice so the longest lexemes come first.
///
/// Recognisers walk the result in order, so a 2-character lexeme is always
/// tried before a 1-character prefix of it.
///
/// # Example
///
/// ```ignore
/// lazy_static! {
///     static ref OPERATOR_MUNCH: Vec<(&'static str, Operator)> =
///         MK_MUNCH!(OPERATORS);
/// }
/// ```
#[macro_export]
macro_rules! MK_MUNCH {
    ($table:expr) => {{
        let mut entries = $table.to_vec();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        entries
    }};
}
