//! Lexer error types.

use thiserror::Error;

/// Reason tokenization failed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// The source produced no tokens (empty, whitespace-only, or nothing
    /// but unrecognized characters).
    #[error("tokenization failed: source contains no tokens")]
    TokenizationFailure,
    /// The raw source holds an odd number of `"` characters.
    #[error("unbalanced quotes: found {count} `\"` characters")]
    UnbalancedQuotes { count: usize },
}
