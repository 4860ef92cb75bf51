//! Lexer for Sexl source text.
//!
//! Tokenization runs in three steps:
//!
//! 1. **Quote balance**: every `"` in the raw text is counted, escaped or
//!    not. An odd count fails with [`LexError::UnbalancedQuotes`]. This is a
//!    parity heuristic over the raw text, not a structural check, and it is
//!    applied before anything else.
//! 2. **Scan**: whitespace runs collapse to a single space (inside string
//!    literals too), then the scanner emits tokens left to right. Characters
//!    that start no token are dropped silently.
//! 3. **Non-empty**: a source that yields no tokens at all fails with
//!    [`LexError::TokenizationFailure`].

mod escape;
mod lex_error;
mod scanner;

pub use lex_error::LexError;
pub use sexl_ir::Token;

use scanner::{collapse_whitespace, Scanner};
use tracing::trace;

/// Convert source text into its token sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    check_quote_balance(source)?;

    let normalized = collapse_whitespace(source);
    let tokens: Vec<Token> = Scanner::new(&normalized).collect();
    trace!(len = source.len(), tokens = tokens.len(), "tokenized");

    if tokens.is_empty() {
        return Err(LexError::TokenizationFailure);
    }
    Ok(tokens)
}

/// Fail if the raw text holds an odd number of `"` characters.
///
/// Escaped quotes count too, so `"a\"b"` (three quote characters) is
/// rejected even though it is a single well-formed literal.
pub fn check_quote_balance(source: &str) -> Result<(), LexError> {
    let count = source.bytes().filter(|&b| b == b'"').count();
    if count % 2 == 0 {
        Ok(())
    } else {
        Err(LexError::UnbalancedQuotes { count })
    }
}
