//! Parse error types.

use sexl_lexer::LexError;
use sexl_stack::DepthExceeded;
use thiserror::Error;

/// Reason parsing failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Tokenization failed before parsing started.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// `(` was the last token.
    #[error("expected a function name after `(`")]
    ExpectedFunctionName,
    /// The token stream ended inside a call.
    #[error("unexpected end of input: missing `)`")]
    UnexpectedEndOfInput,
    /// A lexer/parser contract breach: a token of the wrong kind reached a
    /// place that only accepts another. Never produced for valid token streams.
    #[error("expected {expected}, found {found}")]
    UnexpectedTokenType {
        expected: &'static str,
        found: &'static str,
    },
    /// Calls are nested deeper than the configured limit.
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

impl From<DepthExceeded> for ParseError {
    fn from(err: DepthExceeded) -> Self {
        ParseError::NestingTooDeep { limit: err.limit }
    }
}
