//! Evaluation errors and their constructors.
//!
//! Every failure the interpreter or a built-in can raise is an [`EvalError`]
//! variant. The constructor functions below are the single place those
//! variants are built, so call sites read as `Err(unknown_function(name))`.

use std::fmt;

use sexl_ir::Value;
use sexl_stack::DepthExceeded;
use thiserror::Error;

/// Result of evaluating an expression or invoking a function.
pub type EvalResult = Result<Value, EvalError>;

/// Reason evaluation failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No built-in or user function has this name.
    #[error("unknown function: {name}")]
    UnknownFunction { name: String },
    /// `json` was given a value JSON cannot represent.
    #[error("serialization failed: {message}")]
    SerializationFailure { message: String },
    /// Calls are nested deeper than the configured limit.
    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
    /// A function was called with the wrong number of arguments.
    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    /// A function was called with an argument of the wrong type.
    #[error("{name} expects a {expected} argument, got {got}")]
    WrongArgType {
        name: String,
        expected: &'static str,
        got: &'static str,
    },
    /// Failure reported by a user function.
    #[error("{0}")]
    Custom(String),
}

impl EvalError {
    /// Create a free-form error, for user functions.
    pub fn new(message: impl Into<String>) -> Self {
        EvalError::Custom(message.into())
    }
}

impl From<DepthExceeded> for EvalError {
    fn from(err: DepthExceeded) -> Self {
        EvalError::NestingTooDeep { limit: err.limit }
    }
}

/// No function registered under `name`.
#[cold]
pub fn unknown_function(name: &str) -> EvalError {
    EvalError::UnknownFunction {
        name: name.to_string(),
    }
}

/// Wrong number of arguments.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    }
}

/// Wrong argument type.
#[cold]
pub fn wrong_arg_type(name: &str, expected: &'static str, got: &Value) -> EvalError {
    EvalError::WrongArgType {
        name: name.to_string(),
        expected,
        got: got.type_name(),
    }
}

/// JSON encoding failed.
#[cold]
pub fn serialization_failure(err: impl fmt::Display) -> EvalError {
    EvalError::SerializationFailure {
        message: err.to_string(),
    }
}
