//! Sexl Eval - evaluator for the Sexl expression language.
//!
//! # Architecture
//!
//! - [`FunctionRegistry`]: built-ins plus host functions, built-ins first
//! - [`Interpreter`]: eager tree walk over a [`Node`] with a depth guard
//! - [`Builtin`]: direct enum dispatch for `array`, `concat`, `getArg`,
//!   `map` and `json`
//! - [`json`]: pretty JSON encoding of values
//! - [`Evaluator`]: host-facing facade over all of the above
//!
//! # Example
//!
//! ```
//! use sexl_eval::{Evaluator, Value};
//!
//! let mut evaluator = Evaluator::new();
//! evaluator.set_args(vec![Value::from("Alice")]);
//! let greeting = evaluator.run(r#"(concat, "Hello, ", (getArg, 0))"#);
//! assert_eq!(greeting, Ok(Value::from("Hello, Alice")));
//! ```

mod builtins;
pub mod errors;
mod evaluator;
mod interpreter;
pub mod json;
mod registry;

pub use builtins::Builtin;
pub use errors::{EvalError, EvalResult};
pub use evaluator::{Error, Evaluator, EvaluatorBuilder};
pub use interpreter::{evaluate, Interpreter};
pub use registry::{Callee, FunctionRegistry, NativeFn};
pub use sexl_ir::{Node, Value, ValueMap};
pub use sexl_parse::ParseError;
