//! Host-facing evaluator.
//!
//! [`Evaluator`] bundles a [`FunctionRegistry`], the host argument list and a
//! nesting limit behind the `parse` / `evaluate` pair most hosts want. Hosts
//! that need per-evaluation registries use [`Interpreter`] directly.

use sexl_ir::{Node, Value};
use sexl_parse::ParseError;
use sexl_stack::DepthLimit;
use thiserror::Error;
use tracing::debug;

use crate::errors::{EvalError, EvalResult};
use crate::interpreter::Interpreter;
use crate::registry::FunctionRegistry;

/// Failure of [`Evaluator::run`]: either stage can fail.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parses and evaluates source text against a registry and host arguments.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    registry: FunctionRegistry,
    args: Vec<Value>,
    limit: DepthLimit,
}

impl Evaluator {
    /// An evaluator with the built-ins, no host arguments and the default
    /// nesting limit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Replace the host argument list read by `getArg`.
    pub fn set_args(&mut self, args: Vec<Value>) {
        self.args = args;
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Add or replace a user function. Built-in names stay built-in.
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        self.registry.register(name, function);
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn depth_limit(&self) -> DepthLimit {
        self.limit
    }

    /// Parse source text into an AST.
    pub fn parse(&self, source: &str) -> Result<Node, ParseError> {
        sexl_parse::parse_with_limit(source, self.limit)
    }

    /// Evaluate an AST. The same AST may be evaluated any number of times.
    pub fn evaluate(&self, node: &Node) -> EvalResult {
        Interpreter::new(&self.registry, &self.args)
            .with_depth_limit(self.limit)
            .eval(node)
    }

    /// Parse and evaluate in one step.
    pub fn run(&self, source: &str) -> Result<Value, Error> {
        let node = self.parse(source)?;
        debug!(%node, "evaluating");
        Ok(self.evaluate(&node)?)
    }
}

/// Builder for [`Evaluator`].
#[derive(Default)]
pub struct EvaluatorBuilder {
    registry: FunctionRegistry,
    args: Vec<Value>,
    limit: DepthLimit,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host argument list.
    #[must_use]
    pub fn args(mut self, args: impl IntoIterator<Item = Value>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    /// Register a user function.
    #[must_use]
    pub fn function<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        self.registry.register(name, function);
        self
    }

    /// Set the maximum call nesting depth for parsing and evaluation.
    #[must_use]
    pub fn max_depth(mut self, max: usize) -> Self {
        self.limit = DepthLimit::new(max);
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            registry: self.registry,
            args: self.args,
            limit: self.limit,
        }
    }
}
