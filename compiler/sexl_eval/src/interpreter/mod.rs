//! Tree-walking interpreter.
//!
//! Evaluation is strictly eager: every argument of a call is evaluated, left
//! to right, before the callee is looked up. An error in any argument aborts
//! the whole call, so user functions never see a partially evaluated list.

use sexl_ir::{Node, Value};
use sexl_stack::{ensure_sufficient_stack, DepthLimit};
use tracing::debug;

use crate::errors::{unknown_function, EvalResult};
use crate::registry::{Callee, FunctionRegistry};

/// Evaluates nodes against a borrowed registry and host argument list.
///
/// Both are read-only for the lifetime of the interpreter, so one registry
/// can back many interpreters at once.
pub struct Interpreter<'a> {
    registry: &'a FunctionRegistry,
    args: &'a [Value],
    limit: DepthLimit,
    depth: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(registry: &'a FunctionRegistry, args: &'a [Value]) -> Self {
        Interpreter {
            registry,
            args,
            limit: DepthLimit::default(),
            depth: 0,
        }
    }

    /// Set the maximum call nesting depth.
    #[must_use]
    pub fn with_depth_limit(mut self, limit: DepthLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Evaluate `node` to a value.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        match node {
            Node::Literal(value) => Ok(value.clone()),
            Node::Call { name, args } => {
                self.limit.check(self.depth)?;
                self.depth += 1;
                let result = ensure_sufficient_stack(|| self.eval_call(name, args));
                self.depth -= 1;
                result
            }
        }
    }

    #[tracing::instrument(level = "trace", skip(self, args), fields(depth = self.depth))]
    fn eval_call(&mut self, name: &str, args: &[Node]) -> EvalResult {
        let values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;
        self.call(name, values)
    }

    /// Invoke `name` on already-evaluated arguments.
    pub fn call(&self, name: &str, args: Vec<Value>) -> EvalResult {
        match self.registry.lookup(name) {
            Some(Callee::Builtin(builtin)) => builtin.call(args, self.args),
            Some(Callee::User(function)) => function(&args),
            None => {
                debug!(name, "unknown function");
                Err(unknown_function(name))
            }
        }
    }
}

/// Evaluate `node` with the default depth limit.
pub fn evaluate(node: &Node, registry: &FunctionRegistry, args: &[Value]) -> EvalResult {
    Interpreter::new(registry, args).eval(node)
}
