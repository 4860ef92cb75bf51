//! Abstract syntax tree.
//!
//! A program is a single [`Node`]: either a constant or a call whose
//! arguments are nodes themselves. Argument order is significant; it is both
//! the evaluation order and the positional order seen by the callee.

use std::fmt::{self, Write as _};

use crate::value::Value;

/// AST node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A constant.
    Literal(Value),
    /// A function invocation `(name, arg, …)`.
    Call { name: String, args: Vec<Node> },
}

impl Node {
    /// Create a literal node.
    pub fn literal(value: impl Into<Value>) -> Self {
        Node::Literal(value.into())
    }

    /// Create a call node.
    pub fn call(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::Call {
            name: name.into(),
            args,
        }
    }
}

/// Renders the node as canonical source text.
///
/// Calls print as `(name, arg, …)`. Literal lists and maps (which only occur
/// in host-built trees) print as the `array`/`map` calls that produce them.
/// Whitespace runs inside strings are not protected, and negative or
/// non-finite numbers have no source form, so those cases do not re-parse
/// to the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write_value(f, value),
            Node::Call { name, args } => {
                f.write_char('(')?;
                f.write_str(name)?;
                for arg in args {
                    f.write_str(", ")?;
                    fmt::Display::fmt(arg, f)?;
                }
                f.write_char(')')
            }
        }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(n) => write!(f, "{n}"),
        Value::Float(x) => write_float(f, *x),
        Value::Str(s) => write_quoted(f, s),
        Value::List(items) => {
            f.write_str("(array")?;
            for item in items {
                f.write_str(", ")?;
                write_value(f, item)?;
            }
            f.write_char(')')
        }
        Value::Map(map) => {
            f.write_str("(map, (array")?;
            for key in map.keys() {
                f.write_str(", ")?;
                write_quoted(f, key)?;
            }
            f.write_str("), (array")?;
            for (_, item) in map.iter() {
                f.write_str(", ")?;
                write_value(f, item)?;
            }
            f.write_str("))")
        }
    }
}

/// Floats always carry a `.` so they re-lex as floats.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = x.to_string();
    f.write_str(&text)?;
    if x.is_finite() && !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}
