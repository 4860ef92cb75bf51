//! Built-in functions.
//!
//! Built-ins form a fixed table that is consulted before any user function,
//! so a host can never shadow them. Dispatch is a direct match on
//! [`Builtin`] rather than a lookup through boxed closures.

use sexl_ir::{Value, ValueMap};
use tracing::debug;

use crate::errors::{wrong_arg_count, wrong_arg_type, EvalResult};
use crate::json;

/// The fixed set of built-in functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `(array, a, b, ...)`: a list of the arguments.
    Array,
    /// `(concat, a, b, ...)`: the arguments' text, joined.
    Concat,
    /// `(getArg, i)`: the `i`th host argument, or `null`.
    GetArg,
    /// `(map, keys, values)`: an ordered map pairing the two lists.
    Map,
    /// `(json, v)`: `v` encoded as pretty JSON.
    Json,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Array,
        Builtin::Concat,
        Builtin::GetArg,
        Builtin::Map,
        Builtin::Json,
    ];

    /// Resolve a call name to a built-in.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "array" => Some(Builtin::Array),
            "concat" => Some(Builtin::Concat),
            "getArg" => Some(Builtin::GetArg),
            "map" => Some(Builtin::Map),
            "json" => Some(Builtin::Json),
            _ => None,
        }
    }

    /// The name this built-in is called by.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Array => "array",
            Builtin::Concat => "concat",
            Builtin::GetArg => "getArg",
            Builtin::Map => "map",
            Builtin::Json => "json",
        }
    }

    /// Invoke the built-in on already-evaluated arguments.
    pub fn call(self, args: Vec<Value>, host_args: &[Value]) -> EvalResult {
        match self {
            Builtin::Array => Ok(Value::List(args)),
            Builtin::Concat => Ok(Value::Str(args.iter().map(Value::to_text).collect())),
            Builtin::GetArg => get_arg(&args, host_args),
            Builtin::Map => map(args),
            Builtin::Json => {
                let [value] = args.as_slice() else {
                    return Err(wrong_arg_count(self.name(), 1, args.len()));
                };
                json::encode(value).map(Value::Str)
            }
        }
    }
}

fn get_arg(args: &[Value], host_args: &[Value]) -> EvalResult {
    let [index] = args else {
        return Err(wrong_arg_count(Builtin::GetArg.name(), 1, args.len()));
    };
    let slot = match index {
        Value::Int(n) => usize::try_from(*n).ok(),
        Value::Float(f) => float_index(*f),
        _ => None,
    };
    Ok(slot
        .and_then(|i| host_args.get(i))
        .cloned()
        .unwrap_or(Value::Null))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "truncation toward zero is the indexing rule; sign checked first"
)]
fn float_index(f: f64) -> Option<usize> {
    let whole = f.trunc();
    if whole.is_finite() && whole >= 0.0 {
        Some(whole as usize)
    } else {
        None
    }
}

fn map(args: Vec<Value>) -> EvalResult {
    let name = Builtin::Map.name();
    let [keys, values]: [Value; 2] = args
        .try_into()
        .map_err(|args: Vec<Value>| wrong_arg_count(name, 2, args.len()))?;

    let (keys, values) = match (keys, values) {
        (Value::List(keys), Value::List(values)) => (keys, values),
        (Value::List(_), other) | (other, _) => return Err(wrong_arg_type(name, "list", &other)),
    };

    if keys.len() != values.len() {
        debug!(
            keys = keys.len(),
            values = values.len(),
            "map: length mismatch"
        );
        return Ok(Value::Bool(false));
    }

    let entries: ValueMap = keys.iter().map(Value::to_text).zip(values).collect();
    Ok(Value::Map(entries))
}

#[cfg(test)]
mod tests;
