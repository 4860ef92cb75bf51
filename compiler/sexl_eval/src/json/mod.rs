//! JSON encoding of runtime values.
//!
//! Output is pretty-printed with four-space indentation and leaves non-ASCII
//! text unescaped. `Int` and `Float` stay distinguishable: floats always
//! carry a fraction or exponent (`2.0`, never `2`). Non-finite floats have
//! no JSON form and fail instead of degrading to `null`.
//!
//! [`decode`] goes the other way for hosts that receive arguments as JSON.

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use sexl_ir::{Value, ValueMap};

use crate::errors::{serialization_failure, EvalError};

const INDENT: &[u8] = b"    ";

/// Serialize adapter over a borrowed [`Value`].
#[derive(Clone, Copy, Debug)]
pub struct Json<'a>(pub &'a Value);

impl Serialize for Json<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) if !f.is_finite() => {
                Err(S::Error::custom(format!("{f} has no JSON representation")))
            }
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Json(item))?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, &Json(value))?;
                }
                map.end()
            }
        }
    }
}

/// Encode `value` as pretty-printed JSON.
pub fn encode(value: &Value) -> Result<String, EvalError> {
    let mut out = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    Json(value)
        .serialize(&mut serializer)
        .map_err(serialization_failure)?;
    String::from_utf8(out).map_err(serialization_failure)
}

/// Parse JSON text into a [`Value`].
///
/// Integers that fit `i64` become `Int`; every other number becomes `Float`.
/// Object keys keep their document order.
pub fn decode(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(text).map(from_json)
}

/// Convert a generic `serde_json` value into a [`Value`].
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(object) => Value::Map(
            object
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect::<ValueMap>(),
        ),
    }
}

#[cfg(test)]
mod tests;
