//! Runtime values.
//!
//! `Int` and `Float` are distinct variants and never convert into each other
//! implicitly: a literal with a `.` is a `Float`, everything else an `Int`,
//! and that choice is preserved through evaluation and JSON encoding.

mod map;

use std::ops::Range;

pub use map::ValueMap;

/// Dynamically-typed value produced by evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// String-keyed map preserving insertion order.
    Map(ValueMap),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Convert to text using the string-cast rules of `concat` and map keys.
    ///
    /// `null` and `false` become the empty string and `true` becomes `"1"`.
    /// Floats keep 14 significant digits, drop a zero fraction, and switch
    /// to `1.0E+16` form for very large or very small magnitudes. Both
    /// collection types collapse to the literal `"Array"`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null | Value::Bool(false) => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => float_to_text(*f),
            Value::Str(s) => s.clone(),
            Value::List(_) | Value::Map(_) => "Array".to_string(),
        }
    }
}

/// Significant digits kept when a float becomes text.
const TEXT_PRECISION: usize = 14;

/// Decimal exponents printed positionally; the rest use `1.5E+20` form.
const POSITIONAL_EXPONENTS: Range<i32> = -4..14;

fn float_to_text(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        let text = if f > 0.0 { "INF" } else { "-INF" };
        return text.to_string();
    }

    // `d.ddddde<exp>`, already rounded to TEXT_PRECISION digits.
    let scientific = format!("{:.*e}", TEXT_PRECISION - 1, f);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.to_string();
    };
    let sign = if mantissa.starts_with('-') { "-" } else { "" };
    let all_digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = match all_digits.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    if !POSITIONAL_EXPONENTS.contains(&exponent) {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{first}.{rest}E{exponent_sign}{}", exponent.unsigned_abs());
    }

    match usize::try_from(exponent) {
        Ok(whole) => {
            let point = whole + 1;
            if digits.len() > point {
                format!("{sign}{}.{}", &digits[..point], &digits[point..])
            } else {
                format!("{sign}{digits}{}", "0".repeat(point - digits.len()))
            }
        }
        Err(_) => {
            let zeros = usize::try_from(-1 - exponent).unwrap_or_default();
            format!("{sign}0.{}{digits}", "0".repeat(zeros))
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}
