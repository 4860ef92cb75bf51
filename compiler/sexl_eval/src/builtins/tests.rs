#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::EvalError;
use pretty_assertions::assert_eq;

fn strs(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| Value::from(*s)).collect())
}

fn ints(items: &[i64]) -> Value {
    Value::List(items.iter().map(|n| Value::Int(*n)).collect())
}

// === Names ===

#[test]
fn test_name_round_trip() {
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
    }
    assert_eq!(Builtin::from_name("getarg"), None);
    assert_eq!(Builtin::from_name("Array"), None);
}

// === array ===

#[test]
fn test_array_collects_args() {
    assert_eq!(
        Builtin::Array.call(vec![Value::Int(1), Value::from("a")], &[]),
        Ok(Value::List(vec![Value::Int(1), Value::from("a")]))
    );
    assert_eq!(Builtin::Array.call(vec![], &[]), Ok(Value::List(vec![])));
}

// === concat ===

#[test]
fn test_concat_joins_text() {
    let args = vec![
        Value::from("n="),
        Value::Int(3),
        Value::Float(2.0),
        Value::Float(0.5),
        Value::Bool(true),
        Value::Bool(false),
        Value::Null,
        ints(&[1]),
    ];
    assert_eq!(
        Builtin::Concat.call(args, &[]),
        Ok(Value::from("n=3.20.51Array"))
    );
}

#[test]
fn test_concat_empty() {
    assert_eq!(Builtin::Concat.call(vec![], &[]), Ok(Value::from("")));
    assert_eq!(
        Builtin::Concat.call(vec![Value::from("")], &[]),
        Ok(Value::from(""))
    );
}

// === getArg ===

#[test]
fn test_get_arg_in_range() {
    let host = [Value::from("Alice"), Value::Int(42)];
    assert_eq!(
        Builtin::GetArg.call(vec![Value::Int(0)], &host),
        Ok(Value::from("Alice"))
    );
    assert_eq!(
        Builtin::GetArg.call(vec![Value::Int(1)], &host),
        Ok(Value::Int(42))
    );
}

#[test]
fn test_get_arg_out_of_range_is_null() {
    let host = [Value::from("Alice")];
    for index in [Value::Int(10), Value::Int(-1), Value::Int(i64::MIN)] {
        assert_eq!(Builtin::GetArg.call(vec![index], &host), Ok(Value::Null));
    }
    assert_eq!(Builtin::GetArg.call(vec![Value::Int(0)], &[]), Ok(Value::Null));
}

#[test]
fn test_get_arg_float_index_truncates() {
    let host = [Value::from("a"), Value::from("b")];
    assert_eq!(
        Builtin::GetArg.call(vec![Value::Float(1.9)], &host),
        Ok(Value::from("b"))
    );
    assert_eq!(
        Builtin::GetArg.call(vec![Value::Float(-0.5)], &host),
        Ok(Value::from("a"))
    );
    assert_eq!(
        Builtin::GetArg.call(vec![Value::Float(f64::NAN)], &host),
        Ok(Value::Null)
    );
}

#[test]
fn test_get_arg_non_numeric_index_is_null() {
    let host = [Value::from("a")];
    assert_eq!(
        Builtin::GetArg.call(vec![Value::from("0")], &host),
        Ok(Value::Null)
    );
    assert_eq!(Builtin::GetArg.call(vec![Value::Null], &host), Ok(Value::Null));
}

#[test]
fn test_get_arg_arity() {
    assert_eq!(
        Builtin::GetArg.call(vec![], &[]),
        Err(EvalError::ArityMismatch {
            name: "getArg".to_string(),
            expected: 1,
            got: 0,
        })
    );
}

// === map ===

#[test]
fn test_map_pairs_positionally() {
    let result = Builtin::Map.call(vec![strs(&["a", "b"]), ints(&[1, 2])], &[]).unwrap();
    let Value::Map(map) = result else {
        panic!("expected map, got {result:?}");
    };
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(map.get("b"), Some(&Value::Int(2)));
}

#[test]
fn test_map_keys_use_text_cast() {
    let keys = Value::List(vec![Value::Int(1), Value::Bool(true), Value::Null]);
    let result = Builtin::Map.call(vec![keys, strs(&["x", "y", "z"])], &[]).unwrap();
    let Value::Map(map) = result else {
        panic!("expected map, got {result:?}");
    };
    // Int(1) and true both cast to "1".
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["1", ""]);
    assert_eq!(map.get("1"), Some(&Value::from("y")));
    assert_eq!(map.get(""), Some(&Value::from("z")));
}

#[test]
fn test_map_duplicate_keys_last_wins() {
    let result = Builtin::Map
        .call(vec![strs(&["k", "j", "k"]), ints(&[1, 2, 3])], &[])
        .unwrap();
    let expected: ValueMap = [("k", Value::Int(3)), ("j", Value::Int(2))]
        .into_iter()
        .collect();
    assert_eq!(result, Value::Map(expected));
}

#[test]
fn test_map_length_mismatch_is_soft_failure() {
    assert_eq!(
        Builtin::Map.call(vec![ints(&[1, 2]), strs(&["a"])], &[]),
        Ok(Value::Bool(false))
    );
}

#[test]
fn test_map_empty() {
    assert_eq!(
        Builtin::Map.call(vec![ints(&[]), ints(&[])], &[]),
        Ok(Value::Map(ValueMap::new()))
    );
}

#[test]
fn test_map_rejects_non_list() {
    assert_eq!(
        Builtin::Map.call(vec![Value::from("a"), ints(&[1])], &[]),
        Err(EvalError::WrongArgType {
            name: "map".to_string(),
            expected: "list",
            got: "string",
        })
    );
    assert_eq!(
        Builtin::Map.call(vec![ints(&[1]), Value::Int(1)], &[]),
        Err(EvalError::WrongArgType {
            name: "map".to_string(),
            expected: "list",
            got: "int",
        })
    );
}

#[test]
fn test_map_arity() {
    assert_eq!(
        Builtin::Map.call(vec![ints(&[])], &[]),
        Err(EvalError::ArityMismatch {
            name: "map".to_string(),
            expected: 2,
            got: 1,
        })
    );
}

// === json ===

#[test]
fn test_json_returns_string() {
    assert_eq!(
        Builtin::Json.call(vec![Value::Int(7)], &[]),
        Ok(Value::from("7"))
    );
}

#[test]
fn test_json_arity() {
    assert_eq!(
        Builtin::Json.call(vec![Value::Null, Value::Null], &[]),
        Err(EvalError::ArityMismatch {
            name: "json".to_string(),
            expected: 1,
            got: 2,
        })
    );
}

#[test]
fn test_json_non_finite_fails() {
    let result = Builtin::Json.call(vec![Value::Float(f64::INFINITY)], &[]);
    assert!(
        matches!(result, Err(EvalError::SerializationFailure { .. })),
        "got {result:?}"
    );
}
