#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_encode_scalars() {
    assert_eq!(encode(&Value::Null).unwrap(), "null");
    assert_eq!(encode(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(encode(&Value::Int(-12)).unwrap(), "-12");
    assert_eq!(encode(&Value::from("hi")).unwrap(), r#""hi""#);
}

#[test]
fn test_encode_float_keeps_fraction() {
    assert_eq!(encode(&Value::Float(2.0)).unwrap(), "2.0");
    assert_eq!(encode(&Value::Float(2.5)).unwrap(), "2.5");
}

#[test]
fn test_encode_pretty_map() {
    let map: ValueMap = [("x", Value::Int(1)), ("y", Value::Float(2.4))]
        .into_iter()
        .collect();
    assert_eq!(
        encode(&Value::Map(map)).unwrap(),
        "{\n    \"x\": 1,\n    \"y\": 2.4\n}"
    );
}

#[test]
fn test_encode_nested_list() {
    let value = Value::List(vec![Value::Int(1), Value::List(vec![Value::Null])]);
    assert_eq!(
        encode(&value).unwrap(),
        "[\n    1,\n    [\n        null\n    ]\n]"
    );
}

#[test]
fn test_encode_empty_collections() {
    assert_eq!(encode(&Value::List(vec![])).unwrap(), "[]");
    assert_eq!(encode(&Value::Map(ValueMap::new())).unwrap(), "{}");
}

#[test]
fn test_encode_preserves_insertion_order() {
    let map: ValueMap = [("b", Value::Int(1)), ("a", Value::Int(2))]
        .into_iter()
        .collect();
    assert_eq!(
        encode(&Value::Map(map)).unwrap(),
        "{\n    \"b\": 1,\n    \"a\": 2\n}"
    );
}

#[test]
fn test_encode_leaves_unicode_and_slashes() {
    assert_eq!(
        encode(&Value::from("héllo/世界")).unwrap(),
        "\"héllo/世界\""
    );
    assert_eq!(
        encode(&Value::from("say \"hi\"\n")).unwrap(),
        r#""say \"hi\"\n""#
    );
}

#[test]
fn test_encode_non_finite_fails() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = encode(&Value::Float(f)).unwrap_err();
        assert!(
            matches!(err, EvalError::SerializationFailure { .. }),
            "got {err:?}"
        );
    }
}

#[test]
fn test_encode_nested_non_finite_fails() {
    let value = Value::List(vec![Value::Int(1), Value::Float(f64::NAN)]);
    assert!(encode(&value).is_err());
}

#[test]
fn test_output_is_generic_json() {
    let map: ValueMap = [("x", Value::Int(1))].into_iter().collect();
    let text = encode(&Value::Map(map)).unwrap();
    let generic: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(generic, serde_json::json!({ "x": 1 }));
}

#[test]
fn test_decode() {
    assert_eq!(decode("42").unwrap(), Value::Int(42));
    assert_eq!(decode("4.0").unwrap(), Value::Float(4.0));
    assert_eq!(decode(r#""Alice""#).unwrap(), Value::from("Alice"));
    assert_eq!(
        decode("[1, null, true]").unwrap(),
        Value::List(vec![Value::Int(1), Value::Null, Value::Bool(true)])
    );
    assert_eq!(decode("18446744073709551615").unwrap(), Value::Float(1.844_674_407_370_955_2e19));
}

#[test]
fn test_decode_object() {
    let expected: ValueMap = [("a", Value::Int(1)), ("b", Value::List(vec![]))]
        .into_iter()
        .collect();
    assert_eq!(decode(r#"{"a": 1, "b": []}"#).unwrap(), Value::Map(expected));
}

#[test]
fn test_decode_keeps_key_order() {
    let value = decode(r#"{"b": 1, "a": 2, "c": {"z": 0, "y": 0}}"#).unwrap();
    let Value::Map(map) = &value else {
        panic!("expected a map, got {value:?}");
    };
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(
        encode(&value).unwrap(),
        "{\n    \"b\": 1,\n    \"a\": 2,\n    \"c\": {\n        \"z\": 0,\n        \"y\": 0\n    }\n}"
    );
}

#[test]
fn test_decode_rejects_invalid() {
    assert!(decode("{").is_err());
}
