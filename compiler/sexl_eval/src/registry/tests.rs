#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::errors::EvalError;
use pretty_assertions::assert_eq;

fn first_or_null(args: &[Value]) -> EvalResult {
    Ok(args.first().cloned().unwrap_or(Value::Null))
}

#[test]
fn test_builtins_always_present() {
    let registry = FunctionRegistry::with_builtins();
    for builtin in Builtin::ALL {
        assert!(registry.contains(builtin.name()));
        assert!(matches!(
            registry.lookup(builtin.name()),
            Some(Callee::Builtin(b)) if b == builtin
        ));
    }
    assert!(registry.user_functions().is_empty());
}

#[test]
fn test_unknown_name() {
    let registry = FunctionRegistry::with_builtins();
    assert!(!registry.contains("foo"));
    assert!(registry.lookup("foo").is_none());
}

#[test]
fn test_register_and_call() {
    let mut registry = FunctionRegistry::with_builtins();
    registry.register("first", first_or_null);

    let Some(Callee::User(function)) = registry.lookup("first") else {
        panic!("first should resolve to a user function");
    };
    assert_eq!(function(&[Value::Int(5)]), Ok(Value::Int(5)));
    assert!(registry.contains("first"));
}

#[test]
fn test_register_replaces() {
    let mut registry = FunctionRegistry::with_builtins();
    registry.register("f", |_: &[Value]| Ok(Value::Int(1)));
    registry.register("f", |_: &[Value]| Ok(Value::Int(2)));

    let Some(Callee::User(function)) = registry.lookup("f") else {
        panic!("f should resolve to a user function");
    };
    assert_eq!(function(&[]), Ok(Value::Int(2)));
    assert_eq!(registry.user_functions(), vec!["f"]);
}

#[test]
fn test_builtin_not_shadowed() {
    let mut registry = FunctionRegistry::with_builtins();
    registry.register("concat", |_: &[Value]| Err(EvalError::new("shadowed")));

    assert!(matches!(
        registry.lookup("concat"),
        Some(Callee::Builtin(Builtin::Concat))
    ));
}

#[test]
fn test_clone_shares_functions() {
    let mut registry = FunctionRegistry::with_builtins();
    registry.register("b", first_or_null);
    registry.register("a", first_or_null);

    let copy = registry.clone();
    assert_eq!(copy.user_functions(), vec!["a", "b"]);
}

#[test]
fn test_registry_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FunctionRegistry>();
}

#[test]
fn test_debug_lists_names() {
    let mut registry = FunctionRegistry::with_builtins();
    registry.register("double", first_or_null);
    let debug = format!("{registry:?}");
    assert!(debug.contains("getArg"), "{debug}");
    assert!(debug.contains("double"), "{debug}");
}
