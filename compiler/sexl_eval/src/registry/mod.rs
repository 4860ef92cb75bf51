//! Function registry.
//!
//! Names resolve against two disjoint tables: the fixed [`Builtin`] set,
//! always consulted first, and host-registered user functions. A user
//! function registered under a built-in's name is stored but never reached.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use sexl_ir::Value;
use tracing::debug;

use crate::builtins::Builtin;
use crate::errors::EvalResult;

/// Signature of a host-provided function.
///
/// User functions receive their arguments already evaluated.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult + Send + Sync;

/// What a call name resolves to.
#[derive(Clone, Copy)]
pub enum Callee<'a> {
    Builtin(Builtin),
    User(&'a NativeFn),
}

impl fmt::Debug for Callee<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callee::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Callee::User(_) => f.write_str("User(..)"),
        }
    }
}

/// Built-ins plus host-registered user functions.
///
/// Cloning is cheap: user functions are shared behind `Arc`, so a frozen
/// registry can be handed to any number of threads.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    user: FxHashMap<String, Arc<NativeFn>>,
}

impl FunctionRegistry {
    /// A registry holding only the built-ins.
    pub fn with_builtins() -> Self {
        Self::default()
    }

    /// Add or replace the user function `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        let name = name.into();
        if Builtin::from_name(&name).is_some() {
            debug!(name = %name, "user function shadowed by built-in");
        }
        self.user.insert(name, Arc::new(function));
    }

    /// Resolve `name`, built-ins first.
    pub fn lookup(&self, name: &str) -> Option<Callee<'_>> {
        if let Some(builtin) = Builtin::from_name(name) {
            return Some(Callee::Builtin(builtin));
        }
        self.user.get(name).map(|f| Callee::User(f.as_ref()))
    }

    pub fn contains(&self, name: &str) -> bool {
        Builtin::from_name(name).is_some() || self.user.contains_key(name)
    }

    /// Names of registered user functions, sorted.
    pub fn user_functions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.user.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("builtins", &Builtin::ALL.map(Builtin::name))
            .field("user", &self.user_functions())
            .finish()
    }
}

#[cfg(test)]
mod tests;
