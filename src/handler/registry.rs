//! Registry of bound native function handles.
//!
//! The agent's functions are reached by name. In place of dynamic global
//! symbol lookup, bindings register a callable under each canonical name
//! once at startup, and the native handler resolves against the registry on
//! every call. Tests register stubs the same way.

use std::collections::HashMap;

use serde_json::Value;

/// A bound handle to one native agent function.
pub type NativeFunction = Box<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Maps canonical function names to bound native handles.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, NativeFunction>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `function` under `name`, replacing any existing binding.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    /// Whether `name` resolves to a bound function.
    pub fn resolves(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Look up the bound function for `name`.
    pub fn get(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.get(name)
    }

    /// Number of bound functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no functions are bound.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
