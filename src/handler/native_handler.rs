//! Forwarding handler backed by the function registry.

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use super::registry::FunctionRegistry;
use super::Handler;

/// Dispatch variant that invokes the bound native function.
///
/// Returns exactly what the native call returns. Selected by the facade
/// when agent presence was detected at construction.
pub struct NativeHandler {
    registry: Arc<FunctionRegistry>,
}

impl NativeHandler {
    /// Create a handler dispatching into `registry`.
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self { registry }
    }
}

impl Handler for NativeHandler {
    /// Resolve `function_name` and invoke it with `arguments` positionally.
    ///
    /// # Panics
    ///
    /// Panics if `function_name` is not registered. Presence detection at
    /// facade construction rules this out in practice; reaching it means a
    /// caller contract violation or a broken binding layer, not a runtime
    /// condition to recover from.
    fn handle(&self, function_name: &str, arguments: Vec<Value>) -> Value {
        trace!("Forwarding {} to the native agent", function_name);
        match self.registry.get(function_name) {
            Some(function) => function(&arguments),
            None => panic!("native function {} is not registered", function_name),
        }
    }
}
