//! No-op handler used when the agent is absent.
//!
//! Follows the null object pattern: instrumented code keeps issuing
//! monitoring calls and receives a harmless, type-stable `false` instead of
//! a crash. This is the primary failure-tolerance mechanism of the crate
//! and must stay silent: no logging, no panics, no side effects.

use serde_json::Value;

use super::Handler;

/// Dispatch variant that ignores every call and answers `false`.
pub struct NullHandler;

impl NullHandler {
    /// Create a new null handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for NullHandler {
    fn handle(&self, _function_name: &str, _arguments: Vec<Value>) -> Value {
        Value::Bool(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_handle_returns_false() {
        let handler = NullHandler::new();
        let result = handler.handle(
            "newrelic_name_transaction",
            vec![json!("checkout"), json!(42), json!({"key": "value"})],
        );
        assert_eq!(result, Value::Bool(false));
    }

    #[test]
    fn test_handle_returns_false_without_arguments() {
        let handler = NullHandler::new();
        assert_eq!(handler.handle("newrelic_is_sampled", vec![]), Value::Bool(false));
    }

    #[test]
    fn test_handle_is_stable_across_calls() {
        let handler = NullHandler::default();
        for _ in 0..3 {
            assert_eq!(
                handler.handle("newrelic_custom_metric", vec![json!("Custom/Foo"), json!(4.0)]),
                Value::Bool(false)
            );
        }
    }
}
