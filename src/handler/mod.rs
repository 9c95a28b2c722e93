//! Dispatch handlers for the native agent function set.
//!
//! A [`Handler`] resolves a canonical function name plus an ordered list of
//! untyped arguments to either a real call into the native agent
//! ([`NativeHandler`]) or a fixed fallback value ([`NullHandler`]). Which
//! variant a facade uses is decided once, at construction; the handlers
//! themselves perform no presence detection, no retries, and no failure
//! recovery.

pub mod native_handler;
pub mod null_handler;
pub mod registry;

pub use native_handler::NativeHandler;
pub use null_handler::NullHandler;
pub use registry::{FunctionRegistry, NativeFunction};

use serde_json::Value;

/// Abstract interface for dispatching one named native call.
pub trait Handler: Send + Sync {
    /// Dispatch `function_name` with `arguments` expanded positionally,
    /// returning whatever the underlying call returns.
    fn handle(&self, function_name: &str, arguments: Vec<Value>) -> Value;
}
