//! A typed wrapper around the New Relic agent API.
//!
//! The New Relic agent exposes its functionality as a flat set of native
//! functions (`newrelic_set_appname`, `newrelic_name_transaction`, ...).
//! This crate fronts that function set with the strongly typed [`Newrelic`]
//! facade: each method shapes its parameters into the positional argument
//! list the native function expects and forwards the call through a
//! [`handler::Handler`], so instrumented code keeps working unchanged when
//! the agent is not loaded.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use newrelic_api::prelude::*;
//!
//! // Agent bindings register their functions once at startup.
//! let registry = FunctionRegistry::new();
//! let newrelic = Newrelic::new(Arc::new(registry));
//!
//! newrelic.set_appname("checkout-service", None, None);
//! newrelic.name_transaction("checkout");
//! newrelic.custom_metric("Custom/Checkout/Total", 42.0);
//! ```

pub mod error;
pub mod functions;
pub mod handler;
pub mod newrelic;

pub use error::{NewrelicError, Result};
pub use newrelic::Newrelic;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{NewrelicError, Result};
    pub use crate::handler::{
        FunctionRegistry, Handler, NativeFunction, NativeHandler, NullHandler,
    };
    pub use crate::newrelic::{AgentOptions, Newrelic, TransportType};
}
