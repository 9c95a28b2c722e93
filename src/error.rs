//! Error types and result alias for the New Relic wrapper.
//!
//! The only recoverable failure this crate produces is the construction-time
//! configuration error: the caller required the agent and it is absent.
//! Everything else is either a silent no-op (agent absent, not required) or
//! a caller contract violation surfaced as a panic (see
//! [`crate::handler::NativeHandler`]).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewrelicError {
    #[error("New Relic agent does not appear to be installed")]
    AgentNotInstalled,
}

pub type Result<T> = std::result::Result<T, NewrelicError>;
