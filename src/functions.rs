//! Canonical names of the native agent functions.
//!
//! These names are a stable, versioned contract with the agent: they are
//! never renamed, and every facade method passes its arguments in the exact
//! positional order the named function documents. Bindings to a real agent
//! register a callable under each name they support (see
//! [`crate::handler::FunctionRegistry`]).

/// Accept inbound distributed tracing headers.
pub const ACCEPT_DISTRIBUTED_TRACE_HEADERS: &str = "newrelic_accept_distributed_trace_headers";
/// Attach a custom attribute to the current span.
pub const ADD_CUSTOM_SPAN_PARAMETER: &str = "newrelic_add_custom_span_parameter";
/// Attach a custom attribute to the current transaction.
pub const ADD_CUSTOM_PARAMETER: &str = "newrelic_add_custom_parameter";
/// Add a user function to the transaction tracer's instrumentation list.
pub const ADD_CUSTOM_TRACER: &str = "newrelic_add_custom_tracer";
/// Mark the current transaction as a background job.
pub const BACKGROUND_JOB: &str = "newrelic_background_job";
/// Toggle URL parameter capture in transaction traces.
pub const CAPTURE_PARAMS: &str = "newrelic_capture_params";
/// Record a custom timing metric.
pub const CUSTOM_METRIC: &str = "newrelic_custom_metric";
/// Suppress RUM JavaScript injection for the current transaction.
pub const DISABLE_AUTORUM: &str = "newrelic_disable_autorum";
/// Mark the end time of the current transaction.
pub const END_OF_TRANSACTION: &str = "newrelic_end_of_transaction";
/// End the current transaction and ship its data.
pub const END_TRANSACTION: &str = "newrelic_end_transaction";
/// Browser timing JavaScript for the page header.
pub const GET_BROWSER_TIMING_HEADER: &str = "newrelic_get_browser_timing_header";
/// Browser timing JavaScript for the page footer.
pub const GET_BROWSER_TIMING_FOOTER: &str = "newrelic_get_browser_timing_footer";
/// Opaque key/value pairs correlating this process to backend data.
pub const GET_LINKING_METADATA: &str = "newrelic_get_linking_metadata";
/// Identifiers of the current trace and parent span.
pub const GET_TRACE_METADATA: &str = "newrelic_get_trace_metadata";
/// Exclude the current transaction from Apdex.
pub const IGNORE_APDEX: &str = "newrelic_ignore_apdex";
/// Exclude the current transaction from metrics entirely.
pub const IGNORE_TRANSACTION: &str = "newrelic_ignore_transaction";
/// Insert distributed tracing headers into an outbound header map.
pub const INSERT_DISTRIBUTED_TRACE_HEADERS: &str = "newrelic_insert_distributed_trace_headers";
/// Whether the current transaction is sampled.
pub const IS_SAMPLED: &str = "newrelic_is_sampled";
/// Name the current transaction.
pub const NAME_TRANSACTION: &str = "newrelic_name_transaction";
/// Report an error to the agent.
pub const NOTICE_ERROR: &str = "newrelic_notice_error";
/// Record a custom analytics event.
pub const RECORD_CUSTOM_EVENT: &str = "newrelic_record_custom_event";
/// Set the application name. Doubles as the presence-detection canary.
pub const SET_APPNAME: &str = "newrelic_set_appname";
/// Attach user/account/product strings to browser traces.
pub const SET_USER_ATTRIBUTES: &str = "newrelic_set_user_attributes";
/// Start a new transaction after ending the previous one.
pub const START_TRANSACTION: &str = "newrelic_start_transaction";

/// Every function name the facade dispatches to, for binding layers that
/// want to enumerate the contract.
pub const ALL: &[&str] = &[
    ACCEPT_DISTRIBUTED_TRACE_HEADERS,
    ADD_CUSTOM_SPAN_PARAMETER,
    ADD_CUSTOM_PARAMETER,
    ADD_CUSTOM_TRACER,
    BACKGROUND_JOB,
    CAPTURE_PARAMS,
    CUSTOM_METRIC,
    DISABLE_AUTORUM,
    END_OF_TRANSACTION,
    END_TRANSACTION,
    GET_BROWSER_TIMING_HEADER,
    GET_BROWSER_TIMING_FOOTER,
    GET_LINKING_METADATA,
    GET_TRACE_METADATA,
    IGNORE_APDEX,
    IGNORE_TRANSACTION,
    INSERT_DISTRIBUTED_TRACE_HEADERS,
    IS_SAMPLED,
    NAME_TRANSACTION,
    NOTICE_ERROR,
    RECORD_CUSTOM_EVENT,
    SET_APPNAME,
    SET_USER_ATTRIBUTES,
    START_TRANSACTION,
];
