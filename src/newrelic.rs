//! Typed facade over the New Relic agent function set.
//!
//! [`Newrelic`] exposes one strongly typed method per native agent
//! function. Agent presence is probed once at construction and decides the
//! dispatch variant: calls forward into the agent when it is available and
//! fall back to a harmless no-op when it is not, so instrumented code never
//! has to check for the agent itself.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{NewrelicError, Result};
use crate::functions;
use crate::handler::{FunctionRegistry, Handler, NativeHandler, NullHandler};

/// Presence check deciding whether the native agent is usable.
///
/// Injectable so presence-dependent behavior is testable without a real
/// agent. The default probe reports the agent usable when the registry
/// resolves the [`functions::SET_APPNAME`] canary.
pub type CapabilityProbe = dyn Fn(&FunctionRegistry) -> bool + Send + Sync;

/// Construction options for [`Newrelic`].
#[derive(Default)]
pub struct AgentOptions {
    /// Fail construction when the agent is absent.
    pub require_agent: bool,
    /// Explicit dispatch handler, overriding presence-based selection.
    pub handler: Option<Arc<dyn Handler>>,
    /// Presence check override; see [`CapabilityProbe`].
    pub probe: Option<Box<CapabilityProbe>>,
}

/// Transport kind reported when accepting distributed trace headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportType {
    Unknown,
    Http,
    Https,
    Kafka,
    Jms,
    IronMq,
    Amqp,
    Queue,
    Other,
}

impl TransportType {
    /// Canonical string form understood by the agent.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Unknown => "Unknown",
            TransportType::Http => "HTTP",
            TransportType::Https => "HTTPS",
            TransportType::Kafka => "Kafka",
            TransportType::Jms => "JMS",
            TransportType::IronMq => "IronMQ",
            TransportType::Amqp => "AMQP",
            TransportType::Queue => "Queue",
            TransportType::Other => "Other",
        }
    }
}

/// Typed wrapper for the New Relic agent API functions.
///
/// Presence of the agent is computed once at construction and never
/// changes; the facade owns exactly one dispatch handler for its lifetime.
/// Both fields are read-only after construction, so a `Newrelic` instance
/// can be shared across threads freely (given a reentrant agent).
pub struct Newrelic {
    installed: bool,
    handler: Arc<dyn Handler>,
}

impl Newrelic {
    /// Create a facade with default options.
    ///
    /// Probes the registry for the agent, forwards natively when it is
    /// present and falls back to the no-op handler otherwise. Cannot fail.
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        let installed = default_probe(&registry);
        Self::assemble(registry, installed, None)
    }

    /// Create a facade with explicit options.
    ///
    /// Fails with [`NewrelicError::AgentNotInstalled`] when
    /// `options.require_agent` is set and the probe reports the agent
    /// absent, signaling misconfiguration immediately rather than on first
    /// use. A supplied `options.handler` is used as-is; otherwise the
    /// handler is selected from the probed presence.
    pub fn with_options(registry: Arc<FunctionRegistry>, options: AgentOptions) -> Result<Self> {
        let installed = match options.probe.as_ref() {
            Some(probe) => probe(&registry),
            None => default_probe(&registry),
        };

        if options.require_agent && !installed {
            return Err(NewrelicError::AgentNotInstalled);
        }

        Ok(Self::assemble(registry, installed, options.handler))
    }

    fn assemble(
        registry: Arc<FunctionRegistry>,
        installed: bool,
        handler: Option<Arc<dyn Handler>>,
    ) -> Self {
        let handler: Arc<dyn Handler> = match handler {
            Some(handler) => handler,
            None if installed => {
                debug!("New Relic agent detected; forwarding calls natively");
                Arc::new(NativeHandler::new(registry))
            }
            None => {
                debug!("New Relic agent not detected; monitoring calls are ignored");
                Arc::new(NullHandler::new())
            }
        };

        Self { installed, handler }
    }

    /// Whether the native agent was detected at construction.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Accept a payload of distributed tracing headers from an inbound
    /// request. These include both W3C Trace Context and New Relic
    /// headers.
    pub fn accept_distributed_trace_headers(
        &self,
        headers: HashMap<String, String>,
        transport_type: Option<TransportType>,
    ) -> Option<bool> {
        self.call_bool(
            functions::ACCEPT_DISTRIBUTED_TRACE_HEADERS,
            vec![
                string_map(headers),
                transport_type.map(|transport| transport.as_str()).into(),
            ],
        )
    }

    /// Retained for interface compatibility with payload-based trace
    /// propagation; accepted and ignored.
    #[deprecated(note = "superseded by accept_distributed_trace_headers")]
    pub fn accept_distributed_trace_payload(&self, _payload: &str) {}

    /// Retained for interface compatibility with payload-based trace
    /// propagation; accepted and ignored.
    #[deprecated(note = "superseded by accept_distributed_trace_headers")]
    pub fn accept_distributed_trace_payload_httpsafe(
        &self,
        _httpsafe_payload: &str,
        _transport_type: Option<TransportType>,
    ) {
    }

    /// Add a custom attribute to the current span. The attribute appears
    /// in any span and can be queried for.
    pub fn add_custom_span_parameter(&self, key: &str, value: impl Into<Value>) -> Option<bool> {
        self.call_bool(
            functions::ADD_CUSTOM_SPAN_PARAMETER,
            vec![key.into(), value.into()],
        )
    }

    /// Add a custom attribute to the current transaction. The attribute is
    /// shown in any transaction trace that results from it.
    pub fn add_custom_parameter(&self, key: &str, value: impl Into<Value>) -> Option<bool> {
        self.call_bool(
            functions::ADD_CUSTOM_PARAMETER,
            vec![key.into(), value.into()],
        )
    }

    /// Add a user-defined function or method (`"foo"` or `"Foo::bar"`) to
    /// the list instrumented by the transaction tracer.
    pub fn add_custom_tracer(&self, function_name: &str) -> Option<bool> {
        self.call_bool(functions::ADD_CUSTOM_TRACER, vec![function_name.into()])
    }

    /// Mark the current transaction as a background job (`true`) or as a
    /// web transaction (`false`).
    pub fn background_job(&self, flag: bool) {
        self.call(functions::BACKGROUND_JOB, vec![flag.into()]);
    }

    /// Toggle capturing of URL parameters for display in transaction
    /// traces.
    pub fn capture_params(&self, enable: bool) {
        self.call(functions::CAPTURE_PARAMS, vec![enable.into()]);
    }

    /// Retained for interface compatibility with payload-based trace
    /// propagation; accepted and ignored.
    #[deprecated(note = "superseded by insert_distributed_trace_headers")]
    pub fn create_distributed_trace_payload(&self) {}

    /// Record a custom metric with the given name and value. Values are
    /// interpreted as milliseconds. Prefix names with `Custom/` so they
    /// are usable in custom dashboards, and avoid creating too many unique
    /// metric names.
    pub fn custom_metric(&self, name: &str, value: f64) -> Option<bool> {
        self.call_bool(functions::CUSTOM_METRIC, vec![name.into(), value.into()])
    }

    /// Prevent the output filter from injecting RUM JavaScript for this
    /// transaction. Useful for AJAX endpoints.
    pub fn disable_autorum(&self) -> Option<bool> {
        self.call_bool(functions::DISABLE_AUTORUM, vec![])
    }

    /// Stop the transaction timer immediately without ending the
    /// transaction, so time spent streaming a response to a slow client is
    /// not counted.
    pub fn end_of_transaction(&self) {
        self.call(functions::END_OF_TRANSACTION, vec![]);
    }

    /// End the current transaction now and ship the gathered metrics to
    /// the daemon, unless `ignore` is set. Commonly paired with
    /// [`Newrelic::start_transaction`] in job-queue workers that process
    /// many tasks per process.
    pub fn end_transaction(&self, ignore: bool) -> Option<bool> {
        self.call_bool(functions::END_TRANSACTION, vec![ignore.into()])
    }

    /// JavaScript to inject in the page header for real user monitoring.
    /// `include_tags` controls whether surrounding script tags are part of
    /// the returned string.
    pub fn get_browser_timing_header(&self, include_tags: bool) -> Option<String> {
        self.call_string(functions::GET_BROWSER_TIMING_HEADER, vec![include_tags.into()])
    }

    /// JavaScript to inject at the very end of the HTML output for real
    /// user monitoring.
    pub fn get_browser_timing_footer(&self, include_tags: bool) -> Option<String> {
        self.call_string(functions::GET_BROWSER_TIMING_FOOTER, vec![include_tags.into()])
    }

    /// Opaque key/value pairs correlating this application to other data
    /// in the New Relic backend.
    pub fn get_linking_metadata(&self) -> Option<Map<String, Value>> {
        self.call_map(functions::GET_LINKING_METADATA, vec![])
    }

    /// Identifiers of the current trace and parent span, for integrating
    /// with third-party distributed tracing tools.
    pub fn get_trace_metadata(&self) -> Option<Map<String, Value>> {
        self.call_map(functions::GET_TRACE_METADATA, vec![])
    }

    /// Do not generate Apdex metrics for this transaction. Useful for very
    /// short or very long transactions that would skew the score.
    pub fn ignore_apdex(&self) {
        self.call(functions::IGNORE_APDEX, vec![]);
    }

    /// Do not generate metrics for this transaction at all.
    pub fn ignore_transaction(&self) {
        self.call(functions::IGNORE_TRANSACTION, vec![]);
    }

    /// Insert distributed tracing headers (W3C Trace Context and, by
    /// default, the New Relic header) into an outbound header map.
    pub fn insert_distributed_trace_headers(
        &self,
        headers: HashMap<String, String>,
    ) -> Option<bool> {
        self.call_bool(
            functions::INSERT_DISTRIBUTED_TRACE_HEADERS,
            vec![string_map(headers)],
        )
    }

    /// Whether the current transaction is marked as sampled.
    pub fn is_sampled(&self) -> Option<bool> {
        self.call_bool(functions::IS_SAMPLED, vec![])
    }

    /// Name the current transaction. Name by purpose (`/Product/view`),
    /// not by URL; too many unique transaction names dilute the collected
    /// data and run into per-account limits.
    pub fn name_transaction(&self, name: &str) -> Option<bool> {
        self.call_bool(functions::NAME_TRANSACTION, vec![name.into()])
    }

    /// Report an error the agent cannot see on its own, from an already
    /// shaped positional argument list. The arguments are forwarded
    /// unmodified; prefer the typed overloads below.
    pub fn notice_error(&self, params: Vec<Value>) {
        self.call(functions::NOTICE_ERROR, params);
    }

    /// Report an error from a plain message.
    pub fn notice_error_with_message(&self, message: &str) {
        self.notice_error(vec![message.into()]);
    }

    /// Report an error from a structured exception-like value, forwarded
    /// unmodified.
    pub fn notice_error_with_exception(&self, exception: Value) {
        self.notice_error(vec![exception]);
    }

    /// Report an error from discrete fields: code, message, and optional
    /// file, line, and context.
    pub fn notice_error_with_details(
        &self,
        errno: i64,
        errstr: &str,
        errfile: Option<&str>,
        errline: Option<i64>,
        errcontext: Option<&str>,
    ) {
        self.notice_error(vec![
            errno.into(),
            errstr.into(),
            errfile.into(),
            errline.into(),
            errcontext.into(),
        ]);
    }

    /// Record a custom analytics event. Attribute keys may be up to 255
    /// characters; values should be scalar.
    pub fn record_custom_event(&self, name: &str, attributes: HashMap<String, Value>) {
        self.call(
            functions::RECORD_CUSTOM_EVENT,
            vec![name.into(), Value::Object(attributes.into_iter().collect())],
        );
    }

    /// Set the application name, with an optional license key and an
    /// optional `xmit` flag.
    ///
    /// The name uses the same format as the `newrelic.appname` setting and
    /// may carry up to three semicolon-separated names, the first being
    /// primary. Call as early as possible; it has no effect once the RUM
    /// footer has been sent. The license key selects which account the
    /// name is changed in when multiple licenses are in play. By default
    /// changing the name discards the current transaction; pass
    /// `Some(true)` for `xmit` to ship the data gathered so far instead.
    pub fn set_appname(
        &self,
        name: &str,
        license: Option<&str>,
        xmit: Option<bool>,
    ) -> Option<bool> {
        self.call_bool(
            functions::SET_APPNAME,
            vec![name.into(), license.into(), xmit.into()],
        )
    }

    /// Add the three strings to collected browser traces. All three are
    /// required by the agent but may be empty.
    pub fn set_user_attributes(&self, user: &str, account: &str, product: &str) -> Option<bool> {
        self.call_bool(
            functions::SET_USER_ATTRIBUTES,
            vec![user.into(), account.into(), product.into()],
        )
    }

    /// Start a new transaction, typically right after ending the previous
    /// one in a job-queue worker. The license, when given, supersedes any
    /// configured default.
    pub fn start_transaction(&self, name: &str, license: Option<&str>) -> Option<bool> {
        self.call_bool(
            functions::START_TRANSACTION,
            vec![name.into(), license.into()],
        )
    }

    /// Forward `function` with `arguments` through the dispatch handler.
    fn call(&self, function: &str, arguments: Vec<Value>) -> Value {
        self.handler.handle(function, arguments)
    }

    fn call_bool(&self, function: &str, arguments: Vec<Value>) -> Option<bool> {
        match self.call(function, arguments) {
            Value::Bool(flag) => Some(flag),
            _ => None,
        }
    }

    fn call_string(&self, function: &str, arguments: Vec<Value>) -> Option<String> {
        match self.call(function, arguments) {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    fn call_map(&self, function: &str, arguments: Vec<Value>) -> Option<Map<String, Value>> {
        match self.call(function, arguments) {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

fn default_probe(registry: &FunctionRegistry) -> bool {
    registry.resolves(functions::SET_APPNAME)
}

fn string_map(entries: HashMap<String, String>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    )
}
