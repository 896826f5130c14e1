//! Connection and polling configuration for the ContinuITy frontend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Port used when none is configured.
pub const DEFAULT_PORT: &str = "80";

/// Host and port of the ContinuITy frontend.
///
/// The port is kept as a string because it is concatenated verbatim into the
/// base URL, exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestEndpoint {
    /// Hostname or IP address of the frontend.
    pub host: String,
    /// Port of the frontend.
    #[serde(default = "default_port")]
    pub port: String,
}

impl RestEndpoint {
    /// Endpoint on an explicit port.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// Endpoint on [`DEFAULT_PORT`].
    pub fn with_default_port(host: impl Into<String>) -> Self {
        Self::new(host, DEFAULT_PORT)
    }

    /// Base URL all request paths are appended to.
    ///
    /// ```rust
    /// use continuity_types::RestEndpoint;
    ///
    /// assert_eq!(RestEndpoint::with_default_port("frontend").base_url(), "http://frontend:80");
    /// assert_eq!(RestEndpoint::new("10.0.0.5", "8080").base_url(), "http://10.0.0.5:8080");
    /// ```
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

/// Bounds for waiting on a workload model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Largest loop counter value at which another wait request is still issued.
    /// The counter starts at 0, so at most `max_loop_counter + 1` requests are made.
    pub max_loop_counter: u32,
    /// Server-side wait per request, in milliseconds, sent as the `timeout` query parameter.
    pub wait_timeout_ms: u64,
    /// Client-side pause after a not-finished response. Zero means poll again immediately.
    pub interval: Duration,
}

impl PollPolicy {
    /// Maximum number of wait requests this policy allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_loop_counter.saturating_add(1)
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_loop_counter: 180,
            wait_timeout_ms: 40_000,
            interval: Duration::ZERO,
        }
    }
}
