//! ContinuITy frontend client utilities.
//!
//! This crate provides the REST plumbing experiment actions use to talk to the
//! ContinuITy frontend. It focuses on:
//!
//! - Building the base URL from a configured host and port
//! - Constructing an HTTP client with sensible defaults, or wrapping a supplied one
//! - Issuing blocking JSON `GET`/`POST` requests and decoding object responses
//! - Reporting error statuses with their code, reason phrase, and body
//!
//! Actions depend on the [`RestClient`] trait; [`ContinuityClient`] is the
//! `reqwest`-backed implementation.
//!
//! # Example
//!
//! ```ignore
//! use continuity_api::{ContinuityClient, RestClient};
//! use continuity_types::RestEndpoint;
//!
//! let client = ContinuityClient::new(&RestEndpoint::with_default_port("continuity-frontend"))?;
//! let response = client.post_json("/workloadmodel/wessbas/create", &serde_json::json!({"data": "...", "tag": "demo"}))?;
//! println!("{response:?}");
//! # Ok::<(), continuity_api::ApiError>(())
//! ```

use std::env;
use std::time::{Duration, Instant};

use continuity_types::RestEndpoint;
use continuity_util::block_on_future;
use reqwest::{Client, Method, RequestBuilder, header};
use serde_json::{Map, Value};
use tracing::{debug, warn};

mod error;

pub use error::ApiError;

/// JSON object as returned by the frontend.
pub type JsonObject = Map<String, Value>;

/// Connect timeout of the default client.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Request timeout of the default client. Must exceed the server-side wait
/// requested by long-polling calls.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Blocking JSON verbs against a configured frontend.
///
/// Both verbs return `Ok(None)` when the response body is empty or JSON `null`,
/// and an error when it is any other non-object value.
pub trait RestClient: Send + Sync {
    /// Issue a `GET` for an endpoint-relative path (which may carry a query string).
    fn get_json(&self, path: &str) -> Result<Option<JsonObject>, ApiError>;

    /// Issue a `POST` with a JSON body (`Content-Type: application/json`).
    fn post_json(&self, path: &str, body: &Value) -> Result<Option<JsonObject>, ApiError>;
}

#[derive(Debug, Clone)]
/// Thin wrapper around a `reqwest::Client` bound to one frontend base URL.
pub struct ContinuityClient {
    pub base_url: String,
    pub http: Client,
    pub user_agent: String,
}

impl ContinuityClient {
    /// Construct a client for `endpoint` with a default HTTP client.
    pub fn new(endpoint: &RestEndpoint) -> Result<Self, ApiError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self::with_http_client(endpoint, http))
    }

    /// Construct a client for `endpoint` around an externally configured HTTP client.
    pub fn with_http_client(endpoint: &RestEndpoint, http: Client) -> Self {
        Self {
            base_url: endpoint.base_url(),
            http,
            user_agent: format!("continuity-experimentation/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        }
    }

    /// Build a `reqwest::RequestBuilder` for a method and endpoint-relative path.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "building request");

        self.http.request(method, url).header(header::USER_AGENT, &self.user_agent)
    }

    fn execute(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Option<JsonObject>, ApiError> {
        let mut request_builder = self.request(method.clone(), path);
        if let Some(body) = body {
            request_builder = request_builder.json(body);
        }
        let request_path = path.to_string();
        let request_future = async move { Ok(send_json_request(request_builder, method, request_path).await) };
        block_on_future(request_future).map_err(ApiError::Runtime)?
    }
}

impl RestClient for ContinuityClient {
    fn get_json(&self, path: &str) -> Result<Option<JsonObject>, ApiError> {
        self.execute(Method::GET, path, None)
    }

    fn post_json(&self, path: &str, body: &Value) -> Result<Option<JsonObject>, ApiError> {
        self.execute(Method::POST, path, Some(body))
    }
}

async fn send_json_request(
    request_builder: RequestBuilder,
    method: Method,
    request_path: String,
) -> Result<Option<JsonObject>, ApiError> {
    let start = Instant::now();
    debug!(method = %method, path = %request_path, "http request started");

    let response = request_builder.send().await?;
    let status = response.status();
    let body_text = response.text().await?;

    if !status.is_success() {
        warn!(
            method = %method,
            path = %request_path,
            status = %status,
            duration_ms = start.elapsed().as_millis(),
            "http request failed"
        );
        return Err(ApiError::status(status.as_u16(), body_text));
    }

    debug!(
        method = %method,
        path = %request_path,
        status = %status,
        body_bytes = body_text.len(),
        duration_ms = start.elapsed().as_millis(),
        "http request completed"
    );
    parse_object_response(&body_text, &request_path)
}

/// Decode a response body into an optional JSON object.
///
/// ```rust
/// use continuity_api::parse_object_response;
///
/// assert!(parse_object_response("", "/wait").unwrap().is_none());
/// assert!(parse_object_response("null", "/wait").unwrap().is_none());
/// assert!(parse_object_response("{}", "/wait").unwrap().unwrap().is_empty());
/// assert!(parse_object_response("[1, 2]", "/wait").is_err());
/// ```
pub fn parse_object_response(body_text: &str, request_path: &str) -> Result<Option<JsonObject>, ApiError> {
    if body_text.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body_text).map_err(|error| ApiError::Decode {
        path: request_path.to_string(),
        message: error.to_string(),
    })?;
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        other => Err(ApiError::Decode {
            path: request_path.to_string(),
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_targets_endpoint_base_url() {
        let client = ContinuityClient::new(&RestEndpoint::new("localhost", "8080")).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
        assert!(client.user_agent.starts_with("continuity-experimentation/"));
    }

    #[test]
    fn request_joins_base_url_and_path() {
        let client = ContinuityClient::new(&RestEndpoint::with_default_port("frontend")).unwrap();
        let request = client
            .request(Method::GET, "/workloadmodel/wait/abc123?timeout=40000")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://frontend/workloadmodel/wait/abc123?timeout=40000");
        assert!(request.headers().contains_key(header::USER_AGENT));
    }

    #[test]
    fn decode_error_names_the_path() {
        let error = parse_object_response("\"done\"", "/workloadmodel/wait/x").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid JSON response from /workloadmodel/wait/x: expected a JSON object, got a string"
        );
        assert!(parse_object_response("{not json", "/p").is_err());
    }

    #[test]
    fn object_response_is_returned_as_map() {
        let map = parse_object_response(r#"{"message": "ok", "link": "abc123"}"#, "/create")
            .unwrap()
            .unwrap();
        assert_eq!(map.get("link"), Some(&Value::String("abc123".into())));
    }

    #[test]
    fn status_error_carries_reason_phrase() {
        match ApiError::status(500, "stack trace") {
            ApiError::Status { status, reason, body } => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
                assert_eq!(body, "stack trace");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(ApiError::status(599, "").to_string().contains("Unknown"));
    }
}
