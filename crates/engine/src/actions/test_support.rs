//! Scripted [`RestClient`] used by action unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use continuity_api::{ApiError, JsonObject, RestClient};
use serde_json::Value;

pub(crate) type Reply = Result<Option<JsonObject>, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Get(String),
    Post(String, Value),
}

/// Replays queued replies per verb and records every call.
///
/// An exhausted GET queue answers `Ok(None)` (not finished); an exhausted POST
/// queue fails the test.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    posts: Mutex<VecDeque<Reply>>,
    gets: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on_post(self, reply: Reply) -> Self {
        self.posts.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn on_get(self, reply: Reply) -> Self {
        self.gets.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn get_paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Get(path) => Some(path),
                Call::Post(..) => None,
            })
            .collect()
    }
}

impl RestClient for ScriptedClient {
    fn get_json(&self, path: &str) -> Result<Option<JsonObject>, ApiError> {
        self.calls.lock().unwrap().push(Call::Get(path.to_string()));
        self.gets.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }

    fn post_json(&self, path: &str, body: &Value) -> Result<Option<JsonObject>, ApiError> {
        self.calls.lock().unwrap().push(Call::Post(path.to_string(), body.clone()));
        self.posts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected POST {path}"))
    }
}

/// Build a JSON object from a `json!` literal.
pub(crate) fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object literal, got {other}"),
    }
}
