//! Text conversions for loosely typed JSON response fields.

use serde_json::Value;

/// Render a JSON value as plain text.
///
/// Strings are returned without quotes; every other value is rendered as its
/// compact JSON text, so `42` becomes `"42"` and `{"a":1}` stays `{"a":1}`.
///
/// ```rust
/// use continuity_util::json_value_to_text;
/// use serde_json::json;
///
/// assert_eq!(json_value_to_text(&json!("abc123")), "abc123");
/// assert_eq!(json_value_to_text(&json!(42)), "42");
/// assert_eq!(json_value_to_text(&json!(true)), "true");
/// ```
pub fn json_value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
