//! # Error Normalization
//!
//! Turns whatever the backend put in an error body into one display string.
//!
//! The backend validates input with typed models, so a 422 usually carries a
//! list of structured validation errors under `detail`; those are joined into
//! a readable list instead of being shown as raw JSON. Rules, first match wins:
//!
//! 1. body is a JSON string: use it
//! 2. body has `detail`: a string verbatim, a list joined with `", "`, anything
//!    else as JSON text
//! 3. body has `message`: use it
//! 4. otherwise the whole body as JSON text
//! 5. body is not JSON at all, or is `null`: `"Error {status}: {statusText}"`

use reqwest::StatusCode;
use serde_json::Value;

use crate::core::error::status_line;

/// Build the display message for a failed response.
pub fn normalize_error_body(status: StatusCode, body: &[u8]) -> String {
    let parsed: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => return status_line(status),
    };

    if parsed.is_null() {
        return status_line(status);
    }

    if let Value::String(message) = &parsed {
        return message.clone();
    }

    if let Some(detail) = parsed.get("detail").filter(|v| is_present(v)) {
        return match detail {
            Value::String(text) => text.clone(),
            Value::Array(entries) => entries
                .iter()
                .map(describe_entry)
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };
    }

    if let Some(message) = parsed.get("message").filter(|v| is_present(v)) {
        return text_of(message);
    }

    parsed.to_string()
}

/// One validation entry: its `msg`, else its `message`, else its JSON text.
fn describe_entry(entry: &Value) -> String {
    entry
        .get("msg")
        .filter(|v| is_present(v))
        .or_else(|| entry.get("message").filter(|v| is_present(v)))
        .map(text_of)
        .unwrap_or_else(|| entry.to_string())
}

/// Null, empty strings, `false` and zero count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(body: &str) -> String {
        normalize_error_body(StatusCode::UNPROCESSABLE_ENTITY, body.as_bytes())
    }

    #[test]
    fn test_validation_list_is_comma_joined() {
        let body = r#"{"detail": [{"msg": "quantity must be positive"}, {"msg": "material_id required"}]}"#;
        assert_eq!(
            normalize(body),
            "quantity must be positive, material_id required"
        );
    }

    #[test]
    fn test_string_detail_is_verbatim() {
        assert_eq!(normalize(r#"{"detail": "Insufficient stock"}"#), "Insufficient stock");
    }

    #[test]
    fn test_plain_json_string_body() {
        assert_eq!(normalize(r#""Something broke""#), "Something broke");
    }

    #[test]
    fn test_validation_entry_fallbacks() {
        let body = r#"{"detail": [{"message": "from message"}, {"loc": ["body", "quantity"]}, "bare"]}"#;
        assert_eq!(
            normalize(body),
            r#"from message, {"loc":["body","quantity"]}, "bare""#
        );
    }

    #[test]
    fn test_object_detail_is_json_text() {
        assert_eq!(normalize(r#"{"detail": {"code": 7}}"#), r#"{"code":7}"#);
    }

    #[test]
    fn test_message_field() {
        assert_eq!(normalize(r#"{"message": "Order locked"}"#), "Order locked");
    }

    #[test]
    fn test_null_detail_falls_through_to_message() {
        assert_eq!(
            normalize(r#"{"detail": null, "message": "fallback"}"#),
            "fallback"
        );
    }

    #[test]
    fn test_unknown_shape_is_json_text() {
        assert_eq!(normalize(r#"{"error": "nope"}"#), r#"{"error":"nope"}"#);
    }

    #[test]
    fn test_string_entry_in_detail_list_is_json_text() {
        assert_eq!(normalize(r#"{"detail": ["bare", {"msg": "x"}]}"#), r#""bare", x"#);
    }

    #[test]
    fn test_null_body_uses_status_line() {
        assert_eq!(
            normalize_error_body(StatusCode::BAD_REQUEST, b"null"),
            "Error 400: Bad Request"
        );
    }

    #[test]
    fn test_non_json_body_uses_status_line() {
        assert_eq!(
            normalize_error_body(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>"),
            "Error 502: Bad Gateway"
        );
        assert_eq!(
            normalize_error_body(StatusCode::NOT_FOUND, b""),
            "Error 404: Not Found"
        );
    }
}
