//! GraphQL response envelope handling.

use serde_json::Value;

/// Failure of a single remote operation.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The API answered with a structured error list; carries the first
    /// reported message.
    #[error("{0}")]
    Api(String),

    /// The request never produced a response body (network unreachable,
    /// connection reset, non-success transport state).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not a recognizable envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Unwrap a `{data, errors}` envelope into its data payload.
///
/// A non-empty `errors` array wins over any partial `data`; the first
/// error's `message` becomes the [`RemoteError::Api`] text, falling back
/// to the raw error value when the shape is unexpected.
pub fn unwrap_envelope(body: Value) -> Result<Value, RemoteError> {
    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        if let Some(first) = errors.first() {
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| first.to_string());
            return Err(RemoteError::Api(message));
        }
    }

    match body.get("data") {
        Some(Value::Null) | None => Err(RemoteError::MalformedResponse(
            "envelope carries neither data nor errors".to_string(),
        )),
        Some(data) => Ok(data.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_data_payload() {
        let body = json!({"data": {"flights": []}});
        let data = unwrap_envelope(body).unwrap();
        assert_eq!(data, json!({"flights": []}));
    }

    #[test]
    fn test_first_error_message_wins() {
        let body = json!({
            "data": null,
            "errors": [
                {"message": "flight not found"},
                {"message": "second error"}
            ]
        });
        let err = unwrap_envelope(body).unwrap_err();
        match err {
            RemoteError::Api(message) => assert_eq!(message, "flight not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_without_message_field() {
        let body = json!({"errors": [{"code": 42}]});
        let err = unwrap_envelope(body).unwrap_err();
        assert!(matches!(err, RemoteError::Api(_)));
    }

    #[test]
    fn test_empty_errors_array_falls_through_to_data() {
        let body = json!({"errors": [], "data": {"ok": true}});
        assert!(unwrap_envelope(body).is_ok());
    }

    #[test]
    fn test_missing_data_is_malformed() {
        let err = unwrap_envelope(json!({"something": "else"})).unwrap_err();
        assert!(matches!(err, RemoteError::MalformedResponse(_)));
    }
}
