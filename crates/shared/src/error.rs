use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the backend on rejected writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// Extracts a non-empty `error` field from a raw response body, if the body is JSON at all.
    pub fn message_from_slice(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Error)]
#[error("unknown board '{0}'; expected 'tasks' or 'orders'")]
pub struct UnknownBoard(pub String);

#[cfg(test)]
mod tests {
    use super::ErrorBody;

    #[test]
    fn reads_error_field_from_json_body() {
        assert_eq!(
            ErrorBody::message_from_slice(br#"{"error":"Table number must be a number."}"#),
            Some("Table number must be a number.".to_string())
        );
    }

    #[test]
    fn ignores_empty_missing_or_non_json_errors() {
        assert_eq!(ErrorBody::message_from_slice(br#"{"error":""}"#), None);
        assert_eq!(ErrorBody::message_from_slice(br#"{"detail":"nope"}"#), None);
        assert_eq!(ErrorBody::message_from_slice(b"<html>502</html>"), None);
    }
}
