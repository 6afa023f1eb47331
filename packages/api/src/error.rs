//! Failure taxonomy for REST calls.
//!
//! Views collapse most of these into one generic modal, but the variants are
//! kept apart so call sites that want to can show the server's own message.

use thiserror::Error;

/// Error returned by every service method.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Rejected on the client before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Text for a user-facing dialog: the server's or validator's message when
    /// there is one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } => m.clone(),
            ApiError::Validation(m) => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Pull a human-readable message out of an error body.
///
/// Spring-style JSON bodies carry it in `message` (or `error`); some endpoints
/// answer with bare text such as `Invalid credentials`.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string),
        Ok(serde_json::Value::String(s)) => Some(s),
        Ok(_) => None,
        Err(_) if body.len() <= 200 && !body.starts_with('<') => Some(body.to_string()),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_json() {
        assert_eq!(
            extract_message(r#"{"status":403,"message":"Only the admin can do that"}"#),
            Some("Only the admin can do that".to_string())
        );
        assert_eq!(
            extract_message(r#"{"error":"Forbidden"}"#),
            Some("Forbidden".to_string())
        );
        assert_eq!(extract_message(r#"{"status":500}"#), None);
    }

    #[test]
    fn test_extract_message_text() {
        assert_eq!(
            extract_message("Invalid credentials"),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(extract_message("   "), None);
        assert_eq!(extract_message("<html><body>502</body></html>"), None);
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.user_message("Failed to join"), "Failed to join");

        let err = ApiError::Status { status: 400, message: Some("Already a member".into()) };
        assert_eq!(err.user_message("Failed to join"), "Already a member");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_display_includes_message() {
        let err = ApiError::Status { status: 403, message: Some("nope".into()) };
        assert_eq!(err.to_string(), "server returned 403: nope");

        let err = ApiError::Status { status: 404, message: None };
        assert_eq!(err.to_string(), "server returned 404");
    }
}
