/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde_json::Value;
use thiserror::Error;

/// Fallback message for a failed login without a server-provided `detail`.
pub const LOGIN_FAILED_MESSAGE: &str = "Неверный email или пароль";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },

    /// Connection, DNS or timeout failure raised by the transport.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stored access token cannot be sent as a header")]
    InvalidToken,
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::Json(_) | Error::InvalidToken => None,
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http { .. })
    }

    /// Builds the HTTP error for a failed response body, preferring the
    /// server's `detail` and falling back to `fallback` when it is missing
    /// or blank (`null`, `""`, `0`, `false`). Bodies that are not JSON are
    /// treated as an empty object.
    pub(crate) fn from_body(status: u16, body: &[u8], fallback: impl FnOnce() -> String) -> Self {
        let parsed = serde_json::from_slice::<Value>(body)
            .unwrap_or_else(|_| Value::Object(Default::default()));

        let message = match parsed.get("detail") {
            Some(detail) if is_blank(detail) => fallback(),
            Some(Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => fallback(),
        };

        Error::Http { status, message }
    }
}

fn is_blank(detail: &Value) -> bool {
    match detail {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_none_or(|n| n == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub(crate) fn status_fallback(status: u16) -> String {
    format!("Ошибка {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_used_verbatim() {
        let err = Error::from_body(404, r#"{"detail":"Проект не найден"}"#.as_bytes(), || {
            status_fallback(404)
        });

        match err {
            Error::Http { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Проект не найден");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_detail_uses_fallback() {
        let err = Error::from_body(500, b"{}", || status_fallback(500));
        assert_eq!(err.to_string(), "Ошибка 500 (HTTP 500)");
    }

    #[test]
    fn test_non_json_body_uses_fallback() {
        let err = Error::from_body(502, b"<html>Bad Gateway</html>", || status_fallback(502));
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().starts_with("Ошибка 502"));
    }

    #[test]
    fn test_empty_detail_uses_fallback() {
        let err = Error::from_body(401, br#"{"detail":""}"#, || LOGIN_FAILED_MESSAGE.to_string());

        match err {
            Error::Http { message, .. } => assert_eq!(message, LOGIN_FAILED_MESSAGE),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_structured_detail_is_rendered_as_json() {
        let body = br#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#;
        let err = Error::from_body(422, body, || status_fallback(422));

        match err {
            Error::Http { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("field required"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_false_detail_use_fallback() {
        for body in [r#"{"detail":0}"#, r#"{"detail":false}"#, r#"{"detail":0.0}"#] {
            let err = Error::from_body(418, body.as_bytes(), || status_fallback(418));

            match err {
                Error::Http { status, message } => {
                    assert_eq!(status, 418);
                    assert_eq!(message, "Ошибка 418");
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_scalar_detail_is_rendered() {
        let err = Error::from_body(409, br#"{"detail":7}"#, || status_fallback(409));
        assert_eq!(err.to_string(), "7 (HTTP 409)");
    }
}
