//! Fetch error types and API error decoding.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Product name used in decoded API error messages.
pub const PRODUCT_NAME: &str = "Pingdom";

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for API operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response carrying the API's structured error envelope.
    #[error("{product} API error ({status_code}): {message}", product = PRODUCT_NAME)]
    Api {
        /// `statuscode` from the envelope.
        status_code: i64,
        /// `statusdesc` from the envelope.
        status_desc: String,
        /// `errormessage` from the envelope.
        message: String,
    },

    /// Non-2xx response without a decodable envelope.
    #[error("HTTP {status} {reason}: {body}")]
    Http {
        /// Raw HTTP status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
        /// Raw response body.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL or endpoint could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Token could not be encoded as a header.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl FetchError {
    /// Returns the HTTP status, if the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Api { status_code, .. } => u16::try_from(*status_code).ok(),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// ============================================================================
// Error Envelope
// ============================================================================

/// `{"error": {...}}` body returned by the API on failures.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetails {
    #[serde(default)]
    statuscode: i64,
    #[serde(default)]
    statusdesc: String,
    #[serde(default)]
    errormessage: String,
}

/// Builds the error for a non-2xx response.
///
/// Prefers the structured envelope; falls back to the raw status and body
/// when the body is not an envelope.
pub fn decode_error(status: StatusCode, body: &str) -> FetchError {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => FetchError::Api {
            status_code: envelope.error.statuscode,
            status_desc: envelope.error.statusdesc,
            message: envelope.error.errormessage,
        },
        Err(_) => FetchError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"error":{"statuscode":403,"statusdesc":"Forbidden","errormessage":"Invalid token"}}"#;
        let err = decode_error(StatusCode::FORBIDDEN, body);

        assert_eq!(err.to_string(), "Pingdom API error (403): Invalid token");
        assert_eq!(err.status(), Some(403));
        assert!(matches!(err, FetchError::Api { ref status_desc, .. } if status_desc == "Forbidden"));
    }

    #[test]
    fn test_decode_plain_body() {
        let err = decode_error(StatusCode::BAD_GATEWAY, "<html>upstream down</html>");
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: <html>upstream down</html>");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_decode_json_without_envelope() {
        let err = decode_error(StatusCode::NOT_FOUND, r#"{"message":"nope"}"#);
        assert!(matches!(err, FetchError::Http { status: 404, .. }));
    }

    #[test]
    fn test_decode_empty_body() {
        let err = decode_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error: ");
    }
}
