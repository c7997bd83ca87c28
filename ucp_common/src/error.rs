//! Error types shared by the settlement client and the CLI.
//!
//! `UcpError` separates the three outcomes a caller must tell apart: the remote
//! service answered with a non-success status (`Http`), the remote service
//! reported a terminal settlement failure (`SettlementFailed`), or the local
//! polling deadline elapsed (`Timeout`). The remaining variants cover transport,
//! decoding and local configuration failures around them.
use std::time::Duration;

use thiserror::Error;

/// Unified error type for settlement operations.
#[derive(Error, Debug)]
pub enum UcpError {
    /// Non-success HTTP status. Status and body are kept exactly as received.
    #[error("HTTP error from {endpoint}: status {status}: {body}")]
    Http {
        /// Endpoint path that produced the response.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The HTTP stack failed before a response arrived (connect, TLS, timeout).
    #[error("Transport error on {endpoint}: {message}")]
    Transport {
        /// Endpoint path of the failed request.
        endpoint: String,
        /// Message reported by the HTTP stack.
        message: String,
    },

    /// A success response whose body could not be decoded.
    #[error("Invalid response body from {endpoint}: {source}")]
    Decode {
        /// Endpoint path that produced the response.
        endpoint: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The remote service reported the settlement as failed.
    #[error("Settlement failed: {}", reason.as_deref().unwrap_or("unknown reason"))]
    SettlementFailed {
        /// Settlement identifier.
        id: String,
        /// Failure reason as reported by the server, if any.
        reason: Option<String>,
    },

    /// The local deadline elapsed while the settlement was still pending.
    #[error("Settlement {id} timed out after {}s", waited.as_secs())]
    Timeout {
        /// Settlement identifier.
        id: String,
        /// Wall-clock time spent polling.
        waited: Duration,
    },

    /// The settlement token expired before it was used.
    #[error("Settlement token for {settlement_id} expired at {expires_at}")]
    TokenExpired {
        /// Settlement the token was issued for.
        settlement_id: String,
        /// Expiry reported by the server, RFC 3339.
        expires_at: String,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UcpError {
    /// HTTP status code when the error came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            UcpError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_failed_message_carries_reason() {
        let err = UcpError::SettlementFailed {
            id: "stl_1".into(),
            reason: Some("Invalid Pix key".into()),
        };
        assert_eq!(err.to_string(), "Settlement failed: Invalid Pix key");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn http_error_keeps_status_and_body() {
        let err = UcpError::Http {
            endpoint: "/v1/ucp/quote".into(),
            status: 422,
            body: "{\"error\":\"bad corridor\"}".into(),
        };
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("bad corridor"));
    }

    #[test]
    fn timeout_message_reports_seconds() {
        let err = UcpError::Timeout {
            id: "stl_1".into(),
            waited: Duration::from_secs(120),
        };
        assert_eq!(err.to_string(), "Settlement stl_1 timed out after 120s");
    }
}
