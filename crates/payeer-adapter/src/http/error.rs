/*
[INPUT]:  Error sources (HTTP transport, vendor envelope, local validation)
[OUTPUT]: Structured error types for the entire crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use serde_json::Value;
use thiserror::Error;

/// Main error type for the Payeer adapter
#[derive(Error, Debug)]
pub enum PayeerError {
    /// HTTP request failed (transport, timeout, or body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Payeer reported failure through the `errors` field of the envelope
    #[error("Payeer API error: {errors}")]
    Api {
        /// The `errors` payload, verbatim as the API returned it
        errors: Value,
    },

    /// Recipient identifier failed local validation
    #[error("invalid account identifier: {0}")]
    InvalidAccount(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Success envelope did not carry the expected result key
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl PayeerError {
    /// Check if the failure was reported by Payeer itself rather than the
    /// transport or local validation
    pub fn is_api_error(&self) -> bool {
        matches!(self, PayeerError::Api { .. })
    }
}

/// Result type alias for Payeer operations
pub type Result<T> = std::result::Result<T, PayeerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_payload() {
        let err = PayeerError::Api {
            errors: serde_json::json!(["balance_not_enough"]),
        };
        assert!(err.is_api_error());
        assert_eq!(
            err.to_string(),
            r#"Payeer API error: ["balance_not_enough"]"#
        );
    }

    #[test]
    fn test_invalid_account_is_not_api_error() {
        let err = PayeerError::InvalidAccount("not-an-account".to_string());
        assert!(!err.is_api_error());
        assert!(err.to_string().contains("not-an-account"));
    }
}
