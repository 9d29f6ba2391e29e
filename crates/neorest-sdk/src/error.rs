//! Error types for the neorest SDK.

use crate::config::ConfigError;
use neorest_domain::DomainError;
use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// The server answered 404 for the requested resource
    #[error("Not found")]
    NotFound,

    /// The server answered with a status the operation does not expect
    #[error("Bad response from server (HTTP {status})")]
    BadResponse {
        /// HTTP status code returned by the server
        status: u16,
    },

    /// The server does not advertise an optional capability
    #[error("Feature unavailable: {0}")]
    FeatureUnavailable(String),

    /// The entity cannot be deleted (a node that still has relationships)
    #[error("Cannot delete entity: it still has relationships")]
    CannotDelete,

    /// Transport failure (connection, timeout, TLS); passed through unchanged
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response whose body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A URL could not be built from server-provided data
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Server data describing an entity is structurally invalid
    #[error("Malformed entity: {0}")]
    MalformedEntity(#[from] DomainError),

    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Decode(format!("JSON parsing error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SdkError::NotFound.to_string(), "Not found");
        assert_eq!(
            SdkError::BadResponse { status: 500 }.to_string(),
            "Bad response from server (HTTP 500)"
        );
        assert_eq!(
            SdkError::FeatureUnavailable("relationship types".into()).to_string(),
            "Feature unavailable: relationship types"
        );
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: SdkError = DomainError::MalformedSelfUri("x/y".into()).into();
        assert!(matches!(err, SdkError::MalformedEntity(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: SdkError = json_err.into();
        assert!(matches!(err, SdkError::Decode(msg) if msg.starts_with("JSON parsing error")));
    }
}
