//! Domain errors

use std::fmt;

/// Errors raised while interpreting entity data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The self-URI does not end in a numeric id. The entity was built from
    /// corrupt server data and cannot be used.
    MalformedSelfUri(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::MalformedSelfUri(uri) => {
                write!(f, "Malformed self URI (no numeric id): '{}'", uri)
            }
        }
    }
}

impl std::error::Error for DomainError {}
