//! Entity identity and the URIs shared by nodes and relationships

use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Numeric id of a node or relationship
///
/// Parsed from the trailing segment of the entity's self-URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Create an id from a raw value
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Extract the id from a self-URI such as
    /// `http://localhost:7474/db/data/relationship/42`
    pub fn from_self_uri(uri: &str) -> Result<Self, DomainError> {
        let segment = uri.rsplit('/').next().unwrap_or_default();
        u64::from_str(segment)
            .map(Self)
            .map_err(|_| DomainError::MalformedSelfUri(uri.to_string()))
    }

    /// Get the raw u64 value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Behaviour common to every addressable entity (nodes and relationships)
pub trait Entity {
    /// Canonical URI of the entity
    fn self_uri(&self) -> &str;

    /// URI template for a single property; contains a `{key}` placeholder
    fn property_uri(&self) -> &str;

    /// URI of the full property map
    fn properties_uri(&self) -> &str;

    /// Numeric id parsed from the self-URI
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedSelfUri`] if the self-URI does not end
    /// in a number. Such an entity is structurally invalid.
    fn id(&self) -> Result<EntityId, DomainError> {
        EntityId::from_self_uri(self.self_uri())
    }

    /// Property URI with `{key}` replaced by an already encoded key
    fn property_uri_for(&self, encoded_key: &str) -> String {
        self.property_uri().replace("{key}", encoded_key)
    }
}

/// Default property URIs derived from a self-URI, used when the server omits them
pub(crate) fn default_property_uris(self_uri: &str) -> (String, String) {
    let base = self_uri.trim_end_matches('/');
    (
        format!("{}/properties/{{key}}", base),
        format!("{}/properties", base),
    )
}
