//! Relationship module
//!
//! A relationship is a directional connection between two nodes with an
//! optional set of arbitrary properties. All of its attributes are URIs handed
//! out by the server, except the type name.

use crate::entity::default_property_uris;
use crate::{Entity, Node, NodeResolver};

/// A directed, typed edge between two nodes
///
/// Fields are private: once built from a server response the URIs never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    self_uri: String,
    rel_type: String,
    start_uri: String,
    end_uri: String,
    property_uri: String,
    properties_uri: String,
}

impl Relationship {
    /// Create a relationship from its self-URI, type and endpoint URIs
    ///
    /// Property URIs default to `<self>/properties` and
    /// `<self>/properties/{key}`; override them with [`Self::with_property_uris`].
    pub fn new(
        self_uri: impl Into<String>,
        rel_type: impl Into<String>,
        start_uri: impl Into<String>,
        end_uri: impl Into<String>,
    ) -> Self {
        let self_uri = self_uri.into();
        let (property_uri, properties_uri) = default_property_uris(&self_uri);

        Self {
            self_uri,
            rel_type: rel_type.into(),
            start_uri: start_uri.into(),
            end_uri: end_uri.into(),
            property_uri,
            properties_uri,
        }
    }

    /// Use the property URIs advertised by the server
    pub fn with_property_uris(
        mut self,
        property_uri: impl Into<String>,
        properties_uri: impl Into<String>,
    ) -> Self {
        self.property_uri = property_uri.into();
        self.properties_uri = properties_uri.into();
        self
    }

    /// The relationship type name (e.g. `KNOWS`)
    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    /// URI of the start node
    pub fn start_uri(&self) -> &str {
        &self.start_uri
    }

    /// URI of the end node
    pub fn end_uri(&self) -> &str {
        &self.end_uri
    }

    /// Fetch the start node through `resolver`
    pub async fn start<R: NodeResolver>(&self, resolver: &R) -> Result<Node, R::Error> {
        resolver.node_by_uri(&self.start_uri).await
    }

    /// Fetch the end node through `resolver`
    pub async fn end<R: NodeResolver>(&self, resolver: &R) -> Result<Node, R::Error> {
        resolver.node_by_uri(&self.end_uri).await
    }
}

impl Entity for Relationship {
    fn self_uri(&self) -> &str {
        &self.self_uri
    }

    fn property_uri(&self) -> &str {
        &self.property_uri
    }

    fn properties_uri(&self) -> &str {
        &self.properties_uri
    }
}
