//! Node module

use crate::entity::default_property_uris;
use crate::Entity;

/// A graph vertex as described by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    self_uri: String,
    property_uri: String,
    properties_uri: String,
    all_relationships_uri: Option<String>,
    incoming_relationships_uri: Option<String>,
    outgoing_relationships_uri: Option<String>,
}

impl Node {
    /// Create a node from its self-URI
    pub fn new(self_uri: impl Into<String>) -> Self {
        let self_uri = self_uri.into();
        let (property_uri, properties_uri) = default_property_uris(&self_uri);

        Self {
            self_uri,
            property_uri,
            properties_uri,
            all_relationships_uri: None,
            incoming_relationships_uri: None,
            outgoing_relationships_uri: None,
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

    /// Attach the relationship listing URIs advertised by the server
    pub fn with_relationship_uris(
        mut self,
        all: Option<String>,
        incoming: Option<String>,
        outgoing: Option<String>,
    ) -> Self {
        self.all_relationships_uri = all;
        self.incoming_relationships_uri = incoming;
        self.outgoing_relationships_uri = outgoing;
        self
    }

    /// URI listing every relationship of this node
    pub fn all_relationships_uri(&self) -> Option<&str> {
        self.all_relationships_uri.as_deref()
    }

    /// URI listing relationships ending at this node
    pub fn incoming_relationships_uri(&self) -> Option<&str> {
        self.incoming_relationships_uri.as_deref()
    }

    /// URI listing relationships starting at this node
    pub fn outgoing_relationships_uri(&self) -> Option<&str> {
        self.outgoing_relationships_uri.as_deref()
    }
}

impl Entity for Node {
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
