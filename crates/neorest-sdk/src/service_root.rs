//! Service root document.

use serde::{Deserialize, Serialize};

/// Endpoints advertised by the server at the base URL
///
/// Every endpoint is optional; a missing one means the server does not offer
/// that capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRoot {
    /// Node collection endpoint
    pub node: Option<String>,
    /// Reference node (older servers only)
    pub reference_node: Option<String>,
    /// Node index endpoint
    pub node_index: Option<String>,
    /// Relationship index endpoint
    pub relationship_index: Option<String>,
    /// Relationship type listing endpoint
    pub relationship_types: Option<String>,
    /// Batch endpoint
    pub batch: Option<String>,
    /// Cypher endpoint
    pub cypher: Option<String>,
    /// Extensions info endpoint
    pub extensions_info: Option<String>,
    /// Server version string
    pub neo4j_version: Option<String>,
}

impl ServiceRoot {
    /// Relationship-types endpoint, if advertised and non-empty
    pub fn relationship_types_endpoint(&self) -> Option<&str> {
        self.relationship_types.as_deref().filter(|s| !s.is_empty())
    }
}
