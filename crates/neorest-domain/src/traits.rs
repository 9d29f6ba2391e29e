//! Trait definitions for external interactions
//!
//! These traits define the boundary between the value objects and the HTTP
//! client. Implementations live in `neorest-sdk`.

use crate::Node;

/// Looks up a node by its self-URI
///
/// Implemented by the SDK's database handle and node manager. Relationships
/// receive a resolver as an argument when their endpoints are requested, so
/// they never own a reference back to the database.
#[allow(async_fn_in_trait)]
pub trait NodeResolver {
    /// Error type for lookups
    type Error;

    /// Fetch the node at `uri`
    async fn node_by_uri(&self, uri: &str) -> Result<Node, Self::Error>;
}
