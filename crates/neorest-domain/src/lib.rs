//! neorest Domain Layer
//!
//! Value objects and trait interfaces for the entities exposed by a graph
//! database's REST API. This crate performs no I/O and has no external
//! dependencies; the HTTP client in `neorest-sdk` builds these values from
//! decoded server responses.
//!
//! ## Key Concepts
//!
//! - **Self-URI**: the canonical resource URI the server assigns to an entity.
//!   The numeric id of the entity is its trailing path segment.
//! - **Relationship**: a directed, typed edge between two nodes
//! - **Node**: a vertex carrying properties and relationship listings
//! - **NodeResolver**: the lookup a relationship needs to turn its endpoint
//!   URIs into nodes. It is passed explicitly instead of being stored.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod error;
pub mod node;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use entity::{Entity, EntityId};
pub use error::DomainError;
pub use node::Node;
pub use relationship::Relationship;
pub use traits::NodeResolver;
