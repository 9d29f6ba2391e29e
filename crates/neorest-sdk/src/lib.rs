//! neorest Rust SDK
//!
//! Client library for a graph database's HTTP REST API (the Neo4j `/db/data`
//! surface). Each operation issues a single HTTP request, maps the status code
//! to an [`SdkError`] and decodes the JSON body into `neorest-domain` values.
//!
//! # Example
//!
//! ```no_run
//! use neorest_sdk::{ClientConfig, Database, Entity};
//!
//! # async fn demo() -> Result<(), neorest_sdk::SdkError> {
//! let db = Database::connect(&ClientConfig::new("http://localhost:7474/db/data")).await?;
//!
//! let rel = db.relationships().get(42).await?;
//! println!("{} is a {}", rel.id()?, rel.rel_type());
//!
//! let start = rel.start(&db).await?;
//! let types = db.relationships().types().await?;
//! # let _ = (start, types);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod nodes;
mod properties;
mod relationships;
mod service_root;
mod transport;

pub use config::{ClientConfig, ConfigError};
pub use database::Database;
pub use error::SdkError;
pub use nodes::NodeManager;
pub use relationships::RelationshipManager;
pub use service_root::ServiceRoot;
pub use transport::ServerError;

pub use neorest_domain::{Entity, EntityId, Node, NodeResolver, Relationship};
