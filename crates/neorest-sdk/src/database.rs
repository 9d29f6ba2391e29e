//! Database handle.

use crate::config::ClientConfig;
use crate::error::SdkError;
use crate::nodes::NodeManager;
use crate::relationships::RelationshipManager;
use crate::service_root::ServiceRoot;
use crate::transport::RestClient;
use neorest_domain::{Node, NodeResolver};
use reqwest::StatusCode;
use tracing::info;

/// Connection to one database
///
/// Holds the base URL, the decoded service root and the HTTP client. Managers
/// borrow the handle, so they cannot outlive it. The handle is `Send + Sync`
/// and can be shared between tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Database {
    url: String,
    service_root: ServiceRoot,
    rest: RestClient,
}

impl Database {
    /// Connect to the database described by `config`
    ///
    /// Fetches the service root to learn which endpoints the server offers.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Config`] if the configuration is invalid
    /// - [`SdkError::Transport`] if the server cannot be reached
    /// - [`SdkError::NotFound`] if nothing lives at the base URL
    /// - [`SdkError::BadResponse`] for any other non-200 status
    pub async fn connect(config: &ClientConfig) -> Result<Self, SdkError> {
        config.validate()?;
        let rest = RestClient::new(config)?;

        let response = rest.get(&config.url).await?;
        let service_root: ServiceRoot = match response.status {
            StatusCode::OK => response.json()?,
            StatusCode::NOT_FOUND => return Err(SdkError::NotFound),
            _ => return Err(response.bad_response(&config.url)),
        };

        info!(
            url = config.base_url(),
            version = service_root.neo4j_version.as_deref().unwrap_or("unknown"),
            "Connected to database"
        );

        Ok(Self {
            url: config.base_url().to_string(),
            service_root,
            rest,
        })
    }

    /// Build a handle from an already known service root, without a request
    pub fn from_parts(config: &ClientConfig, service_root: ServiceRoot) -> Result<Self, SdkError> {
        config.validate()?;
        Ok(Self {
            url: config.base_url().to_string(),
            service_root,
            rest: RestClient::new(config)?,
        })
    }

    /// Base URL without trailing slash
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Endpoints the server advertised
    pub fn service_root(&self) -> &ServiceRoot {
        &self.service_root
    }

    /// Server version, if reported
    pub fn version(&self) -> Option<&str> {
        self.service_root.neo4j_version.as_deref()
    }

    /// Relationship operations
    pub fn relationships(&self) -> RelationshipManager<'_> {
        RelationshipManager::new(self)
    }

    /// Node operations
    pub fn nodes(&self) -> NodeManager<'_> {
        NodeManager::new(self)
    }

    pub(crate) fn rest(&self) -> &RestClient {
        &self.rest
    }
}

impl NodeResolver for Database {
    type Error = SdkError;

    async fn node_by_uri(&self, uri: &str) -> Result<Node, SdkError> {
        self.nodes().get_by_uri(uri).await
    }
}
