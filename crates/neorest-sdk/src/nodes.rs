//! Node operations.

use crate::database::Database;
use crate::error::SdkError;
use crate::transport::join;
use neorest_domain::{Node, NodeResolver};
use reqwest::StatusCode;
use serde::Deserialize;

/// Node data returned by the server
#[derive(Debug, Deserialize)]
struct NodeResponse {
    #[serde(rename = "self")]
    self_uri: String,
    property: Option<String>,
    properties: Option<String>,
    all_relationships: Option<String>,
    incoming_relationships: Option<String>,
    outgoing_relationships: Option<String>,
}

impl From<NodeResponse> for Node {
    fn from(res: NodeResponse) -> Self {
        let node = Node::new(res.self_uri).with_relationship_uris(
            res.all_relationships,
            res.incoming_relationships,
            res.outgoing_relationships,
        );
        match (res.property, res.properties) {
            (Some(property), Some(properties)) => node.with_property_uris(property, properties),
            _ => node,
        }
    }
}

/// Node operations on a [`Database`]
#[derive(Debug, Clone, Copy)]
pub struct NodeManager<'a> {
    db: &'a Database,
}

impl<'a> NodeManager<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Fetch a node by id (`GET <base>/node/<id>`)
    pub async fn get(&self, id: u64) -> Result<Node, SdkError> {
        let url = join(self.db.url(), &["node", &id.to_string()]);
        self.get_by_uri(&url).await
    }

    /// Fetch the node at a self-URI
    ///
    /// 200 yields the node, 404 [`SdkError::NotFound`], anything else
    /// [`SdkError::BadResponse`].
    pub async fn get_by_uri(&self, uri: &str) -> Result<Node, SdkError> {
        let response = self.db.rest().get(uri).await?;
        match response.status {
            StatusCode::OK => {
                let res: NodeResponse = response.json()?;
                Ok(res.into())
            }
            StatusCode::NOT_FOUND => Err(SdkError::NotFound),
            _ => Err(response.bad_response(uri)),
        }
    }
}

impl NodeResolver for NodeManager<'_> {
    type Error = SdkError;

    async fn node_by_uri(&self, uri: &str) -> Result<Node, SdkError> {
        self.get_by_uri(uri).await
    }
}
