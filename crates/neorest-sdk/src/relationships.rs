//! Relationship operations.

use crate::database::Database;
use crate::error::SdkError;
use crate::transport::join;
use neorest_domain::Relationship;
use reqwest::StatusCode;
use serde::Deserialize;

/// Relationship data returned by the server
#[derive(Debug, Deserialize)]
struct RelationshipResponse {
    #[serde(rename = "self")]
    self_uri: String,
    #[serde(rename = "type", default)]
    rel_type: String,
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
    property: Option<String>,
    properties: Option<String>,
}

impl From<RelationshipResponse> for Relationship {
    fn from(res: RelationshipResponse) -> Self {
        let rel = Relationship::new(res.self_uri, res.rel_type, res.start, res.end);
        match (res.property, res.properties) {
            (Some(property), Some(properties)) => rel.with_property_uris(property, properties),
            _ => rel,
        }
    }
}

/// Relationship operations on a [`Database`]
///
/// Obtained from [`Database::relationships`]; holds only a borrow of the handle.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipManager<'a> {
    db: &'a Database,
}

impl<'a> RelationshipManager<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Fetch a relationship by id
    ///
    /// Issues `GET <base>/relationship/<id>`.
    ///
    /// # Errors
    ///
    /// - [`SdkError::NotFound`] on 404
    /// - [`SdkError::BadResponse`] on any other non-200 status
    /// - [`SdkError::Transport`] if the request fails
    pub async fn get(&self, id: u64) -> Result<Relationship, SdkError> {
        let url = join(self.db.url(), &["relationship", &id.to_string()]);

        let response = self.db.rest().get(&url).await?;
        match response.status {
            StatusCode::OK => {
                let res: RelationshipResponse = response.json()?;
                Ok(res.into())
            }
            StatusCode::NOT_FOUND => Err(SdkError::NotFound),
            _ => Err(response.bad_response(&url)),
        }
    }

    /// List all relationship types, sorted lexicographically
    ///
    /// # Errors
    ///
    /// - [`SdkError::FeatureUnavailable`] if the server does not advertise a
    ///   relationship-types endpoint. No request is made in that case.
    /// - [`SdkError::BadResponse`] on any non-200 status
    /// - [`SdkError::Transport`] if the request fails
    pub async fn types(&self) -> Result<Vec<String>, SdkError> {
        let url = self
            .db
            .service_root()
            .relationship_types_endpoint()
            .ok_or_else(|| SdkError::FeatureUnavailable("relationship types".to_string()))?;

        let response = self.db.rest().get(url).await?;
        if response.status != StatusCode::OK {
            return Err(response.bad_response(url));
        }

        let mut types: Vec<String> = response.json()?;
        types.sort();
        Ok(types)
    }
}
