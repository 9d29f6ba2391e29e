//! Property and lifecycle operations shared by nodes and relationships.

use crate::database::Database;
use crate::error::SdkError;
use neorest_domain::Entity;
use reqwest::{StatusCode, Url};
use serde_json::{Map, Value};

impl Database {
    /// Fetch the full property map of a node or relationship
    ///
    /// A 204 (entity without properties) yields an empty map.
    pub async fn properties<E: Entity>(&self, entity: &E) -> Result<Map<String, Value>, SdkError> {
        let url = entity.properties_uri();
        let response = self.rest().get(url).await?;
        match response.status {
            StatusCode::OK => response.json(),
            StatusCode::NO_CONTENT => Ok(Map::new()),
            StatusCode::NOT_FOUND => Err(SdkError::NotFound),
            _ => Err(response.bad_response(url)),
        }
    }

    /// Fetch a single property value
    ///
    /// Returns [`SdkError::NotFound`] if the entity or the property does not exist.
    pub async fn property<E: Entity>(&self, entity: &E, key: &str) -> Result<Value, SdkError> {
        let url = property_url(entity, key)?;
        let response = self.rest().get(url.as_str()).await?;
        match response.status {
            StatusCode::OK => response.json(),
            StatusCode::NOT_FOUND => Err(SdkError::NotFound),
            _ => Err(response.bad_response(url.as_str())),
        }
    }

    /// Delete a node or relationship
    ///
    /// Only 204 counts as success.
    ///
    /// # Errors
    ///
    /// - [`SdkError::NotFound`] if it does not exist
    /// - [`SdkError::CannotDelete`] for a node that still has relationships
    pub async fn delete<E: Entity>(&self, entity: &E) -> Result<(), SdkError> {
        let url = entity.self_uri();
        let response = self.rest().delete(url).await?;
        match response.status {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::NOT_FOUND => Err(SdkError::NotFound),
            StatusCode::CONFLICT => Err(SdkError::CannotDelete),
            _ => Err(response.bad_response(url)),
        }
    }
}

/// Property URL with `key` percent-encoded as the final path segment
fn property_url<E: Entity>(entity: &E, key: &str) -> Result<Url, SdkError> {
    let template = entity.property_uri_for("");
    let mut url = Url::parse(&template).map_err(|_| SdkError::InvalidUrl(template.clone()))?;
    url.path_segments_mut()
        .map_err(|_| SdkError::InvalidUrl(template.clone()))?
        .pop_if_empty()
        .push(key);
    Ok(url)
}
