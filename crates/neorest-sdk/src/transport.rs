//! Thin wrapper over `reqwest` used by every manager.
//!
//! Requests return the status and raw body; callers decide what each status
//! means. Transport failures surface as [`SdkError::Transport`] untouched.

use crate::config::ClientConfig;
use crate::error::SdkError;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

/// Error payload the server sends alongside failure statuses
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerError {
    /// Human readable message
    pub message: Option<String>,
    /// Server-side exception class
    pub exception: Option<String>,
    /// Server-side stack trace
    pub stacktrace: Vec<String>,
}

/// Status and body of a completed request
#[derive(Debug)]
pub(crate) struct RestResponse {
    pub(crate) status: StatusCode,
    body: String,
}

impl RestResponse {
    /// Decode the body as JSON
    pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body as a server error payload; anything unreadable
    /// yields an empty payload
    pub(crate) fn server_error(&self) -> ServerError {
        serde_json::from_str(&self.body).unwrap_or_default()
    }

    /// Log the server error payload and produce [`SdkError::BadResponse`]
    pub(crate) fn bad_response(&self, url: &str) -> SdkError {
        let payload = self.server_error();
        warn!(
            url = url,
            status = self.status.as_u16(),
            server_message = payload.message.as_deref().unwrap_or(""),
            exception = payload.exception.as_deref().unwrap_or(""),
            "Unexpected response from server"
        );
        SdkError::BadResponse {
            status: self.status.as_u16(),
        }
    }
}

/// Shared HTTP client
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    http: reqwest::Client,
    credentials: Option<(String, String)>,
}

impl RestClient {
    /// Build a client honouring the configured timeout and credentials
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, SdkError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("neorest/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let credentials = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        };

        Ok(Self { http, credentials })
    }

    /// Issue a GET
    pub(crate) async fn get(&self, url: &str) -> Result<RestResponse, SdkError> {
        self.send(Method::GET, url).await
    }

    /// Issue a DELETE
    pub(crate) async fn delete(&self, url: &str) -> Result<RestResponse, SdkError> {
        self.send(Method::DELETE, url).await
    }

    async fn send(&self, method: Method, url: &str) -> Result<RestResponse, SdkError> {
        debug!(%method, url = url, "Sending request");

        let mut request = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some((user, pass)) = &self.credentials {
            request = request.basic_auth(user, Some(pass));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(url = url, status = status.as_u16(), "Received response");

        Ok(RestResponse { status, body })
    }
}

/// Join path segments onto a base URL with single slashes
pub(crate) fn join(base: &str, parts: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in parts {
        url.push('/');
        url.push_str(part.trim_matches('/'));
    }
    url
}
