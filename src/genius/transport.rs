//! GET-and-decode transport for the Genius REST API.

use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::error::{ConfigurationError, TransportError};
use super::models::JsonObject;
use crate::config::ApiSettings;

const USER_AGENT: &str = concat!("genius-artists/", env!("CARGO_PKG_VERSION"));

/// Performs a single authenticated GET and hands back the decoded JSON object.
///
/// Implementations must report every problem (network, status, body) as a
/// `TransportError`; callers never see a partially decoded response.
pub trait Transport: Send + Sync {
    fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<JsonObject, TransportError>;
}

/// Blocking reqwest transport with bearer authentication.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    access_token: String,
}

impl HttpTransport {
    /// Create a new transport.
    ///
    /// Fails when no (non-blank) access token is configured.
    pub fn new(settings: &ApiSettings) -> Result<Self, ConfigurationError> {
        let access_token = settings
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ConfigurationError::MissingAccessToken)?
            .to_string();

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_sec))
            .build()
            .map_err(ConfigurationError::HttpClient)?;

        // Ensure base_url doesn't have trailing slash
        let base_url = settings.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<JsonObject, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text()?;
        into_object(serde_json::from_str(&body)?)
    }
}

fn into_object(value: Value) -> Result<JsonObject, TransportError> {
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Array(_) => Err(TransportError::NotAnObject("array")),
        Value::String(_) => Err(TransportError::NotAnObject("string")),
        Value::Number(_) => Err(TransportError::NotAnObject("number")),
        Value::Bool(_) => Err(TransportError::NotAnObject("boolean")),
        Value::Null => Err(TransportError::NotAnObject("null")),
    }
}
