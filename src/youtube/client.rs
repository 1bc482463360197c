use crate::config::YouTubeConfig;
use crate::youtube::request::UpstreamRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures coming from the upstream API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("YouTube API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode YouTube API response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// Run a list call and hand back the response body untouched
    async fn list(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError>;
}

/// HTTP client for the Data API, authenticated with a static API key
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &YouTubeConfig) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    fn url_for(&self, request: &UpstreamRequest) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            request.resource()
        )
    }
}

#[async_trait]
impl YouTubeApi for YouTubeClient {
    async fn list(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        let url = self.url_for(request);
        debug!(url = %url, ?request, "Calling YouTube API");

        let mut params = request.query_pairs();
        params.push(("key", self.api_key.clone()));

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            warn!(status = status.as_u16(), message = %message, "YouTube API rejected request");
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

/// Pull the human readable message out of a Google API error envelope,
/// falling back to the raw body.
fn error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return Some(message.to_string());
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
