use async_trait::async_trait;
use reqwest::StatusCode;

use super::error::FetchError;
use super::provider::StatusSource;
use super::types::{StatusMap, decode_status_map};
use crate::config::settings::ApiConfig;
use crate::external::client::build_http_client;

/// HTTP client for the regional siren status endpoint.
///
/// A single GET per fetch; the response must be `200 OK` with a JSON object
/// body mapping region names to status tags.
pub struct SirensApi {
    url: String,
    client: reqwest::Client,
}

impl SirensApi {
    /// Create a client for `config.url` using the configured timeouts.
    pub fn new(config: &ApiConfig) -> reqwest::Result<Self> {
        Ok(Self::with_client(config.url.clone(), build_http_client(config)?))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl StatusSource for SirensApi {
    fn name(&self) -> &'static str {
        "sirens"
    }

    async fn fetch(&self) -> Result<StatusMap, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: self.url.clone(),
                code: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| self.transport_error(e))?;
        let statuses = decode_status_map(&body)?;

        tracing::trace!(url = %self.url, regions = statuses.len(), "Decoded status payload");
        Ok(statuses)
    }
}
