use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::debug;

use crate::{
    client::{RawResourceClient, TransportError},
    config::IngestorConfig,
};

const USER_AGENT: &str = concat!("artist_ingestor/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur while building an [`HttpResourceClient`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ClientInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Fetches resources over HTTP(S). Resource names are absolute URLs.
pub struct HttpResourceClient {
    client: Client,
}

impl HttpResourceClient {
    /// Creates a client whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ClientInitError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client })
    }

    /// Creates a client using the configured request timeout.
    pub fn from_config(config: &IngestorConfig) -> Result<Self, ClientInitError> {
        Self::new(config.request_timeout())
    }
}

#[async_trait]
impl RawResourceClient for HttpResourceClient {
    async fn fetch(&self, resource: &str) -> Result<String, TransportError> {
        debug!(url = resource, "GET");
        let response = self.client.get(resource).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: resource.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
