// Graphite render API client: one GET per invocation, no retries.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::config::HttpConfig;
use crate::decode::SeriesFormat;
use crate::error::FetchError;

/// Builds `http://{host}/render?from={window}&target={target}&format={format}`.
/// Window and target are percent-encoded; the host is used as given.
pub fn render_url(host: &str, window: &str, target: &str, format: SeriesFormat) -> String {
    format!(
        "http://{}/render?from={}&target={}&format={}",
        host,
        urlencoding::encode(window),
        urlencoding::encode(target),
        format.as_str()
    )
}

pub struct GraphiteFetcher {
    client: Client,
}

impl GraphiteFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self::new(client))
    }

    /// Returns the response body for any 2xx status.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(transport)?;
        debug!(url, bytes = body.len(), "fetched render payload");
        Ok(body)
    }
}
