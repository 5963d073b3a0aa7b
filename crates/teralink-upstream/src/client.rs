use crate::error::ClientBuildError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use teralink_core::{UpstreamClient, UpstreamError, UpstreamFile};
use tracing::{debug, trace};
use typed_builder::TypedBuilder;
use url::Url;

/// The public resolution endpoint used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://terabox-dl-9c39e76a6aa9.herokuapp.com/api";

/// Upper bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Configuration for [`HttpUpstreamClient`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct UpstreamConfig {
    /// Endpoint the input URL is appended to as the `url` query parameter.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
    /// Timeout covering connect, request and body read.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    #[builder(default = concat!("teralink/", env!("CARGO_PKG_VERSION")).to_string(), setter(into))]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// [`UpstreamClient`] backed by `reqwest`.
///
/// One GET per call, no retries. The underlying connection pool is shared
/// between clones.
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    client: Client,
    base_url: Url,
}

impl HttpUpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, ClientBuildError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|source| ClientBuildError::InvalidBaseUrl {
                url: config.base_url.clone(),
                source,
            })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `<base_url>?url=<percent-encoded input>`, keeping any query the
    /// base URL already carries.
    fn endpoint(&self, url: &str) -> Url {
        let mut endpoint = self.base_url.clone();
        endpoint.query_pairs_mut().append_pair("url", url);
        endpoint
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn fetch(&self, url: &str) -> Result<UpstreamFile, UpstreamError> {
        let endpoint = self.endpoint(url);
        trace!(endpoint = %endpoint, "calling resolution api");

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "resolution api returned non-success status");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        decode_body(&body)
    }
}

/// Only a JSON object is a usable answer. Arrays would otherwise be
/// accepted by the derived deserializer and mapped onto fields by position.
fn decode_body(body: &[u8]) -> Result<UpstreamFile, UpstreamError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| UpstreamError::Decode(e.to_string()))?;

    if !value.is_object() {
        return Err(UpstreamError::Decode(
            "expected a json object at the top level".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| UpstreamError::Decode(e.to_string()))
}

/// Converts a reqwest error to an UpstreamError.
fn transport_error(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else {
        UpstreamError::Transport(e.to_string())
    }
}
