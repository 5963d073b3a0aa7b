use crate::fallback::FallbackChain;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SUCCESS: &str = "success";
const UNKNOWN_FILE: &str = "Unknown file";
const UNKNOWN_SIZE: &str = "Unknown size";

/// Inbound body of `POST /api/resolve`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ResolveRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Thumbnail links reported by the upstream API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub url1: Option<Value>,
    #[serde(default)]
    pub url3: Option<Value>,
}

/// The upstream resolution result.
///
/// The shape is owned by a third party, so every field is kept as a raw
/// JSON value and interpreted only when the response is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamFile {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub filename: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default)]
    pub response_time: Option<Value>,
    #[serde(default, deserialize_with = "lenient_thumbs")]
    pub thumbs: Option<Thumbnails>,
    #[serde(default)]
    pub download: Option<Value>,
}

impl UpstreamFile {
    /// Whether the upstream reported exactly `"success"`.
    pub fn is_success(&self) -> bool {
        matches!(&self.status, Some(Value::String(status)) if status == SUCCESS)
    }

    /// The upstream failure message, if it sent a usable one.
    pub fn failure_message(&self) -> Option<String> {
        match &self.message {
            Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
            _ => None,
        }
    }
}

/// `thumbs` is optional and may be something other than an object; anything
/// that is not an object is treated as absent.
fn lenient_thumbs<'de, D>(deserializer: D) -> Result<Option<Thumbnails>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Outbound body of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub status: String,
    pub filename: String,
    pub size: String,
    pub thumbnail: String,
    pub response_time: String,
    pub url1: String,
    pub url2: String,
    pub url3: String,
}

impl ResolveResponse {
    /// Builds the client payload from an upstream result and the locally
    /// measured elapsed time in milliseconds.
    pub fn from_upstream(file: &UpstreamFile, elapsed_millis: u64) -> Self {
        let thumbs = file.thumbs.as_ref();

        Self {
            status: SUCCESS.to_string(),
            filename: FallbackChain::new()
                .or(file.filename.as_ref())
                .otherwise(UNKNOWN_FILE),
            size: FallbackChain::new()
                .or(file.size.as_ref())
                .otherwise(UNKNOWN_SIZE),
            thumbnail: FallbackChain::new()
                .or(thumbs.and_then(|t| t.url3.as_ref()))
                .or(thumbs.and_then(|t| t.url1.as_ref()))
                .otherwise(""),
            response_time: FallbackChain::new()
                .or(file.response_time.as_ref())
                .or_else(|| format!("{elapsed_millis}ms"))
                .otherwise(""),
            url1: FallbackChain::new().or(file.download.as_ref()).otherwise(""),
            // no upstream source populates the mirror slots yet
            url2: String::new(),
            url3: String::new(),
        }
    }
}
