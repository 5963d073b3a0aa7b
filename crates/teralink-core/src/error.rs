use thiserror::Error;

/// Message returned to clients whose URL is missing or not from a supported provider.
pub const INVALID_URL_MESSAGE: &str = "Invalid 1024terabox URL";

/// Message returned to clients for every upstream failure, whatever the cause.
pub const UNAVAILABLE_MESSAGE: &str =
    "Failed to fetch file information. The link may be invalid or the external service is down.";

/// Fallback detail used when the upstream reports a failure without a message.
pub const UPSTREAM_REJECTED_FALLBACK: &str = "External API returned an error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("url is required")]
    MissingUrl,
    #[error("url is not from a supported provider: {0}")]
    UnsupportedProvider(String),
}

/// Errors produced while talking to the external resolution API.
///
/// These carry the full detail and are only ever written to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream responded with http status {0}")]
    Status(u16),
    #[error("upstream response could not be decoded: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
}

/// Outcome of a failed resolution as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{}", INVALID_URL_MESSAGE)]
    InvalidUrl(#[source] ValidationError),
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable,
}

impl From<ValidationError> for ResolveError {
    fn from(error: ValidationError) -> Self {
        ResolveError::InvalidUrl(error)
    }
}
