use crate::error::UpstreamError;
use crate::model::UpstreamFile;
use async_trait::async_trait;

/// The external resolution API.
///
/// Implementations perform a single attempt per call and must bound the
/// call with their own timeout.
#[async_trait]
pub trait UpstreamClient: Send + Sync + 'static {
    /// Resolves a shared-file URL into upstream file metadata.
    ///
    /// A well-formed answer is returned as is, even when it reports a
    /// failure status.
    async fn fetch(&self, url: &str) -> Result<UpstreamFile, UpstreamError>;
}
