use crate::error::ResolveError;
use crate::model::{ResolveRequest, ResolveResponse};
use async_trait::async_trait;

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Converts a shared-file URL into direct download metadata.
    ///
    /// Returns `Err(InvalidUrl)` for input that never reached the upstream
    /// and `Err(Unavailable)` for every upstream failure.
    async fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse, ResolveError>;
}
