use crate::error::UpstreamError;
use tracing::error;

/// Receives the detailed cause of every upstream failure before it is
/// collapsed into the uniform caller-facing error.
pub trait FailureReporter: Send + Sync + 'static {
    fn report(&self, url: &str, error: &UpstreamError);
}

/// Writes upstream failures to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, url: &str, error: &UpstreamError) {
        error!(url = %url, "Resolve error: {error}");
    }
}
