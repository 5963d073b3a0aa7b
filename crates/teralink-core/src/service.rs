use crate::clock::{Clock, SystemClock};
use crate::error::{ResolveError, UpstreamError, UPSTREAM_REJECTED_FALLBACK};
use crate::model::{ResolveRequest, ResolveResponse, UpstreamFile};
use crate::provider::ProviderGate;
use crate::report::{FailureReporter, TracingReporter};
use crate::resolver::Resolver;
use crate::upstream::UpstreamClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};

/// Resolves shared-file URLs through the external API.
///
/// This service wraps an [`UpstreamClient`] to handle:
/// - Provider validation (no outbound call for rejected input)
/// - Upstream success checks
/// - Mapping the upstream result into a [`ResolveResponse`]
///
/// Every upstream failure is handed to the [`FailureReporter`] and then
/// surfaced as [`ResolveError::Unavailable`]. No retry is performed.
pub struct ResolveService<C> {
    client: Arc<C>,
    gate: ProviderGate,
    reporter: Arc<dyn FailureReporter>,
    clock: Arc<dyn Clock>,
}

impl<C> Clone for ResolveService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            gate: self.gate.clone(),
            reporter: Arc::clone(&self.reporter),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C: UpstreamClient> ResolveService<C> {
    /// Creates a service that accepts the default provider and logs failures.
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            gate: ProviderGate::default(),
            reporter: Arc::new(TracingReporter),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_gate(mut self, gate: ProviderGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_reporter(mut self, reporter: impl FailureReporter) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn gate(&self) -> &ProviderGate {
        &self.gate
    }

    /// Validates the request, asks the upstream once and builds the client payload.
    pub async fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse, ResolveError> {
        Resolver::resolve(self, request).await
    }

    async fn fetch(&self, url: &str) -> Result<UpstreamFile, UpstreamError> {
        let file = self.client.fetch(url).await?;

        if !file.is_success() {
            let message = file
                .failure_message()
                .unwrap_or_else(|| UPSTREAM_REJECTED_FALLBACK.to_string());
            return Err(UpstreamError::Rejected(message));
        }

        Ok(file)
    }
}

#[async_trait]
impl<C: UpstreamClient> Resolver for ResolveService<C> {
    async fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse, ResolveError> {
        let started_at = self.clock.now();

        let url = self.gate.check(request.url.as_deref())?;
        trace!(url = %url, "resolving shared file url");

        let file = match self.fetch(url).await {
            Ok(file) => file,
            Err(error) => {
                self.reporter.report(url, &error);
                return Err(ResolveError::Unavailable);
            }
        };

        let elapsed = self.clock.elapsed_millis(started_at);
        let response = ResolveResponse::from_upstream(&file, elapsed);
        debug!(url = %url, filename = %response.filename, elapsed_ms = elapsed, "resolved shared file url");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock::SteppingClock;
    use crate::error::{ValidationError, UNAVAILABLE_MESSAGE};
    use jiff::{SignedDuration, Timestamp};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const VALID_URL: &str = "https://www.1024terabox.com/s/1abcDEF";

    /// Upstream stub that replays a fixed answer and counts calls.
    #[derive(Clone)]
    struct StubClient {
        answer: Result<Value, UpstreamError>,
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl StubClient {
        fn answering(body: Value) -> Self {
            Self::with(Ok(body))
        }

        fn failing(error: UpstreamError) -> Self {
            Self::with(Err(error))
        }

        fn with(answer: Result<Value, UpstreamError>) -> Self {
            Self {
                answer,
                calls: Arc::new(AtomicUsize::new(0)),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl UpstreamClient for StubClient {
        async fn fetch(&self, url: &str) -> Result<UpstreamFile, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(url.to_string());
            let body = self.answer.clone()?;
            serde_json::from_value(body).map_err(|e| UpstreamError::Decode(e.to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingReporter {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl FailureReporter for RecordingReporter {
        fn report(&self, _url: &str, error: &UpstreamError) {
            self.lines.lock().unwrap().push(error.to_string());
        }
    }

    fn service(client: StubClient) -> (ResolveService<StubClient>, RecordingReporter) {
        let reporter = RecordingReporter::default();
        let clock = SteppingClock::new(
            Timestamp::from_second(1_700_000_000).unwrap(),
            SignedDuration::from_millis(25),
        );
        let service = ResolveService::new(client)
            .with_reporter(reporter.clone())
            .with_clock(clock);
        (service, reporter)
    }

    #[tokio::test]
    async fn resolves_successful_upstream_result() {
        let client = StubClient::answering(json!({
            "status": "success",
            "filename": "a.zip",
            "size": "10MB",
            "download": "http://x/y",
            "thumbs": { "url1": "http://t1" }
        }));
        let (service, reporter) = service(client.clone());

        let response = service.resolve(ResolveRequest::new(VALID_URL)).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.filename, "a.zip");
        assert_eq!(response.size, "10MB");
        assert_eq!(response.url1, "http://x/y");
        assert_eq!(response.thumbnail, "http://t1");
        assert_eq!(response.response_time, "25ms");
        assert_eq!(response.url2, "");
        assert_eq!(response.url3, "");
        assert_eq!(client.seen.lock().unwrap().as_slice(), [VALID_URL]);
        assert!(reporter.lines.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_url_is_rejected_without_upstream_call() {
        let client = StubClient::answering(json!({ "status": "success" }));
        let (service, reporter) = service(client.clone());

        let err = service.resolve(ResolveRequest::default()).await.unwrap_err();

        assert_eq!(err, ResolveError::InvalidUrl(ValidationError::MissingUrl));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        assert!(reporter.lines.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn foreign_url_is_rejected_without_upstream_call() {
        let client = StubClient::answering(json!({ "status": "success" }));
        let (service, _) = service(client.clone());

        let err = service
            .resolve(ResolveRequest::new("https://example.com/file"))
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::InvalidUrl(_)));
        assert_eq!(err.to_string(), "Invalid 1024terabox URL");
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_rejection_is_reported_but_hidden() {
        let client = StubClient::answering(json!({ "status": "error", "message": "bad link" }));
        let (service, reporter) = service(client);

        let err = service.resolve(ResolveRequest::new(VALID_URL)).await.unwrap_err();

        assert_eq!(err, ResolveError::Unavailable);
        assert_eq!(err.to_string(), UNAVAILABLE_MESSAGE);
        assert!(!err.to_string().contains("bad link"));
        assert_eq!(reporter.lines.lock().unwrap().as_slice(), ["bad link"]);
    }

    #[tokio::test]
    async fn upstream_rejection_without_message_uses_fallback() {
        let client = StubClient::answering(json!({ "status": "failed" }));
        let (service, reporter) = service(client);

        let err = service.resolve(ResolveRequest::new(VALID_URL)).await.unwrap_err();

        assert_eq!(err, ResolveError::Unavailable);
        assert_eq!(
            reporter.lines.lock().unwrap().as_slice(),
            ["External API returned an error"]
        );
    }

    #[tokio::test]
    async fn transport_failures_collapse_to_one_error() {
        for failure in [
            UpstreamError::Timeout,
            UpstreamError::Transport("connection refused".to_string()),
            UpstreamError::Status(502),
            UpstreamError::Decode("expected value at line 1 column 1".to_string()),
        ] {
            let (service, reporter) = service(StubClient::failing(failure.clone()));

            let err = service.resolve(ResolveRequest::new(VALID_URL)).await.unwrap_err();

            assert_eq!(err, ResolveError::Unavailable);
            assert_eq!(reporter.lines.lock().unwrap().as_slice(), [failure.to_string()]);
        }
    }

    #[tokio::test]
    async fn custom_gate_admits_other_domains() {
        let client = StubClient::answering(json!({ "status": "success", "filename": "b.bin" }));
        let (service, _) = service(client);
        let service = service.with_gate(ProviderGate::new(["teraboxapp.com"]));

        let response = service
            .resolve(ResolveRequest::new("https://teraboxapp.com/s/1"))
            .await
            .unwrap();
        assert_eq!(response.filename, "b.bin");

        let err = service.resolve(ResolveRequest::new(VALID_URL)).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidUrl(_)));
    }
}
