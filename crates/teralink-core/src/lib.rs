//! Core types and traits for the teralink resolver.
//!
//! This crate holds the request/response shapes, the provider gate, the
//! upstream client seam and [`ResolveService`], which turns a shared-file
//! URL into direct download metadata.

pub mod clock;
pub mod error;
pub mod fallback;
pub mod model;
pub mod provider;
pub mod report;
pub mod resolver;
pub mod service;
pub mod upstream;

pub use clock::{Clock, SystemClock};
pub use error::{ResolveError, UpstreamError, ValidationError};
pub use fallback::FallbackChain;
pub use model::{ResolveRequest, ResolveResponse, Thumbnails, UpstreamFile};
pub use provider::ProviderGate;
pub use report::{FailureReporter, TracingReporter};
pub use resolver::Resolver;
pub use service::ResolveService;
pub use upstream::UpstreamClient;
