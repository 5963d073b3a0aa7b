//! HTTP client for the external resolution API.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use teralink_core::{ResolveRequest, ResolveService};
//! use teralink_upstream::{HttpUpstreamClient, UpstreamConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = UpstreamConfig::builder()
//!     .timeout(Duration::from_secs(5))
//!     .build();
//! let client = HttpUpstreamClient::new(config)?;
//!
//! let service = ResolveService::new(client);
//! let response = service
//!     .resolve(ResolveRequest::new("https://www.1024terabox.com/s/1abc"))
//!     .await?;
//! println!("download: {}", response.url1);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::{HttpUpstreamClient, UpstreamConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ClientBuildError;
