//! HTTP surface of the teralink resolver.
//!
//! Exposes `POST /api/resolve`, a health probe and static files, and turns
//! resolution failures into the JSON error bodies clients expect.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
