use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use teralink_core::error::{INVALID_URL_MESSAGE, UNAVAILABLE_MESSAGE};
use teralink_core::ResolveError;
use thiserror::Error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every error a handler can return. This is the only place error
/// responses are rendered.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", INVALID_URL_MESSAGE)]
    InvalidUrl,
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::InvalidUrl(_) => AppError::InvalidUrl,
            ResolveError::Unavailable => AppError::Unavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
