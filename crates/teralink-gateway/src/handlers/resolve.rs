use crate::error::Result;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use teralink_core::{ResolveRequest, ResolveResponse};

/// `POST /api/resolve`
///
/// A body that is not a JSON object with a string `url` is handled like a
/// body without `url`, so it gets the same 400 as any other invalid input.
pub async fn resolve_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<ResolveRequest>, JsonRejection>,
) -> Result<Json<ResolveResponse>> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(_) => ResolveRequest::default(),
    };

    let response = state.resolver().resolve(request).await?;
    Ok(Json(response))
}
