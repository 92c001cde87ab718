use std::sync::Arc;

use axum::{
    extract::{Query as Params, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use sift_core::{Error, Query};
use tracing::error;

use crate::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    query: Option<String>,
}

/// GET /api/search?query=<text>
///
/// Validation happens before any outbound work: a missing or blank
/// query never reaches the provider.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Params(params): Params<SearchParams>,
) -> Response {
    let query = match Query::parse(params.query.as_deref().unwrap_or("")) {
        Ok(q) => q,
        Err(e) => return error_response(&e),
    };

    match state.provider.search(&query).await {
        Ok(resp) => Json(resp).into_response(),
        Err(e) => {
            match &e {
                Error::UpstreamStatus(code) => {
                    error!(code = *code, provider = state.provider.name(), "search failed: {e}");
                }
                _ => error!(provider = state.provider.name(), "search failed: {e}"),
            }
            error_response(&e)
        }
    }
}

/// Transport status per error kind. `InvalidQuery` is the only caller
/// fault; everything else is upstream- or network-side.
fn status_for(e: &Error) -> StatusCode {
    match e {
        Error::InvalidQuery => StatusCode::BAD_REQUEST,
        Error::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        Error::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        Error::UpstreamForbidden | Error::UpstreamStatus(_) | Error::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
        Error::Network(_) => StatusCode::GATEWAY_TIMEOUT,
    }
}

fn error_response(e: &Error) -> Response {
    (
        status_for(e),
        Json(serde_json::json!({ "error": e.to_string() })),
    )
        .into_response()
}
