// ABOUTME: HTTP route handlers for the article reader service.
// ABOUTME: Exposes /content, /health, and /openapi.json over a shared Reader.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::{info, warn};

use lectern_reader::Reader;

use crate::response::ServiceResponse;

/// Shared state handed to every handler: the reader pipeline and the
/// OpenAPI document built by the composition root.
#[derive(Clone)]
pub struct AppState {
    pub reader: Arc<Reader>,
    pub openapi: Arc<serde_json::Value>,
}

/// Build the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/content", get(get_content))
        .route("/health", get(get_health))
        .route("/openapi.json", get(get_openapi))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ContentQuery {
    url: Option<String>,
}

/// `GET /content?url=...` — run the extraction pipeline for one URL.
///
/// A missing or non-string `url` parameter is rejected with 400 before any
/// fetch is attempted; every pipeline failure maps to a 500 envelope.
async fn get_content(
    State(state): State<AppState>,
    query: Option<Query<ContentQuery>>,
) -> ServiceResponse {
    let Some(url) = query.and_then(|Query(q)| q.url) else {
        return ServiceResponse::failure("URL must be a string", StatusCode::BAD_REQUEST);
    };

    match state.reader.read(&url).await {
        Ok(article) => {
            info!(url = %url, words = article.word_count, "content extracted");
            ServiceResponse::success("Content extracted successfully", Some(article))
        }
        Err(err) => {
            warn!(url = %url, error = %err, "content extraction failed");
            ServiceResponse::failure(
                format!("Error fetching content: {}", err),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// `GET /health` — liveness probe.
async fn get_health() -> ServiceResponse {
    ServiceResponse::success("Service is healthy", None)
}

/// `GET /openapi.json` — the API document built at startup.
async fn get_openapi(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.openapi.as_ref().clone())
}
