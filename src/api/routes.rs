use std::any::Any;

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::{error, info, warn};

use crate::api::models::{Endpoints, FetchParams, HealthResponse, IndexResponse};
use crate::error::{AppError, ErrorResponse, Result};
use crate::fetch;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/top", get(top_handler))
        .route("/fetch", get(fetch_handler))
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .with_state(app_state)
}

async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "ComicK Fetch Relay Server".to_string(),
        endpoints: Endpoints {
            top: "Fetch the ComicK top listing".to_string(),
            fetch: "Fetch any URL: /fetch?url=https://example.com".to_string(),
            health: "Health check endpoint".to_string(),
        },
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "ComicK API server is running".to_string(),
    })
}

/// Relay the fixed upstream top listing verbatim.
async fn top_handler(State(state): State<AppState>) -> Result<Json<Value>> {
    let url = &state.config.top_url;
    info!(%url, "fetching top listing");

    match fetch::fetch_url(state.config.fetch_strategy, url).await {
        Ok(payload) => Ok(Json(payload)),
        Err(err) => {
            warn!(%url, %err, "top fetch failed");
            Err(err)
        }
    }
}

/// Relay an arbitrary caller-supplied URL.
async fn fetch_handler(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> Result<Json<Value>> {
    let url = params.url.ok_or(AppError::MissingParameter)?;
    info!(%url, "fetching url");

    match fetch::fetch_url(state.config.fetch_strategy, &url).await {
        Ok(payload) => Ok(Json(payload)),
        Err(err) => {
            warn!(%url, %err, "fetch failed");
            Err(err)
        }
    }
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Last-resort conversion of a handler panic into the error envelope, so
/// callers always get JSON back.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(%detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
            message: "Something went wrong on the server".to_string(),
        }),
    )
        .into_response()
}
