mod profile;
mod scrape;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use itra_scraper::{ItraClient, ScraperError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ItraClient>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "no_results" => StatusCode::UNPROCESSABLE_ENTITY,
            "upstream_timeout" => StatusCode::GATEWAY_TIMEOUT,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Trimmed, non-empty `url` input or a `bad_request` error.
pub(super) fn required_url<'a>(
    req_id: &RequestId,
    url: Option<&'a str>,
) -> Result<&'a str, ApiError> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "bad_request", "No URL provided"))
}

pub(super) fn map_scraper_error(request_id: String, error: &ScraperError) -> ApiError {
    let code = match error {
        ScraperError::InvalidUrl { .. } => "validation_error",
        ScraperError::TableNotFound { .. } => "not_found",
        ScraperError::NoResults { .. } => "no_results",
        ScraperError::Timeout { .. } => "upstream_timeout",
        ScraperError::Connection { .. }
        | ScraperError::HttpStatus { .. }
        | ScraperError::MalformedPayload { .. }
        | ScraperError::FieldNotFound { .. }
        | ScraperError::Client(_) => "upstream_error",
    };
    if error.is_invalid_input() {
        tracing::info!(error = %error, "rejected scrape input");
    } else {
        tracing::warn!(error = %error, code, "scrape failed");
    }
    ApiError::new(request_id, code, error.user_message())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/scrape", post(scrape::scrape))
        .route(
            "/api/v1/performance-index",
            get(profile::performance_index),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok" },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
