use axum::{
    extract::{Query, State},
    Extension, Json,
};
use itra_core::ProfileLookup;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{required_url, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ProfileQuery {
    pub url: Option<String>,
}

/// `GET /api/v1/performance-index?url=...`
///
/// Lookup failures are reported in the payload (`success: false`) with a 200;
/// only a missing `url` parameter is an HTTP error.
pub(super) async fn performance_index(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ApiResponse<ProfileLookup>>, ApiError> {
    let url = required_url(&req_id, query.url.as_deref())?;
    let data = state.client.extract_performance_index(url).await;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
