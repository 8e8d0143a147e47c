use axum::{
    extract::{Form, State},
    Extension, Json,
};
use itra_core::RaceResultRecord;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_scraper_error, required_url, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ScrapeForm {
    pub url: Option<String>,
}

/// `POST /scrape`: podium of the results page named by the `url` form field.
pub(super) async fn scrape(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Form(form): Form<ScrapeForm>,
) -> Result<Json<ApiResponse<Vec<RaceResultRecord>>>, ApiError> {
    let url = required_url(&req_id, form.url.as_deref())?;

    let data = state
        .client
        .scrape_results(url)
        .await
        .map_err(|e| map_scraper_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
