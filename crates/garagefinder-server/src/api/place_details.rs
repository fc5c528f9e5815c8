use axum::{
    extract::{Query, State},
    Extension, Json,
};
use garagefinder_places::PlaceDetails;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_places_error, require_places, ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DetailsQuery {
    pub place_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DetailsResponse {
    pub result: PlaceDetails,
    /// Generated summary of the place's reviews; `null` without reviews or
    /// when generation is unavailable.
    pub review_summary: Option<String>,
}

pub(super) async fn get_place_details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<DetailsQuery>,
) -> Result<Json<DetailsResponse>, ApiError> {
    let place_id = params
        .place_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request(req_id.0.clone(), "placeId parameter is required"))?;

    let places = require_places(&state, &req_id.0)?;
    let details = places
        .place_details(place_id)
        .await
        .map_err(|e| map_places_error(req_id.0.clone(), &e))?;

    let review_summary = match &state.advisor {
        Some(advisor) => {
            let texts: Vec<String> = details.reviews.iter().map(|r| r.text.clone()).collect();
            advisor.summarize_reviews(&details.name, &texts).await
        }
        None => None,
    };

    Ok(Json(DetailsResponse {
        result: details,
        review_summary,
    }))
}
