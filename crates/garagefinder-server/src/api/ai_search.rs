use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use garagefinder_advisor::QueryAnalysis;
use garagefinder_core::{LatLng, PlaceRecord};
use garagefinder_places::TextSearchRequest;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_json_rejection, map_places_error, require_places, ApiError, AppState};

/// Central Dubai, used when the client sends no location.
const DEFAULT_LOCATION: LatLng = LatLng {
    lat: 25.2048,
    lng: 55.2708,
};
const SEARCH_RADIUS_M: u32 = 30_000;

#[derive(Debug, Deserialize)]
pub(super) struct AiSearchRequest {
    #[serde(default)]
    pub query: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct AiSearchResponse {
    pub analysis: Option<QueryAnalysis>,
    pub results: Vec<PlaceRecord>,
}

/// Refine a free-text problem description, then search with the refined
/// text. Without a usable refinement the raw query is searched.
pub(super) async fn ai_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<AiSearchRequest>, JsonRejection>,
) -> Result<Json<AiSearchResponse>, ApiError> {
    let Json(body) = body.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;
    let query = body.query.trim();
    if query.is_empty() {
        return Err(ApiError::bad_request(req_id.0, "query is required"));
    }

    let places = require_places(&state, &req_id.0)?;

    let analysis = match &state.advisor {
        Some(advisor) => advisor.refine_query(query).await,
        None => None,
    };
    let search_text = analysis
        .as_ref()
        .map_or(query, |a| a.search_query.as_str())
        .to_string();

    let location = match (body.lat, body.lng) {
        (Some(lat), Some(lng)) => LatLng { lat, lng },
        _ => DEFAULT_LOCATION,
    };
    let request = TextSearchRequest::new(search_text).with_bias(location, SEARCH_RADIUS_M);
    let page = places
        .text_search(&request)
        .await
        .map_err(|e| map_places_error(req_id.0.clone(), &e))?;

    Ok(Json(AiSearchResponse {
        analysis,
        results: page.results,
    }))
}
