use axum::{
    extract::{Query, State},
    Extension, Json,
};
use garagefinder_core::LatLng;
use garagefinder_places::{TextSearchPage, TextSearchRequest};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_places_error, parse_flag, parse_optional, require_places, ApiError, AppState};

/// Largest radius the provider accepts, also the default.
const DEFAULT_RADIUS_M: u32 = 50_000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PlacesQuery {
    pub query: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub open_now: Option<String>,
    pub page_token: Option<String>,
}

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<PlacesQuery>,
) -> Result<Json<TextSearchPage>, ApiError> {
    let text = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request(req_id.0.clone(), "query parameter is required"))?;

    let lat: Option<f64> = parse_optional(&req_id.0, "lat", params.lat.as_deref())?;
    let lng: Option<f64> = parse_optional(&req_id.0, "lng", params.lng.as_deref())?;
    let radius: Option<u32> = parse_optional(&req_id.0, "radius", params.radius.as_deref())?;

    let mut request = TextSearchRequest::new(text);
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            request = request.with_bias(LatLng { lat, lng }, radius.unwrap_or(DEFAULT_RADIUS_M));
        }
        (None, None) => {}
        _ => {
            return Err(ApiError::bad_request(
                req_id.0,
                "lat and lng must be provided together",
            ))
        }
    }
    request.open_now = parse_flag(params.open_now.as_deref());
    request.page_token = params.page_token;

    let places = require_places(&state, &req_id.0)?;
    let page = places
        .text_search(&request)
        .await
        .map_err(|e| map_places_error(req_id.0.clone(), &e))?;

    Ok(Json(page))
}
