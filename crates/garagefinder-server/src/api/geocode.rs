use axum::{
    extract::{Query, State},
    Extension, Json,
};
use garagefinder_core::LatLng;
use garagefinder_places::ReverseGeocode;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_places_error, parse_optional, require_places, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

pub(super) async fn reverse_geocode(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<ReverseGeocode>, ApiError> {
    let lat: Option<f64> = parse_optional(&req_id.0, "lat", params.lat.as_deref())?;
    let lng: Option<f64> = parse_optional(&req_id.0, "lng", params.lng.as_deref())?;
    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Err(ApiError::bad_request(
            req_id.0,
            "lat and lng parameters are required",
        ));
    };

    let places = require_places(&state, &req_id.0)?;
    let geo = places
        .reverse_geocode(LatLng { lat, lng })
        .await
        .map_err(|e| map_places_error(req_id.0.clone(), &e))?;
    Ok(Json(geo))
}
