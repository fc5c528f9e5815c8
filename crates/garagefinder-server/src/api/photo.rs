use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_places_error, parse_optional, require_places, ApiError, AppState};

const DEFAULT_MAX_WIDTH: u32 = 800;
const PHOTO_CACHE_CONTROL: &str = "public, max-age=86400, immutable";

#[derive(Debug, Deserialize)]
pub(super) struct PhotoQuery {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub maxwidth: Option<String>,
}

/// Streams a place photo through the server so the Maps key never reaches
/// the browser.
pub(super) async fn get_photo(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<PhotoQuery>,
) -> Result<Response, ApiError> {
    let reference = params
        .reference
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| ApiError::bad_request(req_id.0.clone(), "ref parameter is required"))?;
    let max_width: u32 = parse_optional(&req_id.0, "maxwidth", params.maxwidth.as_deref())?
        .unwrap_or(DEFAULT_MAX_WIDTH);

    let places = require_places(&state, &req_id.0)?;
    let upstream = places
        .fetch_photo(reference, max_width)
        .await
        .map_err(|e| map_places_error(req_id.0.clone(), &e))?;

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("image/jpeg"));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static(PHOTO_CACHE_CONTROL),
            ),
        ],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}
