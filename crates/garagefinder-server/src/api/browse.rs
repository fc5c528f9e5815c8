//! Directory views: every region of an area searched at once, merged,
//! then filtered and sorted.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use garagefinder_core::{
    apply_filters, CategoryFilter, FilterCriteria, ListingKind, PlaceRecord, SortKey,
    DEFAULT_AREA,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{
    parse_flag, parse_optional, require_places, ApiError, ApiResponse, AppState, ResponseMeta,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BrowseQuery {
    pub area: Option<String>,
    pub q: Option<String>,
    /// Service or part category used as a search hint, e.g. `"Brakes"`.
    pub category: Option<String>,
    /// `all`, `service`, or `parts`.
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub open_now: Option<String>,
    pub min_rating: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct BrowseData {
    pub area: String,
    pub kind: ListingKind,
    pub total: usize,
    pub results: Vec<PlaceRecord>,
}

pub(super) async fn list_garages(
    state: State<AppState>,
    req_id: Extension<RequestId>,
    params: Query<BrowseQuery>,
) -> Result<Json<ApiResponse<BrowseData>>, ApiError> {
    browse(state, req_id, params, ListingKind::Garages).await
}

pub(super) async fn list_spare_parts(
    state: State<AppState>,
    req_id: Extension<RequestId>,
    params: Query<BrowseQuery>,
) -> Result<Json<ApiResponse<BrowseData>>, ApiError> {
    browse(state, req_id, params, ListingKind::Parts).await
}

async fn browse(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<BrowseQuery>,
    kind: ListingKind,
) -> Result<Json<ApiResponse<BrowseData>>, ApiError> {
    let criteria = parse_criteria(&req_id.0, &params)?;
    let area = params
        .area
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(DEFAULT_AREA)
        .to_string();
    let term = params.q.as_deref().unwrap_or_default();

    let places = require_places(&state, &req_id.0)?;
    let merged = places
        .search_area(&state.catalog, &area, kind, term, params.category.as_deref())
        .await;
    let results = apply_filters(&merged, &criteria);

    Ok(Json(ApiResponse {
        data: BrowseData {
            area,
            kind,
            total: results.len(),
            results,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn parse_criteria(request_id: &str, params: &BrowseQuery) -> Result<FilterCriteria, ApiError> {
    let min_rating: Option<f64> =
        parse_optional(request_id, "minRating", params.min_rating.as_deref())?;
    if min_rating.is_some_and(|r| !r.is_finite()) {
        return Err(ApiError::bad_request(
            request_id,
            "minRating must be a finite number",
        ));
    }
    let max_price: Option<u8> = parse_optional(request_id, "maxPrice", params.max_price.as_deref())?;
    let category: Option<CategoryFilter> =
        parse_optional(request_id, "type", params.place_type.as_deref())?;
    let sort: Option<SortKey> = parse_optional(request_id, "sort", params.sort.as_deref())?;

    Ok(FilterCriteria {
        open_now: parse_flag(params.open_now.as_deref()),
        min_rating: min_rating.unwrap_or(0.0),
        max_price,
        category: category.unwrap_or_default(),
        sort,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BrowseQuery {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), serde_json::Value::String((*v).to_string())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn criteria_defaults() {
        let criteria = parse_criteria("r", &query(&[])).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn criteria_parses_every_field() {
        let criteria = parse_criteria(
            "r",
            &query(&[
                ("openNow", "true"),
                ("minRating", "4.2"),
                ("maxPrice", "2"),
                ("type", "service"),
                ("sort", "reviews"),
            ]),
        )
        .unwrap();
        assert!(criteria.open_now);
        assert!((criteria.min_rating - 4.2).abs() < f64::EPSILON);
        assert_eq!(criteria.max_price, Some(2));
        assert_eq!(criteria.category, CategoryFilter::Service);
        assert_eq!(criteria.sort, Some(SortKey::Reviews));
    }

    #[test]
    fn non_finite_min_rating_is_rejected() {
        for raw in ["NaN", "inf", "-infinity"] {
            let err = parse_criteria("r", &query(&[("minRating", raw)])).unwrap_err();
            assert_eq!(err.code, "bad_request", "minRating={raw}");
        }
    }

    #[test]
    fn bad_sort_is_rejected() {
        let err = parse_criteria("r", &query(&[("sort", "distance")])).unwrap_err();
        assert_eq!(err.code, "bad_request");
    }
}
