//! Static reference data: region catalog and service catalog.

use axum::{extract::State, Extension, Json};
use garagefinder_core::catalog::{ServiceEntry, CAR_BRANDS, PART_CATEGORIES, SERVICES};
use garagefinder_core::Region;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct AreaItem {
    pub area: String,
    pub regions: Vec<Region>,
}

#[derive(Debug, Serialize)]
pub(super) struct CatalogData {
    pub car_brands: &'static [&'static str],
    pub services: &'static [ServiceEntry],
    pub part_categories: &'static [&'static str],
}

pub(super) async fn list_regions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<AreaItem>>> {
    let data = state
        .catalog
        .areas()
        .into_iter()
        .map(|area| AreaItem {
            area: area.to_string(),
            regions: state.catalog.resolve(area).into_iter().cloned().collect(),
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn catalog(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CatalogData>> {
    Json(ApiResponse {
        data: CatalogData {
            car_brands: CAR_BRANDS,
            services: SERVICES,
            part_categories: PART_CATEGORIES,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
