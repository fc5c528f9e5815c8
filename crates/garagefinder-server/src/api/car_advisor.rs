use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension, Json,
};
use garagefinder_advisor::VehicleProfile;
use serde::Deserialize;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{map_json_rejection, require_advisor, ApiError, AppState};

/// Vehicle attributes as clients send them. Year and mileage arrive as
/// either numbers or strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VehicleInput {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<Value>,
    pub mileage: Option<Value>,
    pub last_service_date: Option<String>,
    pub driving_conditions: Option<String>,
}

impl VehicleInput {
    pub(super) fn into_profile(self) -> VehicleProfile {
        VehicleProfile {
            make: self.make.unwrap_or_default().trim().to_string(),
            model: self.model.unwrap_or_default().trim().to_string(),
            year: self.year.as_ref().map(value_text).unwrap_or_default(),
            mileage_km: self.mileage.as_ref().and_then(parse_mileage),
            last_service_date: self
                .last_service_date
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            driving_conditions: self
                .driving_conditions
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Accepts `95000`, `"95000"`, and `"95,000 km"`.
fn parse_mileage(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

pub(super) async fn car_advisor(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<VehicleInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = body.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;
    let vehicle = input.into_profile();
    if vehicle.make.is_empty() || vehicle.model.is_empty() || vehicle.year.is_empty() {
        return Err(ApiError::bad_request(
            req_id.0,
            "make, model, and year are required",
        ));
    }

    let advisor = require_advisor(&state, &req_id.0)?;
    let plan = advisor.maintenance_plan(&vehicle).await.map_err(|e| {
        tracing::error!(vehicle = %vehicle.display_name(), error = %e, "maintenance plan failed");
        ApiError::new(
            req_id.0.clone(),
            "upstream_error",
            "could not generate a maintenance plan",
        )
    })?;

    Ok((
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(plan),
    )
        .into_response())
}
