use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use garagefinder_advisor::ChatTurn;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::car_advisor::VehicleInput;
use super::{map_json_rejection, require_advisor, ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CarChatRequest {
    #[serde(default)]
    pub question: String,
    pub car_details: Option<VehicleInput>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub(super) struct CarChatResponse {
    pub answer: String,
}

/// Follow-up question about a car. Provider failures still answer 200 with
/// an apology.
pub(super) async fn car_chat(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<CarChatRequest>, JsonRejection>,
) -> Result<Json<CarChatResponse>, ApiError> {
    let Json(body) = body.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;
    let question = body.question.trim();
    if question.is_empty() {
        return Err(ApiError::bad_request(req_id.0, "question is required"));
    }

    let advisor = require_advisor(&state, &req_id.0)?;
    let vehicle = body.car_details.map(VehicleInput::into_profile);
    let answer = advisor
        .chat_answer(question, vehicle.as_ref(), &body.history)
        .await;

    Ok(Json(CarChatResponse { answer }))
}
