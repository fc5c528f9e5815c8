mod ai_search;
mod browse;
mod car_advisor;
mod car_chat;
mod geocode;
mod news;
mod photo;
mod place_details;
mod places;
mod reference;


use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use garagefinder_advisor::{Advisor, GeminiClient};
use garagefinder_core::{AppConfig, RegionCatalog};
use garagefinder_news::NewsFetcher;
use garagefinder_places::{PlacesClient, PlacesError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

/// Shared handler state. Provider clients are built once at startup; a
/// `None` client means its API key is not configured.
#[derive(Clone)]
pub struct AppState {
    pub places: Option<Arc<PlacesClient>>,
    pub advisor: Option<Arc<Advisor>>,
    pub news: Option<Arc<NewsFetcher>>,
    pub catalog: Arc<RegionCatalog>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = garagefinder_core::load_catalog(config.regions_path.as_deref())?;

        let places = match config.google_maps_api_key.as_deref() {
            Some(key) => Some(Arc::new(PlacesClient::with_base_url(
                key,
                config.http_timeout_secs,
                &config.user_agent,
                &config.places_base_url,
            )?)),
            None => {
                tracing::warn!("GOOGLE_MAPS_API_KEY not set; place endpoints will return 500");
                None
            }
        };

        let advisor = match config.gemini_api_key.as_deref() {
            Some(key) => Some(Arc::new(Advisor::new(GeminiClient::with_base_url(
                key,
                &config.gemini_model,
                config.http_timeout_secs,
                &config.user_agent,
                &config.gemini_base_url,
            )?))),
            None => {
                tracing::warn!("GEMINI_API_KEY not set; generative features use fallbacks");
                None
            }
        };

        let news = if config.news_feed_urls.is_empty() {
            None
        } else {
            Some(Arc::new(NewsFetcher::new(
                config.news_feed_urls.clone(),
                config.http_timeout_secs,
                &config.user_agent,
            )?))
        };

        Ok(Self {
            places,
            advisor,
            news,
            catalog: Arc::new(catalog),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

/// Error body: `{"error": message, "code": code, "meta": {...}}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    pub meta: ResponseMeta,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    pub fn bad_request(request_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(request_id, "bad_request", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn require_places(state: &AppState, request_id: &str) -> Result<Arc<PlacesClient>, ApiError> {
    state.places.clone().ok_or_else(|| {
        tracing::error!("request needs GOOGLE_MAPS_API_KEY, which is not configured");
        ApiError::new(
            request_id,
            "config_error",
            "Google Maps API key is not configured",
        )
    })
}

pub(super) fn require_advisor(state: &AppState, request_id: &str) -> Result<Arc<Advisor>, ApiError> {
    state.advisor.clone().ok_or_else(|| {
        tracing::error!("request needs GEMINI_API_KEY, which is not configured");
        ApiError::new(request_id, "config_error", "Gemini API key is not configured")
    })
}

pub(super) fn map_places_error(request_id: String, error: &PlacesError) -> ApiError {
    if error.is_not_found() {
        return ApiError::new(request_id, "not_found", "place not found");
    }
    tracing::error!(error = %error, "places request failed");
    ApiError::new(request_id, "upstream_error", "place search provider request failed")
}

/// Map a JSON body rejection to a 400 in the common error shape.
pub(super) fn map_json_rejection(request_id: String, rejection: &JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "rejected request body");
    ApiError::bad_request(request_id, "invalid JSON body")
}

/// Parse an optional numeric query value, treating blank as absent.
pub(super) fn parse_optional<T: std::str::FromStr>(
    request_id: &str,
    name: &str,
    raw: Option<&str>,
) -> Result<Option<T>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            ApiError::bad_request(request_id, format!("invalid value for '{name}': {value}"))
        }),
    }
}

pub(super) fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| matches!(v.trim(), "true" | "1" | "yes"))
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/regions", get(reference::list_regions))
        .route("/api/catalog", get(reference::catalog))
        .route("/api/places", get(places::search_places))
        .route("/api/place-details", get(place_details::get_place_details))
        .route("/api/photo", get(photo::get_photo))
        .route("/api/geocode", get(geocode::reverse_geocode))
        .route("/api/ai-search", post(ai_search::ai_search))
        .route("/api/car-advisor", post(car_advisor::car_advisor))
        .route("/api/car-chat", post(car_chat::car_chat))
        .route("/api/news", get(news::get_news))
        .route("/api/garages", get(browse::list_garages))
        .route("/api/spare-parts", get(browse::list_spare_parts))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    places: &'static str,
    advisor: &'static str,
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let configured = |on: bool| if on { "configured" } else { "missing_key" };
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            places: configured(state.places.is_some()),
            advisor: configured(state.advisor.is_some()),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
