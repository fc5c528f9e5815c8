//! Google Maps Platform response types (legacy Places + Geocoding web APIs).
//!
//! Every response is wrapped in a `{"status": "...", ...}` envelope. Fields
//! Google omits for some places (rating, opening hours, photos, price level)
//! are optional or defaulted so a sparse result never fails to decode.

use garagefinder_core::{Category, LatLng, PlaceRecord};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Text search
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<RawPlace>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One place as Google returns it in text search or details responses.
#[derive(Debug, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub business_status: Option<String>,
    // Details-only fields.
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPhoto {
    #[serde(default)]
    pub photo_reference: String,
}

/// One page of normalized text-search results.
#[derive(Debug, Clone, Serialize)]
pub struct TextSearchPage {
    pub results: Vec<PlaceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Place details
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<RawPlace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub relative_time_description: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

/// Normalized details for a single place, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website: Option<String>,
    /// Google Maps link for the place.
    pub url: Option<String>,
    pub location: Option<LatLng>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub opening_hours: Option<OpeningHours>,
    pub reviews: Vec<Review>,
    pub photo_refs: Vec<String>,
    pub price_level: Option<u8>,
    pub category: Category,
    pub types: Vec<String>,
    pub business_status: Option<String>,
}

// ---------------------------------------------------------------------------
// Reverse geocoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// City name and full address for a coordinate. Both are `None` when
/// Google has no result for the point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReverseGeocode {
    pub city: Option<String>,
    pub formatted: Option<String>,
}
