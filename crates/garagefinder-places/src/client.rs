//! HTTP client for the Google Maps Platform web services used by the
//! directory: Places text search, place details, place photos, and reverse
//! geocoding.
//!
//! Every JSON endpoint answers HTTP 200 with a `"status"` field in the
//! envelope. `OK` and `ZERO_RESULTS` are success; anything else surfaces as
//! [`PlacesError::ApiStatus`].

use std::time::Duration;

use garagefinder_core::LatLng;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::normalize::{normalize_details, normalize_place, reverse_geocode_from_results};
use crate::types::{
    DetailsResponse, GeocodeResponse, PlaceDetails, ReverseGeocode, TextSearchPage,
    TextSearchResponse,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";
const DEFAULT_USER_AGENT: &str = "garagefinder/0.1 (uae-directory)";

/// Fields requested from the details endpoint. Google bills per field group,
/// so this stays limited to what the details view renders.
const DETAILS_FIELDS: &str = "place_id,name,formatted_address,formatted_phone_number,\
international_phone_number,website,url,geometry,rating,user_ratings_total,opening_hours,\
reviews,photos,price_level,types,business_status";

/// Parameters for a single text-search call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSearchRequest {
    pub query: String,
    /// Location bias center. Sent only together with `radius_m`.
    pub location: Option<LatLng>,
    pub radius_m: Option<u32>,
    pub open_now: bool,
    pub page_token: Option<String>,
}

impl TextSearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_bias(mut self, location: LatLng, radius_m: u32) -> Self {
        self.location = Some(location);
        self.radius_m = Some(radius_m);
        self
    }
}

/// Client for the Google Places and Geocoding web services.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs one Places text search and normalizes the results.
    ///
    /// Results without a `place_id` are dropped.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if Google reports a non-success status.
    /// - [`PlacesError::Http`] / [`PlacesError::UnexpectedStatus`] on
    ///   transport failure or a non-2xx response.
    /// - [`PlacesError::Deserialize`] if the body does not match the envelope.
    pub async fn text_search(
        &self,
        request: &TextSearchRequest,
    ) -> Result<TextSearchPage, PlacesError> {
        let mut params: Vec<(&str, String)> = vec![("query", request.query.clone())];
        if let (Some(location), Some(radius)) = (request.location, request.radius_m) {
            params.push(("location", format!("{},{}", location.lat, location.lng)));
            params.push(("radius", radius.to_string()));
        }
        if request.open_now {
            params.push(("opennow", "true".to_string()));
        }
        if let Some(token) = request.page_token.as_deref().filter(|t| !t.is_empty()) {
            params.push(("pagetoken", token.to_string()));
        }

        let url = self.build_url("place/textsearch/json", &params)?;
        let context = format!("textsearch(query={})", request.query);
        let body: TextSearchResponse = self.request_json(url, &context).await?;
        check_status(&context, &body.status, body.error_message.as_deref())?;

        let results = body.results.into_iter().filter_map(normalize_place).collect();
        Ok(TextSearchPage {
            results,
            next_page_token: body.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    /// Fetches details for one place.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::text_search`]. A `NOT_FOUND` envelope status
    /// (or a missing `result`) satisfies [`PlacesError::is_not_found`].
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let params = [
            ("place_id", place_id.to_string()),
            ("fields", DETAILS_FIELDS.to_string()),
        ];
        let url = self.build_url("place/details/json", &params)?;
        let context = format!("details(place_id={place_id})");
        let body: DetailsResponse = self.request_json(url, &context).await?;
        check_status(&context, &body.status, body.error_message.as_deref())?;

        let raw = body.result.ok_or_else(|| PlacesError::ApiStatus {
            context,
            status: "NOT_FOUND".to_string(),
            message: "response carried no result".to_string(),
        })?;
        Ok(normalize_details(raw))
    }

    /// Requests a place photo and returns the upstream response once its
    /// status has been checked, leaving the body unread for streaming.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on transport failure or
    /// [`PlacesError::UnexpectedStatus`] on a non-2xx status.
    pub async fn fetch_photo(
        &self,
        photo_reference: &str,
        max_width: u32,
    ) -> Result<reqwest::Response, PlacesError> {
        let params = [
            ("photo_reference", photo_reference.to_string()),
            ("maxwidth", max_width.to_string()),
        ];
        let url = self.build_url("place/photo", &params)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                context: "place/photo".to_string(),
            });
        }
        Ok(response)
    }

    /// Resolves a coordinate to a city name and formatted address.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::text_search`]. `ZERO_RESULTS` is not an error;
    /// it yields a [`ReverseGeocode`] with both fields empty.
    pub async fn reverse_geocode(&self, point: LatLng) -> Result<ReverseGeocode, PlacesError> {
        let params = [("latlng", format!("{},{}", point.lat, point.lng))];
        let url = self.build_url("geocode/json", &params)?;
        let context = format!("geocode(latlng={},{})", point.lat, point.lng);
        let body: GeocodeResponse = self.request_json(url, &context).await?;
        check_status(&context, &body.status, body.error_message.as_deref())?;
        Ok(reverse_geocode_from_results(&body.results))
    }

    /// Joins `path` onto the base URL and appends `params` plus the API key,
    /// percent-encoded via [`Url::query_pairs_mut`].
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                context: context.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

fn check_status(context: &str, status: &str, message: Option<&str>) -> Result<(), PlacesError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(PlacesError::ApiStatus {
            context: context.to_string(),
            status: other.to_string(),
            message: message.unwrap_or("no error message").to_string(),
        }),
    }
}
