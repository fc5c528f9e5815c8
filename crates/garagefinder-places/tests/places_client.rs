//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use garagefinder_core::{Category, LatLng, ListingKind, RegionCatalog};
use garagefinder_places::{PlacesClient, TextSearchRequest};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "garagefinder-test", base_url)
        .expect("client construction should not fail")
}

fn search_body(ids: &[(&str, &str)]) -> serde_json::Value {
    let results: Vec<serde_json::Value> = ids
        .iter()
        .map(|(id, name)| {
            serde_json::json!({
                "place_id": id,
                "name": name,
                "formatted_address": "Al Quoz, Dubai",
                "geometry": { "location": { "lat": 25.13, "lng": 55.22 } },
                "rating": 4.3,
                "user_ratings_total": 120,
                "opening_hours": { "open_now": true },
                "types": ["car_repair", "point_of_interest"],
                "photos": [{ "photo_reference": format!("photo-{id}"), "width": 800 }]
            })
        })
        .collect();
    serde_json::json!({ "status": "OK", "results": results })
}

#[tokio::test]
async fn text_search_returns_normalized_places() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("query", "car repair garage Dubai"))
        .and(query_param("location", "25.2048,55.2708"))
        .and(query_param("radius", "30000"))
        .and(query_param("opennow", "true"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [
                {
                    "place_id": "g1",
                    "name": "Al Quoz Auto Care",
                    "rating": 4.6,
                    "user_ratings_total": 210,
                    "opening_hours": { "open_now": true },
                    "types": ["car_repair"],
                    "price_level": 2
                },
                { "name": "Missing Id Garage" }
            ],
            "next_page_token": "next-123"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut request = TextSearchRequest::new("car repair garage Dubai").with_bias(
        LatLng {
            lat: 25.2048,
            lng: 55.2708,
        },
        30_000,
    );
    request.open_now = true;

    let page = client.text_search(&request).await.expect("search succeeds");
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].place_id, "g1");
    assert_eq!(page.results[0].rating, Some(4.6));
    assert_eq!(page.results[0].open_now, Some(true));
    assert_eq!(page.results[0].category, Category::Service);
    assert_eq!(page.next_page_token.as_deref(), Some("next-123"));
}

#[tokio::test]
async fn text_search_zero_results_is_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ZERO_RESULTS",
                "results": []
            })),
        )
        .mount(&server)
        .await;

    let page = test_client(&server.uri())
        .text_search(&TextSearchRequest::new("nothing here"))
        .await
        .expect("zero results is not an error");
    assert!(page.results.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn text_search_denied_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .text_search(&TextSearchRequest::new("garage"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("REQUEST_DENIED"));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn http_error_does_not_leak_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .text_search(&TextSearchRequest::new("garage"))
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("503"), "unexpected error: {msg}");
    assert!(!msg.contains("test-key"));
}

#[tokio::test]
async fn place_details_normalizes_reviews_and_contacts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": {
                "place_id": "g1",
                "name": "Sharjah Spare Parts Centre",
                "formatted_phone_number": "06 555 1234",
                "website": "https://parts.example.ae",
                "types": ["store"],
                "opening_hours": {
                    "open_now": false,
                    "weekday_text": ["Monday: 8:00 AM – 8:00 PM"]
                },
                "reviews": [
                    { "author_name": "Omar", "rating": 5, "text": "Had the filter in stock." },
                    { "author_name": "Priya", "text": "Slow service" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let details = test_client(&server.uri())
        .place_details("g1")
        .await
        .expect("details succeed");
    assert_eq!(details.name, "Sharjah Spare Parts Centre");
    assert_eq!(details.category, Category::Parts);
    assert_eq!(details.formatted_phone_number.as_deref(), Some("06 555 1234"));
    assert_eq!(details.reviews.len(), 2);
    assert_eq!(details.reviews[0].rating, Some(5));
    assert_eq!(details.reviews[1].rating, None);
    let hours = details.opening_hours.expect("hours present");
    assert_eq!(hours.weekday_text.len(), 1);
}

#[tokio::test]
async fn place_details_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "NOT_FOUND" })),
        )
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .place_details("missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn reverse_geocode_extracts_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("latlng", "25.3463,55.4209"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Industrial Area 6, Sharjah, UAE",
                "address_components": [
                    { "long_name": "Industrial Area 6", "types": ["sublocality"] },
                    { "long_name": "Sharjah", "types": ["locality", "political"] }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let geo = test_client(&server.uri())
        .reverse_geocode(LatLng {
            lat: 25.3463,
            lng: 55.4209,
        })
        .await
        .expect("geocode succeeds");
    assert_eq!(geo.city.as_deref(), Some("Sharjah"));
    assert_eq!(
        geo.formatted.as_deref(),
        Some("Industrial Area 6, Sharjah, UAE")
    );
}

#[tokio::test]
async fn fetch_photo_returns_streamable_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/place/photo"))
        .and(query_param("photo_reference", "ref-1"))
        .and(query_param("maxwidth", "800"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]),
        )
        .mount(&server)
        .await;

    let response = test_client(&server.uri())
        .fetch_photo("ref-1", 800)
        .await
        .expect("photo fetch succeeds");
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    let bytes = response.bytes().await.unwrap();
    assert_eq!(&bytes[..], &[0x89, 0x50, 0x4e, 0x47]);
}

#[tokio::test]
async fn fetch_photo_upstream_failure_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/place/photo"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_photo("gone", 400)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn search_area_merges_regions_and_tolerates_failure() {
    let server = MockServer::start().await;
    let catalog = garagefinder_core::parse_regions(
        r"
regions:
  - area: Dubai
    label: Al Quoz
    query: Al Quoz Dubai
    center: { lat: 25.13, lng: 55.22 }
    radius_m: 6000
  - area: Dubai
    label: Deira
    query: Deira Dubai
    center: { lat: 25.27, lng: 55.31 }
    radius_m: 4000
  - area: Dubai
    label: Jebel Ali
    query: Jebel Ali Dubai
    center: { lat: 25.0, lng: 55.1 }
    radius_m: 8000
",
    )
    .expect("valid catalog");

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("query", "car repair garage Al Quoz Dubai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[
            ("a1", "Quoz Motors"),
            ("shared", "Shared Garage"),
            ("a3", "Quoz Auto"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("query", "car repair garage Deira Dubai"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("query", "car repair garage Jebel Ali Dubai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&[
            ("shared", "Shared Garage"),
            ("j1", "Jebel Ali Workshop"),
            ("p1", "Jebel Ali Spare Parts"),
        ])))
        .mount(&server)
        .await;

    let places = test_client(&server.uri())
        .search_area(&catalog, "Dubai", ListingKind::Garages, "", None)
        .await;
    let ids: Vec<&str> = places.iter().map(|p| p.place_id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "shared", "a3", "j1"]);
}

#[tokio::test]
async fn search_area_unknown_area_searches_builtin_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_body(&[("same", "Everywhere Garage")])),
        )
        .mount(&server)
        .await;

    let catalog = RegionCatalog::builtin();
    let places = test_client(&server.uri())
        .search_area(&catalog, "Atlantis", ListingKind::Garages, "", None)
        .await;
    assert_eq!(places.len(), 1);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), catalog.regions.len());
}
