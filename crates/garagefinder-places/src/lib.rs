//! Google Places / Geocoding client and the multi-region search aggregator.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use aggregate::{aggregate_regions, merge_region_results};
pub use client::{PlacesClient, TextSearchRequest};
pub use error::PlacesError;
pub use types::{PlaceDetails, ReverseGeocode, Review, TextSearchPage};
