//! Conversion from raw Google payloads into the shared domain types.

use garagefinder_core::{infer_category, PlaceRecord};

use crate::types::{GeocodeResult, PlaceDetails, RawPlace, ReverseGeocode};

/// Map a raw result into a [`PlaceRecord`].
///
/// Returns `None` for results without a `place_id`, which cannot be deduped
/// or looked up later.
#[must_use]
pub fn normalize_place(raw: RawPlace) -> Option<PlaceRecord> {
    if raw.place_id.trim().is_empty() {
        return None;
    }
    let category = infer_category(&raw.name, &raw.types);
    Some(PlaceRecord {
        place_id: raw.place_id,
        name: raw.name,
        formatted_address: raw.formatted_address,
        vicinity: raw.vicinity,
        location: raw.geometry.and_then(|g| g.location),
        rating: raw.rating,
        user_ratings_total: raw.user_ratings_total,
        open_now: raw.opening_hours.and_then(|h| h.open_now),
        category,
        types: raw.types,
        photo_refs: photo_refs(&raw.photos),
        price_level: raw.price_level,
        business_status: raw.business_status,
    })
}

#[must_use]
pub fn normalize_details(raw: RawPlace) -> PlaceDetails {
    let category = infer_category(&raw.name, &raw.types);
    PlaceDetails {
        photo_refs: photo_refs(&raw.photos),
        place_id: raw.place_id,
        name: raw.name,
        formatted_address: raw.formatted_address,
        formatted_phone_number: raw.formatted_phone_number,
        international_phone_number: raw.international_phone_number,
        website: raw.website,
        url: raw.url,
        location: raw.geometry.and_then(|g| g.location),
        rating: raw.rating,
        user_ratings_total: raw.user_ratings_total,
        opening_hours: raw.opening_hours,
        reviews: raw.reviews,
        price_level: raw.price_level,
        category,
        types: raw.types,
        business_status: raw.business_status,
    }
}

fn photo_refs(photos: &[crate::types::RawPhoto]) -> Vec<String> {
    photos
        .iter()
        .map(|p| p.photo_reference.clone())
        .filter(|r| !r.is_empty())
        .collect()
}

/// Pick the city and formatted address out of a geocoding result list.
///
/// The city is the first `locality` component, falling back to
/// `administrative_area_level_1` (the emirate) when no locality is tagged.
#[must_use]
pub fn reverse_geocode_from_results(results: &[GeocodeResult]) -> ReverseGeocode {
    let formatted = results
        .iter()
        .find_map(|r| r.formatted_address.clone())
        .filter(|s| !s.is_empty());

    let component_with = |kind: &str| {
        results
            .iter()
            .flat_map(|r| r.address_components.iter())
            .find(|c| c.types.iter().any(|t| t == kind))
            .map(|c| c.long_name.clone())
            .filter(|s| !s.is_empty())
    };

    let city = component_with("locality").or_else(|| component_with("administrative_area_level_1"));

    ReverseGeocode { city, formatted }
}
