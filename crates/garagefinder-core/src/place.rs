//! Normalized place records shared by the provider client, the aggregator,
//! and the filter pipeline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Which side of the directory a place belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Garages, workshops, and service centres.
    Service,
    /// Spare-parts and accessories stores.
    Parts,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Service => write!(f, "service"),
            Category::Parts => write!(f, "parts"),
        }
    }
}

/// A single business location returned by the place-search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Provider identifier; unique key for dedupe.
    pub place_id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub vicinity: Option<String>,
    pub location: Option<LatLng>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub open_now: Option<bool>,
    pub category: Category,
    #[serde(default)]
    pub types: Vec<String>,
    /// Opaque photo references for the photo proxy.
    #[serde(default)]
    pub photo_refs: Vec<String>,
    pub price_level: Option<u8>,
    pub business_status: Option<String>,
}

impl PlaceRecord {
    /// Minimal record with every optional field empty. Mostly useful for
    /// building fixtures.
    #[must_use]
    pub fn new(place_id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            place_id: place_id.into(),
            name: name.into(),
            formatted_address: None,
            vicinity: None,
            location: None,
            rating: None,
            user_ratings_total: None,
            open_now: None,
            category,
            types: Vec::new(),
            photo_refs: Vec::new(),
            price_level: None,
            business_status: None,
        }
    }
}

const PARTS_TYPES: &[&str] = &["auto_parts_store", "hardware_store"];
const PARTS_NAME_HINTS: &[&str] = &["spare", "parts", "accessories"];

/// Infer the category from the provider's type tags and the business name.
///
/// A place is [`Category::Parts`] when it is tagged as a parts or hardware
/// store, or when its name mentions spares, parts, or accessories. Anything
/// else is treated as a service garage.
#[must_use]
pub fn infer_category(name: &str, types: &[String]) -> Category {
    if types.iter().any(|t| PARTS_TYPES.contains(&t.as_str())) {
        return Category::Parts;
    }
    let lowered = name.to_lowercase();
    if PARTS_NAME_HINTS.iter().any(|hint| lowered.contains(hint)) {
        return Category::Parts;
    }
    Category::Service
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(tags: &[&str]) -> Vec<String> {
        tags.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn auto_parts_type_is_parts() {
        assert_eq!(
            infer_category("Al Noor Trading", &types(&["auto_parts_store", "store"])),
            Category::Parts
        );
    }

    #[test]
    fn spare_in_name_is_parts() {
        assert_eq!(
            infer_category("Gulf Spare Parts LLC", &types(&["store"])),
            Category::Parts
        );
    }

    #[test]
    fn car_repair_is_service() {
        assert_eq!(
            infer_category("Al Quoz Auto Garage", &types(&["car_repair"])),
            Category::Service
        );
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Parts).expect("serialize");
        assert_eq!(json, "\"parts\"");
    }
}
