//! Region catalog: the named geographic queries a broad area search fans
//! out into.
//!
//! The built-in catalog covers the seven emirates plus Al Ain. It can be
//! swapped for a YAML file at startup; the file is validated before use and
//! never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::place::LatLng;
use crate::query::{build_text_query, ListingKind};
use crate::ConfigError;

/// Area name that selects every region in the catalog.
pub const DEFAULT_AREA: &str = "all";

/// Google's text search rejects location bias radii above 50 km.
const MAX_RADIUS_M: u32 = 50_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Area (emirate) this region belongs to, e.g. `"Dubai"`.
    pub area: String,
    pub label: String,
    /// Locality text appended to every provider query for this region.
    pub query: String,
    pub center: LatLng,
    pub radius_m: u32,
}

impl Region {
    /// Provider text query for this region.
    #[must_use]
    pub fn search_text(&self, term: &str, category: Option<&str>, kind: ListingKind) -> String {
        build_text_query(term, category, kind, &self.query)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCatalog {
    pub regions: Vec<Region>,
}

impl RegionCatalog {
    /// Area names in declaration order, without duplicates.
    #[must_use]
    pub fn areas(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.regions
            .iter()
            .map(|r| r.area.as_str())
            .filter(|a| seen.insert(a.to_lowercase()))
            .collect()
    }

    #[must_use]
    pub fn is_known_area(&self, area: &str) -> bool {
        let area = area.trim();
        self.regions.iter().any(|r| r.area.eq_ignore_ascii_case(area))
    }

    /// Regions for `area`, in declaration order.
    ///
    /// `"all"` and unknown areas resolve to every region in the catalog.
    #[must_use]
    pub fn resolve(&self, area: &str) -> Vec<&Region> {
        let area = area.trim();
        let matching: Vec<&Region> = self
            .regions
            .iter()
            .filter(|r| r.area.eq_ignore_ascii_case(area))
            .collect();
        if matching.is_empty() {
            self.regions.iter().collect()
        } else {
            matching
        }
    }

    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let regions = BUILTIN_REGIONS
            .iter()
            .map(|&(area, label, query, lat, lng, radius_m)| Region {
                area: area.to_string(),
                label: label.to_string(),
                query: query.to_string(),
                center: LatLng { lat, lng },
                radius_m,
            })
            .collect();
        Self { regions }
    }
}

type RegionRow = (&'static str, &'static str, &'static str, f64, f64, u32);

const BUILTIN_REGIONS: &[RegionRow] = &[
    (
        "Dubai",
        "Al Quoz Industrial",
        "Al Quoz Industrial Area Dubai",
        25.138_0,
        55.228_0,
        6_000,
    ),
    (
        "Dubai",
        "Al Qusais Industrial",
        "Al Qusais Industrial Area Dubai",
        25.283_0,
        55.393_0,
        6_000,
    ),
    (
        "Dubai",
        "Ras Al Khor",
        "Ras Al Khor Industrial Area Dubai",
        25.187_0,
        55.366_0,
        5_000,
    ),
    (
        "Dubai",
        "Jebel Ali",
        "Jebel Ali Industrial Area Dubai",
        25.005_0,
        55.130_0,
        8_000,
    ),
    (
        "Abu Dhabi",
        "Mussafah",
        "Mussafah Industrial Area Abu Dhabi",
        24.350_0,
        54.500_0,
        8_000,
    ),
    (
        "Abu Dhabi",
        "Abu Dhabi City",
        "Abu Dhabi City",
        24.453_9,
        54.377_3,
        10_000,
    ),
    (
        "Sharjah",
        "Sharjah Industrial",
        "Industrial Area Sharjah",
        25.310_0,
        55.420_0,
        7_000,
    ),
    (
        "Sharjah",
        "Sharjah City",
        "Sharjah City",
        25.357_3,
        55.391_0,
        6_000,
    ),
    (
        "Ajman",
        "Ajman Industrial",
        "Ajman Industrial Area",
        25.393_0,
        55.470_0,
        6_000,
    ),
    (
        "Ras Al Khaimah",
        "Ras Al Khaimah",
        "Ras Al Khaimah",
        25.789_5,
        55.943_2,
        10_000,
    ),
    (
        "Fujairah",
        "Fujairah",
        "Fujairah",
        25.128_8,
        56.326_5,
        10_000,
    ),
    (
        "Umm Al Quwain",
        "Umm Al Quwain",
        "Umm Al Quwain",
        25.564_7,
        55.555_2,
        8_000,
    ),
    (
        "Al Ain",
        "Al Ain Sanaiya",
        "Sanaiya Industrial Area Al Ain",
        24.207_5,
        55.744_7,
        8_000,
    ),
];

/// Load and validate a region catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_regions(path: &Path) -> Result<RegionCatalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RegionsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_regions(&content)
}

/// The catalog at `path` when one is configured, otherwise the built-in one.
///
/// # Errors
///
/// Same as [`load_regions`].
pub fn load_catalog(path: Option<&Path>) -> Result<RegionCatalog, ConfigError> {
    match path {
        Some(path) => load_regions(path),
        None => Ok(RegionCatalog::builtin()),
    }
}

/// Parse and validate a region catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_regions(yaml: &str) -> Result<RegionCatalog, ConfigError> {
    let catalog: RegionCatalog = serde_yaml::from_str(yaml)?;
    validate_regions(&catalog)?;
    Ok(catalog)
}

fn validate_regions(catalog: &RegionCatalog) -> Result<(), ConfigError> {
    if catalog.regions.is_empty() {
        return Err(ConfigError::Validation(
            "region catalog must contain at least one region".to_string(),
        ));
    }

    let mut seen_labels = HashSet::new();

    for region in &catalog.regions {
        if region.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "region label must be non-empty".to_string(),
            ));
        }
        if region.area.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "region '{}' has an empty area",
                region.label
            )));
        }
        if region.area.trim().eq_ignore_ascii_case(DEFAULT_AREA) {
            return Err(ConfigError::Validation(format!(
                "region '{}' uses the reserved area name '{DEFAULT_AREA}'",
                region.label
            )));
        }
        if region.query.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "region '{}' has an empty query",
                region.label
            )));
        }
        if region.radius_m == 0 || region.radius_m > MAX_RADIUS_M {
            return Err(ConfigError::Validation(format!(
                "region '{}' has invalid radius {}; must be 1..={MAX_RADIUS_M} meters",
                region.label, region.radius_m
            )));
        }
        if !(-90.0..=90.0).contains(&region.center.lat)
            || !(-180.0..=180.0).contains(&region.center.lng)
        {
            return Err(ConfigError::Validation(format!(
                "region '{}' has an out-of-range center",
                region.label
            )));
        }
        if !seen_labels.insert(region.label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate region label: '{}'",
                region.label
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "regions_test.rs"]
mod tests;
