//! Shared domain types, configuration, and the pure search pipeline for
//! GarageFinder UAE.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod place;
pub mod query;
pub mod regions;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use filter::{apply_filters, CategoryFilter, FilterCriteria, SortKey};
pub use place::{infer_category, Category, LatLng, PlaceRecord};
pub use query::{build_text_query, ListingKind};
pub use regions::{load_catalog, load_regions, parse_regions, Region, RegionCatalog, DEFAULT_AREA};
