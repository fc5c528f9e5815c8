//! User-facing filter and sort pipeline over aggregated place lists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::place::{Category, PlaceRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Service,
    Parts,
}

impl CategoryFilter {
    fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Service => category == Category::Service,
            CategoryFilter::Parts => category == Category::Parts,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(CategoryFilter::All),
            "service" => Ok(CategoryFilter::Service),
            "parts" => Ok(CategoryFilter::Parts),
            other => Err(format!("unknown category filter '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Rating,
    Reviews,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => Ok(SortKey::Rating),
            "reviews" => Ok(SortKey::Reviews),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

/// User-selected predicates and sort order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub open_now: bool,
    /// Ignored when `<= 0`.
    pub min_rating: f64,
    /// Ignored when `None` or `Some(0)`.
    pub max_price: Option<u8>,
    pub category: CategoryFilter,
    /// `None` keeps the provider's relevance order.
    pub sort: Option<SortKey>,
}

/// Apply `criteria` to `places`, returning a new list.
///
/// Steps run in a fixed order: category, open-now, minimum rating, price
/// ceiling, then sort. Unrated places never survive a minimum-rating filter,
/// while places without a price level always survive the price ceiling (an
/// absent price compares as 0). Sorting is stable, with absent values
/// treated as 0.
#[must_use]
pub fn apply_filters(places: &[PlaceRecord], criteria: &FilterCriteria) -> Vec<PlaceRecord> {
    let mut out: Vec<PlaceRecord> = places
        .iter()
        .filter(|p| criteria.category.matches(p.category))
        .filter(|p| !criteria.open_now || p.open_now == Some(true))
        .filter(|p| {
            criteria.min_rating <= 0.0 || p.rating.is_some_and(|r| r >= criteria.min_rating)
        })
        .filter(|p| match criteria.max_price {
            Some(ceiling) if ceiling > 0 => p.price_level.unwrap_or(0) <= ceiling,
            _ => true,
        })
        .cloned()
        .collect();

    match criteria.sort {
        Some(SortKey::Rating) => out.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
        }),
        Some(SortKey::Reviews) => {
            out.sort_by(|a, b| {
                b.user_ratings_total
                    .unwrap_or(0)
                    .cmp(&a.user_ratings_total.unwrap_or(0))
            });
        }
        None => {}
    }

    out
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
