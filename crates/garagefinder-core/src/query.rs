//! Text-query construction for the place-search provider.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::place::Category;

/// Which directory view a search feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Garages,
    Parts,
}

impl ListingKind {
    /// Category dropped from aggregated results for this view.
    #[must_use]
    pub fn excluded_category(self) -> Category {
        match self {
            ListingKind::Garages => Category::Parts,
            ListingKind::Parts => Category::Service,
        }
    }

    /// Hint used when the user picked no category.
    #[must_use]
    pub fn generic_hint(self) -> &'static str {
        match self {
            ListingKind::Garages => "car repair garage",
            ListingKind::Parts => "auto spare parts store",
        }
    }

    #[must_use]
    pub fn category_hint(self, category: &str) -> String {
        match self {
            ListingKind::Garages => format!("{category} auto shop"),
            ListingKind::Parts => format!("{category} spare parts"),
        }
    }
}

impl FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "garages" | "garage" => Ok(ListingKind::Garages),
            "parts" | "spare-parts" => Ok(ListingKind::Parts),
            other => Err(format!("unknown listing kind '{other}'")),
        }
    }
}

/// Build the text query sent to the place-search provider.
///
/// Concatenates the free-text term, a category hint, and the area name
/// (omitted when the area is `"all"`). Each piece is trimmed and empty pieces
/// are dropped. Nothing else is validated; the result is forwarded verbatim.
#[must_use]
pub fn build_text_query(
    term: &str,
    category: Option<&str>,
    kind: ListingKind,
    area: &str,
) -> String {
    let hint = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => kind.category_hint(category),
        None => kind.generic_hint().to_string(),
    };
    let area = area.trim();
    let area = if area.eq_ignore_ascii_case("all") {
        ""
    } else {
        area
    };

    [term.trim(), hint.as_str(), area]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
