//! Multi-region search aggregation.
//!
//! A broad area search fans out into one provider query per region. Regions
//! settle independently: a failed region is logged and contributes nothing,
//! the rest still merge. Results are deduped by `place_id`, keeping the first
//! occurrence in region declaration order.

use std::collections::HashSet;
use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;
use garagefinder_core::{ListingKind, PlaceRecord, Region, RegionCatalog};

use crate::client::{PlacesClient, TextSearchRequest};

/// Run `fetch` for every region concurrently and merge the outcomes.
///
/// `fetch` is handed each region in catalog order. Errors are converted to
/// empty lists inside the per-region future, so this never fails.
pub async fn aggregate_regions<'a, F, Fut, E>(
    regions: &[&'a Region],
    kind: ListingKind,
    fetch: F,
) -> Vec<PlaceRecord>
where
    F: Fn(&'a Region) -> Fut,
    Fut: Future<Output = Result<Vec<PlaceRecord>, E>>,
    E: Display,
{
    let per_region = regions.iter().map(|&region| {
        let fut = fetch(region);
        async move {
            match fut.await {
                Ok(places) => {
                    tracing::debug!(
                        region = %region.label,
                        count = places.len(),
                        "region search settled"
                    );
                    places
                }
                Err(e) => {
                    tracing::warn!(
                        region = %region.label,
                        error = %e,
                        "region search failed; contributing no results"
                    );
                    Vec::new()
                }
            }
        }
    });

    // join_all preserves input order, which the dedupe below relies on.
    let settled = join_all(per_region).await;
    merge_region_results(settled, kind)
}

/// Flatten per-region lists, keep the first record seen for each
/// `place_id`, and drop the category that does not belong to `kind`.
#[must_use]
pub fn merge_region_results(
    per_region: Vec<Vec<PlaceRecord>>,
    kind: ListingKind,
) -> Vec<PlaceRecord> {
    let excluded = kind.excluded_category();
    let mut seen: HashSet<String> = HashSet::new();
    per_region
        .into_iter()
        .flatten()
        .filter(|place| seen.insert(place.place_id.clone()))
        .filter(|place| place.category != excluded)
        .collect()
}

impl PlacesClient {
    /// Search every region of `area` for `kind` listings and merge the
    /// results. Unknown areas search the whole catalog.
    pub async fn search_area(
        &self,
        catalog: &RegionCatalog,
        area: &str,
        kind: ListingKind,
        term: &str,
        category: Option<&str>,
    ) -> Vec<PlaceRecord> {
        if !area.trim().eq_ignore_ascii_case(garagefinder_core::DEFAULT_AREA)
            && !catalog.is_known_area(area)
        {
            tracing::debug!(area, "unknown area; searching every region");
        }
        let regions = catalog.resolve(area);

        aggregate_regions(&regions, kind, |region| async move {
            let request = TextSearchRequest::new(region.search_text(term, category, kind))
                .with_bias(region.center, region.radius_m);
            self.text_search(&request).await.map(|page| page.results)
        })
        .await
    }
}
