//! Region listing and area search commands.

use anyhow::Context;
use garagefinder_core::{
    apply_filters, load_catalog, AppConfig, FilterCriteria, ListingKind, PlaceRecord,
};
use garagefinder_places::PlacesClient;

pub(crate) struct SearchRequest<'a> {
    pub area: &'a str,
    pub kind: ListingKind,
    pub term: &'a str,
    pub category: Option<&'a str>,
}

/// Print every area with its regions, optionally limited to one area.
///
/// # Errors
///
/// Returns an error if a configured region file cannot be loaded.
pub(crate) fn run_regions(config: &AppConfig, area: Option<&str>) -> anyhow::Result<()> {
    let catalog = load_catalog(config.regions_path.as_deref())?;

    if let Some(area) = area {
        if !catalog.is_known_area(area) {
            anyhow::bail!(
                "unknown area '{area}'; known areas: {}",
                catalog.areas().join(", ")
            );
        }
    }

    println!("{:<16}{:<24}{:>9}  QUERY", "AREA", "REGION", "RADIUS");
    for region in &catalog.regions {
        if area.is_some_and(|a| !region.area.eq_ignore_ascii_case(a.trim())) {
            continue;
        }
        println!(
            "{:<16}{:<24}{:>7}km  {}",
            region.area,
            region.label,
            region.radius_m / 1000,
            region.query
        );
    }
    Ok(())
}

/// Search an area the same way the directory endpoints do and print the
/// filtered result.
///
/// # Errors
///
/// Returns an error if the Maps key is missing, the client cannot be built,
/// or the region file cannot be loaded. Individual region failures are
/// logged and skipped.
pub(crate) async fn run_search(
    config: &AppConfig,
    request: &SearchRequest<'_>,
    criteria: &FilterCriteria,
    json: bool,
) -> anyhow::Result<()> {
    let api_key = config
        .google_maps_api_key
        .as_deref()
        .context("GOOGLE_MAPS_API_KEY is not set")?;
    let catalog = load_catalog(config.regions_path.as_deref())?;
    let client = PlacesClient::with_base_url(
        api_key,
        config.http_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )?;

    let merged = client
        .search_area(
            &catalog,
            request.area,
            request.kind,
            request.term,
            request.category,
        )
        .await;
    let results = apply_filters(&merged, criteria);
    tracing::info!(
        area = request.area,
        merged = merged.len(),
        kept = results.len(),
        "area search finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("no places matched in {}", request.area);
        return Ok(());
    }
    println!(
        "{:<36}{:>7}{:>9}{:>7}  {:<9}ADDRESS",
        "NAME", "RATING", "REVIEWS", "OPEN", "CATEGORY"
    );
    for place in &results {
        println!("{}", format_row(place));
    }
    println!("{} place(s)", results.len());
    Ok(())
}

fn format_row(place: &PlaceRecord) -> String {
    let name = truncate(&place.name, 34);
    let rating = place
        .rating
        .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
    let reviews = place
        .user_ratings_total
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let open = match place.open_now {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    let address = place
        .formatted_address
        .as_deref()
        .or(place.vicinity.as_deref())
        .unwrap_or("");
    format!(
        "{name:<36}{rating:>7}{reviews:>9}{open:>7}  {:<9}{address}",
        place.category.to_string()
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars - 3).collect::<String>())
    } else {
        text.to_string()
    }
}
