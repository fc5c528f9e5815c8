use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["garagefinder-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_regions_with_area() {
    let cli = Cli::try_parse_from(["garagefinder-cli", "regions", "--area", "Dubai"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Regions { area: Some(ref a) }) if a == "Dubai"
    ));
}

#[test]
fn search_defaults() {
    let cli = Cli::try_parse_from(["garagefinder-cli", "search"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref area,
            kind: ListingKind::Garages,
            q: None,
            category: None,
            open_now: false,
            min_rating: None,
            max_price: None,
            place_type: CategoryFilter::All,
            sort: None,
            json: false,
        }) if area == "all"
    ));
}

#[test]
fn search_with_filters() {
    let cli = Cli::try_parse_from([
        "garagefinder-cli",
        "search",
        "--area",
        "Sharjah",
        "--kind",
        "parts",
        "--category",
        "Batteries",
        "--open-now",
        "--min-rating",
        "4.5",
        "--max-price",
        "2",
        "--sort",
        "reviews",
        "--json",
    ])
    .unwrap();
    let Some(Commands::Search {
        area,
        kind,
        category,
        open_now,
        min_rating,
        max_price,
        sort,
        json,
        ..
    }) = cli.command
    else {
        panic!("expected search command");
    };
    assert_eq!(area, "Sharjah");
    assert_eq!(kind, ListingKind::Parts);
    assert_eq!(category.as_deref(), Some("Batteries"));
    assert!(open_now);
    assert_eq!(min_rating, Some(4.5));
    assert_eq!(max_price, Some(2));
    assert_eq!(sort, Some(SortKey::Reviews));
    assert!(json);
}

#[test]
fn search_type_filter_parses() {
    let cli = Cli::try_parse_from(["garagefinder-cli", "search", "--type", "service"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            place_type: CategoryFilter::Service,
            ..
        })
    ));
}

#[test]
fn search_rejects_unknown_sort() {
    let result = Cli::try_parse_from(["garagefinder-cli", "search", "--sort", "distance"]);
    assert!(result.is_err());
}

#[test]
fn parses_news_query() {
    let cli =
        Cli::try_parse_from(["garagefinder-cli", "news", "--query", "Salik tariffs"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::News { query: Some(ref q), json: false }) if q == "Salik tariffs"
    ));
}

#[test]
fn search_rejects_nan_min_rating() {
    let result = Cli::try_parse_from(["garagefinder-cli", "search", "--min-rating", "NaN"]);
    assert!(result.is_err());
}
