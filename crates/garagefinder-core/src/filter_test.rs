use super::*;

fn place(id: &str, rating: Option<f64>) -> PlaceRecord {
    let mut p = PlaceRecord::new(id, format!("Place {id}"), Category::Service);
    p.rating = rating;
    p
}

fn ids(places: &[PlaceRecord]) -> Vec<&str> {
    places.iter().map(|p| p.place_id.as_str()).collect()
}

fn sample() -> Vec<PlaceRecord> {
    let mut out = Vec::new();
    for i in 0..10u8 {
        let mut p = place(&format!("p{i}"), Some(3.0 + f64::from(i) * 0.2));
        p.open_now = Some(i % 2 == 0);
        p.price_level = if i % 3 == 0 { None } else { Some(i % 4) };
        p.user_ratings_total = Some(u32::from(i) * 10);
        if i >= 7 {
            p.category = Category::Parts;
        }
        out.push(p);
    }
    out
}

#[test]
fn default_criteria_is_identity() {
    let places = sample();
    let out = apply_filters(&places, &FilterCriteria::default());
    assert_eq!(out, places);
}

#[test]
fn input_is_not_mutated() {
    let places = sample();
    let before = places.clone();
    let _ = apply_filters(
        &places,
        &FilterCriteria {
            sort: Some(SortKey::Rating),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(places, before);
}

#[test]
fn min_rating_excludes_unrated() {
    let places = vec![place("unrated", None), place("rated", Some(4.2))];
    let out = apply_filters(
        &places,
        &FilterCriteria {
            min_rating: 4.0,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["rated"]);
}

#[test]
fn min_rating_is_inclusive() {
    let places = vec![place("a", Some(4.0)), place("b", Some(3.9))];
    let out = apply_filters(
        &places,
        &FilterCriteria {
            min_rating: 4.0,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["a"]);
}

#[test]
fn zero_min_rating_keeps_unrated() {
    let places = vec![place("unrated", None)];
    let out = apply_filters(&places, &FilterCriteria::default());
    assert_eq!(out.len(), 1);
}

#[test]
fn price_ceiling_keeps_unpriced() {
    let mut cheap = place("cheap", Some(4.0));
    cheap.price_level = Some(1);
    let mut pricey = place("pricey", Some(4.0));
    pricey.price_level = Some(4);
    let unpriced = place("unpriced", Some(4.0));

    let out = apply_filters(
        &[cheap, pricey, unpriced],
        &FilterCriteria {
            max_price: Some(2),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["cheap", "unpriced"]);
}

#[test]
fn zero_price_ceiling_is_ignored() {
    let mut pricey = place("pricey", Some(4.0));
    pricey.price_level = Some(4);
    let out = apply_filters(
        &[pricey],
        &FilterCriteria {
            max_price: Some(0),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(out.len(), 1);
}

#[test]
fn open_now_requires_explicit_true() {
    let mut open = place("open", None);
    open.open_now = Some(true);
    let mut closed = place("closed", None);
    closed.open_now = Some(false);
    let unknown = place("unknown", None);

    let out = apply_filters(
        &[open, closed, unknown],
        &FilterCriteria {
            open_now: true,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["open"]);
}

#[test]
fn category_filter_retains_matching() {
    let out = apply_filters(
        &sample(),
        &FilterCriteria {
            category: CategoryFilter::Parts,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["p7", "p8", "p9"]);
}

#[test]
fn sort_by_rating_is_stable_descending() {
    let places = vec![
        place("1", Some(4.5)),
        place("2", Some(4.5)),
        place("3", Some(4.9)),
    ];
    let out = apply_filters(
        &places,
        &FilterCriteria {
            sort: Some(SortKey::Rating),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["3", "1", "2"]);
}

#[test]
fn sort_by_rating_treats_missing_as_zero() {
    let places = vec![place("none", None), place("low", Some(1.0))];
    let out = apply_filters(
        &places,
        &FilterCriteria {
            sort: Some(SortKey::Rating),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["low", "none"]);
}

#[test]
fn sort_by_reviews_descending() {
    let mut a = place("a", None);
    a.user_ratings_total = Some(12);
    let b = place("b", None);
    let mut c = place("c", None);
    c.user_ratings_total = Some(300);
    let out = apply_filters(
        &[a, b, c],
        &FilterCriteria {
            sort: Some(SortKey::Reviews),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(ids(&out), vec!["c", "a", "b"]);
}

#[test]
fn adding_predicates_never_grows_result() {
    let places = sample();
    let steps = [
        FilterCriteria::default(),
        FilterCriteria {
            open_now: true,
            ..FilterCriteria::default()
        },
        FilterCriteria {
            open_now: true,
            min_rating: 3.5,
            ..FilterCriteria::default()
        },
        FilterCriteria {
            open_now: true,
            min_rating: 3.5,
            max_price: Some(1),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            open_now: true,
            min_rating: 3.5,
            max_price: Some(1),
            category: CategoryFilter::Service,
            sort: None,
        },
    ];

    let mut previous = places.len();
    for criteria in &steps {
        let len = apply_filters(&places, criteria).len();
        assert!(len <= previous, "{criteria:?} grew result {previous} -> {len}");
        previous = len;
    }
}

#[test]
fn category_filter_parses_from_str() {
    assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    assert_eq!("".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    assert_eq!("Parts".parse::<CategoryFilter>(), Ok(CategoryFilter::Parts));
    assert!("garage".parse::<CategoryFilter>().is_err());
}

#[test]
fn sort_key_parses_from_str() {
    assert_eq!("rating".parse::<SortKey>(), Ok(SortKey::Rating));
    assert_eq!("REVIEWS".parse::<SortKey>(), Ok(SortKey::Reviews));
    assert!("distance".parse::<SortKey>().is_err());
}
