//! Headlines served when no feed could be fetched.

use crate::rss::NewsItem;

const FALLBACK_NEWS: &[(&str, &str, &str)] = &[
    (
        "Summer car care: how UAE heat affects tyres and batteries",
        "https://www.rta.ae/",
        "RTA",
    ),
    (
        "Fuel price committee publishes monthly UAE petrol rates",
        "https://www.moenr.gov.ae/",
        "Ministry of Energy and Infrastructure",
    ),
    (
        "Dubai Police remind motorists about tailgating and lane discipline fines",
        "https://www.dubaipolice.gov.ae/",
        "Dubai Police",
    ),
    (
        "Abu Dhabi expands electric vehicle charging network",
        "https://www.itc.gov.ae/",
        "Abu Dhabi Mobility",
    ),
    (
        "Vehicle registration renewal: what to check before your inspection",
        "https://www.rta.ae/",
        "RTA",
    ),
];

#[must_use]
pub fn news() -> Vec<NewsItem> {
    FALLBACK_NEWS
        .iter()
        .map(|&(title, link, source)| NewsItem {
            title: title.to_string(),
            link: link.to_string(),
            pub_date: String::new(),
            source: source.to_string(),
        })
        .collect()
}
