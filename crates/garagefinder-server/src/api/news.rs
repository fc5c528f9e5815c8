use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use garagefinder_advisor::{fallback, EventItem, LawItem};
use garagefinder_news::{latest_news, NewsItem, NewsSource};
use serde::Serialize;

use super::AppState;

const NEWS_CACHE_CONTROL: &str = "s-maxage=1800, stale-while-revalidate=3600";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewsResponse {
    pub news: Vec<NewsItem>,
    pub events: Vec<EventItem>,
    pub laws: Vec<LawItem>,
    pub generated_at: DateTime<Utc>,
    pub news_source: NewsSource,
}

/// Headlines, events, and laws in one payload. Every part degrades to
/// static content independently, so this never fails.
pub(super) async fn get_news(State(state): State<AppState>) -> impl IntoResponse {
    let advisor = state.advisor.as_deref();
    let (batch, events, laws) = tokio::join!(
        latest_news(state.news.as_deref()),
        async {
            match advisor {
                Some(advisor) => advisor.events().await,
                None => fallback::events(),
            }
        },
        async {
            match advisor {
                Some(advisor) => advisor.laws().await,
                None => fallback::laws(),
            }
        },
    );

    (
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NEWS_CACHE_CONTROL),
        )],
        Json(NewsResponse {
            news: batch.items,
            events,
            laws,
            generated_at: Utc::now(),
            news_source: batch.source,
        }),
    )
}
