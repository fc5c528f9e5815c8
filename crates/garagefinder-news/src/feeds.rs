//! Fetching and merging the configured RSS feeds.

use std::collections::HashSet;
use std::time::Duration;

use futures::future::join_all;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::Serialize;

use crate::error::NewsError;
use crate::fallback;
use crate::rss::{parse_rss_items, NewsItem};

/// Upper bound on merged headlines returned to clients.
pub const MAX_NEWS_ITEMS: usize = 12;

/// Where a batch of headlines came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSource {
    Rss,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsBatch {
    pub items: Vec<NewsItem>,
    pub source: NewsSource,
}

/// Google News RSS search URL for `query`, scoped to UAE English results.
#[must_use]
pub fn google_news_search_url(query: &str) -> String {
    let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
    format!("https://news.google.com/rss/search?q={encoded}&hl=en-AE&gl=AE&ceid=AE:en")
}

pub struct NewsFetcher {
    client: Client,
    feed_urls: Vec<String>,
}

impl NewsFetcher {
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        feed_urls: Vec<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, feed_urls })
    }

    #[must_use]
    pub fn feed_urls(&self) -> &[String] {
        &self.feed_urls
    }

    /// Fetch and parse a single feed.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] on transport failure or
    /// [`NewsError::UnexpectedStatus`] on a non-2xx response. A body that
    /// is not RSS is not an error; it just yields no items.
    pub async fn fetch_feed(&self, url: &str) -> Result<Vec<NewsItem>, NewsError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        Ok(parse_rss_items(&body))
    }

    /// Fetch every configured feed concurrently and merge the items in feed
    /// order, deduped by link and capped at [`MAX_NEWS_ITEMS`]. Failed feeds
    /// are logged and skipped.
    pub async fn fetch_all(&self) -> Vec<NewsItem> {
        let fetches = self.feed_urls.iter().map(|url| async move {
            match self.fetch_feed(url).await {
                Ok(items) => {
                    tracing::debug!(feed = %url, count = items.len(), "fetched news feed");
                    items
                }
                Err(e) => {
                    tracing::warn!(feed = %url, error = %e, "news feed fetch failed");
                    Vec::new()
                }
            }
        });
        merge_feed_items(join_all(fetches).await)
    }
}

/// Flatten per-feed lists, drop items without a title, keep the first item
/// for each link, and cap the result.
#[must_use]
pub fn merge_feed_items(per_feed: Vec<Vec<NewsItem>>) -> Vec<NewsItem> {
    let mut seen: HashSet<String> = HashSet::new();
    per_feed
        .into_iter()
        .flatten()
        .filter(|item| !item.title.is_empty())
        .filter(|item| item.link.is_empty() || seen.insert(item.link.clone()))
        .take(MAX_NEWS_ITEMS)
        .collect()
}

/// Live headlines when any feed produced items, otherwise the static list.
pub async fn latest_news(fetcher: Option<&NewsFetcher>) -> NewsBatch {
    let items = match fetcher {
        Some(fetcher) => fetcher.fetch_all().await,
        None => Vec::new(),
    };
    if items.is_empty() {
        tracing::info!("no live news items; serving fallback headlines");
        NewsBatch {
            items: fallback::news(),
            source: NewsSource::Fallback,
        }
    } else {
        NewsBatch {
            items,
            source: NewsSource::Rss,
        }
    }
}
