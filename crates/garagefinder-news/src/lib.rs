//! UAE motoring news: a regex-based RSS item extractor, a permissive
//! multi-feed fetcher, and static fallback headlines.

pub mod error;
pub mod fallback;
pub mod feeds;
pub mod rss;

pub use error::NewsError;
pub use feeds::{google_news_search_url, latest_news, NewsBatch, NewsFetcher, NewsSource};
pub use rss::{parse_rss_items, NewsItem};
