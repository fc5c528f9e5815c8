//! Headline listing command.

use garagefinder_core::AppConfig;
use garagefinder_news::{google_news_search_url, latest_news, NewsBatch, NewsFetcher, NewsSource};

/// Print headlines from the configured feeds, or from a Google News search
/// when `query` is given. Falls back to the static list like `/api/news`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or JSON output fails.
pub(crate) async fn run_news(
    config: &AppConfig,
    query: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let feed_urls = match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => vec![google_news_search_url(q)],
        None => config.news_feed_urls.clone(),
    };
    let fetcher = if feed_urls.is_empty() {
        None
    } else {
        Some(NewsFetcher::new(
            feed_urls,
            config.http_timeout_secs,
            &config.user_agent,
        )?)
    };

    let batch = latest_news(fetcher.as_ref()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        print!("{}", render(&batch));
    }
    Ok(())
}

fn render(batch: &NewsBatch) -> String {
    let mut out = String::new();
    if batch.source == NewsSource::Fallback {
        out.push_str("(live feeds unavailable; showing saved headlines)\n");
    }
    for item in &batch.items {
        out.push_str(&format!("- {}\n", item.title));
        let meta: Vec<&str> = [item.source.as_str(), item.pub_date.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if !meta.is_empty() {
            out.push_str(&format!("  {}\n", meta.join(" | ")));
        }
        if !item.link.is_empty() {
            out.push_str(&format!("  {}\n", item.link));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use garagefinder_news::NewsItem;

    use super::*;

    #[test]
    fn render_flags_fallback_and_skips_empty_fields() {
        let batch = NewsBatch {
            items: vec![NewsItem {
                title: "Fuel prices cut".to_string(),
                link: String::new(),
                pub_date: String::new(),
                source: "Gulf News".to_string(),
            }],
            source: NewsSource::Fallback,
        };
        let text = render(&batch);
        assert!(text.starts_with("(live feeds unavailable"));
        assert!(text.contains("- Fuel prices cut\n  Gulf News\n"));
        assert!(!text.contains("http"));
    }
}
