//! Regex-based RSS item extraction.
//!
//! Feeds in the wild are frequently not well-formed XML (stray ampersands,
//! unclosed HTML in descriptions), so items are cut out with regexes rather
//! than a strict parser. Nothing here fails: missing fields become empty
//! strings and input without `<item>` blocks yields an empty list.

use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::escape::{resolve_predefined_entity, unescape_with};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    /// Publisher name, from `<source>`.
    pub source: String,
}

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<item\b[^>]*>(.*?)</item>").expect("valid regex"));

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").expect("valid regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<link\b[^>]*>(.*?)</link>").expect("valid regex"));

static PUB_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<pubDate\b[^>]*>(.*?)</pubDate>").expect("valid regex"));

static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<source\b[^>]*>(.*?)</source>").expect("valid regex"));

static CDATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("valid regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Extract every `<item>` in `xml`, in document order.
#[must_use]
pub fn parse_rss_items(xml: &str) -> Vec<NewsItem> {
    ITEM_RE
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|block| {
            let block = block.as_str();
            NewsItem {
                title: field(&TITLE_RE, block),
                link: field(&LINK_RE, block),
                pub_date: field(&PUB_DATE_RE, block),
                source: field(&SOURCE_RE, block),
            }
        })
        .collect()
}

fn field(re: &Regex, block: &str) -> String {
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| clean_text(m.as_str()))
        .unwrap_or_default()
}

/// Unwrap CDATA, drop markup, decode entities, and collapse whitespace.
fn clean_text(raw: &str) -> String {
    let unwrapped = CDATA_RE.replace_all(raw, "$1");
    let stripped = TAG_RE.replace_all(&unwrapped, " ");
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode XML entities and character references, plus `&nbsp;`. Text with
/// a stray `&` or an unknown entity is kept exactly as written.
fn decode_entities(text: &str) -> String {
    unescape_with(text, |entity| {
        resolve_predefined_entity(entity).or(match entity {
            "nbsp" => Some(" "),
            _ => None,
        })
    })
    .map_or_else(|_| text.to_string(), Cow::into_owned)
}
