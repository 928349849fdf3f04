//! Turns [`RawEntry`] values into [`Item`]s.

use crate::models::{Item, RawEntry, RawFeed};
use chrono::{DateTime, Utc};
use url::Url;

/// Normalize the first `max_entries` entries of a feed, in feed order.
///
/// Missing titles become `untitled`, missing links and snippets become empty
/// strings, and missing dates become `now`, so every item has a date.
pub fn normalize_feed(
    feed_url: &str,
    feed: RawFeed,
    now: DateTime<Utc>,
    max_entries: usize,
    untitled: &str,
) -> Vec<Item> {
    let source = source_name(feed_url, feed.title.as_deref());
    feed.entries
        .into_iter()
        .take(max_entries)
        .map(|entry| normalize_entry(entry, &source, now, untitled))
        .collect()
}

pub fn normalize_entry(entry: RawEntry, source: &str, now: DateTime<Utc>, untitled: &str) -> Item {
    Item {
        title: entry
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| untitled.to_string()),
        link: entry.link.unwrap_or_default(),
        date: entry.published.unwrap_or(now),
        source: source.to_string(),
        snippet: entry.snippet.unwrap_or_default(),
    }
}

/// Display name of a feed: its title, else the host of its URL.
pub fn source_name(feed_url: &str, title: Option<&str>) -> String {
    if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }
    Url::parse(feed_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| feed_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn entry(n: usize) -> RawEntry {
        RawEntry {
            title: Some(format!("Article {n}")),
            link: Some(format!("https://example.com/{n}")),
            published: Some(now() - Duration::hours(n as i64)),
            snippet: Some("texte".to_string()),
        }
    }

    #[test]
    fn test_only_first_entries_are_kept() {
        let feed = RawFeed {
            title: Some("Example".to_string()),
            entries: (0..20).map(entry).collect(),
        };
        let items = normalize_feed("https://example.com/feed", feed, now(), 15, "(sans titre)");
        assert_eq!(items.len(), 15);
        assert_eq!(items[0].title, "Article 0");
        assert_eq!(items[14].title, "Article 14");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let feed = RawFeed {
            title: None,
            entries: vec![RawEntry::default()],
        };
        let items = normalize_feed("https://www.numerama.com/feed/", feed, now(), 15, "(sans titre)");
        let item = &items[0];
        assert_eq!(item.title, "(sans titre)");
        assert_eq!(item.link, "");
        assert_eq!(item.snippet, "");
        assert_eq!(item.date, now());
        assert_eq!(item.source, "www.numerama.com");
    }

    #[test]
    fn test_blank_title_uses_placeholder() {
        let raw = RawEntry {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        let item = normalize_entry(raw, "Example", now(), "untitled");
        assert_eq!(item.title, "untitled");
    }

    #[test]
    fn test_every_item_has_a_date() {
        let feed = RawFeed {
            title: Some("Example".to_string()),
            entries: vec![entry(1), RawEntry::default(), entry(3)],
        };
        let items = normalize_feed("https://example.com/feed", feed, now(), 15, "x");
        assert_eq!(items[0].date, now() - Duration::hours(1));
        assert_eq!(items[1].date, now());
        assert_eq!(items[2].date, now() - Duration::hours(3));
    }

    #[test]
    fn test_source_name_fallbacks() {
        assert_eq!(source_name("https://a.example/feed", Some("  A Feed ")), "A Feed");
        assert_eq!(source_name("https://a.example/feed", Some("")), "a.example");
        assert_eq!(source_name("https://a.example/feed", None), "a.example");
        assert_eq!(source_name("not a url", None), "not a url");
    }
}
