//! Feed sources and the stage that turns their entries into [`Item`]s.
//!
//! A [`FeedSource`] wraps one endpoint and yields a [`RawFeed`]. Fetching is
//! fail-open: [`fetch_all`] logs a failing feed and moves on, so a digest is
//! built from however many feeds answered, possibly none.
//!
//! # Submodules
//!
//! | Module | Role |
//! |--------|------|
//! | [`http`] | `reqwest` + `feed-rs` implementation of [`FeedSource`] |
//! | [`normalize`] | Maps raw entries to [`Item`]s with defaults applied |
//!
//! [`Item`]: crate::models::Item

pub mod http;
pub mod normalize;

use crate::error::FetchError;
use crate::models::RawFeed;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

/// One syndication endpoint.
pub trait FeedSource {
    /// The endpoint URL; used for logging and as the source-name fallback.
    fn url(&self) -> &str;

    /// Fetch and parse the feed. No partial results: any failure is an error.
    async fn fetch(&self) -> Result<RawFeed, FetchError>;
}

/// Feeds that answered, in the order the sources were given.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub feeds: Vec<(String, RawFeed)>,
    pub failed: usize,
}

/// Fetch every source, at most `concurrency` at a time.
///
/// Results keep the order of `sources` whatever order the requests finish
/// in, so an earlier feed always wins deduplication ties.
#[instrument(level = "info", skip_all, fields(sources = sources.len(), concurrency = concurrency))]
pub async fn fetch_all<S: FeedSource>(sources: &[S], concurrency: usize) -> FetchOutcome {
    let results: Vec<(&str, Result<RawFeed, FetchError>)> = stream::iter(sources)
        .map(|source| async move { (source.url(), source.fetch().await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut outcome = FetchOutcome::default();
    for (url, result) in results {
        match result {
            Ok(feed) => {
                info!(%url, entries = feed.entries.len(), "Fetched feed");
                outcome.feeds.push((url.to_string(), feed));
            }
            Err(e) => {
                warn!(url = %e.url(), error = %e, "Feed error; skipping");
                outcome.failed += 1;
            }
        }
    }
    outcome
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::RawEntry;
    use std::time::Duration;

    /// In-memory source used across the crate's tests.
    pub(crate) struct StaticSource {
        pub url: String,
        pub result: Result<RawFeed, u16>,
        pub delay_ms: u64,
    }

    impl StaticSource {
        pub(crate) fn ok(url: &str, feed: RawFeed) -> Self {
            Self {
                url: url.to_string(),
                result: Ok(feed),
                delay_ms: 0,
            }
        }

        pub(crate) fn failing(url: &str, status: u16) -> Self {
            Self {
                url: url.to_string(),
                result: Err(status),
                delay_ms: 0,
            }
        }
    }

    impl FeedSource for StaticSource {
        fn url(&self) -> &str {
            &self.url
        }

        async fn fetch(&self) -> Result<RawFeed, FetchError> {
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            match &self.result {
                Ok(feed) => Ok(feed.clone()),
                Err(status) => Err(FetchError::Status {
                    url: self.url.clone(),
                    status: *status,
                }),
            }
        }
    }

    fn titled(title: &str) -> RawFeed {
        RawFeed {
            title: Some(title.to_string()),
            entries: vec![RawEntry::default()],
        }
    }

    #[tokio::test]
    async fn test_failing_feed_is_skipped() {
        let sources = vec![
            StaticSource::ok("https://a.example/feed", titled("A")),
            StaticSource::failing("https://b.example/feed", 500),
            StaticSource::ok("https://c.example/feed", titled("C")),
        ];
        let outcome = fetch_all(&sources, 4).await;
        assert_eq!(outcome.failed, 1);
        let urls: Vec<_> = outcome.feeds.iter().map(|(u, _)| u.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example/feed", "https://c.example/feed"]);
    }

    #[tokio::test]
    async fn test_results_keep_source_order() {
        let mut slow = StaticSource::ok("https://slow.example/feed", titled("Slow"));
        slow.delay_ms = 50;
        let sources = vec![slow, StaticSource::ok("https://fast.example/feed", titled("Fast"))];

        let outcome = fetch_all(&sources, 2).await;
        let titles: Vec<_> = outcome
            .feeds
            .iter()
            .map(|(_, f)| f.title.clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["Slow", "Fast"]);
    }

    #[tokio::test]
    async fn test_all_feeds_failing_yields_empty_outcome() {
        let sources = vec![StaticSource::failing("https://a.example/feed", 404)];
        let outcome = fetch_all(&sources, 0).await;
        assert!(outcome.feeds.is_empty());
        assert_eq!(outcome.failed, 1);
    }
}
