//! HTTP feed source.
//!
//! Downloads an RSS or Atom document with a shared `reqwest` client and parses
//! it with `feed-rs`. Every failure (transport, non-2xx status, malformed XML)
//! becomes a [`FetchError`]; nothing is retried.

use super::FeedSource;
use crate::config::DigestConfig;
use crate::error::{ConfigError, FetchError};
use crate::models::{RawEntry, RawFeed};
use feed_rs::model::{Entry, Feed};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Build the client shared by every feed source of a run.
///
/// The per-request timeout bounds how long a hung endpoint can stall the run.
pub fn build_client(config: &DigestConfig) -> Result<Client, ConfigError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    url: String,
    client: Client,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

impl FeedSource for HttpFeedSource {
    fn url(&self) -> &str {
        &self.url
    }

    #[instrument(level = "info", skip_all, fields(url = %self.url))]
    async fn fetch(&self) -> Result<RawFeed, FetchError> {
        let http_err = |source: reqwest::Error| FetchError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_err)?;
        debug!(bytes = body.len(), "Downloaded feed");

        let feed = feed_rs::parser::parse(&body[..]).map_err(|source| FetchError::Parse {
            url: self.url.clone(),
            source,
        })?;
        Ok(raw_feed(feed))
    }
}

fn raw_feed(feed: Feed) -> RawFeed {
    RawFeed {
        title: feed.title.map(|t| t.content),
        entries: feed.entries.into_iter().map(raw_entry).collect(),
    }
}

fn raw_entry(entry: Entry) -> RawEntry {
    let link = entry_link(&entry);
    let snippet = entry
        .summary
        .map(|s| s.content)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| entry.content.and_then(|c| c.body));

    RawEntry {
        title: entry.title.map(|t| t.content),
        link,
        published: entry.published.or(entry.updated),
        snippet,
    }
}

/// The entry's page link: the first `alternate` (or untyped) link, else the
/// first link of any kind.
fn entry_link(entry: &Entry) -> Option<String> {
    entry
        .links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| entry.links.first())
        .map(|l| l.href.clone())
}
