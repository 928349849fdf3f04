//! Data models shared by the pipeline stages.
//!
//! - [`RawFeed`] / [`RawEntry`]: a feed as returned by a [`crate::feeds::FeedSource`],
//!   before any defaults are applied
//! - [`Item`]: the canonical record every later stage works on
//! - [`Digest`]: one run's selection, split into featured and watch items
//! - [`ArchiveEntry`]: one past digest, derived from its directory name
//! - [`RunSummary`]: what a finished run reports back to `main`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed feed, exactly as the source delivered it.
#[derive(Debug, Clone, Default)]
pub struct RawFeed {
    pub title: Option<String>,
    pub entries: Vec<RawEntry>,
}

/// A feed entry with every field optional.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub snippet: Option<String>,
}

/// A normalized feed item.
///
/// `link` is the deduplication key and is compared as an exact string, so
/// `https://a/x` and `https://a/x/` are two different items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub link: String,
    /// Always set; falls back to the run instant when the entry has no date.
    pub date: DateTime<Utc>,
    /// Feed title, or the feed's host name.
    pub source: String,
    /// Raw description text; may still contain markup.
    pub snippet: String,
}

/// A featured item and its "why it matters" label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedItem {
    #[serde(flatten)]
    pub item: Item,
    pub why: String,
}

/// One run's digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    /// `YYYY-MM-DD`; names the output directory.
    pub slug: String,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub featured: Vec<FeaturedItem>,
    pub watch: Vec<Item>,
}

/// A past digest, identified by its directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveEntry {
    pub slug: String,
    pub title: String,
    pub date: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub slug: String,
    pub title: String,
    pub featured: usize,
    pub watch: usize,
    pub feeds_attempted: usize,
    pub feeds_failed: usize,
    pub items_collected: usize,
    pub digest_path: PathBuf,
}
