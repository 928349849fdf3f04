//! One digest run, end to end.
//!
//! 1. **Fetch** every feed source (failing feeds are skipped)
//! 2. **Normalize** the first entries of each feed into items
//! 3. **Select**: trailing window, link dedupe, newest first
//! 4. **Split** into featured and watch items; label featured ones
//! 5. **Render** and write `<root>/<slug>/index.html`
//! 6. **Rebuild** `<root>/index.html` from the dated directories
//!
//! Nothing is rolled back: if step 6 fails, the page written in step 5 stays.
//! Running again on the same day rewrites the same slug, so reruns are safe.

use crate::categorize::Categorizer;
use crate::config::DigestConfig;
use crate::error::{ConfigError, GenerationError};
use crate::feeds::normalize::normalize_feed;
use crate::feeds::{FeedSource, FetchOutcome, fetch_all};
use crate::models::{Digest, FeaturedItem, Item, RunSummary};
use crate::outputs::archive::{ArchiveStore, archive_entry};
use crate::outputs::{html, json};
use crate::selection::{Window, select, split};
use crate::utils::slug_for;
use chrono::{DateTime, Datelike, Utc};
use tracing::{info, instrument, warn};

pub struct Pipeline {
    config: DigestConfig,
    categorizer: Categorizer,
    store: ArchiveStore,
}

impl Pipeline {
    pub fn new(config: DigestConfig, store: ArchiveStore) -> Result<Self, ConfigError> {
        let categorizer = Categorizer::new(&config.why_rules, config.why_fallback.clone())?;
        Ok(Self {
            config,
            categorizer,
            store,
        })
    }

    /// Run the whole pipeline as of `now`.
    #[instrument(level = "info", skip_all, fields(root = %self.store.root().display(), %now))]
    pub async fn run<S: FeedSource>(
        &self,
        sources: &[S],
        now: DateTime<Utc>,
    ) -> Result<RunSummary, GenerationError> {
        self.store.ensure_root().await?;

        let outcome = fetch_all(sources, self.config.fetch_concurrency).await;
        let feeds_failed = outcome.failed;
        let items = self.normalize(outcome, now);
        let items_collected = items.len();
        if !sources.is_empty() && feeds_failed == sources.len() {
            warn!(feeds = sources.len(), "Every feed failed; the digest will be empty");
        }

        let digest = self.build_digest(items, now);
        info!(
            collected = items_collected,
            featured = digest.featured.len(),
            watch = digest.watch.len(),
            "Selected digest items"
        );

        let page = html::render_digest(&self.config.site, &digest, self.config.snippet_words);
        let digest_path = self.store.write_digest(&digest.slug, &page).await?;
        if self.config.write_json {
            json::write_digest(&self.store, &digest).await?;
        }

        self.write_index(&digest.slug, now).await?;

        Ok(RunSummary {
            slug: digest.slug,
            title: digest.title,
            featured: digest.featured.len(),
            watch: digest.watch.len(),
            feeds_attempted: sources.len(),
            feeds_failed,
            items_collected,
            digest_path,
        })
    }

    fn normalize(&self, outcome: FetchOutcome, now: DateTime<Utc>) -> Vec<Item> {
        outcome
            .feeds
            .into_iter()
            .flat_map(|(url, feed)| {
                normalize_feed(
                    &url,
                    feed,
                    now,
                    self.config.max_entries_per_feed,
                    &self.config.site.untitled,
                )
            })
            .collect()
    }

    /// Select, split, and label `items` into the digest for `now`.
    pub fn build_digest(&self, items: Vec<Item>, now: DateTime<Utc>) -> Digest {
        let window = Window::trailing(now, self.config.window_days);
        let ranked = select(items, &window);
        let (featured, watch) = split(ranked, self.config.featured_count, self.config.watch_count);

        let featured = featured
            .into_iter()
            .map(|item| FeaturedItem {
                why: self.categorizer.why(&item.title).to_string(),
                item,
            })
            .collect();

        let slug = slug_for(now);
        Digest {
            title: self.config.site.digest_title(&slug),
            slug,
            generated_at: now,
            featured,
            watch,
        }
    }

    async fn write_index(&self, latest_slug: &str, now: DateTime<Utc>) -> Result<(), GenerationError> {
        let site = &self.config.site;
        let archives = self.store.list_entries(site, self.config.archive_limit).await?;
        let latest = archive_entry(site, latest_slug.to_string());
        let page = html::render_index(site, &latest, &archives, now.year());
        self.store.write_index(&page).await?;
        Ok(())
    }
}
