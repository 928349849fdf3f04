//! Directory-per-run archive.
//!
//! The output root holds one `YYYY-MM-DD/` directory per digest and a home
//! `index.html`. The directory tree is the only record of past runs: the
//! archive list is rebuilt from directory names on every run and no metadata
//! file is read. Directories are never removed.
//!
//! ```text
//! public/
//! ├── index.html
//! ├── 2026-10-10/
//! │   └── index.html
//! └── 2026-10-17/
//!     ├── index.html
//!     └── digest.json   (only with --write-json)
//! ```

use crate::config::SiteConfig;
use crate::error::GenerationError;
use crate::models::ArchiveEntry;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

const PAGE: &str = "index.html";
const DIGEST_JSON: &str = "digest.json";

#[derive(Debug, Clone)]
pub struct ArchiveStore {
    root: PathBuf,
}

impl ArchiveStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root if needed and check that it accepts writes.
    #[instrument(level = "info", skip_all, fields(root = %self.root.display()))]
    pub async fn ensure_root(&self) -> Result<(), GenerationError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| GenerationError::io(&self.root, e))?;

        let probe = self.root.join("..__probe_write__");
        fs::write(&probe, b"")
            .await
            .map_err(|e| GenerationError::io(&probe, e))?;
        if let Err(e) = fs::remove_file(&probe).await {
            warn!(path = %probe.display(), error = %e, "Could not remove write probe");
        }
        debug!("Output root is writable");
        Ok(())
    }

    /// Write `html` as `<root>/<slug>/index.html`, replacing any earlier page
    /// for the same slug. Returns the page path.
    #[instrument(level = "info", skip_all, fields(%slug))]
    pub async fn write_digest(&self, slug: &str, html: &str) -> Result<PathBuf, GenerationError> {
        let dir = self.root.join(slug);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| GenerationError::io(&dir, e))?;

        let path = dir.join(PAGE);
        fs::write(&path, html)
            .await
            .map_err(|e| GenerationError::io(&path, e))?;
        info!(path = %path.display(), "Wrote digest page");
        Ok(path)
    }

    /// Write `<root>/<slug>/digest.json`. The slug directory must exist.
    #[instrument(level = "info", skip_all, fields(%slug))]
    pub async fn write_digest_json(&self, slug: &str, json: &str) -> Result<PathBuf, GenerationError> {
        let path = self.root.join(slug).join(DIGEST_JSON);
        fs::write(&path, json)
            .await
            .map_err(|e| GenerationError::io(&path, e))?;
        info!(path = %path.display(), "Wrote digest JSON");
        Ok(path)
    }

    /// The `limit` most recent archive entries, newest first.
    ///
    /// Every directory under the root is an entry; names sort descending,
    /// which for `YYYY-MM-DD` names is newest first.
    #[instrument(level = "info", skip_all, fields(limit = limit))]
    pub async fn list_entries(
        &self,
        site: &SiteConfig,
        limit: usize,
    ) -> Result<Vec<ArchiveEntry>, GenerationError> {
        let mut dir = fs::read_dir(&self.root)
            .await
            .map_err(|e| GenerationError::io(&self.root, e))?;

        let mut slugs = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| GenerationError::io(&self.root, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| GenerationError::io(entry.path(), e))?;
            if file_type.is_dir() {
                slugs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        slugs.sort_unstable_by(|a, b| b.cmp(a));
        slugs.truncate(limit);
        debug!(count = slugs.len(), "Listed archive entries");

        Ok(slugs
            .into_iter()
            .map(|slug| archive_entry(site, slug))
            .collect())
    }

    /// Replace `<root>/index.html`.
    #[instrument(level = "info", skip_all)]
    pub async fn write_index(&self, html: &str) -> Result<PathBuf, GenerationError> {
        let path = self.root.join(PAGE);
        fs::write(&path, html)
            .await
            .map_err(|e| GenerationError::io(&path, e))?;
        info!(path = %path.display(), "Wrote archive index");
        Ok(path)
    }
}

/// Derive an entry from its directory name alone.
pub fn archive_entry(site: &SiteConfig, slug: String) -> ArchiveEntry {
    ArchiveEntry {
        title: site.digest_title(&slug),
        date: slug.clone(),
        slug,
    }
}
