//! JSON export of a digest.
//!
//! With `--write-json` (or `write_json: true`) each run also writes its
//! selection as `<root>/<slug>/digest.json`, next to the rendered page, for
//! consumers that want the data without scraping HTML.

use super::archive::ArchiveStore;
use crate::error::GenerationError;
use crate::models::Digest;
use std::path::PathBuf;
use tracing::instrument;

/// Serialize `digest` and store it under its slug directory.
#[instrument(level = "info", skip_all, fields(slug = %digest.slug))]
pub async fn write_digest(store: &ArchiveStore, digest: &Digest) -> Result<PathBuf, GenerationError> {
    let json = serde_json::to_string_pretty(digest)?;
    store.write_digest_json(&digest.slug, &json).await
}
