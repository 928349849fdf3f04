//! # Weekly Digest
//!
//! Builds a static weekly digest from a set of RSS/Atom feeds: the past
//! week's items are deduplicated, ranked, labeled, and rendered to an HTML
//! page under a dated directory, and the site's archive index is rebuilt.
//!
//! ## Usage
//!
//! ```sh
//! weekly_digest -o ./public
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: Download and parse every feed (failures are logged and skipped)
//! 2. **Selection**: Keep the trailing week, dedupe by link, sort newest first
//! 3. **Rendering**: Featured sections with a "why it matters" label, plus a watch list
//! 4. **Output**: Write `<out>/<YYYY-MM-DD>/index.html` and regenerate `<out>/index.html`
//!
//! The run returns its result to `main`, which decides the exit status:
//! failure by default, or always success with `--exit-zero-on-failure`.

use chrono::Utc;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod categorize;
mod cli;
mod config;
mod error;
mod feeds;
mod models;
mod outputs;
mod pipeline;
mod selection;
mod utils;

use cli::Cli;
use config::DigestConfig;
use error::GenerationError;
use feeds::http::{HttpFeedSource, build_client};
use models::RunSummary;
use outputs::archive::ArchiveStore;
use pipeline::Pipeline;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("weekly_digest starting up");

    let args = Cli::parse();
    debug!(?args.out_dir, ?args.config, "Parsed CLI arguments");

    let result = generate(&args).await;
    let elapsed = start_time.elapsed();

    match result {
        Ok(summary) => {
            info!(
                slug = %summary.slug,
                featured = summary.featured,
                watch = summary.watch,
                feeds = summary.feeds_attempted,
                feeds_failed = summary.feeds_failed,
                items = summary.items_collected,
                path = %summary.digest_path.display(),
                ?elapsed,
                "Execution complete"
            );
            println!(
                "OK — généré: {} • Sections: {} • Watch: {}",
                summary.title, summary.featured, summary.watch
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, ?elapsed, "Generation failed");
            eprintln!("GENERATION FAILED: {e}");
            if args.exit_zero_on_failure {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn generate(args: &Cli) -> Result<RunSummary, GenerationError> {
    let mut config = DigestConfig::load(args.config.as_deref())?;
    config.write_json |= args.write_json;

    let client = build_client(&config)?;
    let sources: Vec<HttpFeedSource> = config
        .feeds
        .iter()
        .map(|url| HttpFeedSource::new(url.clone(), client.clone()))
        .collect();
    info!(feeds = sources.len(), out_dir = %args.out_dir.display(), "Configured run");

    let pipeline = Pipeline::new(config, ArchiveStore::new(&args.out_dir))?;
    pipeline.run(&sources, Utc::now()).await
}
