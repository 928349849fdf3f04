//! Command-line interface definitions for the weekly digest.
//!
//! Every option is optional: a bare invocation writes to `./public` using the
//! built-in site and feed list, like a scheduled batch job would.

use clap::Parser;
use std::path::PathBuf;

/// Build the weekly digest page and refresh the archive index.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./public, built-in feeds
/// weekly_digest
///
/// # Custom output directory and config file
/// weekly_digest -o ./site -c digest.yaml
///
/// # Never fail the scheduler, whatever happens
/// weekly_digest --exit-zero-on-failure
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output root for dated digest directories and the index page
    #[arg(short, long, env = "DIGEST_OUT_DIR", default_value = "public")]
    pub out_dir: PathBuf,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "DIGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write digest.json next to the digest page
    #[arg(long)]
    pub write_json: bool,

    /// Exit with status 0 even when generation fails (errors are still logged)
    #[arg(long)]
    pub exit_zero_on_failure: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["weekly_digest"]);
        assert_eq!(cli.out_dir, PathBuf::from("public"));
        assert!(cli.config.is_none());
        assert!(!cli.write_json);
        assert!(!cli.exit_zero_on_failure);
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "weekly_digest",
            "--out-dir",
            "./site",
            "--config",
            "digest.yaml",
            "--write-json",
            "--exit-zero-on-failure",
        ]);
        assert_eq!(cli.out_dir, PathBuf::from("./site"));
        assert_eq!(cli.config, Some(PathBuf::from("digest.yaml")));
        assert!(cli.write_json);
        assert!(cli.exit_zero_on_failure);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["weekly_digest", "-o", "/tmp/out", "-c", "/tmp/c.yaml"]);
        assert_eq!(cli.out_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.yaml")));
    }
}
