//! Run configuration: site metadata, feed list, and pipeline limits.
//!
//! Every field has a default, so running without a config file produces the
//! French "AI Weekly" digest. A YAML file passed with `--config` only needs to
//! name the fields it overrides:
//!
//! ```yaml
//! feeds:
//!   - https://www.numerama.com/feed/
//! featured_count: 3
//! site:
//!   name: "My Weekly"
//!   escape_html: false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

/// Feeds fetched when the config file does not list any.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://www.numerama.com/feed/",
    "https://siecledigital.fr/feed/",
    "https://www.zdnet.fr/feeds/rss/actualites/",
    "https://www.frandroid.com/feed",
    "https://www.journaldugeek.com/feed/",
    "https://www.01net.com/rss/",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    pub site: SiteConfig,
    pub feeds: Vec<String>,
    /// Entries considered per feed, in feed order.
    pub max_entries_per_feed: usize,
    /// Length of the trailing window, in days.
    pub window_days: i64,
    pub featured_count: usize,
    pub watch_count: usize,
    /// Archive entries listed on the index page.
    pub archive_limit: usize,
    /// Whitespace-delimited tokens kept in a section snippet.
    pub snippet_words: usize,
    /// Feeds fetched at the same time. `1` fetches them one after another.
    pub fetch_concurrency: usize,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub why_rules: Vec<WhyRule>,
    pub why_fallback: String,
    /// Also write `digest.json` next to each digest page.
    pub write_json: bool,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            feeds: DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
            max_entries_per_feed: 15,
            window_days: 7,
            featured_count: 5,
            watch_count: 3,
            archive_limit: 26,
            snippet_words: 90,
            fetch_concurrency: 4,
            fetch_timeout_secs: 30,
            user_agent: concat!("weekly_digest/", env!("CARGO_PKG_VERSION")).to_string(),
            why_rules: default_why_rules(),
            why_fallback: "Intérêt business : opportunités produit et efficacité opérationnelle."
                .to_string(),
            write_json: false,
        }
    }
}

impl DigestConfig {
    /// Load the configuration from `path`, or return the defaults when no
    /// path is given.
    #[instrument(level = "info", skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            info!("No config file given; using built-in defaults");
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        info!(feeds = config.feeds.len(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }
}

/// Presentation settings shared by every rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    /// Value of the `lang` attribute; also picks the month names of long dates.
    pub lang: String,
    /// Digest title; `{date}` is replaced with the slug.
    pub title_template: String,
    pub intro: String,
    /// Title used for entries that have none.
    pub untitled: String,
    /// HTML-escape text taken from feeds and config before interpolation.
    pub escape_html: bool,
    pub labels: PageLabels,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "AI Weekly (FR)".to_string(),
            description: "Chaque semaine, le meilleur de l'IA & de la tech en français.".to_string(),
            lang: "fr".to_string(),
            title_template: "Cette semaine en IA & Tech ({date})".to_string(),
            intro: "Voici l’essentiel de la semaine écoulée côté IA & tech, en français et sans jargon inutile. Sélection de sources fiables et liens vers les articles originaux.".to_string(),
            untitled: "(sans titre)".to_string(),
            escape_html: true,
            labels: PageLabels::default(),
        }
    }
}

impl SiteConfig {
    /// Title of the digest published under `slug`.
    pub fn digest_title(&self, slug: &str) -> String {
        self.title_template.replace("{date}", slug)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLabels {
    pub source: String,
    pub brief: String,
    pub why: String,
    pub watch: String,
    pub latest: String,
    pub archives: String,
}

impl Default for PageLabels {
    fn default() -> Self {
        Self {
            source: "Source :".to_string(),
            brief: "En bref :".to_string(),
            why: "Pourquoi c’est important :".to_string(),
            watch: "À surveiller".to_string(),
            latest: "Dernier article".to_string(),
            archives: "Archives".to_string(),
        }
    }
}

/// One categorizer rule: a case-insensitive pattern tried against the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyRule {
    pub pattern: String,
    pub label: String,
}

impl WhyRule {
    fn new(pattern: &str, label: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn default_why_rules() -> Vec<WhyRule> {
    vec![
        WhyRule::new(
            "ia|intelligence artificielle|llm|gpt|openai|chatgpt|modèle",
            "Impact IA : productivité, automatisations et nouveaux usages.",
        ),
        WhyRule::new(
            "régulation|cnil|rgpd|dma|dsa|loi|amf",
            "Impact réglementaire : conformité et gouvernance des données.",
        ),
        WhyRule::new(
            "nvidia|gpu|puce|chip|arm|amd|intel",
            "Impact matériel : performances et coûts d’infrastructure.",
        ),
        WhyRule::new(
            "sécurité|faille|cyber|ransomware|attaque",
            "Impact sécurité : risque accru; correctifs et surveillance.",
        ),
        WhyRule::new(
            "cloud|aws|azure|gcp",
            "Impact cloud : coûts/performances et architecture à revoir.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_original_site() {
        let config = DigestConfig::default();
        assert_eq!(config.feeds.len(), 6);
        assert_eq!(config.max_entries_per_feed, 15);
        assert_eq!(config.window_days, 7);
        assert_eq!(config.featured_count, 5);
        assert_eq!(config.watch_count, 3);
        assert_eq!(config.archive_limit, 26);
        assert_eq!(config.snippet_words, 90);
        assert_eq!(config.why_rules.len(), 5);
        assert_eq!(config.site.lang, "fr");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
feeds:
  - https://example.com/feed.xml
featured_count: 2
site:
  name: "Test Weekly"
"#;
        let config = DigestConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.feeds, vec!["https://example.com/feed.xml"]);
        assert_eq!(config.featured_count, 2);
        assert_eq!(config.watch_count, 3);
        assert_eq!(config.site.name, "Test Weekly");
        assert_eq!(config.site.lang, "fr");
        assert!(config.site.escape_html);
        assert_eq!(config.site.labels.watch, "À surveiller");
    }

    #[test]
    fn test_yaml_can_replace_rules() {
        let yaml = r#"
why_rules:
  - pattern: "rust"
    label: "Systems"
why_fallback: "Other"
"#;
        let config = DigestConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.why_rules, vec![WhyRule::new("rust", "Systems")]);
        assert_eq!(config.why_fallback, "Other");
    }

    #[test]
    fn test_digest_title_from_slug() {
        let site = SiteConfig::default();
        assert_eq!(
            site.digest_title("2026-10-17"),
            "Cette semaine en IA & Tech (2026-10-17)"
        );
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = DigestConfig::load(None).unwrap();
        assert_eq!(config.site.name, "AI Weekly (FR)");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "archive_limit: 10").unwrap();
        let config = DigestConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.archive_limit, 10);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = DigestConfig::load(Some(Path::new("/nonexistent/digest.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_reports_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "archive_limit: [not, a, number]").unwrap();
        let err = DigestConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
