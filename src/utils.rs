//! Text and date helpers used by the renderer.
//!
//! - Tag stripping and word truncation for snippets
//! - Long, human-readable dates in the site language
//! - Slugs for dated output directories

use chrono::{DateTime, Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Replace every tag with a space, decode entities, collapse whitespace runs,
/// and trim. The result is plain text.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
/// ```
pub fn strip_html(html: &str) -> String {
    let untagged = TAG_RE.replace_all(html, " ");
    let decoded = html_escape::decode_html_entities(&untagged);
    SPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

/// Keep the first `max_words` whitespace-delimited tokens of the stripped text.
pub fn brief(html: &str, max_words: usize) -> String {
    strip_html(html)
        .split(' ')
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slug of the digest generated at `now`: its UTC calendar date.
pub fn slug_for(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

/// Format a date the way a reader of `lang` writes it out in full.
///
/// French gives `15 octobre 2026`; any other language falls back to
/// `October 15, 2026`.
pub fn long_date(date: DateTime<Utc>, lang: &str) -> String {
    if lang.eq_ignore_ascii_case("fr") || lang.to_ascii_lowercase().starts_with("fr-") {
        let month = MONTHS_FR[date.month0() as usize];
        format!("{} {} {}", date.day(), month, date.year())
    } else {
        date.format("%B %-d, %Y").to_string()
    }
}
