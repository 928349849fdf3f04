//! HTML rendering.
//!
//! Every page goes through [`layout`], which supplies the document shell,
//! stylesheet, header and footer. Rendering is pure: these functions build
//! strings and never touch the file system.
//!
//! When [`SiteConfig::escape_html`] is set (the default), text coming from
//! feeds or configuration is escaped before interpolation. With it unset the
//! text is inserted verbatim and feeds are trusted to carry safe markup.

use crate::config::SiteConfig;
use crate::models::{ArchiveEntry, Digest, FeaturedItem, Item};
use crate::utils::{brief, long_date};
use chrono::Datelike;
use std::borrow::Cow;

const STYLE: &str = r#":root{--bg:#0f172a;--card:#111827;--muted:#94a3b8;--text:#e2e8f0;--accent:#6366f1}
*{box-sizing:border-box}body{margin:0;font-family:Inter,system-ui,-apple-system,Arial;background:var(--bg);color:var(--text)}
header,main,footer{max-width:980px;margin:0 auto;padding:16px}
a{color:#c7d2fe;text-decoration:none}.meta{color:var(--muted)}
.card{background:var(--card);border:1px solid #1f2937;border-radius:14px;padding:16px}
h1,h2{margin:.4em 0}ul{margin:.4em 0 0.8em 1em}"#;

/// Marker appended to every truncated snippet.
pub const ELLIPSIS: &str = "…";

fn text<'a>(site: &SiteConfig, s: &'a str) -> Cow<'a, str> {
    if site.escape_html {
        html_escape::encode_text(s)
    } else {
        Cow::Borrowed(s)
    }
}

fn attr<'a>(site: &SiteConfig, s: &'a str) -> Cow<'a, str> {
    if site.escape_html {
        html_escape::encode_double_quoted_attribute(s)
    } else {
        Cow::Borrowed(s)
    }
}

/// Wrap `content` in the shared page shell.
pub fn layout(site: &SiteConfig, title: &str, content: &str, year: i32) -> String {
    let name = text(site, &site.name);
    format!(
        r#"<!doctype html><html lang="{lang}"><head>
<meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>{title} • {name}</title>
<style>
{STYLE}
</style></head><body>
<header><h1><a href="./">{name}</a></h1><p class="meta">{desc}</p></header>
<main>{content}</main>
<footer><p class="meta">© {year} {name}</p></footer>
</body></html>"#,
        lang = attr(site, &site.lang),
        title = text(site, title),
        desc = text(site, &site.description),
    )
}

/// One featured item: title, source line, snippet, and label.
pub fn section(site: &SiteConfig, featured: &FeaturedItem, snippet_words: usize) -> String {
    let item = &featured.item;
    let labels = &site.labels;
    let bref = brief(&item.snippet, snippet_words);
    format!(
        r#"
<h2>{title}</h2>
<p class="meta">{source_label} <a href="{link}" target="_blank" rel="noopener">{source}</a> • {date}</p>
<p><strong>{brief_label}</strong> {bref}{ELLIPSIS}</p>
<p><strong>{why_label}</strong> {why}</p>"#,
        title = text(site, &item.title),
        source_label = text(site, &labels.source),
        link = attr(site, &item.link),
        source = text(site, &item.source),
        date = long_date(item.date, &site.lang),
        brief_label = text(site, &labels.brief),
        bref = text(site, &bref),
        why_label = text(site, &labels.why),
        why = text(site, &featured.why),
    )
}

/// Watch items as a bare link list; empty when there are none.
pub fn watch_list(site: &SiteConfig, watch: &[Item]) -> String {
    if watch.is_empty() {
        return String::new();
    }
    let items: String = watch
        .iter()
        .map(|i| {
            format!(
                r#"<li><a href="{link}" target="_blank" rel="noopener">{title}</a> — <span class="meta">{source}</span></li>"#,
                link = attr(site, &i.link),
                title = text(site, &i.title),
                source = text(site, &i.source),
            )
        })
        .collect();
    format!(
        "<h3>{}</h3><ul>{}</ul>",
        text(site, &site.labels.watch),
        items
    )
}

/// The digest page of one run.
pub fn render_digest(site: &SiteConfig, digest: &Digest, snippet_words: usize) -> String {
    let sections = digest
        .featured
        .iter()
        .map(|f| section(site, f, snippet_words))
        .collect::<Vec<_>>()
        .join("\n");
    let content = format!(
        r#"<div class="card"><h1>{title}</h1><p>{intro}</p>{sections}{watch}</div>"#,
        title = text(site, &digest.title),
        intro = text(site, &site.intro),
        watch = watch_list(site, &digest.watch),
    );
    layout(site, &digest.title, &content, digest.generated_at.year())
}

/// The home page: a link to the latest digest and the archive list.
pub fn render_index(
    site: &SiteConfig,
    latest: &ArchiveEntry,
    archives: &[ArchiveEntry],
    year: i32,
) -> String {
    let items: String = archives
        .iter()
        .map(|a| {
            format!(
                r#"<li><a href="./{slug}/">{title}</a> • <span class="meta">{date}</span></li>"#,
                slug = attr(site, &a.slug),
                title = text(site, &a.title),
                date = text(site, &a.date),
            )
        })
        .collect();
    let content = format!(
        r#"
  <div class="card">
    <h2>{latest_label}</h2>
    <p><a href="./{slug}/">{title}</a></p>
  </div>
  <div class="card">
    <h2>{archives_label}</h2>
    <ul>{items}</ul>
  </div>"#,
        latest_label = text(site, &site.labels.latest),
        slug = attr(site, &latest.slug),
        title = text(site, &latest.title),
        archives_label = text(site, &site.labels.archives),
    );
    layout(site, &site.name, &content, year)
}
