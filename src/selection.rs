//! Item selection: trailing window, link deduplication, and ranking.
//!
//! The three stages are pure functions over `Vec<Item>` and run in that
//! order. [`split`] then cuts the ranked list into featured and watch slices.

use crate::models::Item;
use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;

/// An inclusive time range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    /// The `days` leading up to and including `now`.
    pub fn trailing(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn filter_window(items: Vec<Item>, window: &Window) -> Vec<Item> {
    items.into_iter().filter(|i| window.contains(i.date)).collect()
}

/// Keep the first item for each exact `link` value.
pub fn dedupe(items: Vec<Item>) -> Vec<Item> {
    items
        .into_iter()
        .unique_by(|i| i.link.clone())
        .collect()
}

/// Newest first. The sort is stable, so equal dates keep their input order.
pub fn rank(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}

/// Run window filter, deduplication and ranking in sequence.
pub fn select(items: Vec<Item>, window: &Window) -> Vec<Item> {
    rank(dedupe(filter_window(items, window)))
}

/// Split ranked items into the first `featured` and the next `watch` items.
pub fn split(mut ranked: Vec<Item>, featured: usize, watch: usize) -> (Vec<Item>, Vec<Item>) {
    ranked.truncate(featured.saturating_add(watch));
    let rest = ranked.split_off(featured.min(ranked.len()));
    (ranked, rest)
}
