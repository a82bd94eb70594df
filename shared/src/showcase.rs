//! Selection state of the feature showcase.

use crate::content::FeatureSection;

/// Which showcase entry is active, and when it was last picked.
///
/// `last_selected_at` doubles as the cache-busting token for the active
/// media asset: every selection, including re-selecting the current entry,
/// produces a new token and therefore a new asset URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseSelection {
    selected: usize,
    last_selected_at: u64,
    len: usize,
}

impl ShowcaseSelection {
    /// Fresh state for a showcase of `len` entries, first entry active.
    ///
    /// An empty showcase is treated as a single-entry one so `selected`
    /// always names a real index.
    pub fn new(len: usize, now_ms: u64) -> Self {
        Self {
            selected: 0,
            last_selected_at: now_ms,
            len: len.max(1),
        }
    }

    /// Fresh state sized for `sections`.
    pub fn for_sections(sections: &[FeatureSection], now_ms: u64) -> Self {
        Self::new(sections.len(), now_ms)
    }

    /// Index of the active entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Timestamp of the most recent selection, in milliseconds.
    pub fn last_selected_at(&self) -> u64 {
        self.last_selected_at
    }

    /// Whether entry `index` is the active one.
    pub fn is_active(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Make `index` active. Out-of-range indices clamp to the last entry.
    ///
    /// The stored timestamp never goes backwards or repeats, so two
    /// selections inside the same clock tick still yield distinct tokens.
    pub fn select(&mut self, index: usize, now_ms: u64) {
        self.selected = index.min(self.len - 1);
        self.last_selected_at = now_ms.max(self.last_selected_at.saturating_add(1));
    }

    /// Copy of `self` with `index` selected.
    pub fn with_selected(mut self, index: usize, now_ms: u64) -> Self {
        self.select(index, now_ms);
        self
    }

    /// Media URL for `section` carrying the current refresh token.
    pub fn media_url(&self, section: &FeatureSection) -> String {
        cache_busted(section.media_ref, self.last_selected_at)
    }
}

/// Append `t={token}` to `path`, respecting an existing query string.
pub fn cache_busted(path: &str, token: u64) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}t={token}")
}
