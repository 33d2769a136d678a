//! Debounced, case-insensitive substring filtering over a catalog.
//!
//! Typing updates the live input immediately but the query that actually
//! filters only commits after [`DEFAULT_DEBOUNCE`] of inactivity, trailing
//! edge. Clearing the input skips the wait and empties the results at
//! once. Time never comes from a hidden clock: callers pass `Instant`s
//! in, which keeps every scheduling decision testable.

use std::time::{Duration, Instant};

use crate::catalog::EmojiCatalog;

/// Pause after the last edit before the query commits.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// An edit waiting out its debounce window.
#[derive(Debug, Clone)]
struct PendingCommit {
    value: String,
    due: Instant,
}

/// Search state over one catalog: live input, committed query, and the
/// catalog indices matching that query in insertion order.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    catalog: EmojiCatalog,
    input: String,
    committed: String,
    matches: Vec<usize>,
    pending: Option<PendingCommit>,
    debounce: Duration,
}

impl SearchFilter {
    #[must_use]
    pub fn new(catalog: EmojiCatalog) -> Self {
        Self {
            catalog,
            input: String::new(),
            committed: String::new(),
            matches: Vec::new(),
            pending: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Override the debounce window, mostly to shorten it in tests.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Replace the live input at time `now`.
    ///
    /// A non-empty value schedules a commit for `now + debounce`,
    /// superseding any earlier scheduled commit. An empty value commits
    /// immediately: the pending edit is dropped and the results clear
    /// without waiting.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text.is_empty() {
            self.input.clear();
            self.pending = None;
            self.committed.clear();
            self.matches.clear();
            return;
        }
        self.pending = Some(PendingCommit {
            value: text.clone(),
            due: now + self.debounce,
        });
        self.input = text;
    }

    /// Commit the pending edit if its window has elapsed by `now`.
    ///
    /// Returns `true` when the committed query (and therefore the match
    /// list) changed. Call once per tick of the host's event loop.
    pub fn pump(&mut self, now: Instant) -> bool {
        if !self.pending.as_ref().is_some_and(|pending| now >= pending.due) {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.committed = pending.value;
        self.recompute();
        true
    }

    /// Drop any scheduled commit without touching the committed query.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    fn recompute(&mut self) {
        if self.committed.is_empty() {
            self.matches.clear();
            return;
        }
        let needle = self.committed.to_lowercase();
        self.matches = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, (name, _))| name.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
    }

    /// Live input as last set, committed or not.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Query the current match list was computed from.
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Catalog indices matching the committed query, in catalog order.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// `(name, emoji)` pairs for the current matches, in catalog order.
    pub fn match_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.matches
            .iter()
            .filter_map(|&index| self.catalog.get_index(index))
    }

    /// Match at `position` within the current match list.
    #[must_use]
    pub fn match_at(&self, position: usize) -> Option<(&str, &str)> {
        self.matches
            .get(position)
            .and_then(|&index| self.catalog.get_index(index))
    }

    /// `true` while an edit is waiting out its debounce window.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn catalog(&self) -> &EmojiCatalog {
        &self.catalog
    }
}
