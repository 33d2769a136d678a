use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::style::Theme;
use crate::catalog::EmojiCatalog;
use crate::recent::RecentEmojis;
use crate::search::SearchFilter;
use crate::storage::{JsonFileStore, RecentStore};

/// Text the panel draws around its content.
#[derive(Debug, Clone)]
pub struct PanelLabels {
    pub title: String,
    pub placeholder: String,
    pub recent_heading: String,
    pub empty: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            title: "Emoji".to_string(),
            placeholder: "Search emojis...".to_string(),
            recent_heading: "Recently used".to_string(),
            empty: "No matching emoji".to_string(),
        }
    }
}

/// The emoji the user picked, plus the committed query it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome {
    pub emoji: String,
    pub query: String,
}

/// One clickable emoji cell, recorded while drawing.
#[derive(Debug, Clone)]
pub(crate) struct CellHit {
    pub(crate) area: Rect,
    pub(crate) emoji: String,
}

/// The embeddable picker panel.
///
/// Hosts draw it into an area of their choosing each frame, forward
/// terminal events through [`handle_event`](Self::handle_event), and call
/// [`pump`](Self::pump) once per loop turn so the debounced query can
/// commit. Dismissal is the host's job, paired with
/// [`crate::dismiss::DismissRegistry`] and [`area`](Self::area).
#[derive(Debug)]
pub struct EmojiPicker {
    pub(crate) filter: SearchFilter,
    pub(crate) recent: RecentEmojis,
    pub(crate) labels: PanelLabels,
    pub(crate) theme: Theme,
    pub(crate) area: Option<Rect>,
    pub(crate) cells: Vec<CellHit>,
}

impl EmojiPicker {
    pub fn new(catalog: EmojiCatalog, store: impl RecentStore + 'static) -> Self {
        Self {
            filter: SearchFilter::new(catalog),
            recent: RecentEmojis::load(store),
            labels: PanelLabels::default(),
            theme: Theme::default(),
            area: None,
            cells: Vec::new(),
        }
    }

    /// Built-in catalog plus the standard on-disk recency store.
    pub fn open_default() -> anyhow::Result<Self> {
        let store = JsonFileStore::open_default()?;
        Ok(Self::new(crate::catalog::builtin(), store))
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: PanelLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.filter = self.filter.with_debounce(debounce);
        self
    }

    /// Advance the debounce clock. Returns `true` when the match list
    /// changed and the host should redraw.
    pub fn pump(&mut self, now: Instant) -> bool {
        self.filter.pump(now)
    }

    /// Area the panel occupied in its last draw, for dismissal bindings.
    #[must_use]
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    #[must_use]
    pub fn search(&self) -> &SearchFilter {
        &self.filter
    }

    #[must_use]
    pub fn recent(&self) -> &RecentEmojis {
        &self.recent
    }

    pub(crate) fn pick(&mut self, emoji: String) -> PickOutcome {
        self.recent.record(&emoji);
        PickOutcome {
            query: self.filter.committed().to_string(),
            emoji,
        }
    }
}
