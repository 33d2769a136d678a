//! The embeddable picker panel.
//!
//! [`EmojiPicker`] composes the search filter, the recency list, and the
//! hit-testing a pointer-driven panel needs. Hosts own the terminal, the
//! event loop, and dismissal; the panel only draws and reacts.

mod actions;
mod render;
mod state;
mod style;

#[cfg(test)]
mod tests;

pub use state::{EmojiPicker, PanelLabels, PickOutcome};
pub use style::Theme;
