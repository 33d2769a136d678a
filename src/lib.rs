//! Embeddable emoji-picker panel for ratatui applications.
//!
//! The crate ships three independent pieces and the panel composing them:
//! a debounced [`search::SearchFilter`] over a name→emoji [`catalog`], a
//! persisted [`recent::RecentEmojis`] list, and a [`dismiss::DismissRegistry`]
//! for outside-press and resize dismissal. Hosts either embed
//! [`EmojiPicker`] directly or install it into a [`registry::PanelCatalog`]
//! via [`registry::register`] and mount it by id.

pub mod app_dirs;
pub mod catalog;
pub mod dismiss;
pub mod recent;
pub mod registry;
pub mod search;
pub mod storage;
pub mod ui;

pub use catalog::EmojiCatalog;
pub use dismiss::{BindingId, DismissRegistry};
pub use recent::{MAX_RECENT, RecentEmojis};
pub use registry::{EMOJI_PICKER_ID, PanelCatalog, PanelCatalogError, PanelDescriptor, register};
pub use search::{DEFAULT_DEBOUNCE, SearchFilter};
pub use storage::{JsonFileStore, MemoryStore, RecentStore, StorageError};
pub use ui::{EmojiPicker, PanelLabels, PickOutcome, Theme};
