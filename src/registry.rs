//! Host-side panel registration.
//!
//! Applications that mount panels by name keep a [`PanelCatalog`] and let
//! widget crates install themselves into it. [`register`] adds the emoji
//! picker under [`EMOJI_PICKER_ID`] with no configuration; hosts that need
//! a custom catalog or store register their own constructor instead.

use anyhow::{Result, anyhow};
use thiserror::Error;

use crate::ui::EmojiPicker;

/// Identifier the emoji picker registers under.
pub const EMOJI_PICKER_ID: &str = "emoji-picker";

static EMOJI_PICKER: PanelDescriptor = PanelDescriptor {
    id: EMOJI_PICKER_ID,
    title: "Emoji",
    summary: "Search and pick emoji, with recently-used tracking",
};

/// Static metadata describing an embeddable panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDescriptor {
    /// Stable identifier hosts mount the panel by.
    pub id: &'static str,
    /// Short label suitable for a menu entry or panel title.
    pub title: &'static str,
    /// One-line description of what the panel does.
    pub summary: &'static str,
}

/// Errors that can occur when mutating a [`PanelCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelCatalogError {
    /// A panel attempted to register an identifier that already exists.
    #[error("panel id '{id}' is already registered")]
    DuplicateId { id: &'static str },
}

type PanelConstructor = Box<dyn Fn() -> Result<EmojiPicker>>;

struct PanelRegistration {
    descriptor: &'static PanelDescriptor,
    constructor: PanelConstructor,
}

/// Catalog of embeddable panels available to the hosting application.
///
/// Each registration pairs a static descriptor with a constructor;
/// [`mount`](Self::mount) runs the constructor so every mount gets a fresh
/// panel instance with its own state.
#[derive(Default)]
pub struct PanelCatalog {
    panels: Vec<PanelRegistration>,
}

impl PanelCatalog {
    /// Create an empty catalog without any panels registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel constructor under its descriptor's id.
    pub fn register_panel(
        &mut self,
        descriptor: &'static PanelDescriptor,
        constructor: impl Fn() -> Result<EmojiPicker> + 'static,
    ) -> Result<(), PanelCatalogError> {
        if self.contains(descriptor.id) {
            return Err(PanelCatalogError::DuplicateId { id: descriptor.id });
        }
        self.panels.push(PanelRegistration {
            descriptor,
            constructor: Box::new(constructor),
        });
        Ok(())
    }

    /// Construct a fresh instance of the panel registered under `id`.
    pub fn mount(&self, id: &str) -> Result<EmojiPicker> {
        let registration = self
            .panels
            .iter()
            .find(|registration| registration.descriptor.id == id)
            .ok_or_else(|| anyhow!("no panel registered under id '{id}'"))?;
        (registration.constructor)()
    }

    /// Remove the panel registered under `id`, returning its descriptor.
    pub fn remove(&mut self, id: &str) -> Option<&'static PanelDescriptor> {
        let index = self
            .panels
            .iter()
            .position(|registration| registration.descriptor.id == id)?;
        Some(self.panels.remove(index).descriptor)
    }

    /// Lookup the descriptor registered under `id`.
    #[must_use]
    pub fn descriptor(&self, id: &str) -> Option<&'static PanelDescriptor> {
        self.panels
            .iter()
            .find(|registration| registration.descriptor.id == id)
            .map(|registration| registration.descriptor)
    }

    /// Iterate over registered panel descriptors.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static PanelDescriptor> + '_ {
        self.panels.iter().map(|registration| registration.descriptor)
    }

    /// Returns `true` if a panel is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.panels
            .iter()
            .any(|registration| registration.descriptor.id == id)
    }

    /// Return the number of registered panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns `true` when no panels have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl std::fmt::Debug for PanelCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelCatalog")
            .field("panels", &self.panels.len())
            .finish_non_exhaustive()
    }
}

/// Install the emoji picker into `catalog` under [`EMOJI_PICKER_ID`].
///
/// Takes no configuration: mounted panels use the built-in catalog and the
/// standard on-disk recency store.
pub fn register(catalog: &mut PanelCatalog) -> Result<(), PanelCatalogError> {
    catalog.register_panel(&EMOJI_PICKER, EmojiPicker::open_default)
}
