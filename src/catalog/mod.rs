//! The name→emoji mapping searched by the picker.
//!
//! Hosts usually supply their own catalog (built in code or deserialized
//! from a JSON object of `"name": "emoji"` pairs); [`builtin`] backs the
//! zero-configuration registration path.

mod builtin;

pub use builtin::builtin;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Immutable, insertion-ordered mapping from emoji name to emoji value.
///
/// Iteration order is insertion order, and the search filter preserves it
/// when deriving matches. Names are expected to be lowercase snake_case but
/// nothing enforces that; matching lowercases both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiCatalog {
    entries: IndexMap<String, String>,
}

impl EmojiCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name→emoji pair, keeping first-insertion order.
    ///
    /// Re-inserting an existing name replaces its value without moving it.
    pub fn insert(&mut self, name: impl Into<String>, emoji: impl Into<String>) {
        self.entries.insert(name.into(), emoji.into());
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emoji registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Entry at `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &str)> {
        self.entries
            .get_index(index)
            .map(|(name, emoji)| (name.as_str(), emoji.as_str()))
    }

    /// Iterate `(name, emoji)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, emoji)| (name.as_str(), emoji.as_str()))
    }

    /// Parse a catalog from a JSON object of `"name": "emoji"` pairs.
    ///
    /// Entries keep the order they appear in the document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<N, E> FromIterator<(N, E)> for EmojiCatalog
where
    N: Into<String>,
    E: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, E)>>(pairs: I) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(name, emoji)| (name.into(), emoji.into()))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_preserves_insertion_order() {
        let catalog: EmojiCatalog = [("zebra", "🦓"), ("apple", "🍎"), ("mango", "🥭")]
            .into_iter()
            .collect();

        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zebra", "apple", "mango"]);
        assert_eq!(catalog.get_index(1), Some(("apple", "🍎")));
    }

    #[test]
    fn reinserting_a_name_replaces_without_moving() {
        let mut catalog: EmojiCatalog = [("fire", "🔥"), ("star", "⭐")].into_iter().collect();
        catalog.insert("fire", "🧯");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_index(0), Some(("fire", "🧯")));
    }

    #[test]
    fn json_documents_keep_their_entry_order() {
        let catalog = EmojiCatalog::from_json(r#"{"boat":"⛵","anchor":"⚓"}"#)
            .expect("well-formed catalog document");

        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["boat", "anchor"]);
        assert_eq!(catalog.get("anchor"), Some("⚓"));
    }

    #[test]
    fn builtin_catalog_is_nonempty_and_unique() {
        let catalog = builtin();
        assert!(catalog.len() > 100);
        assert_eq!(catalog.get("fire"), Some("🔥"));
        assert_eq!(catalog.get("fire_truck"), Some("🚒"));
    }
}
