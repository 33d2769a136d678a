//! Most-recently-used emoji list with write-through persistence.

use crate::storage::RecentStore;

/// Maximum number of entries retained when recording a pick.
pub const MAX_RECENT: usize = 8;

/// Ordered list of recently picked emoji, newest first.
///
/// The list is read from its store once at construction and written back
/// after every mutation. Storage failures never surface to the caller:
/// a load failure yields an empty list and a save failure leaves the
/// in-memory state authoritative, both at `warn` level in the log.
pub struct RecentEmojis {
    entries: Vec<String>,
    store: Box<dyn RecentStore>,
}

impl RecentEmojis {
    /// Rehydrate from `store`, degrading to an empty list on any failure.
    ///
    /// A previously stored list longer than [`MAX_RECENT`] is kept as-is;
    /// trimming only happens when a new pick is recorded.
    pub fn load(store: impl RecentStore + 'static) -> Self {
        let entries = match store.load() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("ignoring unreadable recent-emoji list: {err}");
                Vec::new()
            }
        };
        Self {
            entries,
            store: Box::new(store),
        }
    }

    /// Record a pick: move `emoji` to the front (inserting if absent),
    /// drop anything past [`MAX_RECENT`], and persist the result.
    pub fn record(&mut self, emoji: &str) {
        if let Some(index) = self.entries.iter().position(|entry| entry == emoji) {
            self.entries.remove(index);
        }
        self.entries.insert(0, emoji.to_string());
        self.entries.truncate(MAX_RECENT);

        if let Err(err) = self.store.save(&self.entries) {
            log::warn!("failed to persist recent-emoji list: {err}");
        }
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for RecentEmojis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentEmojis")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonFileStore, MemoryStore, StorageError};

    struct BrokenStore;

    impl RecentStore for BrokenStore {
        fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
            Err(std::io::Error::other("disk on fire").into())
        }

        fn save(&mut self, _entries: &[String]) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk still on fire").into())
        }
    }

    #[test]
    fn new_picks_land_at_the_front() {
        let mut recent = RecentEmojis::load(MemoryStore::new());

        recent.record("🔥");
        recent.record("🚒");

        assert_eq!(recent.entries(), ["🚒", "🔥"]);
    }

    #[test]
    fn repicking_moves_to_front_without_duplicating() {
        let mut recent = RecentEmojis::load(MemoryStore::new());
        for emoji in ["🍎", "🍌", "🍇"] {
            recent.record(emoji);
        }

        recent.record("🍎");

        assert_eq!(recent.entries(), ["🍎", "🍇", "🍌"]);
    }

    #[test]
    fn list_is_capped_by_evicting_the_oldest() {
        let mut recent = RecentEmojis::load(MemoryStore::new());
        for emoji in ["0", "1", "2", "3", "4", "5", "6", "7", "8"] {
            recent.record(emoji);
        }

        assert_eq!(recent.len(), MAX_RECENT);
        assert_eq!(recent.entries().first().map(String::as_str), Some("8"));
        // "0" was the first pick and fell off the end.
        assert!(!recent.entries().iter().any(|entry| entry == "0"));
    }

    #[test]
    fn every_record_writes_through_to_the_store() {
        let store = MemoryStore::new();
        let observer = store.clone();
        let mut recent = RecentEmojis::load(store);

        recent.record("⭐");
        assert_eq!(observer.stored(), Some(vec!["⭐".to_string()]));

        recent.record("🌙");
        assert_eq!(
            observer.stored(),
            Some(vec!["🌙".to_string(), "⭐".to_string()])
        );
    }

    #[test]
    fn unreadable_store_degrades_to_an_empty_list() {
        let recent = RecentEmojis::load(BrokenStore);
        assert!(recent.is_empty());
    }

    #[test]
    fn save_failures_keep_the_in_memory_list() {
        let mut recent = RecentEmojis::load(BrokenStore);

        recent.record("🎲");

        assert_eq!(recent.entries(), ["🎲"]);
    }

    #[test]
    fn oversized_stored_lists_load_untrimmed() {
        let mut store = MemoryStore::new();
        let stored: Vec<String> = (0..12).map(|n| n.to_string()).collect();
        store.save(&stored).expect("seed store");

        let recent = RecentEmojis::load(store);

        assert_eq!(recent.len(), 12);
    }

    #[test]
    fn picks_survive_a_reload_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut recent = RecentEmojis::load(JsonFileStore::at_dir(dir.path()));
        recent.record("🔥");
        recent.record("🚒");
        drop(recent);

        let reloaded = RecentEmojis::load(JsonFileStore::at_dir(dir.path()));
        assert_eq!(reloaded.entries(), ["🚒", "🔥"]);
    }
}
