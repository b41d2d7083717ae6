//! Concurrency-safe container for the normalized version index.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::RemoteVersion;

/// Map from canonical game-version key to the loader builds published for it.
pub type VersionMap = HashMap<String, Vec<RemoteVersion>>;

/// In-memory index of available installer builds, keyed by canonical game
/// version.
///
/// Writers build a complete replacement map off-lock and publish it with
/// [`VersionIndex::replace_all`], a single assignment under the write lock.
/// Readers therefore observe either the previous snapshot or the next one in
/// full, never a partially rebuilt state.
#[derive(Debug, Default)]
pub struct VersionIndex {
    versions: RwLock<VersionMap>,
}

impl VersionIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the entire index contents with a new snapshot.
    pub fn replace_all(&self, versions: VersionMap) {
        let mut guard = self
            .versions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = versions;
    }

    /// Returns the builds indexed under the given canonical game version.
    pub fn get(&self, game_version: &str) -> Vec<RemoteVersion> {
        self.read_lock()
            .get(game_version)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns every game version currently present in the index, in
    /// arbitrary order.
    pub fn game_versions(&self) -> Vec<String> {
        self.read_lock().keys().cloned().collect()
    }

    /// Returns the total number of indexed builds across all game versions.
    pub fn len(&self) -> usize {
        self.read_lock().values().map(Vec::len).sum()
    }

    /// Returns true when no builds are indexed.
    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, VersionMap> {
        self.versions.read().unwrap_or_else(PoisonError::into_inner)
    }
}
