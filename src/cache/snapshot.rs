//! Snapshot list store.
//!
//! Holds one wholesale-replaced ordered list of view records. Readers get an
//! independent copy; writers swap in a fully built replacement.

use std::sync::RwLock;

use tracing::debug;

use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::snapshot";

/// Immutable-between-refreshes ordered list.
///
/// Empty until the first successful refresh. `replace` is the only mutation
/// between `clear`s, so a reader observes either the entirely-old or the
/// entirely-new list.
pub struct SnapshotList<T> {
    name: &'static str,
    entries: RwLock<Vec<T>>,
}

impl<T: Clone> SnapshotList<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Returns a copy of the current snapshot, in refresh order.
    pub fn get(&self) -> Vec<T> {
        rw_read(&self.entries, SOURCE, "get").clone()
    }

    /// Atomically swaps in a new snapshot.
    pub fn replace(&self, entries: Vec<T>) {
        let mut guard = rw_write(&self.entries, SOURCE, "replace");
        debug!(
            list = self.name,
            previous = guard.len(),
            next = entries.len(),
            "replacing snapshot list"
        );
        *guard = entries;
    }

    /// Drops the snapshot, returning the list to its never-refreshed state.
    pub fn clear(&self) {
        rw_write(&self.entries, SOURCE, "clear").clear();
    }

    pub fn len(&self) -> usize {
        rw_read(&self.entries, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
