//! Per-database locks.
//!
//! Every structural change checks the disk and then acts on it. Holding the
//! database's lock across both keeps concurrent callers on the same database
//! from interleaving between the check and the act.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Lock table keyed by lowercased database name.
#[derive(Default)]
pub(crate) struct DatabaseLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DatabaseLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Get the lock for a database, creating it on first use.
    pub(crate) fn get(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Forget a database's lock once nobody holds a handle to it.
    pub(crate) fn prune(&self, key: &str) {
        let mut locks = self.locks.lock();
        if locks.get(key).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(key);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.locks.lock().len()
    }
}
