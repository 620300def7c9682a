use crate::structured::{Entry, Hook, Level};
use std::error::Error;
use std::sync::Mutex;

/// A structured-side hook that keeps every fired entry in memory.
///
/// Useful for asserting on delivered entries in tests and for measuring
/// adapter overhead without any real side effect behind the hook.
pub struct MemoryHook {
    levels: Vec<Level>,
    entries: Mutex<Vec<Entry>>,
}

/// Reported by [`MemoryHook::fire`] when a previous panic poisoned the
/// entry buffer's lock.
#[derive(thiserror::Error, Debug)]
#[error("memory hook entry buffer lock poisoned")]
pub struct BufferPoisoned;

impl MemoryHook {
    /// Create a hook that declares interest in the given levels.
    pub fn new(levels: Vec<Level>) -> Self {
        MemoryHook {
            levels,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all entries fired so far, oldest first.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// The most recently fired entry, if any.
    pub fn last_entry(&self) -> Option<Entry> {
        self.entries.lock().ok().and_then(|e| e.last().cloned())
    }

    /// Drop all recorded entries.
    pub fn reset(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Hook for MemoryHook {
    fn levels(&self) -> Vec<Level> {
        self.levels.clone()
    }

    fn fire(&self, entry: &Entry) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|_| BufferPoisoned)?;
        entries.push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn entry(message: &str) -> Entry {
        Entry {
            logger: None,
            data: BTreeMap::new(),
            time: Utc::now(),
            level: Level::Error,
            message: message.to_string(),
        }
    }

    #[test]
    fn records_entries_in_order() {
        let hook = MemoryHook::new(vec![Level::Error]);
        hook.fire(&entry("first")).unwrap();
        hook.fire(&entry("second")).unwrap();

        let seen = hook.entries();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].message, "first");
        assert_eq!(hook.last_entry().unwrap().message, "second");

        hook.reset();
        assert!(hook.entries().is_empty());
    }
}
