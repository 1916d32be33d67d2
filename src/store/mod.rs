// SPDX-License-Identifier: GPL-3.0-only

//! Key-value string store abstraction
//!
//! The preference layer only needs four primitives from its backing store:
//! a string lookup, an editor that collects changes, and the two ways of
//! persisting those changes (blocking commit, fire-and-forget apply).
//!
//! - [`MemoryStore`]: shared in-memory map, also used as the test fake
//! - [`FileStore`]: JSON file on disk with background persistence

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::warn;

/// Read side of a persistent string store
pub trait PreferenceStore: Send + Sync {
    /// Editor type returned by [`PreferenceStore::edit`]
    type Editor: PreferenceEditor;

    /// Stored value for `key`, if any
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stored value for `key`, or `default` when absent
    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }

    fn contains(&self, key: &str) -> bool {
        self.get_string(key).is_some()
    }

    /// Start a batch of changes
    ///
    /// Nothing is visible to readers until the editor is committed or applied.
    fn edit(&self) -> Self::Editor;
}

/// Collects changes and persists them as one batch
pub trait PreferenceEditor: Sized {
    fn put_string(&mut self, key: &str, value: &str) -> &mut Self;

    fn remove(&mut self, key: &str) -> &mut Self;

    /// Remove every entry before this batch's own changes take effect
    fn clear(&mut self) -> &mut Self;

    /// Persist synchronously, returning whether the write reached storage
    fn commit(self) -> bool;

    /// Update memory now and persist in the background
    fn apply(self);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    type Editor = S::Editor;

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn edit(&self) -> Self::Editor {
        (**self).edit()
    }
}

/// Run `action` against a fresh editor, then commit or apply it
///
/// Exactly one of `commit()` / `apply()` is called per invocation. A failed
/// commit is logged and otherwise swallowed.
pub fn edit<S, F>(store: &S, commit: bool, action: F)
where
    S: PreferenceStore + ?Sized,
    F: FnOnce(&mut S::Editor),
{
    let mut editor = store.edit();
    action(&mut editor);
    if commit {
        if !editor.commit() {
            warn!("Preference commit did not reach storage");
        }
    } else {
        editor.apply();
    }
}

/// Changes buffered by an editor
#[derive(Debug, Default)]
pub(crate) struct PendingEdits {
    clear: bool,
    /// `None` marks a removal
    changes: BTreeMap<String, Option<String>>,
}

impl PendingEdits {
    pub(crate) fn put(&mut self, key: &str, value: &str) {
        self.changes.insert(key.to_string(), Some(value.to_string()));
    }

    pub(crate) fn remove(&mut self, key: &str) {
        self.changes.insert(key.to_string(), None);
    }

    pub(crate) fn clear(&mut self) {
        self.clear = true;
    }

    /// Apply the batch to `values`, clear first
    ///
    /// Returns the number of keys whose value changed.
    pub(crate) fn apply_to(self, values: &mut HashMap<String, String>) -> usize {
        let mut changed = 0;
        if self.clear {
            changed += values.len();
            values.clear();
        }
        for (key, value) in self.changes {
            let previous = match value {
                Some(value) => {
                    let differs = values.get(&key) != Some(&value);
                    values.insert(key, value);
                    differs
                }
                None => values.remove(&key).is_some(),
            };
            if previous {
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_edits_clear_runs_first() {
        let mut values = HashMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);

        let mut edits = PendingEdits::default();
        edits.put("c", "3");
        edits.clear();
        edits.apply_to(&mut values);

        assert_eq!(values.len(), 1);
        assert_eq!(values.get("c").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_pending_edits_last_write_wins() {
        let mut values = HashMap::new();
        let mut edits = PendingEdits::default();
        edits.put("a", "1");
        edits.remove("a");
        edits.put("b", "1");
        edits.put("b", "2");
        edits.apply_to(&mut values);

        assert!(!values.contains_key("a"));
        assert_eq!(values.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_edit_commit_flag_selects_persistence_call() {
        let store = MemoryStore::new();

        edit(&store, true, |e| {
            e.put_string("k", "v");
        });
        assert_eq!(store.commit_count(), 1);
        assert_eq!(store.apply_count(), 0);

        edit(&store, false, |e| {
            e.put_string("k", "w");
        });
        assert_eq!(store.commit_count(), 1);
        assert_eq!(store.apply_count(), 1);
    }

    #[test]
    fn test_edit_persists_even_when_action_does_nothing() {
        let store = MemoryStore::new();
        edit(&store, false, |_| {});
        assert_eq!(store.apply_count(), 1);
    }

    #[test]
    fn test_arc_store_delegates() {
        let store = Arc::new(MemoryStore::new());
        edit(&store, true, |e| {
            e.put_string("k", "v");
        });
        assert_eq!(store.get_string("k").as_deref(), Some("v"));
        assert_eq!(store.get_string_or("missing", "d"), "d");
    }
}
