// SPDX-License-Identifier: GPL-3.0-only

//! In-memory preference store

use super::{PendingEdits, PreferenceEditor, PreferenceStore};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{trace, warn};

/// Preference store backed by a shared `HashMap`
///
/// Clones share the same map. Commits and applies both take effect
/// immediately; they are counted separately so callers can check which
/// persistence path was taken.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: RwLock<HashMap<String, String>>,
    commits: AtomicUsize,
    applies: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `values`
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Arc::new(MemoryInner {
                values: RwLock::new(map),
                ..Default::default()
            }),
        }
    }

    /// Number of `commit()` calls so far
    pub fn commit_count(&self) -> usize {
        self.inner.commits.load(Ordering::SeqCst)
    }

    /// Number of `apply()` calls so far
    pub fn apply_count(&self) -> usize {
        self.inner.applies.load(Ordering::SeqCst)
    }

    /// Copy of every stored entry
    pub fn values(&self) -> HashMap<String, String> {
        self.inner
            .values
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn write(&self, edits: PendingEdits) -> bool {
        match self.inner.values.write() {
            Ok(mut guard) => {
                let changed = edits.apply_to(&mut guard);
                trace!(changed, "Memory store updated");
                true
            }
            Err(_) => {
                warn!("Memory store lock poisoned, dropping edits");
                false
            }
        }
    }
}

impl PreferenceStore for MemoryStore {
    type Editor = MemoryEditor;

    fn get_string(&self, key: &str) -> Option<String> {
        self.inner
            .values
            .read()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    fn edit(&self) -> MemoryEditor {
        MemoryEditor {
            store: self.clone(),
            edits: PendingEdits::default(),
        }
    }
}

/// Editor for [`MemoryStore`]
#[derive(Debug)]
pub struct MemoryEditor {
    store: MemoryStore,
    edits: PendingEdits,
}

impl PreferenceEditor for MemoryEditor {
    fn put_string(&mut self, key: &str, value: &str) -> &mut Self {
        self.edits.put(key, value);
        self
    }

    fn remove(&mut self, key: &str) -> &mut Self {
        self.edits.remove(key);
        self
    }

    fn clear(&mut self) -> &mut Self {
        self.edits.clear();
        self
    }

    fn commit(self) -> bool {
        self.store.inner.commits.fetch_add(1, Ordering::SeqCst);
        self.store.write(self.edits)
    }

    fn apply(self) {
        self.store.inner.applies.fetch_add(1, Ordering::SeqCst);
        self.store.write(self.edits);
    }
}
