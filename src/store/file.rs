// SPDX-License-Identifier: GPL-3.0-only

//! JSON file preference store
//!
//! The whole map is held in memory and rewritten on every persisted batch.
//! Files are small (a handful of keys), so there is no incremental format.

use super::{PendingEdits, PreferenceEditor, PreferenceStore};
use crate::errors::{PrefsError, PrefsResult};
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::thread::JoinHandle;
use tracing::{debug, info, warn};

/// Preference store persisted as a flat JSON object of strings
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<FileInner>,
}

#[derive(Debug)]
struct FileInner {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
    /// Serializes disk writes so the newest in-memory state lands last
    disk: Mutex<()>,
    /// Background writes started by `apply()`
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl FileStore {
    /// Load the store at `path`
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first persisted edit.
    pub fn open(path: impl Into<PathBuf>) -> PrefsResult<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => HashMap::new(),
            Ok(contents) => serde_json::from_str::<HashMap<String, String>>(&contents)
                .map_err(|source| PrefsError::Corrupt {
                    path: path.clone(),
                    source,
                })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No preferences file yet");
                HashMap::new()
            }
            Err(e) => return Err(PrefsError::storage(path, e)),
        };

        info!(path = %path.display(), entries = values.len(), "Loaded preferences");

        Ok(Self {
            inner: Arc::new(FileInner {
                path,
                values: RwLock::new(values),
                disk: Mutex::new(()),
                pending: Mutex::new(Vec::new()),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Block until every background write started by `apply()` has finished
    pub fn wait_for_writes(&self) {
        let handles = std::mem::take(&mut *self.pending_writes());
        for handle in handles {
            if handle.join().is_err() {
                warn!(path = %self.inner.path.display(), "Background preference write panicked");
            }
        }
    }

    /// Write the current in-memory state to disk
    pub fn sync(&self) -> PrefsResult<()> {
        let _disk = self
            .inner
            .disk
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Sorted for stable diffs of the file
        let snapshot: BTreeMap<String, String> = self
            .inner
            .values
            .read()
            .map(|guard| guard.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();

        let json = serde_json::to_string_pretty(&snapshot)?;
        let path = &self.inner.path;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::storage(parent, e))?;
        }

        let tmp = temp_path(path);
        write_durably(&tmp, json.as_bytes()).map_err(|e| PrefsError::storage(&tmp, e))?;
        std::fs::rename(&tmp, path).map_err(|e| PrefsError::storage(path, e))?;

        debug!(path = %path.display(), entries = snapshot.len(), "Preferences written");
        Ok(())
    }

    /// Merge `edits` into memory, returning false if the map lock is poisoned
    fn update(&self, edits: PendingEdits) -> bool {
        match self.inner.values.write() {
            Ok(mut guard) => {
                edits.apply_to(&mut guard);
                true
            }
            Err(_) => {
                warn!(path = %self.inner.path.display(), "Preference map lock poisoned");
                false
            }
        }
    }

    fn spawn_write(&self) {
        let store = self.clone();
        let handle = std::thread::spawn(move || {
            if let Err(e) = store.sync() {
                warn!(error = %e, "Background preference write failed");
            }
        });

        let mut pending = self.pending_writes();
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    /// Pending write handles, recovered even if a holder panicked
    fn pending_writes(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Write `contents` and flush it to the device before returning
fn write_durably(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

impl PreferenceStore for FileStore {
    type Editor = FileEditor;

    fn get_string(&self, key: &str) -> Option<String> {
        self.inner
            .values
            .read()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    fn edit(&self) -> FileEditor {
        FileEditor {
            store: self.clone(),
            edits: PendingEdits::default(),
        }
    }
}

/// Editor for [`FileStore`]
#[derive(Debug)]
pub struct FileEditor {
    store: FileStore,
    edits: PendingEdits,
}

impl PreferenceEditor for FileEditor {
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
        if !self.store.update(self.edits) {
            return false;
        }
        match self.store.sync() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Preference commit failed");
                false
            }
        }
    }

    fn apply(self) {
        if self.store.update(self.edits) {
            self.store.spawn_write();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_durably_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_durably(&path, b"first").unwrap();
        write_durably(&path, b"{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_sync_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = FileStore::open(&path).unwrap();

        let mut editor = store.edit();
        editor.put_string("k", "v");
        assert!(editor.commit());

        assert!(path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_apply_tracked_after_pending_lock_poisoned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = FileStore::open(&path).unwrap();

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.pending.lock().unwrap();
            panic!("poison pending writes");
        })
        .join();
        assert!(store.inner.pending.is_poisoned());

        let mut editor = store.edit();
        editor.put_string("k", "v");
        editor.apply();
        assert_eq!(store.pending_writes().len(), 1);

        store.wait_for_writes();
        assert!(store.pending_writes().is_empty());
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("\"k\": \"v\""));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let tmp = temp_path(Path::new("/a/b/preferences.json"));
        assert_eq!(tmp, PathBuf::from("/a/b/preferences.json.tmp"));
    }
}
