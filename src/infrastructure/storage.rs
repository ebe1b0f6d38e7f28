// SPDX-License-Identifier: MPL-2.0
//! Preference stores.
//!
//! [`FilePreferenceStore`] keeps a small string map in CBOR format inside the
//! application data directory, separate from the user-editable
//! `settings.toml`. [`MemoryPreferenceStore`] keeps the same map in memory
//! and backs the session when no data directory is available.
//!
//! The caller resolves the file location; see
//! `app::paths::storage_file_with_override`.

use crate::application::port::PreferenceStore;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

type Entries = BTreeMap<String, String>;

/// CBOR-backed key/value file.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FilePreferenceStore {
    /// Creates a store backed by the file at `path`. The file is created on
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let file = fs::File::open(&self.path)?;
        let entries = ciborium::from_reader(BufReader::new(file))?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(&self.path)?;
        ciborium::into_writer(entries, BufWriter::new(file))?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(self.read_entries()?.remove(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // A corrupted file is replaced rather than blocking every later write.
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), "discarding unreadable storage file: {err}");
            Entries::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

/// In-memory key/value map. Values live for the session only.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<Entries>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FilePreferenceStore::new(temp_dir.path().join("storage.cbor"));
        assert_eq!(store.load("theme").expect("load"), None);
    }

    #[test]
    fn store_then_load_round_trips() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FilePreferenceStore::new(temp_dir.path().join("nested").join("storage.cbor"));

        store.store("theme", "light").expect("store");
        assert_eq!(store.load("theme").expect("load").as_deref(), Some("light"));

        store.store("theme", "dark").expect("overwrite");
        assert_eq!(store.load("theme").expect("load").as_deref(), Some("dark"));
    }

    #[test]
    fn entries_survive_a_new_store_instance() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("storage.cbor");

        FilePreferenceStore::new(&path).store("theme", "light").expect("store");
        FilePreferenceStore::new(&path).store("other", "x").expect("store");

        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(reopened.load("theme").expect("load").as_deref(), Some("light"));
        assert_eq!(reopened.load("other").expect("load").as_deref(), Some("x"));
    }

    #[test]
    fn corrupted_file_fails_load_but_is_replaced_on_store() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("storage.cbor");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write garbage");

        let store = FilePreferenceStore::new(&path);
        assert!(matches!(store.load("theme"), Err(Error::Storage(_))));

        store.store("theme", "dark").expect("store over corrupted file");
        assert_eq!(store.load("theme").expect("load").as_deref(), Some("dark"));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryPreferenceStore::with_entry("theme", "light");
        assert_eq!(store.load("theme").expect("load").as_deref(), Some("light"));
        store.store("theme", "dark").expect("store");
        assert_eq!(store.load("theme").expect("load").as_deref(), Some("dark"));
        assert_eq!(store.load("missing").expect("load"), None);
    }
}
