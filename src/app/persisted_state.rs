// SPDX-License-Identifier: MPL-2.0
//! Durable key/value storage for state that outlives a session.
//!
//! The only value this crate persists is the theme, but the store is modelled
//! on browser local storage: string keys, string values, and every access may
//! fail (quota, privacy mode, read-only media). Callers are expected to
//! recover locally.
//!
//! On disk the store is a single CBOR map (`state.cbor`) in the application
//! data directory, kept apart from the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`FileStorage::open`]
//! 2. `--data-dir` CLI flag
//! 3. `FOLIO_FX_DATA_DIR` environment variable
//! 4. Platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

type Entries = BTreeMap<String, String>;

/// A fallible string key/value store.
pub trait Storage {
    /// Returns the stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Session-only storage, lost when dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: Entries,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with one entry, handy for simulating a returning visitor.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = Entries::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that refuses every access, like a browser with storage disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStorage;

impl Storage for DisabledStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Storage("storage is disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("storage is disabled".to_string()))
    }
}

/// CBOR-backed storage in the application data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Opens the store under `base_dir`, or under the resolved data directory.
    ///
    /// Nothing is read or created until the first access.
    pub fn open(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Storage("no data directory available".to_string()))?;
        path.push(STATE_FILE);
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let reader = BufReader::new(fs::File::open(&self.path)?);
        ciborium::from_reader(reader)
            .map_err(|err| Error::Storage(format!("failed to parse {STATE_FILE}: {err}")))
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(entries, writer)
            .map_err(|err| Error::Storage(format!("failed to write {STATE_FILE}: {err}")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupted file is replaced rather than blocking every later write.
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding unreadable state file");
            Entries::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_storage_returns_what_was_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").expect("memory get"), None);

        storage.set("theme", "light").expect("memory set");
        assert_eq!(storage.get("theme").expect("memory get").as_deref(), Some("light"));
    }

    #[test]
    fn disabled_storage_fails_both_ways() {
        let mut storage = DisabledStorage;
        assert!(matches!(storage.get("theme"), Err(Error::Storage(_))));
        assert!(matches!(storage.set("theme", "dark"), Err(Error::Storage(_))));
    }

    #[test]
    fn file_storage_missing_file_reads_as_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let storage =
            FileStorage::open(Some(temp_dir.path().to_path_buf())).expect("failed to open store");

        assert_eq!(storage.get("theme").expect("read should succeed"), None);
        assert!(!storage.path().exists(), "reading must not create the file");
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().join("nested"));

        let mut first = FileStorage::open(base.clone()).expect("failed to open store");
        first.set("theme", "light").expect("write should succeed");
        first.set("other", "value").expect("write should succeed");

        let second = FileStorage::open(base).expect("failed to open store");
        assert_eq!(second.get("theme").expect("read").as_deref(), Some("light"));
        assert_eq!(second.get("other").expect("read").as_deref(), Some("value"));
    }

    #[test]
    fn file_storage_corrupted_file_errors_on_read_and_recovers_on_write() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut storage =
            FileStorage::open(Some(temp_dir.path().to_path_buf())).expect("failed to open store");
        fs::write(storage.path(), b"not valid cbor {{{{").expect("failed to write garbage");

        assert!(matches!(storage.get("theme"), Err(Error::Storage(_))));

        storage.set("theme", "dark").expect("write should replace the file");
        assert_eq!(storage.get("theme").expect("read").as_deref(), Some("dark"));
    }
}
