//! The key-value storage boundary.
//!
//! All persisted records live under flat string keys holding JSON documents.
//! The key scheme is part of the stored-data contract:
//! `idid.logs.<YYYY-MM-DD>`, `idid.summary.<YYYY-MM-DD>` and
//! `idid.decisions`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key for the daily log list of `date`.
pub fn logs_key(date: NaiveDate) -> String {
    format!("idid.logs.{}", date.format("%Y-%m-%d"))
}

/// Key for the cached daily summary of `date`.
pub fn summary_key(date: NaiveDate) -> String {
    format!("idid.summary.{}", date.format("%Y-%m-%d"))
}

/// Key for the full decision history (not date-partitioned).
pub const DECISIONS_KEY: &str = "idid.decisions";

/// Flat key-value storage used for all persisted records.
///
/// Keys are opaque strings, values are JSON documents. Reading a missing key
/// yields `Ok(None)`.
pub trait KvStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Loads and decodes the value under `key`, falling back to `fallback` when
/// the key is missing or its value does not decode.
///
/// Malformed stored data is discarded with a warning instead of propagated;
/// callers always have a sensible default (empty list, none).
pub fn load_or<T: DeserializeOwned>(store: &dyn KvStore, key: &str, fallback: T) -> Result<T> {
    match store.read(key)? {
        None => Ok(fallback),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("discarding malformed value under `{key}`: {err}");
                Ok(fallback)
            }
        },
    }
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn save<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) -> Result<()> {
    let raw =
        serde_json::to_string(value).with_context(|| format!("encoding value for `{key}`"))?;
    store.write(key, &raw)
}

/// File-backed store: one `<key>.json` file per key under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).with_context(|| format!("creating {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        Ok(Some(raw))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value).with_context(|| format!("writing {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-memory store for tests and embedders that bring their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn key_scheme_matches_the_stored_data_contract() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 26).unwrap();
        assert_eq!(logs_key(date), "idid.logs.2025-08-26");
        assert_eq!(summary_key(date), "idid.summary.2025-08-26");
        assert_eq!(DECISIONS_KEY, "idid.decisions");
    }

    #[test]
    fn file_store_roundtrip_and_remove() {
        let tmp = tempdir().unwrap();
        let mut store = FileStore::open(tmp.path().join("idid")).unwrap();

        assert_eq!(store.read("idid.decisions").unwrap(), None);
        store.write("idid.decisions", "[]").unwrap();
        assert_eq!(store.read("idid.decisions").unwrap().as_deref(), Some("[]"));
        store.remove("idid.decisions").unwrap();
        assert_eq!(store.read("idid.decisions").unwrap(), None);
        // Removing a missing key is fine.
        store.remove("idid.decisions").unwrap();
    }

    #[test]
    fn load_or_returns_fallback_for_missing_key() {
        let store = MemoryStore::new();
        let logs: Vec<crate::LogEntry> = load_or(&store, "idid.logs.2025-08-26", Vec::new()).unwrap();
        assert!(logs.is_empty());
    }

    #[test]
    fn load_or_returns_fallback_for_malformed_value() {
        let mut store = MemoryStore::new();
        store.write("idid.logs.2025-08-26", "{not json").unwrap();
        let logs: Vec<crate::LogEntry> = load_or(&store, "idid.logs.2025-08-26", Vec::new()).unwrap();
        assert!(logs.is_empty());
    }

    #[test]
    fn save_then_load_preserves_the_value() {
        let mut store = MemoryStore::new();
        save(&mut store, "k", &vec!["운동".to_string()]).unwrap();
        let back: Vec<String> = load_or(&store, "k", Vec::new()).unwrap();
        assert_eq!(back, vec!["운동"]);
    }
}
