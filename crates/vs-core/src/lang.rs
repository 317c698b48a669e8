//! The per-mod language table (`lang/en.json`).
//!
//! A flat `key → display name` map. Every change is a full read-modify-write
//! of the file; keys keep their original position when their value changes.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec;
use crate::error::VsResult;

/// Locale written by the asset forms.
pub const DEFAULT_LOCALE: &str = "en";

/// A flat map of generated keys to display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable {
    entries: IndexMap<String, String>,
}

impl LanguageTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the table at `path`. A missing or malformed file is an empty table.
    pub fn load(path: &Path) -> Self {
        codec::read_lenient(path)
    }

    /// Write the whole table to `path`.
    pub fn save(&self, path: &Path) -> VsResult<()> {
        codec::write_json(path, self)
    }

    /// Read the table at `path`, apply `f`, and write it back.
    pub fn update<F>(path: &Path, f: F) -> VsResult<Self>
    where
        F: FnOnce(&mut Self),
    {
        let mut table = Self::load(path);
        f(&mut table);
        table.save(path)?;
        Ok(table)
    }

    /// Display string for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert `key` or replace its value in place. Returns the previous value.
    pub fn upsert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.entries.shift_remove(key);
        if removed.is_none() {
            debug!(key, "language key not present, nothing to remove");
        }
        removed
    }

    /// Replace `old_key` with `new_key` carrying `value`.
    pub fn rename(&mut self, old_key: &str, new_key: impl Into<String>, value: impl Into<String>) {
        let new_key = new_key.into();
        if old_key != new_key {
            self.remove(old_key);
        }
        self.upsert(new_key, value);
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn upsert_overwrites_without_duplicating() {
        let mut table = LanguageTable::new();
        table.upsert("item-a", "A");
        table.upsert("block-b", "B");
        assert_eq!(table.upsert("item-a", "Alpha").as_deref(), Some("A"));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("item-a"), Some("Alpha"));
        assert_eq!(table.get("block-b"), Some("B"));
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["item-a", "block-b"]);
    }

    #[test]
    fn removing_absent_key_is_noop() {
        let mut table = LanguageTable::new();
        table.upsert("item-a", "A");
        assert!(table.remove("item-zzz").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn rename_leaves_single_new_key() {
        let mut table = LanguageTable::new();
        table.upsert("block-old", "Old");
        table.upsert("item-x", "X");
        table.rename("block-old", "block-new", "New");
        assert!(!table.contains_key("block-old"));
        assert_eq!(table.get("block-new"), Some("New"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rename_to_same_key_updates_value() {
        let mut table = LanguageTable::new();
        table.upsert("item-a", "A");
        table.rename("item-a", "item-a", "Alpha");
        assert_eq!(table.get("item-a"), Some("Alpha"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn update_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lang/en.json");
        LanguageTable::update(&path, |t| {
            t.upsert("item-copperingot", "Copper Ingot");
        })
        .unwrap();
        LanguageTable::update(&path, |t| {
            t.upsert("block-granite", "Granite");
        })
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"item-copperingot\": \"Copper Ingot\""));
        let table = LanguageTable::load(&path);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn malformed_file_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en.json");
        fs::write(&path, "{ \"item-a\": ").unwrap();
        let table = LanguageTable::update(&path, |t| {
            t.upsert("item-b", "B");
        })
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(LanguageTable::load(&path), table);
    }
}
