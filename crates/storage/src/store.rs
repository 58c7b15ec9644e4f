//! JsonFileStore: file-backed key-value store
//!
//! ## Design
//!
//! A handle is identified solely by its path. `open` loads the whole file
//! into memory; every mutation updates the in-memory mapping and then
//! rewrites the whole file before returning. Reads never touch the disk.
//!
//! ## Concurrency
//!
//! None. Two handles on the same path do not see each other's writes after
//! opening, and concurrent writers lose updates at full-file granularity.
//!
//! ## API
//!
//! - `open(path)` - Load (or start empty), creating the parent directory
//! - `get(key)` - Decoded value, `None` on miss
//! - `set(key, value)` - Encode, store, persist
//! - `remove(key)` - Remove and persist on hit; `false` on miss

use std::path::{Path, PathBuf};

use jsonstore_core::Result;
use tracing::debug;

use crate::codec::{Base64Codec, ValueCodec};
use crate::file::{self, Entries};

/// File-backed key-value store.
///
/// # Example
///
/// ```
/// use jsonstore_storage::JsonFileStore;
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut store = JsonFileStore::open(dir.path().join("data/store.json")).unwrap();
///
/// store.set("user:123", "Alice").unwrap();
/// assert_eq!(store.get("user:123"), Some("Alice".to_string()));
///
/// assert!(store.remove("user:123").unwrap());
/// assert!(!store.remove("user:123").unwrap());
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Entries,
    codec: Base64Codec,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// Creates the parent directory if needed. A missing file yields an empty
    /// store and is not created until the first mutation.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](jsonstore_core::Error::Io) if the directory cannot be
    /// created or the file cannot be read;
    /// [`Error::Parse`](jsonstore_core::Error::Parse) if the file is not a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = file::load(&path)?;
        Ok(Self {
            path,
            entries,
            codec: Base64Codec,
        })
    }

    /// Path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the decoded value for `key`, or `None` if absent.
    ///
    /// Never fails: a value that is not clean base64 decodes leniently.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .map(|encoded| self.codec.decode(encoded))
    }

    /// Store `value` under `key`, overwriting silently, then persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let encoded = self.codec.encode(value);
        self.entries.insert(key.to_string(), encoded);
        debug!(target: "jsonstore::store", key, "Set key");
        self.flush()
    }

    /// Remove `key`. Persists and returns `true` on a hit; returns `false`
    /// without writing on a miss.
    pub fn remove(&mut self, key: &str) -> Result<bool> {
        if self.entries.remove(key).is_none() {
            return Ok(false);
        }
        debug!(target: "jsonstore::store", key, "Removed key");
        self.flush()?;
        Ok(true)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Encoded value for `key` exactly as it sits in the file.
    pub fn encoded(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite the whole file from the in-memory mapping.
    fn flush(&self) -> Result<()> {
        file::persist(&self.path, &self.entries)
    }
}
