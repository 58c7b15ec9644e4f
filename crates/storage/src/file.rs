//! Store loader and persister.
//!
//! The on-disk format is a single JSON object mapping store keys to encoded
//! values. No metadata, version tag or checksum is written.
//!
//! ```json
//! {
//!   "greeting": "aGVsbG8=",
//!   "x": "MQ=="
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use jsonstore_core::{Error, Result};
use tracing::debug;

/// In-memory form of a store file: key -> encoded value, sorted by key.
pub type Entries = BTreeMap<String, String>;

/// Create the parent directory of `path` (recursively) if it is missing.
///
/// A bare file name has no parent component and lives in the current
/// directory, so nothing is created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Load the store at `path`.
///
/// Creates the parent directory first, even though loading never writes the
/// file itself. A missing file is an empty store. Content that is not a JSON
/// object of strings fails with [`Error::Parse`]; no recovery is attempted.
pub fn load(path: &Path) -> Result<Entries> {
    ensure_parent_dir(path)?;

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(target: "jsonstore::file", path = %path.display(), "Store file missing, starting empty");
            return Ok(Entries::new());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let entries: Entries = serde_json::from_slice(&bytes).map_err(|e| Error::parse(path, e))?;
    debug!(
        target: "jsonstore::file",
        path = %path.display(),
        entries = entries.len(),
        "Loaded store"
    );
    Ok(entries)
}

/// Overwrite the store at `path` with `entries`.
///
/// Writes pretty-printed JSON (2-space indent, sorted keys) straight over the
/// existing file. A crash mid-write leaves a truncated file behind.
pub fn persist(path: &Path, entries: &Entries) -> Result<()> {
    // String keys always serialize, so this only surfaces serde_json bugs.
    let content = serde_json::to_vec_pretty(entries).map_err(|e| Error::parse(path, e))?;
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    debug!(
        target: "jsonstore::file",
        path = %path.display(),
        entries = entries.len(),
        "Persisted store"
    );
    Ok(())
}
