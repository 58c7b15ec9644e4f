//! KV command handlers.
//!
//! Each handler runs one command against an open [`JsonFileStore`] and
//! shapes the result record. Save and a delete hit rewrite the file before
//! returning; read never writes.

use jsonstore_storage::JsonFileStore;

use crate::{Output, Result};

// =============================================================================
// Individual Handlers
// =============================================================================

/// Handle Save command.
pub fn kv_save(store: &mut JsonFileStore, key: String, value: String) -> Result<Output> {
    store.set(&key, &value)?;
    Ok(Output::Saved { key, value })
}

/// Handle Read command.
pub fn kv_read(store: &JsonFileStore, key: String) -> Result<Output> {
    let value = store.get(&key);
    Ok(Output::Value { key, value })
}

/// Handle Delete command.
pub fn kv_delete(store: &mut JsonFileStore, key: String) -> Result<Output> {
    let deleted = store.remove(&key)?;
    Ok(Output::Deleted { key, deleted })
}
