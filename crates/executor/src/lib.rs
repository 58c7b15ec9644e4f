//! # jsonstore Executor
//!
//! Batch execution layer for the file-backed key-value store.
//!
//! It provides:
//! - [`Executor`] - Runs one batch of items against one store file
//! - [`Invocation`] - The per-batch operation, path and failure policy
//! - [`Command`]/[`Output`] - One instruction and its result record
//! - [`JsonStoreConfig`] - Defaults loaded from `jsonstore.toml`
//!
//! ## Quick Start
//!
//! ```
//! use jsonstore_executor::{Executor, Invocation, Item, Operation};
//! use serde_json::json;
//!
//! # fn main() -> jsonstore_executor::Result<()> {
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("data/custom_json.json");
//! let executor = Executor::new(Invocation::new(Operation::Save, &path));
//! let records = executor.execute_batch(vec![Item::pair("user:123", "Alice")])?;
//! assert_eq!(
//!     records[0].to_json(),
//!     json!({"success": true, "key": "user:123", "value": "Alice"})
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Result Records
//!
//! | Outcome | Record |
//! |---------|--------|
//! | save, read hit | `{success: true, key, value}` |
//! | read miss | `{success: false, key, value: ""}` |
//! | delete hit | `{success: true, key, deleted: true}` |
//! | delete miss | `{success: false, key, deleted: false, message: "Key not found"}` |
//! | caught failure | `{success: false, error}` |

#![warn(missing_docs)]

mod command;
mod config;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use config::{JsonStoreConfig, CONFIG_FILE_NAME, DEFAULT_STORE_FILE};
pub use executor::{Executor, Invocation};
pub use output::Output;

pub use jsonstore_core::{Error, Item, Operation, Result};
pub use jsonstore_storage::JsonFileStore;
