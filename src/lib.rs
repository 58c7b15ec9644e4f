//! jsonstore - key-value store backed by a flat JSON file
//!
//! Values are stored base64-encoded in a single JSON object on disk. Each
//! batch loads the file once, applies one operation (save, read or delete)
//! to every item in order, and rewrites the whole file after every mutating
//! item.
//!
//! # Quick Start
//!
//! ```ignore
//! use jsonstore::{Executor, Invocation, Item, Operation};
//!
//! let save = Executor::new(Invocation::new(Operation::Save, "data/custom_json.json"));
//! save.execute_batch(vec![Item::pair("user:123", "Alice")])?;
//!
//! let read = Executor::new(Invocation::new(Operation::Read, "data/custom_json.json"));
//! let records = read.execute_batch(vec![Item::key("user:123")])?;
//! ```
//!
//! # Architecture
//!
//! Batches go through the [`Executor`]. [`JsonFileStore`] is the store
//! handle underneath and can be used directly for single operations.
//!
//! # Hazards
//!
//! Writes are neither atomic nor locked. A crash mid-write can truncate the
//! file, and concurrent writers on one path lose updates.

// Re-export the public API from jsonstore-executor
pub use jsonstore_executor::*;

/// Value codecs used between callers and the store file.
pub use jsonstore_storage::codec;
