//! Storage layer for jsonstore
//!
//! This crate implements the file-backed store:
//! - `file`: loader and persister for the flat JSON document
//! - `codec`: value encoding applied between callers and disk (base64)
//! - `JsonFileStore`: handle owning one path and its loaded mapping
//!
//! # Durability
//!
//! Every mutation rewrites the whole file in place. There is no temp file,
//! no rename and no lock: a crash mid-write can corrupt the store, and two
//! writers on one path race with last-writer-wins semantics.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod file;
pub mod store;

pub use codec::{Base64Codec, ValueCodec};
pub use file::Entries;
pub use store::JsonFileStore;
