//! Core types for jsonstore
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: Error type shared by the storage and executor layers
//! - Operation: The three key-value operations a batch can run
//! - Item: One unit of a batch (key plus optional value)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Item, Operation};
