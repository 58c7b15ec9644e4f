//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. Misses are outputs
//! with `success: false`, not errors.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Message attached to a delete miss.
pub const KEY_NOT_FOUND: &str = "Key not found";

/// One result record of a batch.
///
/// Serializes to the flat JSON record the host consumes:
///
/// ```text
/// Saved               -> {"success": true,  "key": k, "value": v}
/// Value(Some(v))      -> {"success": true,  "key": k, "value": v}
/// Value(None)         -> {"success": false, "key": k, "value": ""}
/// Deleted(true)       -> {"success": true,  "key": k, "deleted": true}
/// Deleted(false)      -> {"success": false, "key": k, "deleted": false, "message": "Key not found"}
/// Failed              -> {"success": false, "error": e}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Value stored; echoes the original value, not its encoding
    Saved {
        /// Store key
        key: String,
        /// Value as given by the caller
        value: String,
    },

    /// Read result; `None` when the key is absent
    Value {
        /// Store key
        key: String,
        /// Decoded value
        value: Option<String>,
    },

    /// Delete result; `false` when the key was absent
    Deleted {
        /// Store key
        key: String,
        /// Whether the key existed
        deleted: bool,
    },

    /// Batch-level failure swallowed by continue-on-fail
    Failed {
        /// Error message
        error: String,
    },
}

impl Output {
    /// The record's `success` flag.
    pub fn success(&self) -> bool {
        match self {
            Output::Saved { .. } => true,
            Output::Value { value, .. } => value.is_some(),
            Output::Deleted { deleted, .. } => *deleted,
            Output::Failed { .. } => false,
        }
    }

    /// Key of the record, absent for failures.
    pub fn key(&self) -> Option<&str> {
        match self {
            Output::Saved { key, .. } | Output::Value { key, .. } | Output::Deleted { key, .. } => {
                Some(key)
            }
            Output::Failed { .. } => None,
        }
    }

    /// Record as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        // Serializing into a Value cannot fail for string and bool fields.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("success", &self.success())?;
        match self {
            Output::Saved { key, value } => {
                map.serialize_entry("key", key)?;
                map.serialize_entry("value", value)?;
            }
            Output::Value { key, value } => {
                map.serialize_entry("key", key)?;
                map.serialize_entry("value", value.as_deref().unwrap_or(""))?;
            }
            Output::Deleted { key, deleted } => {
                map.serialize_entry("key", key)?;
                map.serialize_entry("deleted", deleted)?;
                if !deleted {
                    map.serialize_entry("message", KEY_NOT_FOUND)?;
                }
            }
            Output::Failed { error } => {
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}
