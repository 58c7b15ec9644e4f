//! Output → JSON string formatting.
//!
//! Two modes:
//! - **Pretty** (default): `serde_json::to_string_pretty`
//! - **Compact** (`--compact`): one line per batch

use jsonstore_executor::{Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Pretty,
    Compact,
}

/// Format the record array of a batch.
pub fn format_records(outputs: &[Output], mode: OutputMode) -> String {
    let json = match mode {
        OutputMode::Pretty => serde_json::to_string_pretty(outputs),
        OutputMode::Compact => serde_json::to_string(outputs),
    };
    // Records hold only strings and bools, which always serialize.
    json.unwrap_or_else(|_| "[]".to_string())
}

/// Format an error that aborted the batch.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    let value = serde_json::json!({ "error": err.to_string() });
    let json = match mode {
        OutputMode::Pretty => serde_json::to_string_pretty(&value),
        OutputMode::Compact => serde_json::to_string(&value),
    };
    json.unwrap_or_else(|_| format!("(error) {}", err))
}
