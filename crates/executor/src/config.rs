//! Store configuration via `jsonstore.toml`
//!
//! Holds the defaults a host falls back to when an invocation does not name
//! a file path or failure policy. Missing fields take their defaults, so an
//! empty file is a valid config.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use jsonstore_core::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "jsonstore.toml";

/// Store file used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_STORE_FILE: &str = "data/custom_json.json";

/// Store configuration loaded from `jsonstore.toml`.
///
/// # Example
///
/// ```toml
/// # Store file (default: <cwd>/data/custom_json.json)
/// file_path = "/var/lib/jsonstore/store.json"
///
/// # Emit one {success: false, error} record instead of failing the batch
/// continue_on_fail = true
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JsonStoreConfig {
    /// Path of the JSON store file.
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
    /// Swallow batch failures into a single error record.
    #[serde(default)]
    pub continue_on_fail: bool,
}

/// `<cwd>/data/custom_json.json`, or the relative path if cwd is unavailable.
pub fn default_file_path() -> PathBuf {
    std::env::current_dir()
        .map(|dir| dir.join(DEFAULT_STORE_FILE))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_FILE))
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            continue_on_fail: false,
        }
    }
}

impl JsonStoreConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# jsonstore configuration
#
# Store file. Relative paths resolve against the working directory.
# Default: <cwd>/data/custom_json.json
# file_path = "data/custom_json.json"

# On failure, emit a single {success: false, error} record for the whole
# batch instead of failing the invocation (default: false).
continue_on_fail = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| {
            Error::invalid_input(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Read `path` if it exists, otherwise return the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write [`default_toml`](Self::default_toml) to `path` if nothing is
    /// there yet. Backs `jsonstore init`.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::io(path, e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_data_dir() {
        let config = JsonStoreConfig::default();
        assert!(config.file_path.ends_with("data/custom_json.json"));
        assert!(!config.continue_on_fail);
    }

    #[test]
    fn default_toml_parses_correctly() {
        let config: JsonStoreConfig = toml::from_str(JsonStoreConfig::default_toml()).unwrap();
        assert!(!config.continue_on_fail);
        assert!(config.file_path.ends_with(DEFAULT_STORE_FILE));
    }

    #[test]
    fn parse_full_config() {
        let config: JsonStoreConfig = toml::from_str(
            r#"
file_path = "/srv/kv.json"
continue_on_fail = true
"#,
        )
        .unwrap();
        assert_eq!(config.file_path, PathBuf::from("/srv/kv.json"));
        assert!(config.continue_on_fail);
    }

    #[test]
    fn parse_invalid_type_returns_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "continue_on_fail = \"sometimes\"\n").unwrap();

        let err = JsonStoreConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn from_file_with_missing_field_uses_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        // Empty config file, all fields should use defaults
        std::fs::write(&path, "").unwrap();

        let config = JsonStoreConfig::from_file(&path).unwrap();
        assert_eq!(config, JsonStoreConfig::default());
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = JsonStoreConfig::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn from_file_or_default_without_file() {
        let dir = TempDir::new().unwrap();
        let config =
            JsonStoreConfig::from_file_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, JsonStoreConfig::default());
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        JsonStoreConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = JsonStoreConfig::from_file(&path).unwrap();
        assert!(!config.continue_on_fail);
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(&path, "continue_on_fail = true\n").unwrap();
        JsonStoreConfig::write_default_if_missing(&path).unwrap();

        let config = JsonStoreConfig::from_file(&path).unwrap();
        assert!(config.continue_on_fail);
    }
}
