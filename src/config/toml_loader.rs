//! TOML configuration file parsing.
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::SetupError;

/// Load and deserialize a TOML file.
///
/// A missing file is not an error: it deserializes as empty TOML, so every
/// section of `T` must be optional or have a default.
///
/// # Errors
///
/// Returns [`SetupError::InvalidConfig`] if the file cannot be read or
/// parsed.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, SetupError> {
    let invalid = |message: String| SetupError::InvalidConfig {
        path: path.to_path_buf(),
        message,
    };

    if !path.exists() {
        return toml::from_str("").map_err(|e| invalid(e.to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;

    toml::from_str(&content).map_err(|e| invalid(e.to_string()))
}
