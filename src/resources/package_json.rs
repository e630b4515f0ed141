//! Targeted edit of the project's `package.json`.
//!
//! Only `config.commitizen.path` is touched. Every other key keeps its
//! value and position (`serde_json` is built with `preserve_order`).
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{Resource, ResourceChange, ResourceState};
use crate::error::SetupError;

/// Commitizen adapter registered by the commitlint routine.
pub const COMMITIZEN_ADAPTER: &str = "git-cz";

/// The `config.commitizen.path` entry of a `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitizenPath {
    path: PathBuf,
    adapter: String,
}

impl CommitizenPath {
    /// Entry for `root/package.json` pointing at `adapter`.
    #[must_use]
    pub fn new(root: &Path, adapter: &str) -> Self {
        Self {
            path: root.join("package.json"),
            adapter: adapter.to_string(),
        }
    }

    /// Path of the manifest.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Value, SetupError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| SetupError::write_failed(&self.path, e))?;
        serde_json::from_str(&text).map_err(|e| {
            SetupError::write_failed(&self.path, io::Error::new(io::ErrorKind::InvalidData, e))
        })
    }

    /// Set `config.commitizen.path`, creating the objects as needed.
    ///
    /// Non-object `config` or `config.commitizen` values are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::FilesystemWriteFailed`] if `package.json` is
    /// missing, is not a JSON object, cannot be parsed, or cannot be
    /// written back.
    pub fn apply(&self) -> Result<ResourceChange, SetupError> {
        let mut manifest = self.read()?;
        if current_adapter(&manifest) == Some(self.adapter.as_str()) {
            return Ok(ResourceChange::AlreadyCorrect);
        }

        if !manifest.is_object() {
            return Err(SetupError::write_failed(
                &self.path,
                io::Error::new(io::ErrorKind::InvalidData, "top-level value is not an object"),
            ));
        }
        if !manifest["config"].is_object() {
            manifest["config"] = Value::Object(Map::new());
        }
        let config = &mut manifest["config"];
        if !config["commitizen"].is_object() {
            config["commitizen"] = Value::Object(Map::new());
        }
        config["commitizen"]["path"] = Value::String(self.adapter.clone());

        let mut text = serde_json::to_string_pretty(&manifest).map_err(|e| {
            SetupError::write_failed(&self.path, io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        text.push('\n');
        std::fs::write(&self.path, text).map_err(|e| SetupError::write_failed(&self.path, e))?;
        Ok(ResourceChange::Applied)
    }
}

fn current_adapter(manifest: &Value) -> Option<&str> {
    manifest
        .get("config")?
        .get("commitizen")?
        .get("path")?
        .as_str()
}

impl Resource for CommitizenPath {
    fn description(&self) -> String {
        format!("{} config.commitizen.path", self.path.display())
    }

    fn current_state(&self) -> Result<ResourceState, SetupError> {
        if !self.path.is_file() {
            return Ok(ResourceState::Missing);
        }
        match self.read() {
            Err(e) => Ok(ResourceState::Invalid {
                reason: e.to_string(),
            }),
            Ok(manifest) => match current_adapter(&manifest) {
                Some(current) if current == self.adapter => Ok(ResourceState::Correct),
                Some(current) => Ok(ResourceState::Incorrect {
                    current: current.to_string(),
                }),
                None => Ok(ResourceState::Incorrect {
                    current: "unset".to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn project(manifest: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), manifest).unwrap();
        dir
    }

    fn read(dir: &tempfile::TempDir) -> String {
        std::fs::read_to_string(dir.path().join("package.json")).unwrap()
    }

    #[test]
    fn adds_commitizen_path_preserving_other_keys() {
        let dir = project(r#"{"name":"demo","version":"1.0.0","config":{"port":8080}}"#);
        let entry = CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER);

        assert_eq!(entry.apply().unwrap(), ResourceChange::Applied);

        insta::assert_snapshot!(read(&dir).trim_end(), @r#"
        {
          "name": "demo",
          "version": "1.0.0",
          "config": {
            "port": 8080,
            "commitizen": {
              "path": "git-cz"
            }
          }
        }
        "#);
    }

    #[test]
    fn existing_commitizen_keys_are_kept() {
        let dir = project(r#"{"config":{"commitizen":{"path":"cz-conventional","maxLen":72}}}"#);
        let entry = CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER);

        entry.apply().unwrap();

        let value: Value = serde_json::from_str(&read(&dir)).unwrap();
        assert_eq!(value["config"]["commitizen"]["path"], "git-cz");
        assert_eq!(value["config"]["commitizen"]["maxLen"], 72);
    }

    #[test]
    fn non_object_config_is_replaced() {
        let dir = project(r#"{"config":"legacy"}"#);
        CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER)
            .apply()
            .unwrap();
        let value: Value = serde_json::from_str(&read(&dir)).unwrap();
        assert_eq!(value["config"]["commitizen"]["path"], "git-cz");
    }

    #[test]
    fn already_set_is_left_alone() {
        let original = "{\"config\": {\"commitizen\": {\"path\": \"git-cz\"}}}";
        let dir = project(original);
        let entry = CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER);

        assert_eq!(entry.current_state().unwrap(), ResourceState::Correct);
        assert_eq!(entry.apply().unwrap(), ResourceChange::AlreadyCorrect);
        assert_eq!(read(&dir), original);
    }

    #[test]
    fn output_ends_with_newline() {
        let dir = project("{}");
        CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER)
            .apply()
            .unwrap();
        assert!(read(&dir).ends_with("}\n"));
    }

    #[test]
    fn missing_manifest_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let entry = CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER);
        assert_eq!(entry.current_state().unwrap(), ResourceState::Missing);
        let err = entry.apply().unwrap_err();
        assert!(matches!(err, SetupError::FilesystemWriteFailed { .. }));
    }

    #[test]
    fn malformed_manifest_is_write_failure_and_untouched() {
        let dir = project("{ not json");
        let entry = CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER);
        assert!(matches!(
            entry.current_state().unwrap(),
            ResourceState::Invalid { .. }
        ));
        let err = entry.apply().unwrap_err();
        assert!(matches!(err, SetupError::FilesystemWriteFailed { .. }));
        assert_eq!(read(&dir), "{ not json");
    }

    #[test]
    fn array_manifest_is_rejected() {
        let dir = project("[]");
        let err = CommitizenPath::new(dir.path(), COMMITIZEN_ADAPTER)
            .apply()
            .unwrap_err();
        assert!(matches!(err, SetupError::FilesystemWriteFailed { .. }));
    }
}
