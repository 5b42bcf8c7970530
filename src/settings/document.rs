//! Host settings document loading.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("could not read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON or does not match the module shape.
    #[error("could not parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SettingsError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            SettingsError::Io { path, .. } | SettingsError::Parse { path, .. } => path,
        }
    }
}

/// A parsed settings file: hostname → module-specific settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct HostSettingsDocument<S> {
    hosts: HashMap<String, S>,
}

impl<S: DeserializeOwned> HostSettingsDocument<S> {
    /// Read and parse the document at `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<S> HostSettingsDocument<S> {
    /// Move the entry for `hostname` out of the document.
    pub fn take(&mut self, hostname: &str) -> Option<S> {
        self.hosts.remove(hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        value: u32,
    }

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_take() {
        let file = write_file(r#"{"fs-01": {"value": 1}, "fs-02": {"value": 2}}"#);
        let mut doc = HostSettingsDocument::<Entry>::load(file.path()).unwrap();

        assert_eq!(doc.take("fs-01"), Some(Entry { value: 1 }));
        assert_eq!(doc.take("fs-01"), None);
        assert_eq!(doc.take("fs-02"), Some(Entry { value: 2 }));
    }

    #[test]
    fn test_absent_hostname() {
        let file = write_file(r#"{"fs-01": {"value": 1}}"#);
        let mut doc = HostSettingsDocument::<Entry>::load(file.path()).unwrap();
        assert_eq!(doc.take("fs-03"), None);
    }

    #[test]
    fn test_empty_document() {
        let file = write_file("{}");
        let mut doc = HostSettingsDocument::<Entry>::load(file.path()).unwrap();
        assert_eq!(doc.take("fs-01"), None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = HostSettingsDocument::<Entry>::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_file(r#"{"fs-01": "#);
        let err = HostSettingsDocument::<Entry>::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_type_mismatch_is_parse_error() {
        let file = write_file(r#"{"fs-01": {"value": "one"}}"#);
        let err = HostSettingsDocument::<Entry>::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
