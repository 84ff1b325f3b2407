//! Configuration loading
//!
//! Handles parsing of `tick.toml` configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration file name looked up in the platform config directory
pub const CONFIG_FILE: &str = "tick.toml";
/// Save file name used inside the platform data directory
pub const DATA_FILE: &str = "tasks.txt";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the save file; defaults to the platform data directory
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `path`, or from the platform config
    /// directory when no path is given. A missing default config file is
    /// fine; an explicitly named one must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::InvalidConfig(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => match default_config_file() {
                Some(path) if path.exists() => path,
                _ => return Ok(Config::default()),
            },
        };

        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolved save-file path: the configured one, or the platform default
    pub fn data_file(&self) -> PathBuf {
        self.storage.file.clone().unwrap_or_else(default_data_file)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tick")
}

fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

fn default_data_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DATA_FILE))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_expected() {
        let cfg = Config::default();
        assert!(cfg.storage.file.is_none());
        assert!(cfg.data_file().ends_with(DATA_FILE));
    }

    #[test]
    fn load_parses_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[storage]
file = "/tmp/elsewhere/tasks.txt"
"#,
        )
        .unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(
            cfg.data_file(),
            PathBuf::from("/tmp/elsewhere/tasks.txt")
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "storage = [not toml").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }
}
