//! Store configuration and loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "gradebook.toml";

/// Where the store keeps its records and writes its report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding every record.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// CSV file written by `Store::export_report`.
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
    /// Reject `add_record` when the roll number is already stored.
    #[serde(default)]
    pub enforce_unique_rolls: bool,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("students.json")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("student_report.csv")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            report_path: default_report_path(),
            enforce_unique_rolls: false,
        }
    }
}

impl StoreConfig {
    /// Config with both files placed inside `dir` under their default names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data_path: dir.join(default_data_path()),
            report_path: dir.join(default_report_path()),
            enforce_unique_rolls: false,
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str, source_path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| GradebookError::Config {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Load configuration from an explicit path, or `gradebook.toml` in the
/// current directory, falling back to defaults.
///
/// Environment variable overrides: `GRADEBOOK_DATA`, `GRADEBOOK_REPORT`.
pub fn load_config_from(path: Option<&Path>) -> Result<StoreConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            return Err(GradebookError::Config {
                path: p.to_path_buf(),
                message: "config file not found".into(),
            })
        }
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content =
                std::fs::read_to_string(&path).map_err(|e| GradebookError::io(&path, e))?;
            StoreConfig::from_toml_str(&content, &path)?
        }
        None => StoreConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn apply_env_overrides(config: &mut StoreConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(data) = lookup("GRADEBOOK_DATA").filter(|v| !v.is_empty()) {
        config.data_path = PathBuf::from(data);
    }
    if let Some(report) = lookup("GRADEBOOK_REPORT").filter(|v| !v.is_empty()) {
        config.report_path = PathBuf::from(report);
    }
}
