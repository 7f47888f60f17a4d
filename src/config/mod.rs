use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Where project records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Local SQLite file (`database`).
    #[default]
    Sqlite,
    /// REST API at `api_url`.
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    pub api_url: String,
    pub database: String,
    /// Refresh period of `watch`, in milliseconds.
    pub refresh_interval_ms: u64,
    /// Offset used to display update timestamps (Asia/Bangkok by default).
    pub display_utc_offset_hours: i32,
    /// Default directory for export files.
    pub export_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Sqlite,
            api_url: default_api_url(),
            database: Self::database_file().to_string_lossy().to_string(),
            refresh_interval_ms: 1000,
            display_utc_offset_hours: 7,
            export_dir: ".".to_string(),
        }
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:5005/api".to_string()
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("projmgr")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".projmgr")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("projmgr.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("projmgr.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from the file take their default value.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration file (creating its directory).
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }
}
