//! Backup settings loaded from `config.json`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Default file name, looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "config.json";

/// What to do with the remaining sites once one site's backup fails
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SiteErrorPolicy {
    /// Stop the whole run at the first failed site
    #[default]
    Abort,
    /// Log the failure and move on to the next site
    Continue,
}

/// Settings for a backup run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the Tableau Server (e.g., "https://tableau.example.com")
    pub server: String,
    /// Sign-in user name
    pub user: String,
    /// Sign-in password
    pub password: String,
    /// Root directory all site backups are written under
    pub backup_dir: PathBuf,
    /// Log file, rotated weekly
    pub logfile_path: PathBuf,
    /// REST API version used in request paths
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Page size for catalog listings
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Failure policy across multiple sites
    #[serde(default)]
    pub on_site_error: SiteErrorPolicy,
}

fn default_api_version() -> String {
    "3.4".to_string()
}

fn default_page_size() -> u32 {
    25
}

impl Settings {
    /// Default config path: `config.json` beside the running executable
    pub fn default_path() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let dir = exe
            .parent()
            .ok_or_else(|| AppError::Config("Could not determine executable directory".into()))?;

        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Load settings from disk.
    ///
    /// Relative `backup_dir` and `logfile_path` values are resolved against
    /// the directory holding the config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Error while reading from \"{}\": {}", path.display(), e))
        })?;

        let mut settings: Settings = serde_json::from_str(&content).map_err(|e| {
            AppError::Config(format!("Error while parsing \"{}\": {}", path.display(), e))
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        settings.backup_dir = resolve_relative(base, &settings.backup_dir);
        settings.logfile_path = resolve_relative(base, &settings.logfile_path);
        settings.validate()?;

        Ok(settings)
    }

    /// Reject values that would only fail later, after signing in
    fn validate(&self) -> Result<()> {
        if self.server.trim().is_empty() {
            return Err(AppError::Config("\"server\" must not be empty".into()));
        }
        if self.page_size == 0 {
            return Err(AppError::Config("\"page_size\" must be greater than zero".into()));
        }
        Ok(())
    }

    /// Server URL without a trailing slash
    pub fn base_url(&self) -> String {
        self.server.trim_end_matches('/').to_string()
    }
}

fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
