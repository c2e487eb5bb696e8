//! Where sidedrawer keeps its files
//!
//! One directory holds `config.yaml` and a `logs/` subdirectory. It lives
//! under `$XDG_CONFIG_HOME` (falling back to `~/.config`), or `%APPDATA%`
//! on Windows.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "sidedrawer";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// The sidedrawer directory and the files inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    root: PathBuf,
}

impl AppDirs {
    /// Resolve from the process environment
    pub fn from_env() -> Option<Self> {
        #[cfg(target_os = "windows")]
        let base = std::env::var_os("APPDATA").map(PathBuf::from);

        #[cfg(not(target_os = "windows"))]
        let base = config_base(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir());

        base.map(Self::under)
    }

    /// `<base>/sidedrawer`
    pub fn under(base: impl AsRef<Path>) -> Self {
        Self {
            root: base.as_ref().join(APP_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Create the logs directory if needed and return it
    pub fn ensure_logs_dir(&self) -> Result<PathBuf> {
        let logs = self.logs_dir();
        fs::create_dir_all(&logs)
            .with_context(|| format!("Failed to create log directory {}", logs.display()))?;
        Ok(logs)
    }
}

/// Base directory for per-user config on Unix-like systems
///
/// `XDG_CONFIG_HOME` wins when it is an absolute path; empty or relative
/// values are ignored as the XDG base directory rules require.
pub fn config_base(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .or_else(|| home.map(|home| home.join(".config")))
}
