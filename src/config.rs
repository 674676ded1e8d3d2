//! Configuration loading and hosts path resolution.
//!
//! Supports HOSTESS_HOME and HOSTESS_HOSTS_FILE env var overrides.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HostessError, Result};
use crate::platform;

pub const HOME_ENV: &str = "HOSTESS_HOME";
pub const HOSTS_FILE_ENV: &str = "HOSTESS_HOSTS_FILE";

/// config.toml structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hosts file to edit instead of the platform default.
    #[serde(default)]
    pub hosts_file: Option<PathBuf>,
}

impl Config {
    /// Load config from `path` (with shared lock when file exists).
    pub fn load(path: &Path) -> Result<Config> {
        if !path.is_file() {
            return Ok(Config::default());
        }
        let io_err = |e| HostessError::io(path, e);
        let mut file = fs::File::open(path).map_err(io_err)?;
        fs2::FileExt::lock_shared(&file).map_err(io_err)?;
        let mut s = String::new();
        file.read_to_string(&mut s).map_err(io_err)?;
        toml::from_str(&s).map_err(|e| HostessError::Config(format!("{}: {e}", path.display())))
    }
}

/// Resolved locations, computed once at startup.
#[derive(Debug, Clone)]
pub struct HostessPaths {
    pub config_file: PathBuf,
    pub hosts_file: PathBuf,
}

impl HostessPaths {
    /// Directory holding config.toml (respects HOSTESS_HOME).
    pub fn default_config_dir() -> PathBuf {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("org", "cxii", "hostess") {
            dirs.config_dir().to_path_buf()
        } else {
            PathBuf::from(".hostess")
        }
    }

    /// Resolve the hosts file: CLI override, then HOSTESS_HOSTS_FILE, then
    /// config.toml, then the platform default.
    pub fn resolve(config_dir: PathBuf, cli_hosts_file: Option<PathBuf>) -> Result<Self> {
        let config_file = config_dir.join("config.toml");
        let hosts_file = match cli_hosts_file {
            Some(p) => p,
            None => match std::env::var_os(HOSTS_FILE_ENV) {
                Some(p) => PathBuf::from(p),
                None => Config::load(&config_file)?
                    .hosts_file
                    .unwrap_or_else(platform::default_hosts_path),
            },
        };
        tracing::debug!(hosts = %hosts_file.display(), config = %config_file.display(), "resolved paths");
        Ok(Self {
            config_file,
            hosts_file,
        })
    }
}
