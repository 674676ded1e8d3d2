//! Unix (macOS, Linux) platform defaults.

use std::path::PathBuf;

pub fn hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}
