//! Windows platform defaults.

use std::path::PathBuf;

/// Hosts file under `%SystemRoot%`, falling back to the stock install location.
pub fn hosts_path() -> PathBuf {
    match std::env::var_os("SystemRoot") {
        Some(root) => PathBuf::from(root).join(r"System32\drivers\etc\hosts"),
        None => PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts"),
    }
}
