//! Error kinds surfaced by hosts operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostessError {
    /// An identical (alias, address) pair is already present.
    #[error("entry already exists: {address} {alias}")]
    Conflict { alias: String, address: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl HostessError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HostessError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Message shown to the user. I/O failures on the hosts file are almost
    /// always missing write permission, so they carry a privilege hint.
    pub fn user_message(&self) -> String {
        match self {
            HostessError::Conflict { .. } => self.to_string(),
            HostessError::Io { .. } => format!("error: {self}, did you forget to use sudo?"),
            HostessError::Config(_) => format!("error: {self}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, HostessError>;
