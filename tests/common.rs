//! Shared test helpers.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use hostess::error::Result;
use hostess::platform::HostsStore;
use tempfile::TempDir;

/// Create a temp directory for hosts and config files.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostess_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write a hosts file named `hosts` under `dir` and return its path.
pub fn write_hosts(dir: &Path, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join("hosts");
    fs::write(&path, content).unwrap();
    path
}

/// `hostess` binary pointed at `hosts`, with config isolated under `home`.
pub fn hostess(home: &Path, hosts: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("hostess").unwrap();
    cmd.env("HOSTESS_HOME", home).env("HOSTESS_HOSTS_FILE", hosts);
    cmd
}

/// In-memory store that counts reads and writes.
#[derive(Default)]
pub struct MemoryStore {
    pub content: RefCell<Vec<u8>>,
    pub reads: Cell<usize>,
    pub writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new(content: impl AsRef<[u8]>) -> Self {
        Self {
            content: RefCell::new(content.as_ref().to_vec()),
            ..Default::default()
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.content.borrow().clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes()).unwrap()
    }
}

impl HostsStore for MemoryStore {
    fn read(&self) -> Result<Vec<u8>> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.bytes())
    }

    fn write(&self, content: &[u8]) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        *self.content.borrow_mut() = content.to_vec();
        Ok(())
    }
}
