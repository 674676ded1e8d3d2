//! File store replaces the hosts file in place: permissions, symlinks, no leftovers.

mod common;

use hostess::platform::{FileHostsStore, HostsStore};
use std::fs;

#[test]
fn write_replaces_content_without_temp_leftovers() {
    let dir = common::temp_home();
    let path = common::write_hosts(dir.path(), "old\n");
    let store = FileHostsStore::new(&path);

    store.write(b"new content").unwrap();

    assert_eq!(store.read().unwrap(), b"new content");
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["hosts"]);
}

#[test]
fn write_to_missing_file_fails() {
    let dir = common::temp_home();
    let store = FileHostsStore::new(dir.path().join("nope"));
    assert!(store.write(b"x").is_err());
    assert!(!dir.path().join("nope").exists());
}

#[cfg(unix)]
#[test]
fn write_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = common::temp_home();
    let path = common::write_hosts(dir.path(), "127.0.0.1 localhost\n");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    FileHostsStore::new(&path).write(b"::1 v6\n").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}

#[cfg(unix)]
#[test]
fn write_through_symlink_keeps_link() {
    let dir = common::temp_home();
    let real = common::write_hosts(dir.path(), "127.0.0.1 localhost\n");
    let link = dir.path().join("hosts-link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    FileHostsStore::new(&link).write(b"10.0.0.1 via-link\n").unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), "10.0.0.1 via-link\n");
}

#[cfg(unix)]
#[test]
fn write_in_place_when_directory_is_read_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = common::temp_home();
    let etc = dir.path().join("etc");
    fs::create_dir(&etc).unwrap();
    let path = common::write_hosts(&etc, "127.0.0.1 localhost\n");
    fs::set_permissions(&etc, fs::Permissions::from_mode(0o555)).unwrap();

    let result = FileHostsStore::new(&path).write(b"10.0.0.1 in-place\n");
    fs::set_permissions(&etc, fs::Permissions::from_mode(0o755)).unwrap();

    result.unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "10.0.0.1 in-place\n");
    let names: Vec<_> = fs::read_dir(&etc)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["hosts"]);
}

#[test]
fn read_returns_raw_bytes() {
    let dir = common::temp_home();
    let path = common::write_hosts(dir.path(), b"# Caf\xe9\n127.0.0.1 localhost\n");
    let bytes = FileHostsStore::new(&path).read().unwrap();
    assert_eq!(bytes, b"# Caf\xe9\n127.0.0.1 localhost\n");
}
