//! Command handlers: append, remove by address or alias, enumerate.
//!
//! Each handler reparses the file from the store; nothing is cached between
//! calls. Concurrent invocations are not serialized, so two editors racing
//! on one file can overwrite each other's changes.

use crate::error::{HostessError, Result};
use crate::hosts::{self, HostsEntry};
use crate::platform::HostsStore;
use crate::report::Report;

/// Outcome of a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Nothing matched; the file was not touched.
    NoMatch,
    /// This many physical lines were deleted.
    Removed(usize),
}

fn load(store: &dyn HostsStore) -> Result<Vec<HostsEntry>> {
    let entries = hosts::parse(&hosts::decode(&store.read()?));
    tracing::debug!(count = entries.len(), "parsed hosts entries");
    Ok(entries)
}

/// Append `address alias`, optionally under a `# comment` line.
///
/// Fails with [`HostessError::Conflict`] when the exact pair already exists.
pub fn append_entry(
    store: &dyn HostsStore,
    alias: &str,
    address: &str,
    comment: Option<&str>,
) -> Result<()> {
    let mut content = store.read()?;
    let entries = hosts::parse(&hosts::decode(&content));
    if hosts::contains_pair(&entries, alias, address) {
        return Err(HostessError::Conflict {
            alias: alias.to_string(),
            address: address.to_string(),
        });
    }
    content.extend_from_slice(hosts::append_suffix(alias, address, comment).as_bytes());
    store.write(&content)
}

/// Delete every line carrying `address`.
pub fn remove_by_address(store: &dyn HostsStore, address: &str) -> Result<Removal> {
    remove_where(store, |e| e.address == address)
}

/// Delete every line carrying `alias`, together with any other aliases on
/// those lines. Comment lines above them stay.
pub fn remove_by_alias(store: &dyn HostsStore, alias: &str) -> Result<Removal> {
    remove_where(store, |e| e.alias == alias)
}

fn remove_where<F>(store: &dyn HostsStore, pred: F) -> Result<Removal>
where
    F: Fn(&HostsEntry) -> bool,
{
    let lines = hosts::matching_lines(&load(store)?, pred);
    if lines.is_empty() {
        return Ok(Removal::NoMatch);
    }
    tracing::debug!(?lines, "removing lines");
    let content = store.read()?;
    store.write(&hosts::remove_lines(&content, &lines))?;
    Ok(Removal::Removed(lines.len()))
}

/// Parse and group all entries for listing.
pub fn enumerate(store: &dyn HostsStore) -> Result<Report> {
    Ok(Report::classify(load(store)?))
}
