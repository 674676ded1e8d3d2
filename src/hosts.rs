//! Hosts file text format: parsing and line-level edits.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::Serialize;

const BOM: &[u8] = "\u{feff}".as_bytes();

/// One (alias, address) pairing taken from an entry line.
///
/// `line` is the zero-based physical line the pairing came from. It only
/// identifies lines to delete and is meaningless after the file changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostsEntry {
    pub alias: String,
    pub address: String,
    pub line: usize,
}

/// Token separator. Editors on Windows prefix files with a byte order mark.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Decode raw file bytes for parsing. Invalid UTF-8 becomes U+FFFD; newline
/// bytes are never part of an invalid sequence, so line indices hold.
pub fn decode(content: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(content)
}

/// Parse hosts file content into entries, in source order.
///
/// Blank lines, `#` comment lines and lines with fewer than two tokens are
/// skipped. A line with several aliases yields one entry per alias.
pub fn parse(content: &str) -> Vec<HostsEntry> {
    let mut entries = Vec::new();
    for (index, raw) in content.split('\n').enumerate() {
        let line = raw.trim_matches(is_separator);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut words = line.split(is_separator).filter(|w| !w.is_empty());
        let (Some(address), Some(first_alias)) = (words.next(), words.next()) else {
            continue;
        };
        for alias in std::iter::once(first_alias).chain(words) {
            entries.push(HostsEntry {
                alias: alias.to_string(),
                address: address.to_string(),
                line: index,
            });
        }
    }
    entries
}

/// True if an entry with exactly this alias and address exists.
pub fn contains_pair(entries: &[HostsEntry], alias: &str, address: &str) -> bool {
    entries
        .iter()
        .any(|e| e.alias == alias && e.address == address)
}

/// Line indices of every entry accepted by `pred`.
pub fn matching_lines<F>(entries: &[HostsEntry], pred: F) -> BTreeSet<usize>
where
    F: Fn(&HostsEntry) -> bool,
{
    entries.iter().filter(|e| pred(e)).map(|e| e.line).collect()
}

/// Drop the given physical lines, leaving every other byte untouched.
/// A leading byte order mark survives even when the first line goes.
pub fn remove_lines(content: &[u8], lines: &BTreeSet<usize>) -> Vec<u8> {
    let (bom, body) = match content.strip_prefix(BOM) {
        Some(rest) => (BOM, rest),
        None => (&[][..], content),
    };
    let kept: Vec<&[u8]> = body
        .split(|b| *b == b'\n')
        .enumerate()
        .filter(|(i, _)| !lines.contains(i))
        .map(|(_, l)| l)
        .collect();
    let mut out = bom.to_vec();
    out.extend_from_slice(&kept.join(&b'\n'));
    out
}

/// Text appended to the file for a new entry, optionally preceded by a
/// comment line. An empty comment counts as none.
pub fn append_suffix(alias: &str, address: &str, comment: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(c) = comment.filter(|c| !c.is_empty()) {
        out.push_str("\n# ");
        out.push_str(c);
    }
    out.push('\n');
    out.push_str(address);
    out.push(' ');
    out.push_str(alias);
    out
}
