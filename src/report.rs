//! Grouped listing of hosts entries by address family.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Serialize;

use crate::hosts::HostsEntry;

const TAB_WIDTH: usize = 4;
const ARROW: &str = " ->";

/// Address family of an entry's address text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    V4,
    V6,
    Other,
}

impl AddressKind {
    pub fn of(address: &str) -> Self {
        if address.parse::<Ipv4Addr>().is_ok() {
            AddressKind::V4
        } else if is_ipv6(address) {
            AddressKind::V6
        } else {
            AddressKind::Other
        }
    }

    fn heading(self) -> &'static str {
        match self {
            AddressKind::V4 => "ipv4 entries",
            AddressKind::V6 => "ipv6 entries",
            AddressKind::Other => "other entries",
        }
    }
}

/// IPv6 text, optionally scoped with a non-empty `%zone` suffix.
fn is_ipv6(address: &str) -> bool {
    let addr = match address.split_once('%') {
        Some((_, "")) => return false,
        Some((addr, _)) => addr,
        None => address,
    };
    addr.parse::<Ipv6Addr>().is_ok()
}

/// Entries split into family buckets, each keeping source order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub ipv4: Vec<HostsEntry>,
    pub ipv6: Vec<HostsEntry>,
    pub other: Vec<HostsEntry>,
}

impl Report {
    pub fn classify(entries: Vec<HostsEntry>) -> Self {
        let mut report = Report::default();
        for entry in entries {
            match AddressKind::of(&entry.address) {
                AddressKind::V4 => report.ipv4.push(entry),
                AddressKind::V6 => report.ipv6.push(entry),
                AddressKind::Other => report.other.push(entry),
            }
        }
        report
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty() && self.other.is_empty()
    }

    fn blocks(&self) -> [(AddressKind, &[HostsEntry]); 3] {
        [
            (AddressKind::V4, self.ipv4.as_slice()),
            (AddressKind::V6, self.ipv6.as_slice()),
            (AddressKind::Other, self.other.as_slice()),
        ]
    }

    /// Render the aligned text listing.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "hosts file is empty\n".to_string();
        }
        let layout = Layout::measure(self.ipv4.iter().chain(&self.ipv6).chain(&self.other));
        let mut out = String::new();
        for (kind, entries) in self.blocks() {
            if entries.is_empty() {
                continue;
            }
            out.push_str(kind.heading());
            out.push('\n');
            out.push_str(&"=".repeat(layout.rule_width()));
            out.push('\n');
            for entry in entries {
                layout.push_row(&mut out, entry);
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Column widths shared by every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of the alias column, arrow included, on a tab stop.
    pub alias_column: usize,
    pub address_width: usize,
}

impl Layout {
    pub fn measure<'a>(entries: impl IntoIterator<Item = &'a HostsEntry>) -> Self {
        let (mut alias_width, mut address_width) = (0, 0);
        for entry in entries {
            alias_width = alias_width.max(entry.alias.chars().count());
            address_width = address_width.max(entry.address.chars().count());
        }
        let padded = alias_width + ARROW.len();
        // Nearest tab stop (halves round up), plus one more.
        let alias_column = (padded + TAB_WIDTH / 2) / TAB_WIDTH * TAB_WIDTH + TAB_WIDTH;
        Layout {
            alias_column,
            address_width,
        }
    }

    pub fn rule_width(&self) -> usize {
        self.alias_column + self.address_width
    }

    fn push_row(&self, out: &mut String, entry: &HostsEntry) {
        let used = entry.alias.chars().count() + ARROW.len();
        let pad = self.alias_column.saturating_sub(used);
        out.push_str(&format!("{}{}{}{}\n", entry.alias, ARROW, " ".repeat(pad), entry.address));
    }
}
