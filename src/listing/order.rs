//! Ordering policies applied to a snapshot before it is printed

use std::cmp::Ordering;

use super::entry::Entry;
use super::snapshot::Snapshot;

/// How a snapshot's entries are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Keep the order the filesystem delivered.
    #[default]
    Enumeration,
    /// Newest modification time first.
    NewestFirst,
}

impl OrderPolicy {
    pub fn from_sort_by_time(sort_by_time: bool) -> Self {
        if sort_by_time {
            OrderPolicy::NewestFirst
        } else {
            OrderPolicy::Enumeration
        }
    }

    pub fn apply(self, snapshot: &mut Snapshot) {
        match self {
            OrderPolicy::Enumeration => {}
            OrderPolicy::NewestFirst => snapshot.entries_mut().sort_by(newest_first),
        }
    }
}

/// Strictly descending by timestamp; ties fall back to name so the order is total.
pub fn newest_first(a: &Entry, b: &Entry) -> Ordering {
    b.modified_at
        .cmp(&a.modified_at)
        .then_with(|| a.name.cmp(&b.name))
}
