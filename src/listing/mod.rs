//! Directory traversal core
//!
//! A directory is read into a [`Snapshot`] of [`Entry`] records, optionally
//! reordered by an [`OrderPolicy`], and handed to a render strategy.
//!
//! - `config` - Resolved listing options
//! - `entry` - Entry records and the metadata extractor
//! - `snapshot` - Directory snapshotter
//! - `order` - Ordering policies

mod config;
mod entry;
mod order;
mod snapshot;

pub use config::{RenderConfig, RenderMode};
pub use entry::{Entry, EntryKind, PSEUDO_ENTRIES, extract_entry};
pub use order::{OrderPolicy, newest_first};
pub use snapshot::Snapshot;
