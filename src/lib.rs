//! lstree - list directory contents as grouped blocks or an indented tree

pub mod error;
pub mod listing;
pub mod output;
pub mod render;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ListError;
pub use listing::{Entry, EntryKind, OrderPolicy, RenderConfig, RenderMode, Snapshot};
pub use output::{EntryPrinter, format_permissions, format_size_human};
pub use render::{GroupedRenderer, RenderStrategy, TreeRenderer, render_listing};
