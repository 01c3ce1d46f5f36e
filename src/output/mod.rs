//! Listing output
//!
//! - `format` - Field encoders (permissions, sizes, timestamps)
//! - `owners` - Owner and group name lookup with numeric fallback
//! - `printer` - Line writer used by the render strategies

mod format;
mod owners;
mod printer;

pub use format::{
    HUMAN_SIZE_WIDTH, PLAIN_SIZE_WIDTH, SIZE_UNITS, format_permissions, format_size_field,
    format_size_human, format_timestamp, scale_size, type_glyph,
};
pub use owners::OwnerNames;
pub use printer::{EntryPrinter, tree_prefix};
