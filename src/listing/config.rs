//! Configuration types for listing

/// Presentation strategy for a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// One labeled block per directory, then descend.
    #[default]
    Grouped,
    /// Entries printed inline, descending immediately with indentation.
    Tree,
}

/// Resolved listing options, shared unchanged by every recursive call.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Long format: permissions, links, owner, group, size, time, name
    pub show_details: bool,
    pub recursive: bool,
    /// Newest first
    pub sort_by_time: bool,
    pub human_readable_sizes: bool,
    pub mode: RenderMode,
    pub use_color: bool,
}

impl RenderConfig {
    /// Whether tree lines carry the depth prefix.
    pub fn indents_tree(&self) -> bool {
        self.mode == RenderMode::Tree && self.recursive
    }
}
