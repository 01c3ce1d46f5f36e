//! Render strategies
//!
//! Both strategies share the snapshot and printer machinery and differ only in
//! when they descend:
//!
//! - `GroupedRenderer`: whole directory block first, subdirectories afterwards
//! - `TreeRenderer`: each directory's contents right after its own line

mod grouped;
mod tree;

use std::path::Path;

use termcolor::WriteColor;

use crate::error::ListError;
use crate::listing::{RenderConfig, RenderMode};
use crate::output::EntryPrinter;

pub use grouped::GroupedRenderer;
pub use tree::TreeRenderer;

/// A way of laying out a directory listing.
pub trait RenderStrategy {
    fn render<W: WriteColor>(
        &self,
        root: &Path,
        printer: &mut EntryPrinter<W>,
    ) -> Result<(), ListError>;
}

/// List `root` into `out` with the strategy selected by `config.mode`.
///
/// Output is flushed even when the listing stops on an error, so everything
/// printed before the failure reaches the sink. Returns the sink.
pub fn render_listing<W: WriteColor>(
    root: &Path,
    config: &RenderConfig,
    out: W,
) -> Result<W, ListError> {
    let mut printer = EntryPrinter::new(out, config);

    let result = match config.mode {
        RenderMode::Grouped => GroupedRenderer::new(config).render(root, &mut printer),
        RenderMode::Tree => TreeRenderer::new(config).render(root, &mut printer),
    };

    printer.flush()?;
    result?;
    Ok(printer.into_inner())
}
