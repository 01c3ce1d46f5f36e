//! Tree rendering: print each entry, descending into directories inline

use std::path::Path;

use termcolor::WriteColor;

use crate::error::ListError;
use crate::listing::{OrderPolicy, RenderConfig, Snapshot};
use crate::output::EntryPrinter;

use super::RenderStrategy;

/// Walks depth-first, printing an entry and then its contents before the next
/// sibling. Depth is passed down explicitly, so returning from a subdirectory
/// restores the caller's indentation.
pub struct TreeRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    fn walk<W: WriteColor>(
        &self,
        dir: &Path,
        depth: usize,
        printer: &mut EntryPrinter<W>,
    ) -> Result<(), ListError> {
        let mut snapshot = Snapshot::read(dir)?;
        OrderPolicy::from_sort_by_time(self.config.sort_by_time).apply(&mut snapshot);

        let indent = self.config.indents_tree();
        for entry in snapshot.visible() {
            printer.entry(entry, indent.then_some(depth))?;

            if self.config.recursive && entry.is_dir() {
                self.walk(&entry.path_in(dir), depth + 1, printer)?;
            }
        }
        Ok(())
    }
}

impl RenderStrategy for TreeRenderer<'_> {
    fn render<W: WriteColor>(
        &self,
        root: &Path,
        printer: &mut EntryPrinter<W>,
    ) -> Result<(), ListError> {
        self.walk(root, 0, printer)?;
        if printer.is_inline() {
            printer.end_block()?;
        }
        Ok(())
    }
}
