//! Grouped rendering: one block per directory, then descend

use std::path::{Path, PathBuf};

use termcolor::WriteColor;
use tracing::debug;

use crate::error::ListError;
use crate::listing::{OrderPolicy, RenderConfig, Snapshot};
use crate::output::EntryPrinter;

use super::RenderStrategy;

/// Prints a directory's whole snapshot as a block before visiting its
/// subdirectories depth-first.
pub struct GroupedRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> GroupedRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    fn list_dir<W: WriteColor>(
        &self,
        dir: &Path,
        printer: &mut EntryPrinter<W>,
    ) -> Result<(), ListError> {
        let mut snapshot = Snapshot::read(dir)?;

        if self.config.recursive {
            printer.header(dir)?;
        }

        OrderPolicy::from_sort_by_time(self.config.sort_by_time).apply(&mut snapshot);

        for entry in snapshot.visible() {
            printer.entry(entry, None)?;
        }
        printer.end_block()?;

        if !self.config.recursive || !snapshot.has_subdirectories() {
            return Ok(());
        }

        // Release this level's entries before descending.
        let subdirs: Vec<PathBuf> = snapshot
            .subdirectories()
            .map(|entry| entry.path_in(dir))
            .collect();
        drop(snapshot);

        for subdir in subdirs {
            debug!("descending into '{}'", subdir.display());
            self.list_dir(&subdir, printer)?;
        }
        Ok(())
    }
}

impl RenderStrategy for GroupedRenderer<'_> {
    fn render<W: WriteColor>(
        &self,
        root: &Path,
        printer: &mut EntryPrinter<W>,
    ) -> Result<(), ListError> {
        self.list_dir(root, printer)
    }
}
