//! Error taxonomy for listing operations

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    /// The directory itself could not be opened. Aborts the whole listing.
    #[error("cannot access '{}': {}", .path.display(), describe(.source))]
    CannotAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A status query failed for a single member of a directory.
    #[error("cannot stat '{}': {}", .path.display(), describe(.source))]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ListError {
    pub fn cannot_access(path: &Path, source: io::Error) -> Self {
        Self::CannotAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn metadata(path: &Path, source: io::Error) -> Self {
        Self::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path this error occurred at, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CannotAccess { path, .. } | Self::Metadata { path, .. } => Some(path),
            Self::Output(_) => None,
        }
    }

    /// Whether the listing can skip the failing entry and carry on.
    ///
    /// Only per-entry metadata failures are recoverable; an unreadable
    /// directory or a broken output stream stops the invocation.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Metadata { .. })
    }
}

/// OS error text without the trailing "(os error N)" decoration.
fn describe(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "No such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => {
            let text = err.to_string();
            match text.find(" (os error") {
                Some(pos) => text[..pos].to_string(),
                None => text,
            }
        }
    }
}
