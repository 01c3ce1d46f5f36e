//! Directory members and the metadata extractor that builds them

use std::ffi::{OsStr, OsString};
use std::fs::{self, FileType, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::ListError;
use crate::output::format_permissions;

/// Self and parent pseudo-entries, present in every snapshot.
pub const PSEUDO_ENTRIES: [&str; 2] = [".", ".."];

/// What kind of filesystem object an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::Regular
        } else {
            EntryKind::Other
        }
    }
}

/// One member of a directory with its status metadata.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display name; bytes that are not UTF-8 are replaced.
    pub name: String,
    /// Name exactly as the filesystem returned it.
    pub file_name: OsString,
    pub kind: EntryKind,
    /// Ten characters: type glyph, then owner, group and other rwx.
    pub permissions: String,
    pub link_count: u64,
    pub owner_id: u32,
    pub group_id: u32,
    pub size: u64,
    pub modified_at: DateTime<Local>,
}

impl Entry {
    pub fn from_metadata(file_name: impl Into<OsString>, meta: &Metadata) -> Self {
        let file_name = file_name.into();
        let modified_at = DateTime::from_timestamp(meta.mtime(), meta.mtime_nsec() as u32)
            .unwrap_or_default()
            .with_timezone(&Local);

        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            kind: EntryKind::from_file_type(meta.file_type()),
            permissions: format_permissions(meta.mode()),
            link_count: meta.nlink(),
            owner_id: meta.uid(),
            group_id: meta.gid(),
            size: meta.size(),
            modified_at,
        }
    }

    /// Path of this entry inside `dir`, built from the raw file name.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Names starting with a period are never printed.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn is_pseudo(&self) -> bool {
        PSEUDO_ENTRIES.contains(&self.name.as_str())
    }
}

/// Describe `name` inside `parent`.
///
/// The entry itself is described without following symlinks, but a symlink's
/// target must still resolve: a dangling link is reported like any other
/// failed status query so the caller can skip it.
pub fn extract_entry(parent: &Path, name: &OsStr) -> Result<Entry, ListError> {
    let path = parent.join(name);
    let meta = fs::symlink_metadata(&path).map_err(|e| ListError::metadata(&path, e))?;

    if meta.file_type().is_symlink() {
        fs::metadata(&path).map_err(|e| ListError::metadata(&path, e))?;
    }

    Ok(Entry::from_metadata(name, &meta))
}

#[cfg(test)]
mod tests {
    use std::os::unix::fs::symlink;

    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_extract_regular_file() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "hello");

        let entry = extract_entry(dir.path(), OsStr::new("a.txt")).unwrap();
        assert_eq!(entry.name, "a.txt");
        assert_eq!(entry.kind, EntryKind::Regular);
        assert_eq!(entry.size, 5);
        assert_eq!(entry.permissions.len(), 10);
        assert!(entry.permissions.starts_with('-'));
        assert!(entry.link_count >= 1);
        assert!(!entry.is_hidden());
    }

    #[test]
    fn test_extract_directory() {
        let dir = TestDir::new();
        dir.add_dir("sub");

        let entry = extract_entry(dir.path(), OsStr::new("sub")).unwrap();
        assert!(entry.is_dir());
        assert!(entry.permissions.starts_with('d'));
    }

    #[test]
    fn test_extract_pseudo_entries() {
        let dir = TestDir::new();
        for name in PSEUDO_ENTRIES {
            let entry = extract_entry(dir.path(), OsStr::new(name)).unwrap();
            assert!(entry.is_dir());
            assert!(entry.is_pseudo());
            assert!(entry.is_hidden());
        }
    }

    #[test]
    fn test_extract_symlink_is_not_followed() {
        let dir = TestDir::new();
        dir.add_dir("real");
        symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entry = extract_entry(dir.path(), OsStr::new("link")).unwrap();
        assert_eq!(entry.kind, EntryKind::Symlink);
        assert!(entry.permissions.starts_with('l'));
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_extract_broken_symlink_fails() {
        let dir = TestDir::new();
        symlink("nonexistent", dir.path().join("dangling")).unwrap();

        let err = extract_entry(dir.path(), OsStr::new("dangling")).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_extract_vanished_entry_fails() {
        let dir = TestDir::new();
        let err = extract_entry(dir.path(), OsStr::new("gone")).unwrap_err();
        assert!(matches!(err, ListError::Metadata { .. }));
    }

    #[test]
    fn test_non_utf8_name_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let dir = TestDir::new();
        let raw = OsStr::from_bytes(b"bad\xffdir");
        std::fs::create_dir(dir.path().join(raw)).unwrap();

        let entry = extract_entry(dir.path(), raw).unwrap();
        assert_eq!(entry.file_name, raw);
        assert_eq!(entry.name, "bad\u{FFFD}dir");
        assert!(entry.path_in(dir.path()).is_dir());
    }

    #[test]
    fn test_modified_time_is_copied() {
        let dir = TestDir::new();
        dir.add_file("old.txt", "x");
        dir.set_mtime("old.txt", 1_000_000_000);

        let entry = extract_entry(dir.path(), OsStr::new("old.txt")).unwrap();
        assert_eq!(entry.modified_at.timestamp(), 1_000_000_000);
    }
}
