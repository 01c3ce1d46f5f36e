//! Directory snapshots: every member of one directory, read at one time

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ListError;

use super::entry::{Entry, PSEUDO_ENTRIES, extract_entry};

/// Ordered entries of one directory plus the number of directory-kind members.
///
/// The entry list grows as members are read, so a directory that changes while
/// it is being enumerated never overflows or truncates the collection.
#[derive(Debug, Default)]
pub struct Snapshot {
    entries: Vec<Entry>,
    dir_count: usize,
}

impl Snapshot {
    /// Enumerate `dir`, including the `.` and `..` pseudo-entries.
    ///
    /// Failing to open the directory is fatal. Members whose status cannot be
    /// read are logged and left out.
    pub fn read(dir: &Path) -> Result<Self, ListError> {
        let members = fs::read_dir(dir).map_err(|e| ListError::cannot_access(dir, e))?;
        let mut snapshot = Self::default();

        for name in PSEUDO_ENTRIES {
            snapshot.extract(dir, OsStr::new(name));
        }

        for member in members {
            match member {
                Ok(member) => snapshot.extract(dir, &member.file_name()),
                Err(e) => warn!("cannot read entry in '{}': {}", dir.display(), e),
            }
        }

        debug!(
            "snapshot of '{}': {} entries, {} directories",
            dir.display(),
            snapshot.entries.len(),
            snapshot.dir_count
        );
        Ok(snapshot)
    }

    fn extract(&mut self, dir: &Path, name: &OsStr) {
        match extract_entry(dir, name) {
            Ok(entry) => self.push(entry),
            Err(e) => warn!("{}", e),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        if entry.is_dir() {
            self.dir_count += 1;
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directory-kind members, pseudo-entries and hidden directories included.
    pub fn dir_count(&self) -> usize {
        self.dir_count
    }

    /// Entries that are printed: everything not starting with a period.
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_hidden())
    }

    /// Directories a recursive listing descends into.
    ///
    /// Hidden directories are excluded: their block header would print a
    /// hidden name. They still count towards [`Snapshot::dir_count`].
    pub fn subdirectories(&self) -> impl Iterator<Item = &Entry> {
        self.visible().filter(|e| e.is_dir())
    }

    pub fn has_subdirectories(&self) -> bool {
        self.subdirectories().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_empty_directory_has_only_pseudo_entries() {
        let dir = TestDir::new();
        let snapshot = Snapshot::read(dir.path()).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.dir_count(), 2);
        assert_eq!(snapshot.visible().count(), 0);
        assert!(!snapshot.has_subdirectories());
    }

    #[test]
    fn test_counts_directories_including_pseudo_entries() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "aa");
        dir.add_dir("sub");
        dir.add_dir(".git");

        let snapshot = Snapshot::read(dir.path()).unwrap();
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot.dir_count(), 4);

        let visible: Vec<_> = snapshot.visible().map(|e| e.name.as_str()).collect();
        assert_eq!(visible.len(), 2);
        assert!(visible.contains(&"a.txt"));
        assert!(visible.contains(&"sub"));

        let subdirs: Vec<_> = snapshot.subdirectories().map(|e| e.name.as_str()).collect();
        assert_eq!(subdirs, vec!["sub"]);
    }

    #[test]
    fn test_hidden_only_directory_has_no_subdirectories() {
        let dir = TestDir::new();
        dir.add_file(".hidden", "");
        dir.add_dir(".cache");

        let snapshot = Snapshot::read(dir.path()).unwrap();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.visible().count(), 0);
        assert!(!snapshot.has_subdirectories());
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = TestDir::new();
        let err = Snapshot::read(&dir.path().join("ghost")).unwrap_err();
        assert!(matches!(err, ListError::CannotAccess { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = TestDir::new();
        let file = dir.add_file("a.txt", "");
        let err = Snapshot::read(&file).unwrap_err();
        assert!(matches!(err, ListError::CannotAccess { .. }));
    }

    #[test]
    fn test_broken_symlink_is_skipped() {
        let dir = TestDir::new();
        dir.add_file("real.txt", "");
        std::os::unix::fs::symlink("nowhere", dir.path().join("dangling")).unwrap();

        let snapshot = Snapshot::read(dir.path()).unwrap();
        let names: Vec<_> = snapshot.visible().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["real.txt"]);
    }
}
