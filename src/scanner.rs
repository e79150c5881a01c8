use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::error::CompareError;

/// What a directory entry resolved to. The kind follows the stat of the
/// entry path, so a symlink counts as whatever it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Neither a regular file nor a directory: broken symlink, socket,
    /// device node. Such names never join the common-file set.
    Other,
}

/// List the names in one directory, each classified by kind. One level only;
/// recursion is the differ's job. The map is ordered by name, so iteration
/// is deterministic.
pub fn list_entries(dir: &Path) -> Result<BTreeMap<OsString, EntryKind>, CompareError> {
    let mut entries = BTreeMap::new();

    for entry in fs::read_dir(dir).map_err(|e| CompareError::io(dir, e))? {
        let entry = entry.map_err(|e| CompareError::io(dir, e))?;
        let path = entry.path();

        let kind = if path.is_dir() {
            EntryKind::Dir
        } else if path.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        entries.insert(entry.file_name(), kind);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_names_with_kinds() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[&OsString::from("a.txt")], EntryKind::File);
        assert_eq!(entries[&OsString::from("sub")], EntryKind::Dir);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(list_entries(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = list_entries(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, CompareError::Io { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn broken_symlink_has_no_kind() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        symlink("does-not-exist", dir.path().join("dangling")).unwrap();

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(entries[&OsString::from("dangling")], EntryKind::Other);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_takes_target_kind() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.txt"), "x").unwrap();
        symlink(dir.path().join("real.txt"), dir.path().join("link.txt")).unwrap();

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(entries[&OsString::from("link.txt")], EntryKind::File);
    }
}
