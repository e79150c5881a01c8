use std::path::{Path, PathBuf};

use crate::error::CompareError;
use crate::scanner::{list_entries, EntryKind};

/// An entry present under only one root. The kind is captured when the entry
/// is classified so reporting never has to stat the filesystem again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueEntry {
    /// Path relative to the root the entry was found under.
    pub rel_path: PathBuf,
    pub kind: EntryKind,
}

impl UniqueEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The partition a single differ pass produces: entries only on the left,
/// entries only on the right, and the relative paths that exist as regular
/// files on both sides. Every list is sorted by the raw bytes of the path.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TreeDiff {
    pub unique_left: Vec<UniqueEntry>,
    pub unique_right: Vec<UniqueEntry>,
    pub common_files: Vec<PathBuf>,
}

impl TreeDiff {
    fn merge(&mut self, child: TreeDiff) {
        self.unique_left.extend(child.unique_left);
        self.unique_right.extend(child.unique_right);
        self.common_files.extend(child.common_files);
    }

    fn sort(&mut self) {
        // Whole-path byte order, so `a.b` sorts before `a/z`. PathBuf's
        // component order would put the directory's contents first.
        self.unique_left.sort_by(|a, b| a.rel_path.as_os_str().cmp(b.rel_path.as_os_str()));
        self.unique_right.sort_by(|a, b| a.rel_path.as_os_str().cmp(b.rel_path.as_os_str()));
        self.common_files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    }
}

/// Partition two directory trees, depth first, one level at a time.
///
/// Both arguments must be existing directories. Only subdirectories present
/// on both sides are recursed into; a subtree unique to one side is recorded
/// as a single entry and its contents are never listed. The roots themselves
/// are never reported, only their contents.
pub fn diff_roots(left: &Path, right: &Path) -> Result<TreeDiff, CompareError> {
    for root in [left, right] {
        if !root.is_dir() {
            return Err(CompareError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }
    }

    let mut diff = diff_level(left, right, Path::new(""))?;
    diff.sort();
    Ok(diff)
}

fn diff_level(left_dir: &Path, right_dir: &Path, rel: &Path) -> Result<TreeDiff, CompareError> {
    let left_entries = list_entries(left_dir)?;
    let right_entries = list_entries(right_dir)?;

    let mut diff = TreeDiff::default();

    // First pass over the left side: unique-left entries and everything the
    // two sides share. Each recursive call returns its own local result,
    // merged here, so no state is shared across the call tree.
    for (name, &left_kind) in &left_entries {
        let right_kind = match right_entries.get(name) {
            Some(&kind) => kind,
            None => {
                diff.unique_left.push(UniqueEntry {
                    rel_path: rel.join(name),
                    kind: left_kind,
                });
                continue;
            }
        };

        let child_rel = rel.join(name);
        match (left_kind, right_kind) {
            (EntryKind::Dir, EntryKind::Dir) => {
                let child = diff_level(&left_dir.join(name), &right_dir.join(name), &child_rel)?;
                diff.merge(child);
            }
            (EntryKind::File, EntryKind::File) => diff.common_files.push(child_rel),
            // Same name with mismatched kinds, or no kind at all on one
            // side: not comparable and not unique. Known gap: such names
            // are excluded from every output list.
            _ => {}
        }
    }

    // Second pass picks up what only the right side has.
    for (name, &kind) in &right_entries {
        if !left_entries.contains_key(name) {
            diff.unique_right.push(UniqueEntry {
                rel_path: rel.join(name),
                kind,
            });
        }
    }

    Ok(diff)
}
