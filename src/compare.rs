use std::path::{Path, PathBuf};

use crate::diff::diff_roots;
use crate::digest::digest_file;
use crate::error::CompareError;
use crate::report::ComparisonReport;

/// A common file whose two sides hash differently. Both digests are kept so
/// reporting never re-reads the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub rel_path: PathBuf,
    pub left_digest: String,
    pub right_digest: String,
}

/// Hash every common file under both roots and keep the ones that differ.
///
/// One linear pass in the differ's sorted order; each side of each file is
/// read exactly once, in bounded chunks. A failed open or read on either
/// side aborts the whole pass.
pub fn compare_common(
    left_root: &Path,
    right_root: &Path,
    common_files: &[PathBuf],
) -> Result<Vec<FileDiff>, CompareError> {
    let mut differing = Vec::new();

    for rel_path in common_files {
        let left_digest = digest_file(&left_root.join(rel_path))?;
        let right_digest = digest_file(&right_root.join(rel_path))?;

        if left_digest != right_digest {
            differing.push(FileDiff {
                rel_path: rel_path.clone(),
                left_digest,
                right_digest,
            });
        }
    }

    Ok(differing)
}

/// Full pipeline: partition the two trees, then hash every common file.
pub fn compare_trees(
    left_root: &Path,
    right_root: &Path,
) -> Result<ComparisonReport, CompareError> {
    let tree_diff = diff_roots(left_root, right_root)?;
    let differing = compare_common(left_root, right_root, &tree_diff.common_files)?;
    Ok(ComparisonReport::new(left_root, right_root, tree_diff, differing))
}
