use std::io::{self, Write};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::compare::FileDiff;
use crate::diff::{TreeDiff, UniqueEntry};

/// Everything one comparison run produced. Built once per invocation,
/// immutable afterwards, rendered and discarded.
#[derive(Debug)]
pub struct ComparisonReport {
    /// The two roots exactly as given on the command line; differing and
    /// unique paths are printed joined onto these.
    pub left_root: PathBuf,
    pub right_root: PathBuf,
    pub unique_left: Vec<UniqueEntry>,
    pub unique_right: Vec<UniqueEntry>,
    pub differing: Vec<FileDiff>,
}

impl ComparisonReport {
    pub fn new(
        left_root: &Path,
        right_root: &Path,
        tree_diff: TreeDiff,
        differing: Vec<FileDiff>,
    ) -> Self {
        ComparisonReport {
            left_root: left_root.to_path_buf(),
            right_root: right_root.to_path_buf(),
            unique_left: tree_diff.unique_left,
            unique_right: tree_diff.unique_right,
            differing,
        }
    }

    /// True when the two trees matched exactly: nothing unique on either
    /// side and no common file with differing content.
    pub fn is_identical(&self) -> bool {
        self.unique_left.is_empty() && self.unique_right.is_empty() && self.differing.is_empty()
    }
}

/// Render a report in the fixed console format: differing files first (one
/// line per side, each with its digest), then entries unique to the left
/// root, then entries unique to the right root, then a closing verdict line
/// when nothing differed at all.
pub fn write_report<W: Write>(out: &mut W, report: &ComparisonReport) -> io::Result<()> {
    for diff in &report.differing {
        writeln!(
            out,
            "{}\t\t\tsha1: {}",
            report.left_root.join(&diff.rel_path).display(),
            diff.left_digest
        )?;
        writeln!(
            out,
            "{}\t\t\tsha1: {}",
            report.right_root.join(&diff.rel_path).display(),
            diff.right_digest
        )?;
    }

    write_unique(out, &report.left_root, &report.unique_left)?;
    write_unique(out, &report.right_root, &report.unique_right)?;

    if report.is_identical() {
        writeln!(out, "NO DIFFERENCE FOUND :)")?;
    }

    Ok(())
}

fn write_unique<W: Write>(out: &mut W, root: &Path, entries: &[UniqueEntry]) -> io::Result<()> {
    for entry in entries {
        let full = root.join(&entry.rel_path);
        if entry.is_dir() {
            writeln!(out, "unique: {}{}", full.display(), MAIN_SEPARATOR)?;
        } else {
            writeln!(out, "unique: {}", full.display())?;
        }
    }
    Ok(())
}
