//
// lib.rs
// dircmp
//
// Library entry that re-exports modules so the binary and the integration
// tests share one implementation of the comparison engine.
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod compare;
pub mod diff;
pub mod digest;
pub mod error;
pub mod report;
pub mod scanner;

pub use cli::Args;
pub use compare::{compare_common, compare_trees, FileDiff};
pub use diff::{diff_roots, TreeDiff, UniqueEntry};
pub use digest::digest_file;
pub use error::CompareError;
pub use report::{write_report, ComparisonReport};
pub use scanner::{list_entries, EntryKind};
