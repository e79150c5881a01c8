use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the comparison core can raise. The binary owns the translation
/// into user-facing messages and exit codes.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A root argument does not exist or is not a directory. Detected before
    /// any traversal; nothing has been reported yet when this fires.
    #[error("{} is not a valid directory", .path.display())]
    InvalidRoot { path: PathBuf },

    /// A directory could not be listed or a file could not be read, including
    /// a file that vanished between discovery and hashing. Never retried and
    /// never skipped; the run aborts with no partial results.
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CompareError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompareError::Io {
            path: path.into(),
            source,
        }
    }
}
