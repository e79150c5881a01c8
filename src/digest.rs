use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha1::{Digest, Sha1};

use crate::error::CompareError;

/// Read buffer size used when hashing. One megabyte amortizes syscall
/// overhead while keeping peak memory flat regardless of file size.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// SHA-1 digest of a file's complete byte content, as lowercase hex.
///
/// The file is streamed chunk by chunk and never held in memory whole. Two
/// files are considered identical iff their digests are equal.
pub fn digest_file(path: &Path) -> Result<String, CompareError> {
    digest_file_chunked(path, CHUNK_SIZE)
}

fn digest_file_chunked(path: &Path, chunk_size: usize) -> Result<String, CompareError> {
    let mut file = File::open(path).map_err(|e| CompareError::io(path, e))?;
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; chunk_size];

    loop {
        match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CompareError::io(path, e)),
        }
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn digest_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "some stable content").unwrap();

        assert_eq!(digest_file(&file).unwrap(), digest_file(&file).unwrap());
    }

    #[test]
    fn digest_independent_of_chunk_size() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.bin");
        fs::write(&file, vec![0xabu8; 10_000]).unwrap();

        let whole = digest_file(&file).unwrap();
        assert_eq!(digest_file_chunked(&file, 1).unwrap(), whole);
        assert_eq!(digest_file_chunked(&file, 7).unwrap(), whole);
        assert_eq!(digest_file_chunked(&file, 4096).unwrap(), whole);
    }

    #[test]
    fn digest_of_empty_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty");
        fs::write(&file, "").unwrap();

        // SHA-1 of zero bytes.
        assert_eq!(
            digest_file(&file).unwrap(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn digest_of_known_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("hello.txt");
        fs::write(&file, "hello").unwrap();

        assert_eq!(
            digest_file(&file).unwrap(),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn single_byte_change_changes_digest() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.bin");

        let mut content = vec![0x55u8; 8192];
        fs::write(&file, &content).unwrap();
        let before = digest_file(&file).unwrap();

        content[4100] ^= 0x01;
        fs::write(&file, &content).unwrap();
        let after = digest_file(&file).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn missing_file_reports_io_error_with_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = digest_file(&missing).unwrap_err();
        assert!(matches!(err, CompareError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
