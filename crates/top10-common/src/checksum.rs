//! SHA-256 digests for generated artifacts
//!
//! The seeder records the digest of every seed script it writes so two runs
//! can be compared without diffing the files.

use crate::error::{Result, Top10Error};
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Hex-encoded SHA-256 of an in-memory buffer
pub fn sha256_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(data.as_ref()))
}

/// Compute the SHA-256 of any readable source
pub fn compute_checksum<R: Read>(reader: &mut R) -> Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA-256 of a file on disk
pub fn compute_file_checksum(path: impl AsRef<Path>) -> Result<String> {
    let mut file = std::fs::File::open(path)?;
    compute_checksum(&mut file)
}

/// Verify a file against an expected digest
pub fn verify_file_checksum(path: impl AsRef<Path>, expected: &str) -> Result<()> {
    let actual = compute_file_checksum(path)?;
    if actual == expected {
        Ok(())
    } else {
        Err(Top10Error::ChecksumMismatch {
            expected: expected.to_string(),
            actual,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HELLO_WORLD: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn test_sha256_hex() {
        assert_eq!(sha256_hex("hello world"), HELLO_WORLD);
    }

    #[test]
    fn test_compute_checksum_reader() {
        let mut cursor = Cursor::new(b"hello world");
        assert_eq!(compute_checksum(&mut cursor).unwrap(), HELLO_WORLD);
    }

    #[test]
    fn test_verify_file_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.sql");
        std::fs::write(&path, "hello world").unwrap();

        assert!(verify_file_checksum(&path, HELLO_WORLD).is_ok());
        assert!(matches!(
            verify_file_checksum(&path, "deadbeef"),
            Err(Top10Error::ChecksumMismatch { .. })
        ));
    }
}
