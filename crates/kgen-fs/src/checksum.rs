//! SHA-256 checksum utilities
//!
//! One canonical checksum format (`sha256:<hex>`), used by the writer to
//! decide whether a generated manifest differs from what is already on disk.

use sha2::{Digest, Sha256};

use crate::{OutputPath, Result, io};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of string content.
pub fn content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the checksum of an existing file, or `None` if it does not exist.
pub fn file_checksum(path: &OutputPath) -> Result<Option<String>> {
    Ok(io::read_existing(path)?.map(|content| content_checksum(&content)))
}
