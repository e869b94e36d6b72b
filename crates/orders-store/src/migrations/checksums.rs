//! Migration checksums

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the migration text
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
