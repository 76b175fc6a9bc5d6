//! SHA256 double-hashing for the Base58Check checksum.

use sha2::{Digest, Sha256};

/// Double SHA256: SHA256(SHA256(data)).
///
/// The first four bytes of this digest form the Base58Check checksum.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}
