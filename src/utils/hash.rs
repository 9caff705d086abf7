//! Checksum utilities using CRC-32.
//!
//! Uses `crc32fast` (IEEE polynomial, the same checksum `zip` and `zlib`
//! produce) for:
//! - Deterministic 32-bit document identifiers
//! - Identical values across platforms and builds
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let id = hash::checksum_parts(&["1700000000.0", "http://example.com/posts/1"]); // -> u32
//! ```

/// Compute the CRC-32 checksum of several parts as if concatenated.
pub fn checksum_parts<T: AsRef<[u8]>>(parts: &[T]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    hasher.finalize()
}
