//! BIP340 tagged hashes.

use crate::hash::sha256;

/// Computes `sha256(sha256(tag) || sha256(tag) || data)`.
///
/// Repeating the tag digest pads the prefix to a full 64-byte block, so
/// every tag fixes a distinct midstate and digests from different
/// contexts can never collide.
pub fn tagged_hash(tag: &str, data: &[u8]) -> [u8; 32] {
    let tag_digest = sha256(tag.as_bytes());

    let mut input = Vec::with_capacity(64 + data.len());
    input.extend_from_slice(&tag_digest);
    input.extend_from_slice(&tag_digest);
    input.extend_from_slice(data);

    sha256(&input)
}
