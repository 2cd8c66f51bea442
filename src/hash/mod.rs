//! Hash functions and constructions built on them
//!
//! From-scratch implementations of the digests this crate depends on:
//! SHA-256 and SHA-512 (FIPS 180-4), RIPEMD-160, HMAC over both SHA
//! variants (RFC 2104), and the BIP340 tagged-hash construction.
//!
//! Also provided are the two compositions Bitcoin uses everywhere:
//! - `hash256`: double SHA-256, used for checksums and message digests
//! - `hash160`: RIPEMD-160 of SHA-256, used for key fingerprints and
//!   addresses
//!
//! All functions are one-shot over a byte slice. None of them keep
//! state between calls.

mod hmac;
mod ripemd160;
mod sha256;
mod sha512;
mod tag;

pub use hmac::{hmac_sha256, hmac_sha512};
pub use ripemd160::ripemd160;
pub use sha256::sha256;
pub use sha512::sha512;
pub use tag::tagged_hash;

/// Double SHA-256.
pub fn hash256(input: &[u8]) -> [u8; 32] {
    sha256(&sha256(input))
}

/// RIPEMD-160 of SHA-256.
pub fn hash160(input: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(input))
}
