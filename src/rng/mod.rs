//! Secure randomness
//!
//! A ChaCha20-based deterministic random bit generator seeded from the
//! operating system, with forward secrecy through rekeying after every
//! request. This is the only randomness source in the crate; key
//! generation and Schnorr auxiliary randomness both draw from it.
//!
//! Signing nonces never come from here. ECDSA nonces are derived
//! deterministically per RFC 6979 (see [`crate::signatures`]), so a
//! weak or repeating RNG cannot leak a private key through signatures.

pub(crate) mod chacha20;
mod csprng;

pub use csprng::Csprng;
