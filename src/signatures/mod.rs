//! Signature schemes
//!
//! Two schemes over the curve group, both fully deterministic:
//!
//! - `ecdsa`: ECDSA with RFC 6979 nonce derivation and low-s
//!   normalization, signatures exposed as raw `(r, s)` scalars and a
//!   64-byte compact form. DER framing belongs to the caller.
//! - `schnorr`: BIP340 Schnorr signatures with x-only public keys and
//!   tagged-hash domain separation.
//!
//! Signing consumes no external randomness beyond the optional BIP340
//! auxiliary input; identical inputs always produce identical
//! signatures.

pub mod ecdsa;
pub mod schnorr;
