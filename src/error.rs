//! Error taxonomy shared by the whole crate.
//!
//! Every fallible operation returns one of the typed variants below.
//! Signature verification is deliberately **not** represented here: an
//! invalid signature is a routine negative result and is reported as
//! `false` by the verify functions, never as an error.
//!
//! Nothing in this crate panics on attacker-controlled input; malformed
//! signatures, encoded strings, and derivation indices are validated up
//! front and rejected through these variants.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors produced by the cryptographic core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A value lies outside its valid mathematical range: a scalar not
    /// in `[1, n-1]`, a coordinate not below the field prime, a point
    /// that is not on the curve, or zero where non-zero is required.
    Domain(&'static str),

    /// The input to a modular square root is a quadratic non-residue.
    ///
    /// Callers must be able to distinguish "this value has no root"
    /// from a computation error, so this is its own variant.
    NoRoot,

    /// A Base58Check or Bech32 checksum did not validate.
    Checksum,

    /// An encoded string contains a character outside its alphabet.
    InvalidCharacter(char),

    /// A structural encoding violation: wrong length, mixed case,
    /// bad human-readable part, or a malformed payload.
    InvalidEncoding(&'static str),

    /// BIP32 child derivation produced an out-of-range key, or a
    /// hardened index was requested from a public-only node.
    ///
    /// This is a recoverable condition: the caller is expected to skip
    /// to the next child index.
    InvalidChild,

    /// The deterministic nonce generator exhausted its iteration cap
    /// without producing a valid candidate. With a correct
    /// implementation this is unreachable in practice; the cap exists
    /// so a correctness bug cannot become an infinite loop.
    NonceExhausted,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::Domain(what) => write!(f, "value out of domain: {what}"),
            Error::NoRoot => f.write_str("no modular square root exists"),
            Error::Checksum => f.write_str("checksum mismatch"),
            Error::InvalidCharacter(c) => write!(f, "invalid character {c:?}"),
            Error::InvalidEncoding(what) => write!(f, "invalid encoding: {what}"),
            Error::InvalidChild => f.write_str("invalid child key, skip to the next index"),
            Error::NonceExhausted => f.write_str("nonce generator exhausted its iteration cap"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
