//! Core definition of the 512-bit unsigned integer.

use crate::primitives::U256;

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 512-bit unsigned integer.
///
/// The value is stored as 64 bytes in **big-endian** order. It exists
/// only as the intermediate form of widening multiplication and as the
/// dividend of modular reduction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct U512(pub(crate) [u8; 64]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 64]);

    /// Returns bit `index`, counting from the least significant bit.
    ///
    /// Indices at or above 512 read as zero.
    pub fn bit(&self, index: usize) -> bool {
        if index >= 512 {
            return false;
        }

        let byte = 63 - index / 8;
        (self.0[byte] >> (index % 8)) & 1 == 1
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl Display for U512 {
    /// Formats the value as 128 lowercase hexadecimal characters,
    /// big-endian, without a prefix.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

/// Arrays longer than 32 elements do not get a derived `Default`, so
/// the zero value is provided manually, consistent with `U512::ZERO`.
impl Default for U512 {
    fn default() -> Self {
        U512([0u8; 64])
    }
}

/// Interprets a 64-byte array as a big-endian 512-bit value.
impl From<[u8; 64]> for U512 {
    fn from(value: [u8; 64]) -> Self {
        U512(value)
    }
}

/// Converts a `U512` into a 64-byte array (big-endian).
impl From<U512> for [u8; 64] {
    fn from(value: U512) -> Self {
        value.0
    }
}

/// Builds a `U512` from eight 64-bit limbs, most significant first.
impl From<[u64; 8]> for U512 {
    fn from(value: [u64; 8]) -> Self {
        let mut out = [0u8; 64];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U512(out)
    }
}

/// Zero-extends a `U256` into the low 256 bits.
impl From<U256> for U512 {
    fn from(value: U256) -> Self {
        let mut out = [0u8; 64];
        out[32..].copy_from_slice(&value.to_be_bytes());
        U512(out)
    }
}
