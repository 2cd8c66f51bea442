//! Conversions between `U256` and native integer or byte forms
//!
//! All conversions preserve the internal big-endian representation and
//! never truncate implicitly: narrowing conversions are `TryFrom` and
//! fail when high-order bits are set.

use crate::primitives::U256;

/// Converts a `U256` into a 32-byte array (big-endian).
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Interprets a 32-byte array as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Converts a `U256` into four 64-bit limbs, most significant first.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(8)) {
            *o = u64::from_be_bytes(chunk.try_into().unwrap());
        }

        out
    }
}

/// Builds a `U256` from four 64-bit limbs, most significant first.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(8).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}

/// Widens a `u8` into the least significant byte.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 32];
        out[31] = value;
        U256(out)
    }
}

/// Widens a `u32` into the least significant four bytes.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        let mut out = [0u8; 32];
        out[28..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Widens a `u64` into the least significant eight bytes.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u8; 32];
        out[24..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Narrows to a `u32`, failing if the upper 224 bits are set.
impl TryFrom<U256> for u32 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let (high, low) = value.0.split_at(28);

        if high.iter().any(|&b| b != 0) {
            return Err(());
        }

        Ok(u32::from_be_bytes(low.try_into().unwrap()))
    }
}

/// Narrows to a `u64`, failing if the upper 192 bits are set.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let (high, low) = value.0.split_at(24);

        if high.iter().any(|&b| b != 0) {
            return Err(());
        }

        Ok(u64::from_be_bytes(low.try_into().unwrap()))
    }
}
