//! Core definition of the 256-bit unsigned integer.

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order. Comparison
/// therefore coincides with the derived lexicographic ordering of the
/// byte array.
///
/// This type intentionally exposes only the functionality required by
/// the field, curve, and encoding layers, favoring clarity and
/// correctness over completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Returns the value one encoded in big-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant
    /// contexts.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Parses a 64-character big-endian hexadecimal string.
    ///
    /// Usable in constant contexts; curve parameters are defined this
    /// way. Compilation (or constant evaluation) fails on a wrong
    /// length or an out-of-alphabet character, so a malformed constant
    /// can never exist at run time.
    pub const fn from_be_hex(hex: &str) -> Self {
        const fn nibble(c: u8) -> u8 {
            match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("invalid hexadecimal digit"),
            }
        }

        let src = hex.as_bytes();
        assert!(src.len() == 64, "expected exactly 64 hexadecimal digits");

        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            out[i] = (nibble(src[2 * i]) << 4) | nibble(src[2 * i + 1]);
            i += 1;
        }

        U256(out)
    }

    /// Returns the big-endian byte representation.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Returns bit `index`, counting from the least significant bit.
    ///
    /// Indices at or above 256 read as zero.
    pub fn bit(&self, index: usize) -> bool {
        if index >= 256 {
            return false;
        }

        let byte = 31 - index / 8;
        (self.0[byte] >> (index % 8)) & 1 == 1
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns `true` if the value is even.
    pub fn is_even(&self) -> bool {
        self.0[31] & 1 == 0
    }

    /// Counts the number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Addition with carry-out.
    ///
    /// Returns the low 256 bits of the sum and whether the sum
    /// overflowed.
    pub fn overflowing_add(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u8; 32];
        let mut carry = 0u16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let sum = a as u16 + b as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        (U256(out), carry != 0)
    }

    /// Wrapping (modulo 2²⁵⁶) addition.
    pub fn wrapping_add(self, rhs: U256) -> U256 {
        self.overflowing_add(rhs).0
    }

    /// Wrapping (modulo 2²⁵⁶) subtraction.
    pub fn wrapping_sub(self, rhs: U256) -> U256 {
        let mut out = [0u8; 32];
        let mut borrow = 0i16;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()).rev() {
            let lhs = a as i16;
            let sub = b as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        U256(out)
    }

    /// Shifts right by one bit, inserting `carry_in` as the new most
    /// significant bit.
    ///
    /// This is the halving step of the binary extended GCD, where the
    /// intermediate value `x + p` can exceed 256 bits by exactly one
    /// carry bit.
    pub fn shr1_with_carry(self, carry_in: bool) -> U256 {
        let mut out = [0u8; 32];
        let mut carry = if carry_in { 0x80u8 } else { 0 };

        for (o, &byte) in out.iter_mut().zip(self.0.iter()) {
            *o = (byte >> 1) | carry;
            carry = (byte & 1) << 7;
        }

        U256(out)
    }
}

impl Display for U256 {
    /// Formats the value as 64 lowercase hexadecimal characters,
    /// big-endian, without a prefix.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}
