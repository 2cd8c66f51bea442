//! Arithmetic and shift operations for `U256`
//!
//! Operator impls use wrapping (modulo 2²⁵⁶) semantics; callers that
//! need the carry use the explicit `overflowing_add` method instead.
//! The widening multiplication and modular remainder live here as well,
//! since they are the only places `U256` arithmetic needs to leave the
//! 256-bit domain.

use crate::primitives::u256::U256;
use crate::primitives::u512::U512;

use std::ops::{Add, Shl, Shr, Sub};

/// Wrapping addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

/// Wrapping subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

/// Logical left shift. Shifts of 256 bits or more yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, rhs: u32) -> Self::Output {
        let shift = rhs as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256::ZERO;
        }

        let byte_shift = shift / 8;
        let bit_shift = (shift % 8) as u8;

        let mut tmp = [0u8; 32];
        tmp[..(32 - byte_shift)].copy_from_slice(&self.0[byte_shift..]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in (0..32).rev() {
            let val = tmp[i];

            out[i] = (val << bit_shift) | carry;
            carry = val >> (8 - bit_shift);
        }

        U256(out)
    }
}

/// Logical right shift. Shifts of 256 bits or more yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, rhs: u32) -> Self::Output {
        let shift = rhs as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256::ZERO;
        }

        let byte_shift = shift / 8;
        let bit_shift = (shift % 8) as u8;

        let mut tmp = [0u8; 32];
        tmp[byte_shift..].copy_from_slice(&self.0[..(32 - byte_shift)]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in 0..32 {
            let val = tmp[i];

            out[i] = (val >> bit_shift) | carry;
            carry = val << (8 - bit_shift);
        }

        U256(out)
    }
}

impl U256 {
    /// Full 256×256 → 512-bit multiplication.
    ///
    /// Schoolbook multiplication over 64-bit limbs with deferred carry
    /// propagation. The product always fits in 512 bits, so the final
    /// carry out of the top limb is zero.
    pub fn widening_mul(self, rhs: U256) -> U512 {
        let lhs_be: [u64; 4] = self.into();
        let rhs_be: [u64; 4] = rhs.into();

        // Work least-significant-limb first.
        let mut a = lhs_be;
        let mut b = rhs_be;
        a.reverse();
        b.reverse();

        let mut acc = [0u128; 8];

        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                let prod = x as u128 * y as u128;
                acc[i + j] += prod & 0xFFFF_FFFF_FFFF_FFFF;
                acc[i + j + 1] += prod >> 64;
            }
        }

        let mut limbs = [0u64; 8];
        let mut carry = 0u128;

        for (limb, &slot) in limbs.iter_mut().zip(acc.iter()) {
            let v = slot + carry;
            *limb = v as u64;
            carry = v >> 64;
        }

        limbs.reverse();
        U512::from(limbs)
    }

    /// Remainder of `self` modulo `m`.
    ///
    /// # Panics
    /// Panics if `m` is zero. All call sites reduce by a curve prime or
    /// group order, which are non-zero constants.
    pub fn rem(self, m: U256) -> U256 {
        if self < m {
            return self;
        }

        U512::from(self).rem(m)
    }
}
