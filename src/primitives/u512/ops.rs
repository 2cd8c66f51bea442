//! Modular reduction for `U512`
//!
//! The single operation implemented here is the remainder of a 512-bit
//! value modulo a 256-bit one, which is all the field and scalar layers
//! need to bring a widening product back into range.

use crate::primitives::u256::U256;
use crate::primitives::u512::U512;

impl U512 {
    /// Remainder of `self` modulo `m`.
    ///
    /// Binary long division, most significant bit first. The running
    /// remainder is kept strictly below `m`; when shifting it left
    /// pushes a bit past 2²⁵⁶ (possible only when `m > 2²⁵⁵`), the true
    /// value is below `2·m` and a single wrapping subtraction restores
    /// the invariant.
    ///
    /// # Panics
    /// Panics if `m` is zero. All call sites reduce by a curve prime or
    /// group order, which are non-zero constants.
    pub fn rem(self, m: U256) -> U256 {
        assert!(!m.is_zero(), "reduction modulo zero");

        let mut rem = U256::ZERO;

        for i in (0..512).rev() {
            let overflow = rem.bit(255);

            rem = rem << 1;
            if self.bit(i) {
                rem.0[31] |= 1;
            }

            if overflow || rem >= m {
                rem = rem.wrapping_sub(m);
            }
        }

        rem
    }
}
