//! Curve parameter sets.

use crate::error::Result;
use crate::field::FieldElement;
use crate::primitives::U256;

/// Domain parameters of a short Weierstrass curve
/// `y² = x³ + a·x + b` over the prime field `F_p`.
///
/// The struct is a plain value: cheap to copy, const-constructible, and
/// passed explicitly to every group operation. Nothing in the crate
/// hard-codes secp256k1; alternate parameter sets (including tiny test
/// curves) work everywhere a `Curve` is accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    /// Field prime.
    pub p: U256,
    /// Curve coefficient `a`.
    pub a: U256,
    /// Curve coefficient `b`.
    pub b: U256,
    /// Generator x-coordinate.
    pub gx: U256,
    /// Generator y-coordinate.
    pub gy: U256,
    /// Order of the generator.
    pub n: U256,
    /// Cofactor of the subgroup generated by `G`.
    pub h: u32,
}

/// secp256k1 domain parameters, as published in SEC 2.
///
/// `p = 2²⁵⁶ − 2³² − 977`, `a = 0`, `b = 7`, cofactor 1.
pub const SECP256K1: Curve = Curve {
    p: U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
    a: U256::ZERO,
    b: U256::from_be_hex("0000000000000000000000000000000000000000000000000000000000000007"),
    gx: U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    gy: U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    n: U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
    h: 1,
};

impl Curve {
    /// Lifts an integer into the coordinate field, rejecting values at
    /// or above the prime.
    pub fn field(&self, num: U256) -> Result<FieldElement> {
        FieldElement::new(num, self.p)
    }

    /// The coefficient `a` as a field element.
    pub(crate) fn a_fe(&self) -> FieldElement {
        FieldElement::reduce(self.a, self.p)
    }

    /// The coefficient `b` as a field element.
    pub(crate) fn b_fe(&self) -> FieldElement {
        FieldElement::reduce(self.b, self.p)
    }

    /// Returns `true` for scalars in the valid private-key range
    /// `[1, n-1]`.
    pub fn valid_scalar(&self, k: U256) -> bool {
        !k.is_zero() && k < self.n
    }

    /// Half the group order, rounded down. Used for low-s
    /// normalization of ECDSA signatures.
    pub(crate) fn half_n(&self) -> U256 {
        self.n >> 1
    }
}
