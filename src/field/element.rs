//! Field element representation and arithmetic.

use crate::error::{Error, Result};
use crate::primitives::U256;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Mul, Neg, Sub};

/// An integer modulo an odd prime.
///
/// Invariant: `num < prime`. The validating constructor is the only way
/// to build one from untrusted input, so an out-of-range element is
/// unrepresentable. Values are immutable; every operation returns a new
/// element.
///
/// Mixing elements of different fields is a programming error and is
/// caught by debug assertions in the operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldElement {
    num: U256,
    prime: U256,
}

impl FieldElement {
    /// Creates a field element, rejecting out-of-range values.
    pub fn new(num: U256, prime: U256) -> Result<Self> {
        if prime < U256::from(3u8) || prime.is_even() {
            return Err(Error::Domain("field modulus must be an odd prime"));
        }
        if num >= prime {
            return Err(Error::Domain("field element not below the modulus"));
        }

        Ok(FieldElement { num, prime })
    }

    /// Creates a field element from an arbitrary integer, reducing it
    /// modulo the prime.
    pub fn reduce(num: U256, prime: U256) -> Self {
        FieldElement {
            num: num.rem(prime),
            prime,
        }
    }

    /// The additive identity of the field.
    pub fn zero(prime: U256) -> Self {
        FieldElement {
            num: U256::ZERO,
            prime,
        }
    }

    /// The multiplicative identity of the field.
    pub fn one(prime: U256) -> Self {
        FieldElement {
            num: U256::ONE,
            prime,
        }
    }

    /// The element's value as an integer in `[0, prime)`.
    pub fn num(&self) -> U256 {
        self.num
    }

    /// The field modulus.
    pub fn prime(&self) -> U256 {
        self.prime
    }

    /// Returns `true` for the additive identity.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns `true` if the integer value is even.
    pub fn is_even(&self) -> bool {
        self.num.is_even()
    }

    /// Raises the element to an integer power.
    ///
    /// Square-and-multiply over all 256 exponent bits, most significant
    /// first. The iteration count is fixed by the type width, not by
    /// the magnitude of the exponent.
    pub fn pow(&self, exp: U256) -> Self {
        let mut result = FieldElement::one(self.prime);

        for i in (0..256).rev() {
            result = result * result;
            if exp.bit(i) {
                result = result * *self;
            }
        }

        result
    }

    /// Multiplicative inverse by Fermat's little theorem (`a^(p-2)`).
    ///
    /// The exponentiation route is taken deliberately: its control flow
    /// depends only on the public modulus, never on the value being
    /// inverted. Fails with a domain error on zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::Domain("zero has no multiplicative inverse"));
        }

        Ok(self.pow(self.prime.wrapping_sub(U256::from(2u8))))
    }

    /// Multiplicative inverse by binary extended GCD.
    ///
    /// Runs in time dependent on the value being inverted. The curve
    /// layer uses it for point-addition denominators, where it is an
    /// order of magnitude faster than the Fermat route. Fails with a
    /// domain error on zero.
    pub fn invert_vartime(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::Domain("zero has no multiplicative inverse"));
        }

        let p = self.prime;
        let mut u = self.num;
        let mut v = p;
        let mut x1 = U256::ONE;
        let mut x2 = U256::ZERO;

        while u != U256::ONE && v != U256::ONE {
            while u.is_even() {
                u = u >> 1;
                x1 = half_mod(x1, p);
            }
            while v.is_even() {
                v = v >> 1;
                x2 = half_mod(x2, p);
            }

            if u >= v {
                u = u.wrapping_sub(v);
                x1 = sub_mod(x1, x2, p);
            } else {
                v = v.wrapping_sub(u);
                x2 = sub_mod(x2, x1, p);
            }
        }

        let num = if u == U256::ONE { x1 } else { x2 };

        Ok(FieldElement { num, prime: p })
    }

    /// Modular square root.
    ///
    /// When `p ≡ 3 (mod 4)` a single exponentiation by `(p+1)/4`
    /// suffices; otherwise the full Tonelli-Shanks procedure runs.
    /// Returns `Error::NoRoot` when the element is a quadratic
    /// non-residue. Of the two roots `±r`, the one actually returned is
    /// unspecified; callers select by parity where it matters.
    pub fn sqrt(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(*self);
        }

        let p = self.prime;

        if p.bit(0) && p.bit(1) {
            // p ≡ 3 (mod 4)
            let (sum, carry) = p.overflowing_add(U256::ONE);
            let exp = sum.shr1_with_carry(carry) >> 1;
            let root = self.pow(exp);

            return if root * root == *self {
                Ok(root)
            } else {
                Err(Error::NoRoot)
            };
        }

        self.sqrt_tonelli_shanks()
    }

    fn sqrt_tonelli_shanks(&self) -> Result<Self> {
        let p = self.prime;
        let one = FieldElement::one(p);
        let legendre_exp = p.wrapping_sub(U256::ONE) >> 1;

        if self.pow(legendre_exp) != one {
            return Err(Error::NoRoot);
        }

        // p - 1 = q · 2^s with q odd
        let mut q = p.wrapping_sub(U256::ONE);
        let mut s = 0u32;
        while q.is_even() {
            q = q >> 1;
            s += 1;
        }

        // Any quadratic non-residue works as the progression seed; the
        // search touches only public curve constants.
        let mut z = U256::from(2u8);
        while FieldElement::reduce(z, p).pow(legendre_exp) == one {
            z = z.wrapping_add(U256::ONE);
        }

        let mut m = s;
        let mut c = FieldElement::reduce(z, p).pow(q);
        let mut t = self.pow(q);
        let mut r = self.pow(q.wrapping_add(U256::ONE) >> 1);

        while t != one {
            let mut i = 0u32;
            let mut probe = t;
            while probe != one {
                probe = probe * probe;
                i += 1;
                if i == m {
                    return Err(Error::NoRoot);
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b * b;
            }

            m = i;
            c = b * b;
            t = t * c;
            r = r * b;
        }

        Ok(r)
    }
}

/// Halves `x` modulo an odd `p`: even values shift, odd values first
/// add `p` (tracking the one possible carry bit past 2²⁵⁶).
fn half_mod(x: U256, p: U256) -> U256 {
    if x.is_even() {
        x >> 1
    } else {
        let (sum, carry) = x.overflowing_add(p);
        sum.shr1_with_carry(carry)
    }
}

/// `a - b (mod p)` for `a, b < p`.
fn sub_mod(a: U256, b: U256, p: U256) -> U256 {
    if a >= b {
        a.wrapping_sub(b)
    } else {
        a.wrapping_sub(b).wrapping_add(p)
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> Self::Output {
        debug_assert_eq!(self.prime, rhs.prime, "field modulus mismatch");

        let (sum, carry) = self.num.overflowing_add(rhs.num);
        let num = if carry || sum >= self.prime {
            sum.wrapping_sub(self.prime)
        } else {
            sum
        };

        FieldElement {
            num,
            prime: self.prime,
        }
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> Self::Output {
        debug_assert_eq!(self.prime, rhs.prime, "field modulus mismatch");

        FieldElement {
            num: sub_mod(self.num, rhs.num, self.prime),
            prime: self.prime,
        }
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> Self::Output {
        debug_assert_eq!(self.prime, rhs.prime, "field modulus mismatch");

        FieldElement {
            num: self.num.widening_mul(rhs.num).rem(self.prime),
            prime: self.prime,
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        let num = if self.num.is_zero() {
            U256::ZERO
        } else {
            self.prime.wrapping_sub(self.num)
        };

        FieldElement {
            num,
            prime: self.prime,
        }
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} mod {}", self.num, self.prime)
    }
}
