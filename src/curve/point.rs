//! Affine points and the group law.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::primitives::U256;

/// A point on a short Weierstrass curve: either the point at infinity
/// (the additive identity) or an affine coordinate pair satisfying the
/// curve equation.
///
/// Points are plain values; they carry their coordinates but not the
/// curve, which is supplied explicitly to every operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// The additive identity.
    Infinity,
    /// A finite point `(x, y)`.
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// Returns `true` for the point at infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The x-coordinate, or `None` at infinity.
    pub fn x(&self) -> Option<FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(*x),
        }
    }

    /// The y-coordinate, or `None` at infinity.
    pub fn y(&self) -> Option<FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(*y),
        }
    }
}

impl Curve {
    /// The generator point `G`.
    pub fn generator(&self) -> Point {
        Point::Affine {
            x: FieldElement::reduce(self.gx, self.p),
            y: FieldElement::reduce(self.gy, self.p),
        }
    }

    /// Checks the curve equation. The point at infinity is on every
    /// curve by convention.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                if x.prime() != self.p || y.prime() != self.p {
                    return false;
                }

                *y * *y == *x * *x * *x + self.a_fe() * *x + self.b_fe()
            }
        }
    }

    /// Validates group membership: the point satisfies the curve
    /// equation and has order dividing `n`.
    ///
    /// For cofactor-1 curves such as secp256k1 the equation check alone
    /// is sufficient; the explicit order check runs only when `h > 1`.
    pub fn validate_point(&self, point: &Point) -> Result<()> {
        if !self.is_on_curve(point) {
            return Err(Error::Domain("point not on curve"));
        }

        if self.h != 1 && !self.ladder(self.n, point).is_infinity() {
            return Err(Error::Domain("point not in the prime-order subgroup"));
        }

        Ok(())
    }

    /// Group addition by the standard affine formulas.
    ///
    /// The three special cases are handled explicitly: an infinity
    /// operand returns the other operand, equal operands fall through
    /// to doubling, and mutual inverses (same x, opposite y) return
    /// infinity.
    pub fn add(&self, p1: &Point, p2: &Point) -> Point {
        let ((x1, y1), (x2, y2)) = match (p1, p2) {
            (Point::Infinity, _) => return *p2,
            (_, Point::Infinity) => return *p1,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((*x1, *y1), (*x2, *y2))
            }
        };

        if x1 == x2 {
            return if y1 == y2 {
                self.double(p1)
            } else {
                Point::Infinity
            };
        }

        let lambda = (y2 - y1) * inv_nonzero(x2 - x1);
        let x3 = lambda * lambda - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;

        Point::Affine { x: x3, y: y3 }
    }

    /// Point doubling. A point with `y = 0` is its own inverse and
    /// doubles to infinity (the tangent there is vertical).
    pub fn double(&self, point: &Point) -> Point {
        let (x, y) = match point {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (*x, *y),
        };

        if y.is_zero() {
            return Point::Infinity;
        }

        let three = FieldElement::reduce(U256::from(3u8), self.p);
        let lambda = (three * x * x + self.a_fe()) * inv_nonzero(y + y);
        let x3 = lambda * lambda - x - x;
        let y3 = lambda * (x - x3) - y;

        Point::Affine { x: x3, y: y3 }
    }

    /// Scalar multiplication `k·P`.
    ///
    /// Policy: the scalar is reduced modulo the group order before the
    /// ladder runs, so `k = 0` and `k = n` both yield infinity and
    /// `k = n + 1` equals `1·P`. Callers that must reject out-of-range
    /// scalars (private keys, signature components) validate before
    /// calling.
    pub fn mul(&self, k: U256, point: &Point) -> Point {
        self.ladder(k.rem(self.n), point)
    }

    /// Scalar multiplication of the generator, `k·G`.
    pub fn mul_generator(&self, k: U256) -> Point {
        self.mul(k, &self.generator())
    }

    /// Double-and-add, most significant bit first, without reduction.
    /// Also serves the subgroup check in `validate_point`, which needs
    /// the unreduced scalar `n`.
    fn ladder(&self, k: U256, point: &Point) -> Point {
        let bits = 256 - k.leading_zeros() as usize;
        let mut acc = Point::Infinity;

        for i in (0..bits).rev() {
            acc = self.double(&acc);
            if k.bit(i) {
                acc = self.add(&acc, point);
            }
        }

        acc
    }

    /// Constructs the even-y point with the given x-coordinate, as
    /// BIP340 prescribes for x-only public keys.
    ///
    /// Fails with a domain error when `x` is not a coordinate, and with
    /// `Error::NoRoot` when no curve point has this x.
    pub fn lift_x(&self, x: U256) -> Result<Point> {
        let xfe = self.field(x)?;
        let rhs = xfe * xfe * xfe + self.a_fe() * xfe + self.b_fe();
        let y = rhs.sqrt()?;
        let y = if y.is_even() { y } else { -y };

        Ok(Point::Affine { x: xfe, y })
    }
}

/// Inverts a denominator already known to be non-zero.
fn inv_nonzero(fe: FieldElement) -> FieldElement {
    fe.invert_vartime()
        .expect("denominator is non-zero by construction")
}
