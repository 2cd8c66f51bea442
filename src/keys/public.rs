//! Public keys and SEC1 point serialization.

use crate::curve::{Curve, Point};
use crate::error::{Error, Result};
use crate::primitives::U256;

/// A public key: a validated finite point on the curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// Wraps an existing point after validating group membership.
    pub fn from_point(curve: &Curve, point: Point) -> Result<Self> {
        if point.is_infinity() {
            return Err(Error::Domain("public key cannot be the point at infinity"));
        }
        curve.validate_point(&point)?;

        Ok(Self { point })
    }

    /// Derives `d·G` for a scalar already known to be in range.
    pub(crate) fn from_secret(curve: &Curve, secret: U256) -> Self {
        Self {
            point: curve.mul_generator(secret),
        }
    }

    /// The underlying point.
    pub fn point(&self) -> Point {
        self.point
    }

    /// The x-coordinate as a 32-byte big-endian array. Used by the
    /// x-only Schnorr representation and ECDH.
    pub fn x_bytes(&self) -> [u8; 32] {
        match self.point {
            Point::Affine { x, .. } => x.num().to_be_bytes(),
            // Excluded by the constructor invariant.
            Point::Infinity => unreachable!(),
        }
    }

    /// SEC1 compressed serialization: a parity prefix (`0x02` even y,
    /// `0x03` odd y) followed by the big-endian x-coordinate.
    pub fn serialize_compressed(&self) -> [u8; 33] {
        let (x, y) = match self.point {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => unreachable!(),
        };

        let mut out = [0u8; 33];
        out[0] = if y.is_even() { 0x02 } else { 0x03 };
        out[1..].copy_from_slice(&x.num().to_be_bytes());

        out
    }

    /// SEC1 uncompressed serialization: `0x04 ‖ x ‖ y`.
    pub fn serialize_uncompressed(&self) -> [u8; 65] {
        let (x, y) = match self.point {
            Point::Affine { x, y } => (x, y),
            Point::Infinity => unreachable!(),
        };

        let mut out = [0u8; 65];
        out[0] = 0x04;
        out[1..33].copy_from_slice(&x.num().to_be_bytes());
        out[33..].copy_from_slice(&y.num().to_be_bytes());

        out
    }

    /// Parses a SEC1 point, compressed or uncompressed, validating that
    /// the result lies on the curve.
    pub fn parse(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        match bytes {
            [prefix @ (0x02 | 0x03), x @ ..] if x.len() == 32 => {
                let mut buf = [0u8; 32];
                buf.copy_from_slice(x);

                // lift_x returns the even-y solution; flip for 0x03.
                let point = curve.lift_x(U256::from(buf))?;
                let point = match (point, *prefix) {
                    (Point::Affine { x, y }, 0x03) => Point::Affine { x, y: -y },
                    (p, _) => p,
                };

                Self::from_point(curve, point)
            }
            [0x04, rest @ ..] if rest.len() == 64 => {
                let mut xb = [0u8; 32];
                let mut yb = [0u8; 32];
                xb.copy_from_slice(&rest[..32]);
                yb.copy_from_slice(&rest[32..]);

                let x = curve.field(U256::from(xb))?;
                let y = curve.field(U256::from(yb))?;
                let point = Point::Affine { x, y };

                if !curve.is_on_curve(&point) {
                    return Err(Error::InvalidEncoding("point not on curve"));
                }

                Self::from_point(curve, point)
            }
            _ => Err(Error::InvalidEncoding("malformed SEC1 point")),
        }
    }
}
