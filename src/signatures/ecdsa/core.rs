//! ECDSA signing and verification.

use crate::curve::{Curve, Point};
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::keys::{PrivateKey, PublicKey};
use crate::primitives::U256;
use crate::signatures::ecdsa::NonceGenerator;

/// An ECDSA signature as raw scalars.
///
/// Both components are in `[1, n-1]`; `s` is additionally at most
/// `n/2` when produced by [`sign`]. DER framing is left to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: U256,
    pub s: U256,
}

impl Signature {
    /// Wraps raw components, rejecting zero or out-of-range
    /// values.
    pub fn new(curve: &Curve, r: U256, s: U256) -> Result<Self> {
        if !curve.valid_scalar(r) || !curve.valid_scalar(s) {
            return Err(Error::InvalidEncoding("signature scalar out of range"));
        }

        Ok(Self { r, s })
    }

    /// Fixed 64-byte serialization: `r ‖ s`, both big-endian.
    pub fn to_compact(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r.to_be_bytes());
        out[32..].copy_from_slice(&self.s.to_be_bytes());

        out
    }

    /// Parses the 64-byte compact form, validating scalar ranges.
    pub fn from_compact(curve: &Curve, bytes: &[u8; 64]) -> Result<Self> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Self::new(curve, U256::from(r), U256::from(s))
    }
}

/// Signs a 32-byte message digest.
///
/// The nonce comes from RFC 6979, so the signature is a pure function
/// of `(key, digest)`. The result is low-s normalized: if `s > n/2` it
/// is replaced by `n - s`, which verifies identically and removes the
/// trivial `(r, n-s)` malleability.
pub fn sign(curve: &Curve, key: &PrivateKey, digest: [u8; 32]) -> Result<Signature> {
    let n = curve.n;
    let z = FieldElement::reduce(U256::from(digest), n);
    let d = FieldElement::reduce(key.secret(), n);

    let mut nonces = NonceGenerator::new(curve, key.secret(), digest);

    loop {
        let k = nonces.next_nonce()?;

        // k is in [1, n-1], so k·G is finite.
        let x = match curve.mul_generator(k) {
            Point::Affine { x, .. } => x,
            Point::Infinity => continue,
        };

        let r = x.num().rem(n);
        if r.is_zero() {
            continue;
        }

        let k_inv = FieldElement::reduce(k, n).inverse()?;
        let s = (z + FieldElement::reduce(r, n) * d) * k_inv;
        if s.is_zero() {
            continue;
        }

        let s = if s.num() > curve.half_n() {
            n.wrapping_sub(s.num())
        } else {
            s.num()
        };

        return Ok(Signature { r, s });
    }
}

/// Verifies a signature over a 32-byte digest.
///
/// Returns a plain `bool`; malformed signatures fail closed rather
/// than surfacing an error. High-s signatures are accepted, matching
/// standard ECDSA verification.
pub fn verify(curve: &Curve, key: &PublicKey, digest: [u8; 32], sig: &Signature) -> bool {
    let n = curve.n;

    if !curve.valid_scalar(sig.r) || !curve.valid_scalar(sig.s) {
        return false;
    }

    // s is non-zero, so the inversion cannot fail.
    let s_inv = match FieldElement::reduce(sig.s, n).inverse() {
        Ok(inv) => inv,
        Err(_) => return false,
    };

    let z = FieldElement::reduce(U256::from(digest), n);
    let r = FieldElement::reduce(sig.r, n);

    let u = (z * s_inv).num();
    let v = (r * s_inv).num();

    let point = curve.add(&curve.mul_generator(u), &curve.mul(v, &key.point()));

    match point {
        Point::Affine { x, .. } => x.num().rem(n) == sig.r,
        Point::Infinity => false,
    }
}
