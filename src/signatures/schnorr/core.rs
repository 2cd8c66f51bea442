//! BIP340 signing and verification.
//!
//! Public keys are x-only: 32 bytes naming the curve point with that
//! x-coordinate and even y. Signatures are 64 bytes, `rx ‖ s`. All
//! hashing goes through the tagged-hash construction so digests from
//! the three derivation contexts (aux, nonce, challenge) can never
//! collide.

use crate::curve::{Curve, Point};
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::hash::tagged_hash;
use crate::keys::PrivateKey;
use crate::primitives::U256;

const TAG_AUX: &str = "BIP0340/aux";
const TAG_NONCE: &str = "BIP0340/nonce";
const TAG_CHALLENGE: &str = "BIP0340/challenge";

/// Signs a message of arbitrary length.
///
/// `aux` is auxiliary randomness mixed into nonce derivation. Fresh
/// random bytes harden against fault attacks; all zeros gives the
/// fully deterministic form used by the published test vectors. Nonce
/// secrecy never depends on `aux` being unpredictable.
pub fn sign(curve: &Curve, key: &PrivateKey, message: &[u8], aux: [u8; 32]) -> Result<[u8; 64]> {
    let n = curve.n;

    // Negate the secret if P has odd y, so the effective key matches
    // the x-only public key (which is defined to have even y).
    let (px, d) = match curve.mul_generator(key.secret()) {
        Point::Affine { x, y } => {
            let d = if y.is_even() {
                key.secret()
            } else {
                n.wrapping_sub(key.secret())
            };
            (x.num().to_be_bytes(), d)
        }
        Point::Infinity => return Err(Error::Domain("invalid private key")),
    };

    // t = bytes(d) xor hash_aux(aux)
    let aux_digest = tagged_hash(TAG_AUX, &aux);
    let mut t = d.to_be_bytes();
    for (byte, mask) in t.iter_mut().zip(aux_digest) {
        *byte ^= mask;
    }

    let mut nonce_input = Vec::with_capacity(64 + message.len());
    nonce_input.extend_from_slice(&t);
    nonce_input.extend_from_slice(&px);
    nonce_input.extend_from_slice(message);

    let k0 = U256::from(tagged_hash(TAG_NONCE, &nonce_input)).rem(n);
    if k0.is_zero() {
        return Err(Error::Domain("derived nonce is zero"));
    }

    // Negate the nonce if R has odd y; only rx is serialized.
    let (rx, k) = match curve.mul_generator(k0) {
        Point::Affine { x, y } => {
            let k = if y.is_even() { k0 } else { n.wrapping_sub(k0) };
            (x.num().to_be_bytes(), k)
        }
        Point::Infinity => return Err(Error::Domain("derived nonce is zero")),
    };

    let e = challenge(curve, &rx, &px, message);
    let s = FieldElement::reduce(k, n) + e * FieldElement::reduce(d, n);

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&rx);
    sig[32..].copy_from_slice(&s.num().to_be_bytes());

    Ok(sig)
}

/// Verifies a signature against an x-only public key.
///
/// Returns `false` for every failure mode, including malformed
/// components and x-coordinates that do not name a curve point.
pub fn verify(curve: &Curve, pubkey_x: [u8; 32], message: &[u8], sig: &[u8; 64]) -> bool {
    let n = curve.n;

    let point = match curve.lift_x(U256::from(pubkey_x)) {
        Ok(point) => point,
        Err(_) => return false,
    };

    let mut rx = [0u8; 32];
    let mut sb = [0u8; 32];
    rx.copy_from_slice(&sig[..32]);
    sb.copy_from_slice(&sig[32..]);

    let r = U256::from(rx);
    if r >= curve.p {
        return false;
    }

    let s = U256::from(sb);
    if s >= n {
        return false;
    }

    let e = challenge(curve, &rx, &pubkey_x, message).num();

    // R = s·G - e·P
    let computed = curve.add(
        &curve.mul_generator(s),
        &curve.mul(n.wrapping_sub(e), &point),
    );

    match computed {
        Point::Affine { x, y } => y.is_even() && x.num() == r,
        Point::Infinity => false,
    }
}

/// The challenge scalar `e = hash_challenge(rx ‖ px ‖ m) mod n`.
fn challenge(curve: &Curve, rx: &[u8; 32], px: &[u8; 32], message: &[u8]) -> FieldElement {
    let mut input = Vec::with_capacity(64 + message.len());
    input.extend_from_slice(rx);
    input.extend_from_slice(px);
    input.extend_from_slice(message);

    FieldElement::reduce(U256::from(tagged_hash(TAG_CHALLENGE, &input)), curve.n)
}
