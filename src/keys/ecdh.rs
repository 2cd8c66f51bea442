//! Elliptic-curve Diffie-Hellman and the ANS X9.63 KDF (SEC 1 §3.6.1).

use crate::curve::{Curve, Point};
use crate::error::{Error, Result};
use crate::hash::sha256;
use crate::keys::{PrivateKey, PublicKey};

/// Computes the raw ECDH shared secret: the x-coordinate of `d·Q` as a
/// 32-byte big-endian array.
///
/// `d·Q` cannot be infinity when `d` is in `[1, n-1]` and `Q` is a
/// validated group element, but the case is still rejected rather than
/// reasoned away.
///
/// The raw x-coordinate is not uniformly distributed; run it through
/// [`x963_kdf`] before using it as key material.
pub fn shared_secret(curve: &Curve, d: &PrivateKey, q: &PublicKey) -> Result<[u8; 32]> {
    match curve.mul(d.secret(), &q.point()) {
        Point::Affine { x, .. } => Ok(x.num().to_be_bytes()),
        Point::Infinity => Err(Error::Domain("ECDH produced the point at infinity")),
    }
}

/// ANS X9.63 key derivation over SHA-256.
///
/// Concatenates `sha256(z ‖ counter ‖ shared_info)` for a big-endian
/// counter starting at 1, truncated to `out_len` bytes.
pub fn x963_kdf(z: &[u8], shared_info: &[u8], out_len: usize) -> Result<Vec<u8>> {
    // 32 * (2^32 - 1) output bytes, the counter must not wrap.
    if out_len as u128 > 32 * (u32::MAX as u128) {
        return Err(Error::Domain("requested KDF output too long"));
    }

    let mut out = Vec::with_capacity(out_len);
    let mut counter: u32 = 0;

    while out.len() < out_len {
        counter += 1;

        let mut input = Vec::with_capacity(z.len() + 4 + shared_info.len());
        input.extend_from_slice(z);
        input.extend_from_slice(&counter.to_be_bytes());
        input.extend_from_slice(shared_info);

        let digest = sha256(&input);
        let take = (out_len - out.len()).min(32);
        out.extend_from_slice(&digest[..take]);
    }

    Ok(out)
}
