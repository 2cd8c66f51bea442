//! RFC 6979 deterministic nonce derivation.
//!
//! Derives ECDSA nonces from the private key and message digest through
//! an HMAC-SHA256 state machine, so signing needs no randomness and can
//! never reuse a nonce across distinct messages.
//!
//! The implementation is specialized to 256-bit group orders: the
//! digest and the serialized scalar are both exactly one hash output
//! wide, which reduces `bits2int` to a plain big-endian read.

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::hash::hmac_sha256;
use crate::primitives::U256;

/// Candidates are drawn until one lands in `[1, n-1]`. For a 256-bit
/// order close to 2^256 a retry is already vanishingly rare, so hitting
/// this cap means the generator state is broken.
const MAX_ITERATIONS: usize = 1000;

/// The `V`/`K` state machine of RFC 6979 §3.2.
///
/// `next_nonce` returns the first in-range candidate and can be called
/// again to obtain the follow-up candidates the signing loop needs when
/// a nonce produces `r = 0` or `s = 0`.
pub struct NonceGenerator {
    n: U256,
    v: [u8; 32],
    k: [u8; 32],
    iterations: usize,
}

impl NonceGenerator {
    /// Seeds the state machine from the private scalar and the 32-byte
    /// message digest (steps b through f of RFC 6979 §3.2).
    pub fn new(curve: &Curve, secret: U256, digest: [u8; 32]) -> Self {
        let x = secret.to_be_bytes();
        // bits2octets: reduce the digest mod n, then serialize.
        let h = U256::from(digest).rem(curve.n).to_be_bytes();

        let mut v = [0x01u8; 32];
        let mut k = [0x00u8; 32];

        let mut data = Vec::with_capacity(32 + 1 + 32 + 32);
        data.extend_from_slice(&v);
        data.push(0x00);
        data.extend_from_slice(&x);
        data.extend_from_slice(&h);
        k = hmac_sha256(&k, &data);
        v = hmac_sha256(&k, &v);

        data.clear();
        data.extend_from_slice(&v);
        data.push(0x01);
        data.extend_from_slice(&x);
        data.extend_from_slice(&h);
        k = hmac_sha256(&k, &data);
        v = hmac_sha256(&k, &v);

        Self {
            n: curve.n,
            v,
            k,
            iterations: 0,
        }
    }

    /// Produces the next nonce candidate in `[1, n-1]`.
    ///
    /// A candidate the caller rejects (because it led to `r = 0` or
    /// `s = 0`) is treated like an out-of-range one: the next call runs
    /// the step h.3 update before generating again.
    pub fn next_nonce(&mut self) -> Result<U256> {
        loop {
            if self.iterations == MAX_ITERATIONS {
                return Err(Error::NonceExhausted);
            }

            if self.iterations > 0 {
                // Previous candidate was unsuitable: bump K and V.
                let mut data = [0u8; 33];
                data[..32].copy_from_slice(&self.v);
                self.k = hmac_sha256(&self.k, &data);
                self.v = hmac_sha256(&self.k, &self.v);
            }
            self.iterations += 1;

            self.v = hmac_sha256(&self.k, &self.v);
            let candidate = U256::from(self.v);

            if !candidate.is_zero() && candidate < self.n {
                return Ok(candidate);
            }
        }
    }
}
