//! Private keys.

use std::fmt;

use crate::curve::Curve;
use crate::error::{Error, Result};
use crate::keys::PublicKey;
use crate::primitives::U256;
use crate::rng::Csprng;

/// A private key: a scalar in `[1, n-1]` for the given curve's group
/// order `n`.
///
/// The secret is never printed; `Debug` is implemented by hand and
/// redacts it.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    secret: U256,
}

impl PrivateKey {
    /// Wraps an existing scalar, rejecting zero and values at or above
    /// the group order.
    pub fn new(curve: &Curve, secret: U256) -> Result<Self> {
        if !curve.valid_scalar(secret) {
            return Err(Error::Domain("private key out of range"));
        }

        Ok(Self { secret })
    }

    /// Generates a fresh key by rejection sampling.
    ///
    /// A uniform 256-bit draw is outside `[1, n-1]` with probability
    /// below 2⁻¹²⁸ for secp256k1, so the loop nearly always exits on
    /// the first iteration. Sampling uniformly and rejecting avoids the
    /// modulo bias a reduction would introduce.
    pub fn generate(curve: &Curve, rng: &mut Csprng) -> Self {
        loop {
            let candidate = U256::from(rng.gen_bytes32());

            if curve.valid_scalar(candidate) {
                return Self { secret: candidate };
            }
        }
    }

    /// Parses a 32-byte big-endian secret.
    pub fn from_bytes(curve: &Curve, bytes: [u8; 32]) -> Result<Self> {
        Self::new(curve, U256::from(bytes))
    }

    /// The raw scalar.
    pub fn secret(&self) -> U256 {
        self.secret
    }

    /// 32-byte big-endian serialization.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.secret.to_be_bytes()
    }

    /// The corresponding public key, `d·G`.
    pub fn public_key(&self, curve: &Curve) -> PublicKey {
        PublicKey::from_secret(curve, self.secret)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}
