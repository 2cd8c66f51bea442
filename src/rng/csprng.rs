//! ChaCha20-based CSPRNG with forward secrecy.

use crate::os::sys_random;
use crate::rng::chacha20;

/// Cryptographically secure pseudorandom number generator.
///
/// Seeded from the operating system and expanded through the ChaCha20
/// block function. After every `fill_bytes` call the generator replaces
/// its key with fresh keystream, so a later compromise of the internal
/// state does not reveal previously generated output.
pub struct Csprng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl Csprng {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random. The input buffer is wiped
    /// after the key is taken from it.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with random bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let block = chacha20::block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&block[..chunk.len()]);
        }

        self.rekey();
    }

    /// Convenience for the common 32-byte case (seeds, aux randomness).
    pub fn gen_bytes32(&mut self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.fill_bytes(&mut out);

        out
    }

    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}
