//! Elliptic-curve cryptographic core for Bitcoin-style applications
//!
//! This crate provides the low-level cryptographic building blocks that
//! secure Bitcoin-style transactions: prime-field and curve-group
//! arithmetic over secp256k1 (and, generically, any short Weierstrass
//! curve), deterministic-nonce ECDSA and BIP340 Schnorr signatures,
//! BIP32 hierarchical key derivation, and the Base58Check and
//! Bech32/Bech32m encodings used to serialize keys and addresses.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are designed to be dependency-free, explicit in their
//! semantics, and reviewable line by line.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size 256-bit and 512-bit unsigned integers (`U256`, `U512`).
//!   These are simple big-endian value types providing exactly the
//!   arithmetic the rest of the crate needs, not a general big-integer
//!   library.
//!
//! - `field`
//!   Arithmetic in the prime field underlying curve coordinates:
//!   addition, multiplication, modular inverse, and square roots
//!   (Tonelli-Shanks, with the fast path for `p ≡ 3 (mod 4)`).
//!
//! - `curve`
//!   Short Weierstrass curve groups: curve parameters (`secp256k1` as a
//!   named constant), affine point addition and doubling with explicit
//!   identity handling, and double-and-add scalar multiplication. Every
//!   operation takes the curve parameters as an explicit value; there is
//!   no ambient "current curve" state.
//!
//! - `hash`
//!   From-scratch SHA-256, SHA-512, and RIPEMD-160 (FIPS 180-4 and the
//!   RIPEMD specification), HMAC over both SHA variants, and the BIP340
//!   tagged-hash construction. Includes the `hash256`/`hash160`
//!   compositions Bitcoin uses for checksums and key fingerprints.
//!
//! - `signatures`
//!   ECDSA with RFC 6979 deterministic nonces and low-s normalization,
//!   and BIP340 Schnorr signatures. Signing never consumes external
//!   randomness; two calls with identical inputs produce identical
//!   signatures.
//!
//! - `keys`
//!   Private and public key material: generation from an injected RNG,
//!   SEC compressed/uncompressed encodings, WIF serialization, and ECDH
//!   shared-secret derivation with the X9.63 KDF.
//!
//! - `derivation`
//!   BIP32 hierarchical deterministic key trees: master keys from seeds,
//!   hardened and normal child derivation, derivation paths, and the
//!   xprv/xpub extended-key serialization.
//!
//! - `encoding`
//!   Base58Check and Bech32/Bech32m codecs with fail-closed checksum
//!   validation, plus P2PKH and segwit address construction.
//!
//! - `rng`
//!   A ChaCha20-based CSPRNG seeded from operating-system entropy. Only
//!   key generation depends on it; signing is deterministic by design.
//!
//! # Design goals
//!
//! - No heap allocations in core arithmetic
//! - Minimal and explicit APIs
//! - Typed errors on every untrusted input; no panics on attacker data
//! - Curve parameters threaded explicitly through every operation
//!
//! This crate is not a constant-time-certified replacement for audited
//! production libraries. Beyond avoiding secret-dependent branching in
//! the hot arithmetic paths, side-channel hardening is out of scope.

mod os;

pub mod curve;
pub mod derivation;
pub mod encoding;
pub mod error;
pub mod field;
pub mod hash;
pub mod keys;
pub mod network;
pub mod primitives;
pub mod rng;
pub mod signatures;

pub use error::{Error, Result};
