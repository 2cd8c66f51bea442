//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer used for field elements, scalars, and serialized key
//! material.
//!
//! `U256` is a low-level, dependency-free primitive rather than a full
//! big-integer abstraction. It provides only the operations the
//! cryptographic layers require, with explicit semantics and
//! predictable behavior.
//!
//! The internal representation is big-endian, which aligns naturally
//! with cryptographic conventions (SEC, BIP32) and human-readable
//! hexadecimal formatting.

mod conv;
mod core;
mod ops;

/// Fixed-size 256-bit unsigned integer.
///
/// This type is re-exported as the primary 256-bit integer primitive.
pub use self::core::U256;
