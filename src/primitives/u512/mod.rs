//! 512-bit unsigned integer primitive
//!
//! This module defines the `U512` type. Unlike `U256`, it is not a
//! general arithmetic type: it exists to hold the result of a widening
//! 256×256-bit multiplication and to reduce such products modulo a
//! 256-bit prime. It deliberately implements nothing else.

mod core;
mod ops;

/// Fixed-size 512-bit unsigned integer.
pub use self::core::U512;
