//! Primitive integer types
//!
//! This module defines the fixed-size unsigned integers the rest of the
//! crate builds on.
//!
//! Primitives are simple, dependency-free value types with well-defined
//! semantics and predictable behavior. They are intentionally minimal:
//! they provide the arithmetic the cryptographic layers need (carrying
//! addition, widening multiplication, modular remainder, shifts) and
//! nothing else. They do not attempt to replicate a full big-integer
//! library.
//!
//! Current primitives:
//! - `U256`: a fixed-size 256-bit unsigned integer
//! - `U512`: a fixed-size 512-bit unsigned integer, used only as the
//!   result of widening 256-bit multiplication and as a division input

mod u256;
mod u512;

/// Fixed-size unsigned integer primitives.
///
/// These types are re-exported as the primary primitive integers used
/// across the crate.
pub use u256::U256;
pub use u512::U512;
