//! Short Weierstrass curve groups
//!
//! This module implements the elliptic-curve group layer: curve
//! parameters, affine points, the group law, and scalar multiplication.
//!
//! All operations are pure functions of `(Curve, operands)`. There is
//! no global "current curve"; the parameter struct is threaded through
//! every call, which keeps the layer trivially testable against toy
//! curves and safe to use from multiple threads.
//!
//! The secp256k1 parameters are provided as the `SECP256K1` constant.

mod params;
mod point;

pub use params::{Curve, SECP256K1};
pub use point::Point;
