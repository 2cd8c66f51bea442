//! Prime-field arithmetic
//!
//! This module implements arithmetic modulo an odd prime, the
//! foundation of all curve math in the crate. A `FieldElement` pairs a
//! value with its modulus, so mixed-modulus arithmetic is impossible to
//! express accidentally and the same type serves both coordinate
//! arithmetic (mod `p`) and scalar arithmetic (mod `n`).
//!
//! Modular inversion is provided in two forms:
//! - `inverse`, by Fermat exponentiation (`a^(p-2)`), whose control flow
//!   does not depend on the value being inverted; used wherever the
//!   operand derives from secret scalars
//! - `invert_vartime`, by binary extended GCD, considerably faster and
//!   used by the curve layer for point-addition denominators
//!
//! Square roots use Tonelli-Shanks, with the single-exponentiation fast
//! path when `p ≡ 3 (mod 4)` (true for secp256k1).

mod element;

pub use element::FieldElement;
