//! BIP340 Schnorr signatures.

mod core;

pub use self::core::{sign, verify};
