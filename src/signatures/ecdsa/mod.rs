//! ECDSA with deterministic nonces.

mod core;
mod rfc6979;

pub use self::core::{Signature, sign, verify};
pub use rfc6979::NonceGenerator;
