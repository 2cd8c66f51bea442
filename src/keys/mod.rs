//! Key material
//!
//! Private scalars and public curve points, with the standard Bitcoin
//! serializations: SEC1 compressed/uncompressed points, WIF for private
//! keys, and ECDH shared-secret derivation with the X9.63 KDF.

mod ecdh;
mod private;
mod public;
mod wif;

pub use ecdh::{shared_secret, x963_kdf};
pub use private::PrivateKey;
pub use public::PublicKey;
pub use wif::{decode_wif, encode_wif};
