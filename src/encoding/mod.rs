//! Serialization formats for keys and addresses
//!
//! Two checksummed text codecs and the address constructions built on
//! them:
//!
//! - `base58`: Base58Check, the legacy encoding for WIF keys, extended
//!   keys, and P2PKH addresses.
//! - `bech32`: Bech32 and Bech32m (BIP173/BIP350), the segwit address
//!   encoding with BCH error-detecting checksums.
//! - `address`: P2PKH, P2WPKH, and P2TR address construction.
//!
//! Both codecs fail closed: any checksum or character defect is a
//! typed error, never a silently corrected value.

pub mod address;
pub mod base58;
pub mod bech32;
