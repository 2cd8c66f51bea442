//! BIP32 hierarchical deterministic key trees
//!
//! Extended keys carry a chain code alongside the key material, so a
//! single seed expands into a tree of keys addressed by derivation
//! paths such as `m/44'/0'/0'/0/7`. Private nodes derive both hardened
//! and normal children; public-only nodes (obtained by neutering)
//! derive normal children without ever seeing a secret.

mod core;
mod path;

pub use self::core::{ExtendedKey, KeyMaterial};
pub use path::parse_path;

/// Marks a child index as hardened (`index'` in path notation).
pub const HARDENED: u32 = 0x8000_0000;
