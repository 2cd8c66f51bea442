//! Address construction.

use crate::encoding::{base58, bech32};
use crate::error::{Error, Result};
use crate::hash::hash160;
use crate::keys::PublicKey;
use crate::network::Network;

/// Legacy pay-to-public-key-hash address: Base58Check over the network
/// version byte and `hash160` of the compressed public key.
pub fn p2pkh(key: &PublicKey, network: Network) -> String {
    let mut payload = Vec::with_capacity(21);
    payload.push(network.p2pkh_version());
    payload.extend_from_slice(&hash160(&key.serialize_compressed()));

    base58::encode_check(&payload)
}

/// Native segwit address for a witness version and program.
///
/// Witness v0 uses Bech32, v1 and later Bech32m, per BIP350. Program
/// length limits (2 to 40 bytes, and exactly 20 or 32 for v0) follow
/// BIP141.
pub fn segwit(network: Network, version: u8, program: &[u8]) -> Result<String> {
    if version > 16 {
        return Err(Error::InvalidEncoding("witness version out of range"));
    }
    if program.len() < 2 || program.len() > 40 {
        return Err(Error::InvalidEncoding("witness program length out of range"));
    }
    if version == 0 && program.len() != 20 && program.len() != 32 {
        return Err(Error::InvalidEncoding("v0 witness program must be 20 or 32 bytes"));
    }

    let variant = if version == 0 {
        bech32::Variant::Bech32
    } else {
        bech32::Variant::Bech32m
    };

    let mut data = vec![version];
    data.extend(bech32::convert_bits(program, 8, 5, true)?);

    bech32::encode(network.bech32_hrp(), &data, variant)
}

/// Pay-to-witness-public-key-hash address (segwit v0): the witness
/// program is `hash160` of the compressed public key.
pub fn p2wpkh(key: &PublicKey, network: Network) -> Result<String> {
    segwit(network, 0, &hash160(&key.serialize_compressed()))
}

/// Pay-to-taproot address (segwit v1): the witness program is the
/// 32-byte x-only public key, encoded with Bech32m.
///
/// The key is used as-is; script-path tweaking is the caller's
/// concern.
pub fn p2tr(key: &PublicKey, network: Network) -> Result<String> {
    segwit(network, 1, &key.x_bytes())
}
