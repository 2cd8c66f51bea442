//! Wallet Import Format for private keys.

use crate::curve::Curve;
use crate::encoding::base58;
use crate::error::{Error, Result};
use crate::keys::PrivateKey;
use crate::network::Network;

/// Encodes a private key in WIF: Base58Check over the network version
/// byte, the 32-byte secret, and a trailing `0x01` when the
/// corresponding public key is meant to be used compressed.
pub fn encode_wif(key: &PrivateKey, network: Network, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(network.wif_version());
    payload.extend_from_slice(&key.to_bytes());
    if compressed {
        payload.push(0x01);
    }

    base58::encode_check(&payload)
}

/// Decodes a WIF string, returning the key, its network, and whether
/// the compression flag was present.
pub fn decode_wif(curve: &Curve, wif: &str) -> Result<(PrivateKey, Network, bool)> {
    let payload = base58::decode_check(wif)?;

    let (version, rest) = payload
        .split_first()
        .ok_or(Error::InvalidEncoding("empty WIF payload"))?;

    let network = Network::from_wif_version(*version)
        .ok_or(Error::InvalidEncoding("unknown WIF version byte"))?;

    let (secret, compressed): (&[u8], bool) = match rest.len() {
        32 => (rest, false),
        33 if rest[32] == 0x01 => (&rest[..32], true),
        _ => return Err(Error::InvalidEncoding("malformed WIF payload")),
    };

    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(secret);

    Ok((PrivateKey::from_bytes(curve, bytes)?, network, compressed))
}
