//! Network selection and the version bytes attached to serialized
//! key material on each network.

/// Bitcoin network, mainnet or testnet.
///
/// Only affects serialization prefixes (WIF, addresses, extended
/// keys); the underlying cryptography is identical.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// WIF private-key version byte.
    pub fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    /// P2PKH address version byte.
    pub fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Human-readable part for segwit addresses.
    pub fn bech32_hrp(self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet => "tb",
        }
    }

    /// BIP32 version bytes for extended private keys (xprv / tprv).
    pub fn xprv_version(self) -> [u8; 4] {
        match self {
            Network::Mainnet => [0x04, 0x88, 0xad, 0xe4],
            Network::Testnet => [0x04, 0x35, 0x83, 0x94],
        }
    }

    /// BIP32 version bytes for extended public keys (xpub / tpub).
    pub fn xpub_version(self) -> [u8; 4] {
        match self {
            Network::Mainnet => [0x04, 0x88, 0xb2, 0x1e],
            Network::Testnet => [0x04, 0x35, 0x87, 0xcf],
        }
    }

    /// Recovers the network from a WIF version byte.
    pub fn from_wif_version(byte: u8) -> Option<Self> {
        match byte {
            0x80 => Some(Network::Mainnet),
            0xef => Some(Network::Testnet),
            _ => None,
        }
    }
}
