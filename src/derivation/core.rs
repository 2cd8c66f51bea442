//! Extended keys and child derivation.

use crate::curve::Curve;
use crate::derivation::{HARDENED, parse_path};
use crate::encoding::base58;
use crate::error::{Error, Result};
use crate::field::FieldElement;
use crate::hash::{hash160, hmac_sha512};
use crate::keys::{PrivateKey, PublicKey};
use crate::network::Network;
use crate::primitives::U256;

/// The key half of an extended key: a private scalar (from which the
/// public point is always recoverable) or a public point alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyMaterial {
    Private(PrivateKey),
    Public(PublicKey),
}

/// A BIP32 tree node: key material plus the chain code and the
/// metadata (depth, parent fingerprint, child index) that the 78-byte
/// serialization carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExtendedKey {
    pub network: Network,
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_index: u32,
    pub chain_code: [u8; 32],
    pub material: KeyMaterial,
}

impl ExtendedKey {
    /// Derives the master node from a seed (BIP32: HMAC-SHA512 keyed
    /// with the string `"Bitcoin seed"`).
    ///
    /// Seeds must be between 128 and 512 bits. The astronomically rare
    /// seed whose left HMAC half falls outside `[1, n-1]` is invalid by
    /// specification and rejected.
    pub fn master_from_seed(curve: &Curve, network: Network, seed: &[u8]) -> Result<Self> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::Domain("seed must be 16 to 64 bytes"));
        }

        let digest = hmac_sha512(b"Bitcoin seed", seed);

        let mut il = [0u8; 32];
        let mut chain_code = [0u8; 32];
        il.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);

        let key = PrivateKey::from_bytes(curve, il)
            .map_err(|_| Error::Domain("seed produces an invalid master key"))?;

        Ok(Self {
            network,
            depth: 0,
            parent_fingerprint: [0; 4],
            child_index: 0,
            chain_code,
            material: KeyMaterial::Private(key),
        })
    }

    /// The public key of this node.
    pub fn public_key(&self, curve: &Curve) -> PublicKey {
        match self.material {
            KeyMaterial::Private(key) => key.public_key(curve),
            KeyMaterial::Public(key) => key,
        }
    }

    /// The private key, if this node has one.
    pub fn private_key(&self) -> Option<PrivateKey> {
        match self.material {
            KeyMaterial::Private(key) => Some(key),
            KeyMaterial::Public(_) => None,
        }
    }

    /// First four bytes of `hash160` of the compressed public key.
    pub fn fingerprint(&self, curve: &Curve) -> [u8; 4] {
        let digest = hash160(&self.public_key(curve).serialize_compressed());

        let mut out = [0u8; 4];
        out.copy_from_slice(&digest[..4]);

        out
    }

    /// Derives the child at `index`. Indices at or above
    /// [`HARDENED`] use hardened derivation, which requires the
    /// private key.
    ///
    /// `Error::InvalidChild` marks the (negligibly rare) indices BIP32
    /// declares invalid; callers are expected to skip to the next
    /// index.
    pub fn derive_child(&self, curve: &Curve, index: u32) -> Result<Self> {
        if self.depth == u8::MAX {
            return Err(Error::Domain("derivation depth exhausted"));
        }

        let hardened = index >= HARDENED;

        let mut data = Vec::with_capacity(37);
        match (self.material, hardened) {
            (KeyMaterial::Private(key), true) => {
                data.push(0x00);
                data.extend_from_slice(&key.to_bytes());
            }
            (KeyMaterial::Private(_), false) | (KeyMaterial::Public(_), false) => {
                data.extend_from_slice(&self.public_key(curve).serialize_compressed());
            }
            (KeyMaterial::Public(_), true) => {
                return Err(Error::InvalidChild);
            }
        }
        data.extend_from_slice(&index.to_be_bytes());

        let digest = hmac_sha512(&self.chain_code, &data);

        let mut il = [0u8; 32];
        let mut chain_code = [0u8; 32];
        il.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);

        let offset = U256::from(il);
        if offset >= curve.n {
            return Err(Error::InvalidChild);
        }

        let material = match self.material {
            KeyMaterial::Private(key) => {
                // k_child = (IL + k_parent) mod n
                let child = FieldElement::reduce(offset, curve.n)
                    + FieldElement::reduce(key.secret(), curve.n);

                let key =
                    PrivateKey::new(curve, child.num()).map_err(|_| Error::InvalidChild)?;
                KeyMaterial::Private(key)
            }
            KeyMaterial::Public(key) => {
                // K_child = IL·G + K_parent
                let point = curve.add(&curve.mul_generator(offset), &key.point());

                let key = PublicKey::from_point(curve, point).map_err(|_| Error::InvalidChild)?;
                KeyMaterial::Public(key)
            }
        };

        Ok(Self {
            network: self.network,
            depth: self.depth + 1,
            parent_fingerprint: self.fingerprint(curve),
            child_index: index,
            chain_code,
            material,
        })
    }

    /// Derives along a path such as `m/44'/0'/0'/0/7`.
    pub fn derive_path(&self, curve: &Curve, path: &str) -> Result<Self> {
        let mut node = *self;
        for index in parse_path(path)? {
            node = node.derive_child(curve, index)?;
        }

        Ok(node)
    }

    /// The public-only version of this node (xpub from xprv). The
    /// chain code is kept, so normal child derivation still works;
    /// hardened derivation does not.
    pub fn neuter(&self, curve: &Curve) -> Self {
        Self {
            material: KeyMaterial::Public(self.public_key(curve)),
            ..*self
        }
    }

    /// The 78-byte extended-key serialization.
    pub fn serialize(&self, curve: &Curve) -> [u8; 78] {
        let mut out = [0u8; 78];

        let version = match self.material {
            KeyMaterial::Private(_) => self.network.xprv_version(),
            KeyMaterial::Public(_) => self.network.xpub_version(),
        };

        out[0..4].copy_from_slice(&version);
        out[4] = self.depth;
        out[5..9].copy_from_slice(&self.parent_fingerprint);
        out[9..13].copy_from_slice(&self.child_index.to_be_bytes());
        out[13..45].copy_from_slice(&self.chain_code);

        match self.material {
            KeyMaterial::Private(key) => {
                out[45] = 0x00;
                out[46..].copy_from_slice(&key.to_bytes());
            }
            KeyMaterial::Public(key) => {
                out[45..].copy_from_slice(&key.serialize_compressed());
            }
        }

        out
    }

    /// Base58Check form (`xprv…` / `xpub…` on mainnet).
    pub fn to_base58(&self, curve: &Curve) -> String {
        base58::encode_check(&self.serialize(curve))
    }

    /// Parses a Base58Check extended key, validating the version
    /// bytes, the key material, and the master-node invariants.
    pub fn from_base58(curve: &Curve, encoded: &str) -> Result<Self> {
        let payload = base58::decode_check(encoded)?;
        let bytes: &[u8; 78] = payload
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidEncoding("extended key must be 78 bytes"))?;

        let mut version = [0u8; 4];
        version.copy_from_slice(&bytes[0..4]);

        let depth = bytes[4];

        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&bytes[5..9]);

        let child_index = u32::from_be_bytes(bytes[9..13].try_into().unwrap());

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&bytes[13..45]);

        let (network, material) = match version {
            v if v == Network::Mainnet.xprv_version() || v == Network::Testnet.xprv_version() => {
                if bytes[45] != 0x00 {
                    return Err(Error::InvalidEncoding("private key must be 0x00-padded"));
                }

                let mut secret = [0u8; 32];
                secret.copy_from_slice(&bytes[46..]);
                let key = PrivateKey::from_bytes(curve, secret)
                    .map_err(|_| Error::InvalidEncoding("private key out of range"))?;

                let network = if version == Network::Mainnet.xprv_version() {
                    Network::Mainnet
                } else {
                    Network::Testnet
                };

                (network, KeyMaterial::Private(key))
            }
            v if v == Network::Mainnet.xpub_version() || v == Network::Testnet.xpub_version() => {
                let key = PublicKey::parse(curve, &bytes[45..])
                    .map_err(|_| Error::InvalidEncoding("invalid public key"))?;

                let network = if version == Network::Mainnet.xpub_version() {
                    Network::Mainnet
                } else {
                    Network::Testnet
                };

                (network, KeyMaterial::Public(key))
            }
            _ => return Err(Error::InvalidEncoding("unknown extended-key version")),
        };

        // A depth-0 node cannot have a parent or a child index.
        if depth == 0 && (parent_fingerprint != [0; 4] || child_index != 0) {
            return Err(Error::InvalidEncoding("malformed master node"));
        }

        Ok(Self {
            network,
            depth,
            parent_fingerprint,
            child_index,
            chain_code,
            material,
        })
    }
}
