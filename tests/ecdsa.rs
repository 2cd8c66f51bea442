use btcrypto::curve::SECP256K1;
use btcrypto::hash::sha256;
use btcrypto::keys::PrivateKey;
use btcrypto::primitives::U256;
use btcrypto::signatures::ecdsa::{NonceGenerator, Signature, sign, verify};

fn key(hex: &str) -> PrivateKey {
    PrivateKey::new(&SECP256K1, U256::from_be_hex(hex)).unwrap()
}

const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";
const KEY_N_MINUS_1: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140";

#[test]
fn rfc6979_nonce_vectors() {
    // Widely published secp256k1 + SHA-256 derivation vectors
    let cases = [
        (
            KEY_ONE,
            &b"Satoshi Nakamoto"[..],
            "8f8a276c19f4149656b280621e358cce24f5f52542772691ee69063b74f15d15",
        ),
        (
            KEY_ONE,
            &b"All those moments will be lost in time, like tears in rain. Time to die..."[..],
            "38aa22d72376b4dbc472e06c3ba403ee0a394da63fc58d88686c611aba98d6b3",
        ),
        (
            KEY_N_MINUS_1,
            &b"Satoshi Nakamoto"[..],
            "33a19b60e25fb6f4435af53a3d42d493644827367e6453928554f43e49aa6f90",
        ),
        (
            "f8b8af8ce3c7cca5e300d33939540c10d45ce001b8f252bfbc57ba0342904181",
            &b"Alan Turing"[..],
            "525a82b70e67874398067543fd84c83d30c175fdc45fdeee082fe13b1d7cfdf1",
        ),
    ];

    for (secret, message, expected_k) in cases {
        let mut nonces = NonceGenerator::new(&SECP256K1, U256::from_be_hex(secret), sha256(message));
        assert_eq!(
            nonces.next_nonce().unwrap(),
            U256::from_be_hex(expected_k),
            "nonce for {message:?}"
        );
    }
}

#[test]
fn nonce_generation_is_deterministic() {
    let digest = sha256(b"same message");
    let secret = U256::from_be_hex(KEY_ONE);

    let k1 = NonceGenerator::new(&SECP256K1, secret, digest).next_nonce().unwrap();
    let k2 = NonceGenerator::new(&SECP256K1, secret, digest).next_nonce().unwrap();
    assert_eq!(k1, k2);

    // Retry candidates differ from the first one
    let mut nonces = NonceGenerator::new(&SECP256K1, secret, digest);
    let first = nonces.next_nonce().unwrap();
    let second = nonces.next_nonce().unwrap();
    assert_ne!(first, second);
}

#[test]
fn sign_matches_published_vectors() {
    let sig = sign(&SECP256K1, &key(KEY_ONE), sha256(b"Satoshi Nakamoto")).unwrap();
    assert_eq!(
        sig.r,
        U256::from_be_hex("934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8")
    );
    assert_eq!(
        sig.s,
        U256::from_be_hex("2442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5")
    );

    let sig = sign(&SECP256K1, &key(KEY_N_MINUS_1), sha256(b"Satoshi Nakamoto")).unwrap();
    assert_eq!(
        sig.r,
        U256::from_be_hex("fd567d121db66e382991534ada77a6bd3106f0a1098c231e47993447cd6af2d0")
    );
    assert_eq!(
        sig.s,
        U256::from_be_hex("6b39cd0eb1bc8603e159ef5c20a5c8ad685a45b06ce9bebed3f153d10d93bed5")
    );
}

#[test]
fn sign_verify_round_trip() {
    let curve = SECP256K1;
    let key = key("f8b8af8ce3c7cca5e300d33939540c10d45ce001b8f252bfbc57ba0342904181");
    let public = key.public_key(&curve);
    let digest = sha256(b"Alan Turing");

    let sig = sign(&curve, &key, digest).unwrap();
    assert!(verify(&curve, &public, digest, &sig));

    // Identical inputs always give identical signatures
    assert_eq!(sign(&curve, &key, digest).unwrap(), sig);
}

#[test]
fn signatures_are_low_s() {
    let curve = SECP256K1;
    let half_n = curve.n >> 1;

    for message in [&b"a"[..], b"b", b"c", b"d", b"e", b"f", b"g", b"h"] {
        let sig = sign(&curve, &key(KEY_ONE), sha256(message)).unwrap();
        assert!(sig.s <= half_n, "s must be normalized for {message:?}");
    }
}

#[test]
fn verify_accepts_the_high_s_form() {
    let curve = SECP256K1;
    let key = key(KEY_ONE);
    let public = key.public_key(&curve);
    let digest = sha256(b"malleability");

    let sig = sign(&curve, &key, digest).unwrap();
    let high = Signature {
        r: sig.r,
        s: curve.n.wrapping_sub(sig.s),
    };

    assert!(verify(&curve, &public, digest, &high));
}

#[test]
fn verify_rejects_tampering() {
    let curve = SECP256K1;
    let key = key(KEY_ONE);
    let public = key.public_key(&curve);
    let digest = sha256(b"payment of 1 BTC");

    let sig = sign(&curve, &key, digest).unwrap();

    // Different message
    assert!(!verify(&curve, &public, sha256(b"payment of 2 BTC"), &sig));

    // Flipped bit in each component
    let bad_r = Signature {
        r: sig.r.wrapping_add(U256::ONE),
        s: sig.s,
    };
    assert!(!verify(&curve, &public, digest, &bad_r));

    let bad_s = Signature {
        r: sig.r,
        s: sig.s.wrapping_add(U256::ONE),
    };
    assert!(!verify(&curve, &public, digest, &bad_s));

    // Wrong key
    let other = key_other().public_key(&curve);
    assert!(!verify(&curve, &other, digest, &sig));
}

fn key_other() -> PrivateKey {
    key("0000000000000000000000000000000000000000000000000000000000000002")
}

#[test]
fn verify_fails_closed_on_out_of_range_scalars() {
    let curve = SECP256K1;
    let public = key(KEY_ONE).public_key(&curve);
    let digest = sha256(b"x");

    let zero_r = Signature { r: U256::ZERO, s: U256::ONE };
    assert!(!verify(&curve, &public, digest, &zero_r));

    let huge_s = Signature { r: U256::ONE, s: curve.n };
    assert!(!verify(&curve, &public, digest, &huge_s));
}

#[test]
fn compact_serialization_round_trips() {
    let curve = SECP256K1;
    let sig = sign(&curve, &key(KEY_ONE), sha256(b"compact")).unwrap();

    let bytes = sig.to_compact();
    assert_eq!(Signature::from_compact(&curve, &bytes).unwrap(), sig);

    // Zero r is rejected at the parse boundary
    let mut bad = bytes;
    bad[..32].fill(0);
    assert!(Signature::from_compact(&curve, &bad).is_err());
}
