use btcrypto::curve::SECP256K1;
use btcrypto::keys::PrivateKey;
use btcrypto::primitives::U256;
use btcrypto::signatures::schnorr::{sign, verify};

fn bytes32(hex: &str) -> [u8; 32] {
    hex::decode(hex).unwrap().try_into().unwrap()
}

fn bytes64(hex: &str) -> [u8; 64] {
    hex::decode(hex).unwrap().try_into().unwrap()
}

struct Bip340Case {
    seckey: &'static str,
    pubkey: &'static str,
    aux: &'static str,
    message: &'static str,
    signature: &'static str,
}

// BIP340 test vectors 0 through 2.
const CASES: [Bip340Case; 3] = [
    Bip340Case {
        seckey: "0000000000000000000000000000000000000000000000000000000000000003",
        pubkey: "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "e907831f80848d1069a5371b402410364bdf1c5f8307b0084c55f1ce2dca8215\
                    25f66a4a85ea8b71e482a74f382d2ce5ebeee8fdb2172f477df4900d310536c0",
    },
    Bip340Case {
        seckey: "b7e151628aed2a6abf7158809cf4f3c762e7160f38b4da56a784d9045190cfef",
        pubkey: "dff1d77f2a671c5f36183726db2341be58feae1da2deced843240f7b502ba659",
        aux: "0000000000000000000000000000000000000000000000000000000000000001",
        message: "243f6a8885a308d313198a2e03707344a4093822299f31d0082efa98ec4e6c89",
        signature: "6896bd60eeae296db48a229ff71dfe071bde413e6d43f917dc8dcf8c78de3341\
                    8906d11ac976abccb20b091292bff4ea897efcb639ea871cfa95f6de339e4b0a",
    },
    Bip340Case {
        seckey: "c90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74020bbea63b14e5c9",
        pubkey: "dd308afec5777e13121fa72b9cc1b7cc0139715309b086c960e18fd969774eb8",
        aux: "c87aa53824b4d7ae2eb035a2b5bbbccc080e76cdc6d1692c4b0b62d798e6d906",
        message: "7e2d58d8b3bcdf1abadec7829054f90dda9805aab56c77333024b9d0a508b75c",
        signature: "5831aaeed7b44bb74e5eab94ba9d4294c49bcf2a60728d8b4c200f50dd313c1b\
                    ab745879a5ad954a72c45a91c3a51d3c7adea98d82f8481e0e1e03674a6f3fb7",
    },
];

#[test]
fn bip340_signing_vectors() {
    for case in &CASES {
        let key = PrivateKey::new(&SECP256K1, U256::from_be_hex(case.seckey)).unwrap();
        let message = bytes32(case.message);

        let sig = sign(&SECP256K1, &key, &message, bytes32(case.aux)).unwrap();
        assert_eq!(sig, bytes64(case.signature), "signature for key {}", case.seckey);

        assert_eq!(
            key.public_key(&SECP256K1).x_bytes(),
            bytes32(case.pubkey),
            "x-only public key for {}",
            case.seckey
        );
    }
}

#[test]
fn bip340_verification_vectors() {
    for case in &CASES {
        assert!(verify(
            &SECP256K1,
            bytes32(case.pubkey),
            &bytes32(case.message),
            &bytes64(case.signature),
        ));
    }
}

#[test]
fn verify_rejects_tampering() {
    let case = &CASES[1];
    let pubkey = bytes32(case.pubkey);
    let message = bytes32(case.message);
    let sig = bytes64(case.signature);

    // Wrong message
    assert!(!verify(&SECP256K1, pubkey, &bytes32(case.aux), &sig));

    // Each half of the signature corrupted
    let mut bad = sig;
    bad[0] ^= 0x01;
    assert!(!verify(&SECP256K1, pubkey, &message, &bad));

    let mut bad = sig;
    bad[63] ^= 0x01;
    assert!(!verify(&SECP256K1, pubkey, &message, &bad));

    // Wrong key
    assert!(!verify(&SECP256K1, bytes32(CASES[0].pubkey), &message, &sig));
}

#[test]
fn verify_rejects_malformed_inputs() {
    let case = &CASES[0];
    let message = bytes32(case.message);
    let sig = bytes64(case.signature);

    // x = 5 does not name a curve point on secp256k1
    let mut bad_key = [0u8; 32];
    bad_key[31] = 5;
    assert!(!verify(&SECP256K1, bad_key, &message, &sig));

    // x-coordinate at or above the field prime
    assert!(!verify(&SECP256K1, [0xff; 32], &message, &sig));

    // s at or above the group order
    let mut bad = sig;
    bad[32..].copy_from_slice(&SECP256K1.n.to_be_bytes());
    assert!(!verify(&SECP256K1, bytes32(case.pubkey), &message, &bad));
}

#[test]
fn aux_randomness_changes_the_signature_but_not_validity() {
    let curve = SECP256K1;
    let key = PrivateKey::new(&curve, U256::from_be_hex(CASES[1].seckey)).unwrap();
    let pubkey = key.public_key(&curve).x_bytes();
    let message = b"arbitrary length messages are fine";

    let sig_a = sign(&curve, &key, message, [0u8; 32]).unwrap();
    let sig_b = sign(&curve, &key, message, [1u8; 32]).unwrap();

    assert_ne!(sig_a, sig_b, "aux input is mixed into the nonce");
    assert!(verify(&curve, pubkey, message, &sig_a));
    assert!(verify(&curve, pubkey, message, &sig_b));
}

#[test]
fn signing_is_deterministic_for_fixed_aux() {
    let curve = SECP256K1;
    let key = PrivateKey::new(&curve, U256::from_be_hex(CASES[2].seckey)).unwrap();

    let a = sign(&curve, &key, b"msg", [7u8; 32]).unwrap();
    let b = sign(&curve, &key, b"msg", [7u8; 32]).unwrap();
    assert_eq!(a, b);
}
