use btcrypto::hash::{
    hash160, hash256, hmac_sha256, hmac_sha512, ripemd160, sha256, sha512, tagged_hash,
};

use sha2::Digest;

#[test]
fn sha256_published_vectors() {
    assert_eq!(
        sha256(b"abc").to_vec(),
        hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad").unwrap()
    );
    assert_eq!(
        sha256(b"").to_vec(),
        hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855").unwrap()
    );
    // 56 bytes: the length no longer fits the first padded block
    assert_eq!(
        sha256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").to_vec(),
        hex::decode("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1").unwrap()
    );
}

#[test]
fn sha512_published_vectors() {
    assert_eq!(
        sha512(b"abc").to_vec(),
        hex::decode(
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        )
        .unwrap()
    );
    // 112 bytes forces the extra padding block
    assert_eq!(
        sha512(&[b'a'; 112]).to_vec(),
        hex::decode(
            "c01d080efd492776a1c43bd23dd99d0a2e626d481e16782e75d54c2503b5dc32\
             bd05f0f1ba33e568b88fd2d970929b719ecbb152f58f130a407c8830604b70ca"
        )
        .unwrap()
    );
}

#[test]
fn sha_matches_reference_crate() {
    let mut input = Vec::new();
    for len in 0..200usize {
        assert_eq!(
            sha256(&input).to_vec(),
            sha2::Sha256::digest(&input).to_vec(),
            "sha256 mismatch at length {len}"
        );
        assert_eq!(
            sha512(&input).to_vec(),
            sha2::Sha512::digest(&input).to_vec(),
            "sha512 mismatch at length {len}"
        );
        input.push((len * 31 + 7) as u8);
    }
}

#[test]
fn ripemd160_published_vectors() {
    assert_eq!(
        ripemd160(b"").to_vec(),
        hex::decode("9c1185a5c5e9fc54612808977ee8f548b2258d31").unwrap()
    );
    assert_eq!(
        ripemd160(b"abc").to_vec(),
        hex::decode("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc").unwrap()
    );
    assert_eq!(
        ripemd160(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").to_vec(),
        hex::decode("12a053384a9c0c88e405a06c27dcf49ada62eb2b").unwrap()
    );
}

#[test]
fn bitcoin_hash_compositions() {
    assert_eq!(
        hash256(b"hello").to_vec(),
        hex::decode("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50").unwrap()
    );

    // hash160 of the compressed generator point, the BIP173 example key
    let generator_sec =
        hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798").unwrap();
    assert_eq!(
        hash160(&generator_sec).to_vec(),
        hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap()
    );
}

#[test]
fn hmac_rfc4231_vectors() {
    // Case 2: short key
    let digest = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
    assert_eq!(
        digest.to_vec(),
        hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843").unwrap()
    );

    let digest = hmac_sha512(b"Jefe", b"what do ya want for nothing?");
    assert_eq!(
        digest.to_vec(),
        hex::decode(
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        )
        .unwrap()
    );

    // Case 6: key longer than the block size is hashed first
    let digest = hmac_sha256(
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
    );
    assert_eq!(
        digest.to_vec(),
        hex::decode("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54").unwrap()
    );
}

#[test]
fn tagged_hash_is_domain_separated() {
    assert_eq!(
        tagged_hash("BIP0340/challenge", b"btcrypto").to_vec(),
        hex::decode("1cea19896b5fdb80c541f0ac877d17899f63bc98e5bb1fedbb54e86e89f64ac4").unwrap()
    );

    assert_ne!(
        tagged_hash("BIP0340/aux", b"data"),
        tagged_hash("BIP0340/nonce", b"data"),
        "different tags produce different digests for the same input"
    );
    assert_ne!(
        tagged_hash("BIP0340/aux", b"data").to_vec(),
        sha256(b"data").to_vec()
    );
}
