use btcrypto::primitives::U256;

#[test]
fn u256_constants() {
    assert_eq!(U256::MAX, U256::from([255u8; 32]));
    assert!(U256::ZERO.is_zero());
    assert_eq!(U256::ONE, U256::from(1u8));
}

#[test]
fn u256_from_be_hex_round_trips_through_display() {
    let hex = "fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210";
    let value = U256::from_be_hex(hex);
    assert_eq!(value.to_string(), hex);
}

#[test]
fn u256_ordering_is_numeric() {
    let small = U256::from(2u8);
    let big = U256::from(0x100u32);
    assert!(small < big);
    assert!(U256::MAX > big);
}

#[test]
fn u256_addition_carries() {
    let (sum, carry) = U256::MAX.overflowing_add(U256::ONE);
    assert!(sum.is_zero(), "MAX + 1 wraps to zero");
    assert!(carry, "MAX + 1 overflows");

    let a = U256::from_be_hex("fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210");
    let b = U256::from_be_hex("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef");
    let (sum, carry) = a.overflowing_add(b);
    assert_eq!(sum, U256::MAX);
    assert!(!carry);
}

#[test]
fn u256_subtraction_wraps() {
    assert_eq!(U256::ZERO.wrapping_sub(U256::ONE), U256::MAX);
    assert_eq!(U256::from(7u8) - U256::from(5u8), U256::from(2u8));
}

#[test]
fn u256_shifts() {
    let one = U256::ONE;
    let high = one << 255;
    assert!(high.bit(255));
    assert_eq!(high.leading_zeros(), 0);
    assert_eq!(high >> 255, one);

    assert_eq!(one << 256, U256::ZERO);
    assert_eq!(one >> 1, U256::ZERO);
    assert_eq!(U256::from(0xf0u8) >> 4, U256::from(0x0fu8));
    assert_eq!(U256::from(0x0fu8) << 4, U256::from(0xf0u8));
}

#[test]
fn u256_bit_access() {
    let v = U256::from(0b1010u8);
    assert!(!v.bit(0));
    assert!(v.bit(1));
    assert!(!v.bit(2));
    assert!(v.bit(3));
    assert!(!v.bit(256), "out-of-range bits read as zero");
}

#[test]
fn u256_leading_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);
    assert_eq!(U256::MAX.leading_zeros(), 0);

    let mut bytes = [0u8; 32];
    bytes[0] = 0x10;
    assert_eq!(U256::from(bytes).leading_zeros(), 3);
}

#[test]
fn u256_parity() {
    assert!(U256::ZERO.is_even());
    assert!(!U256::ONE.is_even());
    assert!(U256::from(0x100u32).is_even());
}

#[test]
fn u256_shr1_with_carry() {
    let half = U256::MAX.shr1_with_carry(false);
    assert!(!half.bit(255));
    assert_eq!(half, U256::MAX >> 1);

    let with_carry = U256::ZERO.shr1_with_carry(true);
    assert_eq!(with_carry, U256::ONE << 255);
}

#[test]
fn u256_widening_mul_against_known_products() {
    let p = U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    let n = U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

    let a = U256::from_be_hex("fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210");
    let b = U256::from_be_hex("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef");

    assert_eq!(
        a.widening_mul(b).rem(p),
        U256::from_be_hex("8c644419c8c50984e1e06f7bc8ebdb3c375c9addc912acf38dfac0488d5f655d")
    );
    assert_eq!(
        a.widening_mul(b).rem(n),
        U256::from_be_hex("a5393281d581eac38aa0b5b7a460398562c086099ee7fe5700c013d19c7b1d99")
    );

    // Largest possible product, reduced by a modulus above 2^255.
    assert_eq!(
        U256::MAX.widening_mul(U256::MAX).rem(p),
        U256::from_be_hex("000000000000000000000000000000000000000000000001000007a0000e8900")
    );
}

#[test]
fn u256_rem() {
    let p = U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

    assert_eq!(U256::from(5u8).rem(U256::from(3u8)), U256::from(2u8));
    assert_eq!(U256::from(5u8).rem(p), U256::from(5u8), "below the modulus");
    assert_eq!(p.rem(p), U256::ZERO);
    assert_eq!(
        U256::MAX.rem(p),
        U256::from_be_hex("00000000000000000000000000000000000000000000000000000001000003d0")
    );
}

#[test]
fn u256_limb_conversions() {
    let v = U256::from_be_hex("0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef");
    let limbs: [u64; 4] = v.into();
    assert_eq!(limbs, [0x0123456789abcdef; 4]);
    assert_eq!(U256::from(limbs), v);

    assert_eq!(u64::try_from(U256::from(42u8)), Ok(42u64));
    assert_eq!(u32::try_from(U256::from(42u8)), Ok(42u32));
    assert!(u32::try_from(U256::MAX).is_err());
    assert!(u64::try_from(U256::ONE << 64).is_err());
}
