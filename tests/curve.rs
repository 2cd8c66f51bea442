use btcrypto::curve::{Curve, Point, SECP256K1};
use btcrypto::field::FieldElement;
use btcrypto::primitives::U256;

/// y² = x³ + 7 over F_223; (15, 86) generates a subgroup of order 7
/// inside a group of 252 points.
const TOY: Curve = Curve {
    p: U256::from_be_hex("00000000000000000000000000000000000000000000000000000000000000df"),
    a: U256::ZERO,
    b: U256::from_be_hex("0000000000000000000000000000000000000000000000000000000000000007"),
    gx: U256::from_be_hex("000000000000000000000000000000000000000000000000000000000000000f"),
    gy: U256::from_be_hex("0000000000000000000000000000000000000000000000000000000000000056"),
    n: U256::from_be_hex("0000000000000000000000000000000000000000000000000000000000000007"),
    h: 36,
};

fn toy_point(x: u64, y: u64) -> Point {
    Point::Affine {
        x: FieldElement::new(U256::from(x), TOY.p).unwrap(),
        y: FieldElement::new(U256::from(y), TOY.p).unwrap(),
    }
}

#[test]
fn curve_equation_check() {
    for (x, y) in [(192, 105), (17, 56), (1, 193), (15, 86)] {
        assert!(TOY.is_on_curve(&toy_point(x, y)), "({x}, {y}) is on the curve");
    }
    for (x, y) in [(200, 119), (42, 99)] {
        assert!(!TOY.is_on_curve(&toy_point(x, y)), "({x}, {y}) is not");
    }
    assert!(TOY.is_on_curve(&Point::Infinity));
}

#[test]
fn addition_of_distinct_points() {
    let sum = TOY.add(&toy_point(192, 105), &toy_point(17, 56));
    assert_eq!(sum, toy_point(170, 142));
}

#[test]
fn addition_identity_and_inverse() {
    let p = toy_point(192, 105);

    assert_eq!(TOY.add(&p, &Point::Infinity), p);
    assert_eq!(TOY.add(&Point::Infinity, &p), p);

    // (192, 105) + (192, -105) = infinity
    let neg = toy_point(192, 223 - 105);
    assert!(TOY.add(&p, &neg).is_infinity());
}

#[test]
fn doubling() {
    assert_eq!(TOY.double(&toy_point(192, 105)), toy_point(49, 71));
    assert_eq!(TOY.add(&toy_point(192, 105), &toy_point(192, 105)), toy_point(49, 71));
    assert!(TOY.double(&Point::Infinity).is_infinity());
}

#[test]
fn toy_generator_has_order_seven() {
    let g = TOY.generator();
    let expected = [
        (15, 86),
        (139, 86),
        (69, 137),
        (69, 86),
        (139, 137),
        (15, 137),
    ];

    let mut acc = Point::Infinity;
    for (x, y) in expected {
        acc = TOY.add(&acc, &g);
        assert_eq!(acc, toy_point(x, y));
    }

    assert!(TOY.add(&acc, &g).is_infinity(), "7·G = infinity");
}

#[test]
fn scalar_mul_reduces_modulo_order() {
    let g = TOY.generator();

    assert!(TOY.mul(U256::ZERO, &g).is_infinity());
    assert!(TOY.mul(U256::from(7u8), &g).is_infinity(), "n·G = infinity");
    assert_eq!(TOY.mul(U256::from(8u8), &g), g, "(n+1)·G = G");
    assert_eq!(TOY.mul(U256::from(3u8), &g), toy_point(69, 137));
}

#[test]
fn validate_point_checks_subgroup() {
    // On the curve and in the order-7 subgroup
    assert!(TOY.validate_point(&TOY.generator()).is_ok());

    // On the curve but outside the subgroup
    assert!(TOY.validate_point(&toy_point(192, 105)).is_err());

    // Not on the curve at all
    assert!(TOY.validate_point(&toy_point(200, 119)).is_err());
}

#[test]
fn secp256k1_generator_is_on_curve() {
    let curve = SECP256K1;
    let g = curve.generator();
    assert!(curve.is_on_curve(&g));
    assert!(curve.validate_point(&g).is_ok());
}

#[test]
fn secp256k1_small_multiples() {
    let curve = SECP256K1;

    let two_g = curve.mul_generator(U256::from(2u8));
    assert_eq!(
        two_g.x().unwrap().num(),
        U256::from_be_hex("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5")
    );
    assert_eq!(
        two_g.y().unwrap().num(),
        U256::from_be_hex("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a")
    );

    let three_g = curve.mul_generator(U256::from(3u8));
    assert_eq!(
        three_g.x().unwrap().num(),
        U256::from_be_hex("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9")
    );
    assert_eq!(curve.add(&two_g, &curve.generator()), three_g);
    assert_eq!(curve.double(&curve.generator()), two_g);
}

#[test]
fn secp256k1_known_scalar_multiple() {
    let k = U256::from_be_hex("aa5e28d6a97a2479a65527f7290311a3624d4cc0fa1578598ee3c2613bf99522");
    let point = SECP256K1.mul_generator(k);

    assert_eq!(
        point.x().unwrap().num(),
        U256::from_be_hex("34f9460f0e4f08393d192b3c5133a6ba099aa0ad9fd54ebccfacdfa239ff49c6")
    );
    assert_eq!(
        point.y().unwrap().num(),
        U256::from_be_hex("0b71ea9bd730fd8923f6d25a7a91e7dd7728a960686cb5a901bb419e0f2ca232")
    );
}

#[test]
fn secp256k1_order_edge_cases() {
    let curve = SECP256K1;
    let g = curve.generator();

    assert!(curve.mul(curve.n, &g).is_infinity(), "n·G = infinity");
    assert_eq!(
        curve.mul(curve.n.wrapping_add(U256::ONE), &g),
        g,
        "(n+1)·G = G"
    );

    // k·G + (n-k)·G = infinity
    let k = U256::from(5u8);
    let sum = curve.add(
        &curve.mul_generator(k),
        &curve.mul_generator(curve.n.wrapping_sub(k)),
    );
    assert!(sum.is_infinity());
}

#[test]
fn lift_x_produces_the_even_y_point() {
    let curve = SECP256K1;
    let lifted = curve.lift_x(curve.gx).unwrap();

    // The generator's y is even, so lift_x recovers it exactly.
    assert_eq!(lifted, curve.generator());
    assert!(lifted.y().unwrap().is_even());

    // x = 5 gives a non-residue for x³ + 7 on secp256k1
    assert!(curve.lift_x(U256::from(5u8)).is_err());

    // x at or above the field prime is a domain error
    assert!(curve.lift_x(curve.p).is_err());
}

#[test]
fn doubling_a_two_torsion_point_gives_infinity() {
    // y² = x³ - x over F_223 has (0, 0) as a point of order two.
    let curve = Curve {
        p: U256::from_be_hex("00000000000000000000000000000000000000000000000000000000000000df"),
        a: U256::from_be_hex("00000000000000000000000000000000000000000000000000000000000000de"),
        b: U256::ZERO,
        gx: U256::ZERO,
        gy: U256::ZERO,
        n: U256::from(2u8),
        h: 1,
    };

    let p = Point::Affine {
        x: FieldElement::zero(curve.p),
        y: FieldElement::zero(curve.p),
    };

    assert!(curve.is_on_curve(&p));
    assert!(curve.double(&p).is_infinity());
}
