//! Property-based tests for GF(2^m) field and group laws

use gf2ecdh_algorithms::ec::binary::{BinaryCurve, FieldElement, Point, Scalar};
use gf2ecdh_params::traditional::ecdh::BinaryCurveParams;
use proptest::prelude::*;

/// y² + xy = x³ + x² + 1 over GF(2)[z]/(z^7 + z + 1); G has order 71
const TOY: BinaryCurveParams = BinaryCurveParams {
    name: "toy7",
    degree: 7,
    reduction: &[1, 0],
    a: &[0x01],
    b: &[0x01],
    g_x: &[0x65],
    g_y: &[0x59],
    order: &[71],
    cofactor: 2,
    field_bytes: 1,
    scalar_bytes: 1,
};

/// Generate a 21-byte big-endian value of degree < 163
fn sect163_element_bytes() -> impl Strategy<Value = Vec<u8>> {
    any::<[u8; 21]>().prop_map(|mut b| {
        b[0] &= 0x07;
        b.to_vec()
    })
}

fn sect163r2() -> BinaryCurve {
    BinaryCurve::sect163r2().unwrap()
}

fn element(curve: &BinaryCurve, bytes: &[u8]) -> FieldElement {
    curve.field().from_bytes(bytes).unwrap()
}

proptest! {
    #[test]
    fn field_operations_stay_reduced(
        a in sect163_element_bytes(),
        b in sect163_element_bytes()
    ) {
        let curve = sect163r2();
        let f = curve.field();
        let (a, b) = (element(&curve, &a), element(&curve, &b));

        prop_assert!(f.is_reduced(&a.add(&b)));
        prop_assert!(f.is_reduced(&f.mul(&a, &b)));
        prop_assert!(f.is_reduced(&f.square(&a)));
    }

    #[test]
    fn field_additive_laws(a in sect163_element_bytes()) {
        let curve = sect163r2();
        let a = element(&curve, &a);

        prop_assert_eq!(a.add(&FieldElement::zero()), a);
        prop_assert!(a.add(&a).is_zero());
    }

    #[test]
    fn field_multiplicative_laws(
        a in sect163_element_bytes(),
        b in sect163_element_bytes(),
        c in sect163_element_bytes()
    ) {
        let curve = sect163r2();
        let f = curve.field();
        let (a, b, c) = (element(&curve, &a), element(&curve, &b), element(&curve, &c));

        prop_assert_eq!(f.mul(&a, &b), f.mul(&b, &a));
        prop_assert_eq!(f.mul(&f.mul(&a, &b), &c), f.mul(&a, &f.mul(&b, &c)));
        prop_assert_eq!(f.mul(&a, &b.add(&c)), f.mul(&a, &b).add(&f.mul(&a, &c)));
        prop_assert_eq!(f.mul(&a, &FieldElement::one()), a);
        prop_assert_eq!(f.square(&a), f.mul(&a, &a));
    }

    #[test]
    fn field_inverse(a in sect163_element_bytes()) {
        let curve = sect163r2();
        let f = curve.field();
        let a = element(&curve, &a);
        prop_assume!(!a.is_zero());

        let inv = f.invert(&a).unwrap();
        prop_assert!(f.mul(&a, &inv).is_one());
        prop_assert_eq!(f.invert(&inv).unwrap(), a);
    }

    #[test]
    fn field_sqrt_and_encoding(a in sect163_element_bytes()) {
        let curve = sect163r2();
        let f = curve.field();
        let fe = element(&curve, &a);

        prop_assert_eq!(f.square(&f.sqrt(&fe)), fe);
        prop_assert_eq!(f.to_bytes(&fe), a);
    }

    #[test]
    fn toy_scalar_multiplication_is_additive(a in 0u64..200, b in 0u64..200) {
        let curve = BinaryCurve::from_params(&TOY).unwrap();
        let g = *curve.generator();

        let lhs = curve.mul(&Scalar::from_u64(a + b), &g);
        let rhs = curve.add(
            &curve.mul(&Scalar::from_u64(a), &g),
            &curve.mul(&Scalar::from_u64(b), &g),
        );
        prop_assert_eq!(lhs, rhs);
        prop_assert!(curve.is_on_curve(&lhs));
    }

    #[test]
    fn toy_point_encoding_roundtrip(k in 1u64..71) {
        let curve = BinaryCurve::from_params(&TOY).unwrap();
        let p = curve.mul_base(&Scalar::from_u64(k));
        prop_assert!(!matches!(p, Point::Infinity));

        for format in [
            gf2ecdh_algorithms::PointFormat::Compressed,
            gf2ecdh_algorithms::PointFormat::Uncompressed,
        ] {
            let encoded = curve.encode_point(&p, format);
            prop_assert_eq!(curve.decode_point(&encoded).unwrap(), p);
        }
    }
}
