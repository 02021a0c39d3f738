use std::str::FromStr;

use exact_rational::{BigInt, BigUint, Rational, RationalError};
use num_rational::BigRational;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

fn rat(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom).expect("non-zero denominator")
}

#[test]
fn every_native_width_converts_with_unit_denominator() {
    let values = [
        Rational::from(-8_i8),
        Rational::from(-16_i16),
        Rational::from(-32_i32),
        Rational::from(-64_i64),
        Rational::from(-128_i128),
        Rational::from(-1_isize),
        Rational::from(8_u8),
        Rational::from(16_u16),
        Rational::from(32_u32),
        Rational::from(64_u64),
        Rational::from(128_u128),
        Rational::from(1_usize),
        Rational::from(BigInt::from(-7)),
        Rational::from(BigUint::from(7_u8)),
    ];
    for value in &values {
        assert!(value.is_integer(), "{value} should be an integer");
    }
    assert_eq!(values[3], -64_i64);
    assert_eq!(values[9], 64_u64);
    assert_eq!(Rational::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(Rational::from(i128::MIN).to_string(), i128::MIN.to_string());
}

#[test]
fn narrowing_requires_an_integer_in_range() {
    assert_eq!(i32::try_from(&rat(84, 2)), Ok(42));
    assert_eq!(u8::try_from(rat(255, 1)), Ok(255));
    assert_eq!(
        u8::try_from(&rat(256, 1)),
        Err(RationalError::OutOfRange { target: "u8" })
    );
    assert_eq!(
        u64::try_from(&rat(-1, 1)),
        Err(RationalError::OutOfRange { target: "u64" })
    );
    assert_eq!(i64::try_from(&rat(1, 2)), Err(RationalError::NotAnInteger));
    assert_eq!(BigInt::try_from(rat(-9, 3)), Ok(BigInt::from(-3)));
    assert_eq!(
        BigUint::try_from(&rat(-9, 3)),
        Err(RationalError::OutOfRange { target: "BigUint" })
    );
}

#[test]
fn to_primitive_truncates_toward_zero() {
    assert_eq!(rat(7, 2).to_i64(), Some(3));
    assert_eq!(rat(-7, 2).to_i64(), Some(-3));
    assert_eq!(rat(-7, 2).to_u64(), None);
    assert_eq!(ToPrimitive::to_f64(&rat(1, 4)), Some(0.25));
    assert_eq!(Rational::from_i64(-3), Some(Rational::from(-3)));
    assert_eq!(Rational::from_f64(f64::NAN), None);
}

#[test]
fn floats_are_decoded_exactly() {
    assert_eq!(Rational::try_from(0.5_f64), Ok(rat(1, 2)));
    assert_eq!(Rational::try_from(-0.75_f32), Ok(rat(-3, 4)));
    assert_eq!(Rational::try_from(1024.0_f64), Ok(Rational::from(1024)));
    assert_eq!(Rational::try_from(-0.0_f64), Ok(Rational::zero()));
    // 0.1 is not one tenth once it is a binary float.
    let tenth = Rational::try_from(0.1_f64).expect("finite");
    assert!(tenth != rat(1, 10));
    assert_eq!(tenth.denom(), &(BigInt::from(1) << 55_usize));
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            Rational::try_from(bad),
            Err(RationalError::InvalidArgument(_))
        ));
    }
}

#[test]
fn float_conversion_rounds_large_operands_correctly() {
    // 3^40 does not fit in 53 bits, forcing the long-division path.
    let numer = BigInt::from(12_157_665_459_056_928_801_u64);
    let value = Rational::new(numer, BigInt::from(1) << 70_usize).expect("rational");
    let expected = 12_157_665_459_056_928_801_u64 as f64 / 2f64.powi(70);
    assert_eq!(value.to_f64(), expected);
    assert_eq!((-&value).to_f64(), -expected);

    let third = Rational::new(
        BigInt::from(10).pow(40),
        BigInt::from(3) * BigInt::from(10).pow(40),
    )
    .expect("rational");
    assert_eq!(third.to_f64(), 1.0 / 3.0);

    let nearly_one = Rational::new(
        BigInt::from(10).pow(30) + 1,
        BigInt::from(10).pow(30),
    )
    .expect("rational");
    assert_eq!(nearly_one.to_f64(), 1.0);
    assert_eq!(nearly_one.to_f32(), 1.0);
}

#[test]
fn float_conversion_saturates_and_underflows() {
    let huge = Rational::from(BigInt::from(1) << 2000_usize);
    assert_eq!(huge.to_f64(), f64::INFINITY);
    assert_eq!((-&huge).to_f64(), f64::NEG_INFINITY);
    let tiny = Rational::new(1, BigInt::from(1) << 2000_usize).expect("rational");
    assert_eq!(tiny.to_f64(), 0.0);
    let smallest = Rational::new(1, BigInt::from(1) << 1074_usize).expect("rational");
    assert_eq!(smallest.to_f64(), f64::from_bits(1));
    assert_eq!(Rational::from(u64::MAX).to_f32(), u64::MAX as f32);
}

#[test]
fn big_rational_interop() {
    let ours = rat(-6, 4);
    let theirs: BigRational = ours.clone().into();
    assert_eq!(theirs, BigRational::new(BigInt::from(-3), BigInt::from(2)));
    assert_eq!(Rational::from(&theirs), ours);

    let unreduced = BigRational::new_raw(BigInt::from(10), BigInt::from(-4));
    let reduced = Rational::from(unreduced);
    assert_eq!(reduced.numer(), &BigInt::from(-5));
    assert_eq!(reduced.denom(), &BigInt::from(2));
}

#[test]
fn decimal_interop() {
    let price = Decimal::from_str("-12.250").expect("decimal");
    let exact = Rational::from(price);
    assert_eq!(exact, rat(-49, 4));
    assert_eq!(Decimal::try_from(&exact), Ok(Decimal::from_str("-12.25").expect("decimal")));

    let third = Decimal::try_from(rat(1, 3)).expect("fits");
    assert!(third.to_string().starts_with("0.3333333333"));

    let too_big = Rational::from(BigInt::from(1) << 200_usize);
    assert_eq!(
        Decimal::try_from(&too_big),
        Err(RationalError::OutOfRange { target: "Decimal" })
    );
}

#[test]
fn decimal_narrowing_rounds_oversized_parts() {
    // (2^100 + 1) / 2^10 sits below Decimal::MAX even though the numerator
    // needs 101 bits.
    let numer = (BigInt::from(1) << 100_usize) + 1;
    let value = Rational::new(numer, 1024).expect("rational");
    assert_eq!(
        Decimal::try_from(&value),
        Ok(Decimal::from_i128_with_scale(1_i128 << 90, 0))
    );
    assert_eq!(
        Decimal::try_from(-&value),
        Ok(-Decimal::from_i128_with_scale(1_i128 << 90, 0))
    );

    let tiny = Rational::new(1, BigInt::from(1) << 100_usize).expect("rational");
    assert_eq!(Decimal::try_from(&tiny), Ok(Decimal::ZERO));
    assert_eq!(Decimal::try_from(-&tiny), Ok(Decimal::ZERO));

    // Ties at the 28th digit go to the even neighbour.
    let tie = Rational::new(
        BigInt::from(5),
        BigInt::from(10).pow(29),
    )
    .expect("rational");
    assert_eq!(Decimal::try_from(&tie), Ok(Decimal::ZERO));

    let big_denominator = Rational::new(
        BigInt::from(10).pow(40),
        BigInt::from(3) * BigInt::from(10).pow(40),
    )
    .expect("rational");
    assert_eq!(
        Decimal::try_from(&big_denominator),
        Ok(Decimal::from_str("0.3333333333333333333333333333").expect("decimal"))
    );
}

#[test]
fn decimal_narrowing_fails_only_beyond_max() {
    let max = Rational::from(Decimal::MAX);
    assert_eq!(Decimal::try_from(&max), Ok(Decimal::MAX));
    assert_eq!(Decimal::try_from(-&max), Ok(Decimal::MIN));
    let just_over = &max + Rational::new(1, 2).expect("rational");
    assert_eq!(
        Decimal::try_from(&just_over),
        Err(RationalError::OutOfRange { target: "Decimal" })
    );
}

#[test]
fn serde_uses_the_canonical_string() {
    let value = rat(6, -4);
    let json = serde_json::to_string(&value).expect("serialize");
    assert_eq!(json, "\"-3/2\"");
    let back: Rational = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, value);

    let from_number: Rational = serde_json::from_str("17").expect("deserialize integer");
    assert_eq!(from_number, 17_u8);
    let negative: Rational = serde_json::from_str("-17").expect("deserialize integer");
    assert_eq!(negative, -17_i8);

    let err = serde_json::from_str::<Rational>("\"1/0\"").expect_err("zero denominator");
    assert!(err.to_string().contains("division by zero"), "{err}");
}
