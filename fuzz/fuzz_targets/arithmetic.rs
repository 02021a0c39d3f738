#![no_main]

use exact_rational::Rational;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i64, i64, i64, i64, u32)| {
    let (a, b, c, d, k) = input;
    let (Ok(x), Ok(y)) = (Rational::new(a, b), Rational::new(c, d)) else {
        return;
    };

    let sum = &x + &y;
    assert_eq!(&sum - &y, x);
    assert!(sum.denom() > &exact_rational::BigInt::from(0));

    match x.checked_div(&y) {
        Ok(quotient) => assert_eq!(quotient * &y, x),
        Err(_) => assert!(y.is_zero()),
    }

    // Cross-type ordering must agree with lifting the integer to a rational.
    assert_eq!(x.partial_cmp(&k), Some(x.cmp(&Rational::from(k))));
    assert_eq!(x == k, x == Rational::from(k));
    assert_eq!(k < x, Rational::from(k) < x);
});
