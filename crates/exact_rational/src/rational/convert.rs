use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::float::FloatCore;
use num_traits::{One, ToPrimitive, Zero};
use rust_decimal::Decimal;

use super::Rational;
use crate::error::{RationalError, Result};
use crate::integer_like::for_each_integer_like;

/// Largest magnitude at which every integer is exactly representable in an f64.
const F64_EXACT_LIMIT: u64 = 1 << 53;
const F32_EXACT_LIMIT: u64 = 1 << 24;

macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Rational::from_integer(value)
                }
            }
        )*
    };
}

for_each_integer_like!(impl_from_integer);

macro_rules! impl_try_into_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<&Rational> for $t {
                type Error = RationalError;

                fn try_from(value: &Rational) -> Result<$t> {
                    if !value.is_integer() {
                        return Err(RationalError::NotAnInteger);
                    }
                    <$t>::try_from(&value.numer).map_err(|_| RationalError::OutOfRange {
                        target: stringify!($t),
                    })
                }
            }

            impl TryFrom<Rational> for $t {
                type Error = RationalError;

                fn try_from(value: Rational) -> Result<$t> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_try_into_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<&Rational> for BigInt {
    type Error = RationalError;

    fn try_from(value: &Rational) -> Result<BigInt> {
        if !value.is_integer() {
            return Err(RationalError::NotAnInteger);
        }
        Ok(value.numer.clone())
    }
}

impl TryFrom<Rational> for BigInt {
    type Error = RationalError;

    fn try_from(value: Rational) -> Result<BigInt> {
        if !value.is_integer() {
            return Err(RationalError::NotAnInteger);
        }
        Ok(value.numer)
    }
}

impl TryFrom<&Rational> for BigUint {
    type Error = RationalError;

    fn try_from(value: &Rational) -> Result<BigUint> {
        if !value.is_integer() {
            return Err(RationalError::NotAnInteger);
        }
        value
            .numer
            .to_biguint()
            .ok_or(RationalError::OutOfRange { target: "BigUint" })
    }
}

// Every finite float is a dyadic rational, so these conversions are exact.
macro_rules! impl_try_from_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<$t> for Rational {
                type Error = RationalError;

                fn try_from(value: $t) -> Result<Rational> {
                    if !value.is_finite() {
                        tracing::debug!(value = %value, "rejected non-finite float");
                        return Err(RationalError::InvalidArgument(format!(
                            "cannot represent {value} exactly"
                        )));
                    }
                    let (mantissa, exponent, sign) = FloatCore::integer_decode(value);
                    let mut numer = BigInt::from(mantissa);
                    if sign < 0 {
                        numer = -numer;
                    }
                    if exponent >= 0 {
                        return Ok(Rational::from_integer(numer << exponent as usize));
                    }
                    let denom = BigInt::one() << exponent.unsigned_abs() as usize;
                    Ok(Rational::normalize(numer, denom))
                }
            }
        )*
    };
}

impl_try_from_float!(f32, f64);

/// `|n/d|` scaled by `2^shift` and truncated so that it carries
/// `precision + 2` or `precision + 3` significant bits. The lowest bit is
/// forced on when the division left a remainder, which keeps the final
/// integer-to-float cast correctly rounded.
fn sticky_quotient(value: &Rational, precision: u32) -> (u64, i64) {
    let numer = value.numer.magnitude();
    let denom = value.denom.magnitude();
    let shift = i64::from(precision) + 2 - (numer.bits() as i64 - denom.bits() as i64);
    let (quotient, remainder) = if shift >= 0 {
        (numer << shift as usize).div_rem(denom)
    } else {
        numer.div_rem(&(denom << shift.unsigned_abs() as usize))
    };
    let mut bits = quotient.to_u64().unwrap_or(u64::MAX);
    if !remainder.is_zero() {
        bits |= 1;
    }
    (bits, shift)
}

fn scale_f64(mut value: f64, mut exp: i64) -> f64 {
    while exp > 1000 {
        value *= 2f64.powi(1000);
        exp -= 1000;
    }
    while exp < -1000 {
        value *= 2f64.powi(-1000);
        exp += 1000;
    }
    value * 2f64.powi(exp as i32)
}

fn scale_f32(mut value: f32, mut exp: i64) -> f32 {
    while exp > 100 {
        value *= 2f32.powi(100);
        exp -= 100;
    }
    while exp < -100 {
        value *= 2f32.powi(-100);
        exp += 100;
    }
    value * 2f32.powi(exp as i32)
}

fn small_magnitudes(value: &Rational, limit: u64) -> Option<(u64, u64)> {
    let numer = value.numer.magnitude().to_u64()?;
    let denom = value.denom.magnitude().to_u64()?;
    (numer <= limit && denom <= limit).then_some((numer, denom))
}

impl Rational {
    /// Nearest `f64`, ties to even. Results below the normal range may be
    /// off by one unit in the last place; magnitudes beyond `f64::MAX` become
    /// infinite.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let magnitude = match small_magnitudes(self, F64_EXACT_LIMIT) {
            // Both operands are exact, so IEEE division rounds once.
            Some((numer, denom)) => numer as f64 / denom as f64,
            None => {
                let (bits, shift) = sticky_quotient(self, f64::MANTISSA_DIGITS);
                tracing::trace!(
                    numer_bits = self.numer.bits(),
                    denom_bits = self.denom.bits(),
                    shift,
                    "long-division float conversion"
                );
                scale_f64(bits as f64, -shift)
            }
        };
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn to_f32(&self) -> f32 {
        if self.is_zero() {
            return 0.0;
        }
        let magnitude = match small_magnitudes(self, F32_EXACT_LIMIT) {
            Some((numer, denom)) => numer as f32 / denom as f32,
            None => {
                let (bits, shift) = sticky_quotient(self, f32::MANTISSA_DIGITS);
                scale_f32(bits as f32, -shift)
            }
        };
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        // `Ratio` may carry an unreduced value built with `new_raw`.
        let (numer, denom) = value.into_raw();
        Rational::normalize(numer, denom)
    }
}

impl From<&BigRational> for Rational {
    fn from(value: &BigRational) -> Self {
        Rational::normalize(value.numer().clone(), value.denom().clone())
    }
}

impl From<Rational> for BigRational {
    fn from(value: Rational) -> Self {
        BigRational::new_raw(value.numer, value.denom)
    }
}

impl From<&Rational> for BigRational {
    fn from(value: &Rational) -> Self {
        BigRational::new_raw(value.numer.clone(), value.denom.clone())
    }
}

impl From<Decimal> for Rational {
    fn from(value: Decimal) -> Self {
        let denom = num_traits::pow(BigInt::from(10_u8), value.scale() as usize);
        Rational::normalize(BigInt::from(value.mantissa()), denom)
    }
}

/// `Decimal` keeps at most 28 fraction digits.
const DECIMAL_MAX_SCALE: u32 = 28;

/// Largest `Decimal` mantissa, `2^96 - 1`.
fn decimal_max_mantissa() -> BigUint {
    (BigUint::one() << 96_usize) - 1_u8
}

/// `|value| * 10^scale` rounded half to even.
fn scaled_magnitude(value: &Rational, scale: u32) -> BigUint {
    let denom = value.denom.magnitude();
    let scaled = value.numer.magnitude() * num_traits::pow(BigUint::from(10_u8), scale as usize);
    let (mut quotient, remainder) = scaled.div_rem(denom);
    let twice = remainder << 1_usize;
    if &twice > denom || (&twice == denom && quotient.is_odd()) {
        quotient += 1_u8;
    }
    quotient
}

/// Rounds half to even at the finest scale (up to 28 fraction digits) whose
/// mantissa still fits in 96 bits. Fails only when the magnitude exceeds
/// [`Decimal::MAX`]; values too small to show at 28 digits become zero.
impl TryFrom<&Rational> for Decimal {
    type Error = RationalError;

    fn try_from(value: &Rational) -> Result<Decimal> {
        let out_of_range = || RationalError::OutOfRange { target: "Decimal" };
        let max_mantissa = decimal_max_mantissa();
        if value.numer.magnitude() > &(&max_mantissa * value.denom.magnitude()) {
            tracing::debug!(%value, "rational exceeds Decimal::MAX");
            return Err(out_of_range());
        }
        let (mantissa, scale) = (0..=DECIMAL_MAX_SCALE)
            .rev()
            .map(|scale| (scaled_magnitude(value, scale), scale))
            .find(|(mantissa, _)| mantissa <= &max_mantissa)
            .ok_or_else(out_of_range)?;
        let mut mantissa = mantissa.to_i128().ok_or_else(out_of_range)?;
        if value.is_negative() {
            mantissa = -mantissa;
        }
        Decimal::try_from_i128_with_scale(mantissa, scale)
            .map(|decimal| decimal.normalize())
            .map_err(|_| out_of_range())
    }
}

impl TryFrom<Rational> for Decimal {
    type Error = RationalError;

    fn try_from(value: Rational) -> Result<Decimal> {
        Decimal::try_from(&value)
    }
}
