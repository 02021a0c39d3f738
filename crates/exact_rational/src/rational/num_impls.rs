use num_bigint::BigInt;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, Num, One, Signed, ToPrimitive,
    Zero,
};

use super::format::reject_separators;
use super::Rational;
use crate::error::{RationalError, Result};

impl Zero for Rational {
    fn zero() -> Self {
        Rational::zero()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::one()
    }
}

impl Num for Rational {
    type FromStrRadixErr = RationalError;

    /// Parses `"n"` or `"n/d"` with both parts in `radix`.
    fn from_str_radix(input: &str, radix: u32) -> Result<Self> {
        let parse = |part: &str, what: &str| -> Result<BigInt> {
            reject_separators(input, part, what)?;
            BigInt::from_str_radix(part, radix)
                .map_err(|err| RationalError::parse(input, format!("{what}: {err}")))
        };
        match input.split_once('/') {
            Some((numer, denom)) => {
                Rational::from_bigints(parse(numer, "numerator")?, parse(denom, "denominator")?)
            }
            None => parse(input, "integer").map(Rational::from_integer),
        }
    }
}

impl Signed for Rational {
    fn abs(&self) -> Self {
        Rational::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Rational::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Rational::from_integer(Rational::signum(self))
    }

    fn is_positive(&self) -> bool {
        Rational::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }
}

/// Integer conversions truncate toward zero; float conversions round.
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        (&self.numer / &self.denom).to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        (&self.numer / &self.denom).to_i128()
    }

    fn to_u64(&self) -> Option<u64> {
        (&self.numer / &self.denom).to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        (&self.numer / &self.denom).to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Rational::to_f32(self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Rational::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Rational::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Rational::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Rational::from(n))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Rational::try_from(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Rational::try_from(n).ok()
    }
}

impl CheckedAdd for Rational {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl CheckedSub for Rational {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self - v)
    }
}

impl CheckedMul for Rational {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(self * v)
    }
}

impl CheckedDiv for Rational {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Rational::checked_div(self, v).ok()
    }
}
