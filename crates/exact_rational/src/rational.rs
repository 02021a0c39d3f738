use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, Result};
use crate::integer_like::IntegerLike;

mod arith;
mod compare;
mod convert;
mod format;
mod num_impls;
mod serde_impls;

/// An exact fraction of two arbitrary-precision integers.
///
/// Values are always stored in canonical form: the denominator is strictly
/// positive, numerator and denominator are coprime, and zero is `0/1`. Every
/// constructor and operator goes through one canonicalizing path, so two equal
/// values always have identical fields and therefore identical hashes.
///
/// ```
/// use exact_rational::Rational;
///
/// let half = Rational::new(-4, -8).unwrap();
/// assert_eq!(half.to_string(), "1/2");
/// assert!(half == Rational::new(2, 4).unwrap());
/// assert!(half < 1_u8 && 0_i64 < half);
/// ```
#[derive(Clone, Debug)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Builds `numer / denom` in lowest terms.
    ///
    /// Fails with [`RationalError::DivideByZero`] when `denom` is zero.
    pub fn new<N: IntegerLike, D: IntegerLike>(numer: N, denom: D) -> Result<Self> {
        Self::from_bigints(numer.into_widened(), denom.into_widened())
    }

    pub fn from_bigints(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            tracing::debug!(%numer, "rejected rational with zero denominator");
            return Err(RationalError::DivideByZero);
        }
        Ok(Self::normalize(numer, denom))
    }

    pub fn from_integer<T: IntegerLike>(value: T) -> Self {
        Self {
            numer: value.into_widened(),
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0_u8)
    }

    pub fn one() -> Self {
        Self::from_integer(1_u8)
    }

    /// The single canonicalizing path. Callers guarantee `denom != 0`.
    pub(crate) fn normalize(mut numer: BigInt, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero(), "normalize called with zero denominator");
        if numer.is_zero() {
            return Self::zero();
        }
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let divisor = numer.gcd(&denom);
        if !divisor.is_one() {
            numer /= &divisor;
            denom /= &divisor;
        }
        Self { numer, denom }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.numer.sign() == Sign::Plus
    }

    pub fn is_negative(&self) -> bool {
        self.numer.sign() == Sign::Minus
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        match self.numer.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// The multiplicative inverse; fails for zero.
    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            tracing::debug!("rejected reciprocal of zero");
            return Err(RationalError::DivideByZero);
        }
        Ok(Self::normalize(self.denom.clone(), self.numer.clone()))
    }

    /// Integer power. Negative exponents invert first, so `0.pow(-1)` fails.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        let base = if exp < 0 { self.recip()? } else { self.clone() };
        let exp = exp.unsigned_abs() as usize;
        Ok(Self {
            numer: num_traits::pow(base.numer, exp),
            denom: num_traits::pow(base.denom, exp),
        })
    }

    /// Rounds toward zero.
    pub fn trunc(&self) -> Self {
        Self::from_integer(&self.numer / &self.denom)
    }

    pub fn floor(&self) -> Self {
        Self::from_integer(self.numer.div_floor(&self.denom))
    }

    pub fn ceil(&self) -> Self {
        let negated = (-&self.numer).div_floor(&self.denom);
        Self::from_integer(-negated)
    }

    /// Rounds to the nearest integer, ties away from zero.
    pub fn round(&self) -> Self {
        let (quotient, remainder) = self.numer.div_rem(&self.denom);
        let twice = remainder.abs() << 1_usize;
        if twice >= self.denom {
            Self::from_integer(quotient + self.signum())
        } else {
            Self::from_integer(quotient)
        }
    }

    /// `self - self.trunc()`; carries the sign of `self`.
    pub fn fract(&self) -> Self {
        Self {
            numer: &self.numer % &self.denom,
            denom: self.denom.clone(),
        }
        .renormalized_zero()
    }

    fn renormalized_zero(self) -> Self {
        if self.numer.is_zero() {
            Self::zero()
        } else {
            self
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}
