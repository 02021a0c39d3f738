use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::Rational;
use crate::config::{DecimalFormat, Rounding};
use crate::error::{RationalError, Result};

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// num-bigint skips `_` between digits; the textual forms accepted here do
/// not allow separators anywhere.
pub(super) fn reject_separators(input: &str, part: &str, what: &str) -> Result<()> {
    if part.contains('_') {
        return Err(RationalError::parse(input, format!("digit separator in {what}")));
    }
    Ok(())
}

fn parse_integer(input: &str, part: &str, what: &str) -> Result<BigInt> {
    if part.is_empty() {
        return Err(RationalError::parse(input, format!("missing {what}")));
    }
    if part.starts_with(|c: char| c.is_whitespace()) || part.ends_with(|c: char| c.is_whitespace())
    {
        return Err(RationalError::parse(input, format!("whitespace around {what}")));
    }
    reject_separators(input, part, what)?;
    BigInt::from_str(part).map_err(|err| RationalError::parse(input, format!("{what}: {err}")))
}

fn parse_decimal(input: &str) -> Result<Rational> {
    let (negative, unsigned) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let Some((whole, fraction)) = unsigned.split_once('.') else {
        return Err(RationalError::parse(input, "expected a decimal point"));
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(RationalError::parse(input, "no digits"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(RationalError::parse(input, "decimal digits expected"));
    }
    let digits = format!("{whole}{fraction}");
    let mut numer = BigInt::from_str(&digits)
        .map_err(|err| RationalError::parse(input, err.to_string()))?;
    if negative {
        numer = -numer;
    }
    let denom = num_traits::pow(BigInt::from(10_u8), fraction.len());
    Ok(Rational::normalize(numer, denom))
}

/// Accepts `"n"`, `"n/d"` and plain decimals such as `"-1.25"`.
///
/// A zero denominator is reported as [`RationalError::DivideByZero`] rather
/// than a parse error.
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(RationalError::parse(input, "empty input"));
        }
        if let Some((numer, denom)) = input.split_once('/') {
            let numer = parse_integer(input, numer, "numerator")?;
            let denom = parse_integer(input, denom, "denominator")?;
            return Rational::from_bigints(numer, denom);
        }
        if input.contains('.') {
            return parse_decimal(input);
        }
        parse_integer(input, input, "integer").map(Rational::from_integer)
    }
}

impl Rational {
    /// Decimal expansion by long division, e.g. `2/3` with four digits and
    /// [`Rounding::HalfUp`] renders as `"0.6667"`.
    pub fn to_decimal_string(&self, format: &DecimalFormat) -> String {
        let digits = format.fraction_digits;
        let scaled = &self.numer * num_traits::pow(BigInt::from(10_u8), digits);
        let (mut quotient, remainder) = scaled.div_rem(&self.denom);
        if !remainder.is_zero() {
            let twice = remainder.abs() << 1_usize;
            let round_away = match format.rounding {
                Rounding::Truncate => false,
                Rounding::HalfUp => twice >= self.denom,
                Rounding::HalfEven => {
                    twice > self.denom || (twice == self.denom && quotient.is_odd())
                }
            };
            if round_away {
                if self.is_negative() {
                    quotient -= BigInt::one();
                } else {
                    quotient += BigInt::one();
                }
            }
        }

        let mut out = String::new();
        if quotient.is_negative() {
            out.push('-');
        }
        let magnitude = quotient.magnitude().to_string();
        if digits == 0 {
            out.push_str(&magnitude);
            return out;
        }
        let padded = format!("{magnitude:0>width$}", width = digits + 1);
        let (whole, fraction) = padded.split_at(padded.len() - digits);
        out.push_str(whole);
        out.push('.');
        out.push_str(fraction);
        out
    }

    /// [`Rational::to_decimal_string`] with [`DecimalFormat::default`].
    pub fn to_decimal(&self) -> String {
        self.to_decimal_string(&DecimalFormat::default())
    }
}
