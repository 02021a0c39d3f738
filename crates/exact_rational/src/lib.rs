//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! [`Rational`] keeps every value in lowest terms with a positive
//! denominator, and compares against other rationals and against every
//! native integer width (plus `BigInt`/`BigUint`) by cross-multiplication,
//! never through floating point.

mod config;
mod error;
mod integer_like;
mod rational;

pub use config::{
    with_default_fraction_digits, DecimalFormat, Rounding, DEFAULT_FRACTION_DIGITS,
    FRACTION_DIGITS_ENV,
};
pub use error::{RationalError, Result};
pub use integer_like::IntegerLike;
pub use rational::Rational;

pub use num_bigint::{BigInt, BigUint};
