use std::borrow::Cow;

use num_bigint::{BigInt, BigUint};

/// Anything that widens losslessly into [`BigInt`].
///
/// Every native integer width, `BigInt` and `BigUint` implement it, so the
/// comparison and arithmetic surface of [`crate::Rational`] is written once
/// against this capability instead of once per width and signedness.
pub trait IntegerLike {
    /// Borrow-or-widen view used by comparisons.
    fn widen(&self) -> Cow<'_, BigInt>;

    fn into_widened(self) -> BigInt
    where
        Self: Sized;
}

macro_rules! impl_integer_like_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntegerLike for $t {
                fn widen(&self) -> Cow<'_, BigInt> {
                    Cow::Owned(BigInt::from(*self))
                }

                fn into_widened(self) -> BigInt {
                    BigInt::from(self)
                }
            }
        )*
    };
}

impl_integer_like_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntegerLike for BigInt {
    fn widen(&self) -> Cow<'_, BigInt> {
        Cow::Borrowed(self)
    }

    fn into_widened(self) -> BigInt {
        self
    }
}

impl IntegerLike for BigUint {
    fn widen(&self) -> Cow<'_, BigInt> {
        Cow::Owned(BigInt::from(self.clone()))
    }

    fn into_widened(self) -> BigInt {
        BigInt::from(self)
    }
}

impl<T: IntegerLike + Clone> IntegerLike for &T {
    fn widen(&self) -> Cow<'_, BigInt> {
        (**self).widen()
    }

    fn into_widened(self) -> BigInt {
        self.clone().into_widened()
    }
}

/// Invokes `$m!` once with the full list of integer-like operand types.
macro_rules! for_each_integer_like {
    ($m:ident) => {
        $m!(
            i8,
            i16,
            i32,
            i64,
            i128,
            isize,
            u8,
            u16,
            u32,
            u64,
            u128,
            usize,
            ::num_bigint::BigInt,
            ::num_bigint::BigUint
        );
    };
}

pub(crate) use for_each_integer_like;
