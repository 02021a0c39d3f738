use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use super::Rational;
use crate::error::{RationalError, Result};
use crate::integer_like::{for_each_integer_like, IntegerLike};

fn add_rationals(lhs: &Rational, rhs: &Rational) -> Rational {
    if lhs.denom == rhs.denom {
        return Rational::normalize(&lhs.numer + &rhs.numer, lhs.denom.clone());
    }
    let numer = &lhs.numer * &rhs.denom + &rhs.numer * &lhs.denom;
    Rational::normalize(numer, &lhs.denom * &rhs.denom)
}

fn sub_rationals(lhs: &Rational, rhs: &Rational) -> Rational {
    if lhs.denom == rhs.denom {
        return Rational::normalize(&lhs.numer - &rhs.numer, lhs.denom.clone());
    }
    let numer = &lhs.numer * &rhs.denom - &rhs.numer * &lhs.denom;
    Rational::normalize(numer, &lhs.denom * &rhs.denom)
}

fn mul_rationals(lhs: &Rational, rhs: &Rational) -> Rational {
    Rational::normalize(&lhs.numer * &rhs.numer, &lhs.denom * &rhs.denom)
}

fn div_rationals(lhs: &Rational, rhs: &Rational) -> Result<Rational> {
    if rhs.is_zero() {
        tracing::debug!(dividend = %lhs, "rejected division by zero");
        return Err(RationalError::DivideByZero);
    }
    Ok(Rational::normalize(
        &lhs.numer * &rhs.denom,
        &lhs.denom * &rhs.numer,
    ))
}

// Truncated remainder: a/b % c/d == (a*d % c*b) / (b*d), sign follows the dividend.
fn rem_rationals(lhs: &Rational, rhs: &Rational) -> Result<Rational> {
    if rhs.is_zero() {
        tracing::debug!(dividend = %lhs, "rejected remainder by zero");
        return Err(RationalError::DivideByZero);
    }
    let numer = (&lhs.numer * &rhs.denom) % (&rhs.numer * &lhs.denom);
    Ok(Rational::normalize(numer, &lhs.denom * &rhs.denom))
}

fn div_or_panic(lhs: &Rational, rhs: &Rational) -> Rational {
    match div_rationals(lhs, rhs) {
        Ok(value) => value,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn rem_or_panic(lhs: &Rational, rhs: &Rational) -> Rational {
    match rem_rationals(lhs, rhs) {
        Ok(value) => value,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

impl Rational {
    /// `self / rhs`, failing with [`RationalError::DivideByZero`] instead of
    /// panicking like the `/` operator.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational> {
        div_rationals(self, rhs)
    }

    pub fn checked_div_integer<I: IntegerLike>(&self, rhs: I) -> Result<Rational> {
        div_rationals(self, &Rational::from_integer(rhs))
    }

    pub fn checked_rem(&self, rhs: &Rational) -> Result<Rational> {
        rem_rationals(self, rhs)
    }
}

macro_rules! impl_rational_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $func:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $func(&self, &rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $func(&self, rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $func(self, &rhs)
            }
        }

        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $func(self, rhs)
            }
        }

        impl $assign_imp<Rational> for Rational {
            fn $assign_method(&mut self, rhs: Rational) {
                *self = $func(self, &rhs);
            }
        }

        impl $assign_imp<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Rational) {
                *self = $func(self, rhs);
            }
        }
    };
}

impl_rational_binop!(Add, add, AddAssign, add_assign, add_rationals);
impl_rational_binop!(Sub, sub, SubAssign, sub_assign, sub_rationals);
impl_rational_binop!(Mul, mul, MulAssign, mul_assign, mul_rationals);
impl_rational_binop!(Div, div, DivAssign, div_assign, div_or_panic);
impl_rational_binop!(Rem, rem, RemAssign, rem_assign, rem_or_panic);

// Integer operands are lifted to `k/1` and share the rational code paths above.
macro_rules! impl_integer_binops {
    (@op $t:ty, $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $func:ident) => {
        impl $imp<$t> for Rational {
            type Output = Rational;

            fn $method(self, rhs: $t) -> Rational {
                $func(&self, &Rational::from(rhs))
            }
        }

        impl $imp<$t> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: $t) -> Rational {
                $func(self, &Rational::from(rhs))
            }
        }

        impl $imp<Rational> for $t {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $func(&Rational::from(self), &rhs)
            }
        }

        impl $imp<&Rational> for $t {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $func(&Rational::from(self), rhs)
            }
        }

        impl $assign_imp<$t> for Rational {
            fn $assign_method(&mut self, rhs: $t) {
                *self = $func(self, &Rational::from(rhs));
            }
        }
    };
    ($($t:ty),* $(,)?) => {
        $(
            impl_integer_binops!(@op $t, Add, add, AddAssign, add_assign, add_rationals);
            impl_integer_binops!(@op $t, Sub, sub, SubAssign, sub_assign, sub_rationals);
            impl_integer_binops!(@op $t, Mul, mul, MulAssign, mul_assign, mul_rationals);
            impl_integer_binops!(@op $t, Div, div, DivAssign, div_assign, div_or_panic);
            impl_integer_binops!(@op $t, Rem, rem, RemAssign, rem_assign, rem_or_panic);
        )*
    };
}

for_each_integer_like!(impl_integer_binops);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, value| acc + value)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, value| acc * value)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, value| acc * value)
    }
}
