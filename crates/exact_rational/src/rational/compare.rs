use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;

use super::Rational;
use crate::integer_like::{for_each_integer_like, IntegerLike};

// Denominators are positive, so cross-multiplying never flips the direction.
fn cmp_rationals(lhs: &Rational, rhs: &Rational) -> Ordering {
    if lhs.denom == rhs.denom {
        return lhs.numer.cmp(&rhs.numer);
    }
    (&lhs.numer * &rhs.denom).cmp(&(&rhs.numer * &lhs.denom))
}

fn cmp_with_bigint(lhs: &Rational, rhs: &BigInt) -> Ordering {
    if lhs.is_integer() {
        return lhs.numer.cmp(rhs);
    }
    lhs.numer.cmp(&(rhs * &lhs.denom))
}

impl Rational {
    /// Orders `self` against any integer-like value: `n/d` vs `k` is decided by
    /// `n` vs `k * d`.
    pub fn cmp_integer<I: IntegerLike + ?Sized>(&self, other: &I) -> Ordering {
        cmp_with_bigint(self, &other.widen())
    }

    /// Three-way comparison as a sign: `-1`, `0` or `1`.
    ///
    /// Accepts another `Rational` or any integer-like value, and agrees with
    /// the `<`, `==` and `>` operators for the same operands.
    pub fn compare_to<T: ?Sized>(&self, other: &T) -> i32
    where
        Rational: PartialOrd<T>,
    {
        match <Rational as PartialOrd<T>>::partial_cmp(self, other) {
            Some(Ordering::Less) => -1,
            Some(Ordering::Greater) => 1,
            Some(Ordering::Equal) | None => 0,
        }
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        cmp_rationals(self, other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_rationals(self, other)
    }
}

// Only sound because every value is canonical: equal values share their fields.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer.hash(state);
        self.denom.hash(state);
    }
}

macro_rules! impl_integer_comparisons {
    ($($t:ty),* $(,)?) => {
        $(
            impl PartialEq<$t> for Rational {
                fn eq(&self, other: &$t) -> bool {
                    self.cmp_integer(other) == Ordering::Equal
                }
            }

            impl PartialEq<Rational> for $t {
                fn eq(&self, other: &Rational) -> bool {
                    other.cmp_integer(self) == Ordering::Equal
                }
            }

            impl PartialOrd<$t> for Rational {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp_integer(other))
                }
            }

            impl PartialOrd<Rational> for $t {
                fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
                    Some(other.cmp_integer(self).reverse())
                }
            }
        )*
    };
}

for_each_integer_like!(impl_integer_comparisons);
