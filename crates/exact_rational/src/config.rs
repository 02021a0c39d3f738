use std::cell::Cell;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`DecimalFormat::default`].
pub const FRACTION_DIGITS_ENV: &str = "EXACT_RATIONAL_DECIMAL_DIGITS";

pub const DEFAULT_FRACTION_DIGITS: usize = 20;

thread_local! {
    static FRACTION_DIGITS_OVERRIDE: Cell<Option<usize>> = const { Cell::new(None) };
}

fn default_fraction_digits() -> usize {
    FRACTION_DIGITS_OVERRIDE.with(|cell| {
        cell.get().unwrap_or_else(|| {
            std::env::var(FRACTION_DIGITS_ENV)
                .ok()
                .and_then(|raw| raw.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_FRACTION_DIGITS)
        })
    })
}

/// Runs `f` with the default fraction digit count pinned for the current
/// thread, ignoring the environment. The previous setting is restored
/// afterwards.
pub fn with_default_fraction_digits<T>(digits: usize, f: impl FnOnce() -> T) -> T {
    let _restore = OverrideGuard {
        previous: FRACTION_DIGITS_OVERRIDE.with(|cell| cell.replace(Some(digits))),
    };
    f()
}

/// Puts the previous override back on drop, including while unwinding.
struct OverrideGuard {
    previous: Option<usize>,
}

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        FRACTION_DIGITS_OVERRIDE.with(|cell| cell.set(self.previous));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Drop the remaining digits (round toward zero).
    Truncate,
    /// Ties round away from zero.
    #[default]
    HalfUp,
    /// Ties round to the even neighbour.
    HalfEven,
}

/// Controls decimal rendering via [`crate::Rational::to_decimal_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalFormat {
    pub fraction_digits: usize,
    #[serde(default)]
    pub rounding: Rounding,
}

impl DecimalFormat {
    pub fn new(fraction_digits: usize, rounding: Rounding) -> Self {
        Self {
            fraction_digits,
            rounding,
        }
    }

    pub fn with_digits(fraction_digits: usize) -> Self {
        Self {
            fraction_digits,
            rounding: Rounding::default(),
        }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::with_digits(default_fraction_digits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_is_restored() {
        let outer = DecimalFormat::default();
        let inner = with_default_fraction_digits(3, DecimalFormat::default);
        assert_eq!(inner.fraction_digits, 3);
        assert_eq!(inner.rounding, Rounding::HalfUp);
        assert_eq!(DecimalFormat::default(), outer);
    }

    #[test]
    fn overrides_nest() {
        let digits = with_default_fraction_digits(4, || {
            let nested = with_default_fraction_digits(9, || DecimalFormat::default().fraction_digits);
            (nested, DecimalFormat::default().fraction_digits)
        });
        assert_eq!(digits, (9, 4));
    }

    #[test]
    fn override_is_restored_after_a_panic() {
        let before = DecimalFormat::default();
        let outcome = std::panic::catch_unwind(|| {
            with_default_fraction_digits(7, || -> usize { panic!("render failed") })
        });
        assert!(outcome.is_err());
        assert_eq!(DecimalFormat::default(), before);
    }

    #[test]
    fn rounding_defaults_when_missing_from_json() {
        let format: DecimalFormat =
            serde_json::from_str(r#"{"fraction_digits": 6}"#).expect("decode format");
        assert_eq!(format, DecimalFormat::new(6, Rounding::HalfUp));
        let format: DecimalFormat =
            serde_json::from_str(r#"{"fraction_digits": 2, "rounding": "half_even"}"#)
                .expect("decode format");
        assert_eq!(format.rounding, Rounding::HalfEven);
    }
}
