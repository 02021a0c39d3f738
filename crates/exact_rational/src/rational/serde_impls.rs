use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::Rational;

/// Serialized as the canonical display string (`"3/2"`, `"-7"`), which keeps
/// arbitrarily large values lossless in every format. Human-readable formats
/// also accept a bare integer on input; compact formats always read a string.
impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RationalVisitor;

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rational string such as \"3/2\" or an integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Rational, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Rational, E> {
        Ok(Rational::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Rational, E> {
        Ok(Rational::from(value))
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(RationalVisitor)
        } else {
            deserializer.deserialize_str(RationalVisitor)
        }
    }
}
