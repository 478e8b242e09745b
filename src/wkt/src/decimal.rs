// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bigdecimal::BigDecimal;
use std::str::FromStr;

/// An exact decimal number, used for money amounts and other fractional
/// values reported by the SoftLayer API.
///
/// # Examples
/// ```
/// # use softlayer_wkt::{Decimal, DecimalError};
/// let a = Decimal::try_from("0.10")?;
/// let b = Decimal::try_from("0.20")?;
/// assert_eq!(a + b, Decimal::try_from("0.3")?);
/// # Ok::<(), DecimalError>(())
/// ```
///
/// # JSON Mapping
///
/// The service sends these values as JSON numbers or as strings, depending on
/// the field. Both forms are accepted when deserializing. Values are always
/// serialized as strings, keeping the scale of the original value.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

/// Represent failures converting to a [Decimal].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DecimalError {
    /// The input is not a decimal number.
    #[error("cannot parse {0:?} as a decimal number")]
    Parse(String),

    /// The input is NaN or infinite.
    #[error("non-finite values cannot be represented as a decimal number")]
    NonFinite,
}

impl Decimal {
    /// Returns the underlying [BigDecimal].
    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Consumes the value and returns the underlying [BigDecimal].
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        use bigdecimal::Zero;
        self.0.is_zero()
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

/// Converts a binary floating point value using its shortest round-trip
/// representation, so `0.1_f64` becomes exactly `0.1`.
impl TryFrom<f64> for Decimal {
    type Error = DecimalError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DecimalError::NonFinite);
        }
        Decimal::try_from(format!("{value}").as_str())
    }
}

impl TryFrom<&str> for Decimal {
    type Error = DecimalError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        // Reject text such as "NaN" or "inf" before handing off to the parser.
        let numeric = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
            && trimmed.chars().any(|c| c.is_ascii_digit());
        if !numeric {
            return Err(DecimalError::Parse(value.to_string()));
        }
        BigDecimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| DecimalError::Parse(value.to_string()))
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::try_from(s)
    }
}

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::ops::Add for Decimal {
    type Output = Decimal;
    fn add(self, rhs: Self) -> Self::Output {
        Decimal(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Decimal {
    type Output = Decimal;
    fn sub(self, rhs: Self) -> Self::Output {
        Decimal(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Decimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::default(), |acc, v| acc + v)
    }
}

impl serde::ser::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct DecimalVisitor;

impl<'de> serde::de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a decimal number or a string containing one")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Decimal::try_from(value).map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Decimal::try_from(value).map_err(E::custom)
    }

    // serde_json hands over numbers that do not round-trip through `f64` as
    // their original text, wrapped in a single-entry map.
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        use serde::de::Error;
        match map.next_key::<String>()? {
            Some(key) if key == RAW_NUMBER => {
                let text = map.next_value::<String>()?;
                Decimal::try_from(text.as_str()).map_err(A::Error::custom)
            }
            _ => Err(A::Error::invalid_type(serde::de::Unexpected::Map, &self)),
        }
    }
}

const RAW_NUMBER: &str = "$serde_json::private::Number";

impl<'de> serde::de::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }
}
