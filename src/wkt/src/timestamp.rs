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

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A point in time as reported by the SoftLayer API.
///
/// # Examples
/// ```
/// # use softlayer_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2019-03-07T14:03:34-06:00")?;
/// assert_eq!(ts.unix_timestamp(), 1551989014);
/// assert_eq!(String::from(ts), "2019-03-07T14:03:34-06:00");
/// # Ok::<(), TimestampError>(())
/// ```
///
/// # JSON Mapping
///
/// Timestamps are encoded as [RFC 3339](https://www.ietf.org/rfc/rfc3339.txt)
/// strings. The API reports times in the data center's local offset, for
/// example `2019-03-07T14:03:34-06:00`. The offset is preserved, so a value
/// that is decoded and re-encoded produces the same string.
///
/// Two timestamps compare equal when they represent the same instant, even if
/// their offsets differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Timestamp(OffsetDateTime);

/// Represent failures in converting or creating [Timestamp] instances.
///
/// # Examples
/// ```
/// # use softlayer_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("invalid");
/// assert!(matches!(ts, Err(TimestampError::Deserialize(_))));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// The value cannot be represented as an RFC 3339 string.
    #[error("timestamp out of range for RFC 3339 formatting")]
    OutOfRange,

    /// There was a problem deserializing a timestamp.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

impl Timestamp {
    /// Creates a timestamp from seconds since the Unix epoch, in UTC.
    ///
    /// # Examples
    /// ```
    /// # use softlayer_wkt::{Timestamp, TimestampError};
    /// let ts = Timestamp::from_unix_timestamp(1747388772)?;
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn from_unix_timestamp(seconds: i64) -> Result<Self, TimestampError> {
        let odt = OffsetDateTime::from_unix_timestamp(seconds)
            .map_err(|_| TimestampError::OutOfRange)?;
        Self::try_from(odt)
    }

    /// Seconds since the Unix epoch.
    pub fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }

    /// The UTC offset reported by the service, in seconds.
    pub fn offset_seconds(&self) -> i32 {
        self.0.offset().whole_seconds()
    }

    /// Returns the value as a [time::OffsetDateTime].
    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }

    fn format(&self) -> Result<String, TimestampError> {
        self.0
            .format(&Rfc3339)
            .map_err(|_| TimestampError::OutOfRange)
    }
}

/// Converts from [time::OffsetDateTime] to [Timestamp].
///
/// The conversion fails for years outside `0000..=9999`, which RFC 3339 cannot
/// represent.
impl TryFrom<OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        if !(0..=9999).contains(&value.year()) {
            return Err(TimestampError::OutOfRange);
        }
        Ok(Self(value))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        // Construction rejects out-of-range years, formatting cannot fail.
        timestamp.format().unwrap_or_default()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.format().map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| TimestampError::Deserialize(e.into()))?;
        Self::try_from(odt)
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TimestampError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::try_from(s)
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let s = self.format().map_err(serde::ser::Error::custom)?;
        s.serialize(serializer)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case("2019-03-07T14:03:34-06:00")]
    #[test_case("2024-10-19T12:34:56Z")]
    #[test_case("2024-10-19T12:34:56.789+05:30")]
    #[test_case("0001-01-01T00:00:00Z")]
    #[test_case("9999-12-31T23:59:59.999999999Z")]
    fn roundtrip(input: &str) -> Result {
        let json = serde_json::Value::String(input.to_string());
        let timestamp = serde_json::from_value::<Timestamp>(json)?;
        let roundtrip = serde_json::to_string(&timestamp)?;
        assert_eq!(
            format!("\"{input}\""),
            roundtrip,
            "mismatched value for input={input}"
        );
        Ok(())
    }

    #[test]
    fn offsets_compare_by_instant() -> Result {
        let a = Timestamp::try_from("1970-01-01T02:00:00+02:00")?;
        let b = Timestamp::try_from("1970-01-01T00:00:00Z")?;
        assert_eq!(a, b);
        assert_eq!(a.offset_seconds(), 7200);
        assert_eq!(b.offset_seconds(), 0);
        Ok(())
    }

    #[test_case(json!({}); "object")]
    #[test_case(json!(1551989014); "number")]
    #[test_case(json!("2019-03-07 14:03:34"); "missing separator")]
    fn deserialize_rejects(input: serde_json::Value) -> Result {
        let got = serde_json::from_value::<Timestamp>(input);
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[test]
    fn unexpected_input_type_message() {
        let got = serde_json::from_value::<Timestamp>(json!({}));
        let msg = format!("{got:?}");
        assert!(msg.contains("RFC 3339"), "message={msg}");
    }

    #[test]
    fn from_unix_timestamp() -> Result {
        let ts = Timestamp::from_unix_timestamp(1747388772)?;
        assert_eq!(ts.unix_timestamp(), 1747388772);
        assert_eq!(ts.to_string(), "2025-05-16T09:46:12Z");
        let odt = OffsetDateTime::from(ts);
        assert_eq!(odt, time::macros::datetime!(2025-05-16 09:46:12 UTC));
        Ok(())
    }

    #[test]
    fn out_of_range() {
        let got = Timestamp::from_unix_timestamp(-62_167_219_201);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Helper {
        pub create_date: Option<Timestamp>,
    }

    #[test]
    fn in_struct() -> Result {
        let got = serde_json::from_value::<Helper>(json!({}))?;
        assert_eq!(got, Helper::default());
        assert_eq!(serde_json::to_value(&got)?, json!({}));

        let input = json!({ "createDate": "2019-03-07T14:03:34-06:00" });
        let got = serde_json::from_value::<Helper>(input.clone())?;
        assert!(got.create_date.is_some());
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }
}
