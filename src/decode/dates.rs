//! Date formats used by the API
//!
//! The vendor is inconsistent per endpoint, so every date field names its
//! format explicitly through one of the `serde_with` adapters below.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// A date format the API puts on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `2024-05-01 13:15:00`, used by most energy and power timestamps
    DateTime,
    /// `2024-05-01T13:15:00`, per-interval measurement timestamps
    DateTimeSeparated,
    /// `2024-05-01T13:15:00+02:00`, weather and data availability
    DateTimeOffset,
    /// `2024-05-01`, date-only fields and request parameters
    Date,
}

impl DateFormat {
    /// strftime pattern for this format
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DateTime => "%Y-%m-%d %H:%M:%S",
            DateFormat::DateTimeSeparated => "%Y-%m-%dT%H:%M:%S",
            DateFormat::DateTimeOffset => "%Y-%m-%dT%H:%M:%S%:z",
            DateFormat::Date => "%Y-%m-%d",
        }
    }

    /// Parse a wall-clock timestamp
    ///
    /// Date-only values land on midnight. Offset values keep their local
    /// wall-clock time; use [`DateFormat::parse_offset`] to keep the offset.
    pub fn parse(self, raw: &str) -> Option<NaiveDateTime> {
        match self {
            DateFormat::Date => NaiveDate::parse_from_str(raw, self.pattern())
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
            DateFormat::DateTimeOffset => Self::parse_offset(raw).map(|dt| dt.naive_local()),
            DateFormat::DateTime | DateFormat::DateTimeSeparated => {
                NaiveDateTime::parse_from_str(raw, self.pattern()).ok()
            }
        }
    }

    /// Parse a timestamp that carries a UTC offset
    pub fn parse_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(raw, DateFormat::DateTimeOffset.pattern()).ok()
    }

    /// Parse a date-only value
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, DateFormat::Date.pattern()).ok()
    }

    /// Render a wall-clock timestamp in this format
    ///
    /// The offset format has no offset to print here, so it renders as
    /// `+00:00`.
    pub fn format(self, value: &NaiveDateTime) -> String {
        match self {
            DateFormat::DateTimeOffset => value.and_utc().fixed_offset().format(self.pattern()).to_string(),
            _ => value.format(self.pattern()).to_string(),
        }
    }
}

/// Sentinel substituted for unparseable dates in lenient contexts
pub fn distant_past() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .map_or(NaiveDateTime::MIN, |date| date.and_time(NaiveTime::MIN))
}

// ============================================================================
// serde_with adapters
// ============================================================================

macro_rules! naive_adapter {
    ($(#[$meta:meta])* $name:ident, $format:expr) => {
        $(#[$meta])*
        pub struct $name;

        impl<'de> DeserializeAs<'de, NaiveDateTime> for $name {
            fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $format
                    .parse(&raw)
                    .ok_or_else(|| D::Error::custom(format!("Invalid date: {raw}")))
            }
        }

        impl SerializeAs<NaiveDateTime> for $name {
            fn serialize_as<S: Serializer>(source: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&source.format($format.pattern()))
            }
        }
    };
}

naive_adapter!(
    /// `yyyy-MM-dd HH:mm:ss`
    ApiDateTime,
    DateFormat::DateTime
);

naive_adapter!(
    /// `yyyy-MM-ddTHH:mm:ss`
    ApiDateTimeSeparated,
    DateFormat::DateTimeSeparated
);

/// `yyyy-MM-ddTHH:mm:ss+hh:mm`
pub struct ApiDateTimeOffset;

impl<'de> DeserializeAs<'de, DateTime<FixedOffset>> for ApiDateTimeOffset {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateFormat::parse_offset(&raw).ok_or_else(|| D::Error::custom(format!("Invalid date: {raw}")))
    }
}

impl SerializeAs<DateTime<FixedOffset>> for ApiDateTimeOffset {
    fn serialize_as<S: Serializer>(source: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&source.format(DateFormat::DateTimeOffset.pattern()))
    }
}

/// `yyyy-MM-dd`
pub struct ApiDate;

impl<'de> DeserializeAs<'de, NaiveDate> for ApiDate {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateFormat::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("Invalid date: {raw}")))
    }
}

impl SerializeAs<NaiveDate> for ApiDate {
    fn serialize_as<S: Serializer>(source: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&source.format(DateFormat::Date.pattern()))
    }
}

/// Date-time or date-only; anything else (or null) decodes to `None`
///
/// Use with `#[serde(default)]` since the adapter targets the `Option`
/// itself.
pub struct FlexibleDate;

impl<'de> DeserializeAs<'de, Option<NaiveDateTime>> for FlexibleDate {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| {
            DateFormat::DateTime
                .parse(&raw)
                .or_else(|| DateFormat::Date.parse(&raw))
        }))
    }
}

impl SerializeAs<Option<NaiveDateTime>> for FlexibleDate {
    fn serialize_as<S: Serializer>(source: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match source {
            Some(value) => serializer.collect_str(&value.format(DateFormat::DateTime.pattern())),
            None => serializer.serialize_none(),
        }
    }
}
