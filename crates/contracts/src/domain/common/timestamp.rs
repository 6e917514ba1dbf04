//! Sale timestamps as the service sends them.
//!
//! Accepted shapes: RFC 3339 (`2024-03-15T14:02:26.123Z`), naive date-time
//! with `T` or space separator (taken as already local), a bare date
//! (midnight), or epoch milliseconds. Unparseable values read as `None`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleTimestamp {
    /// Момент времени с известным смещением
    Zoned(DateTime<FixedOffset>),
    /// Время без зоны, показывается как есть
    Local(NaiveDateTime),
}

impl SaleTimestamp {
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::Zoned(dt));
        }
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
            return Some(Self::Zoned(dt));
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self::Local(naive));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self::Local)
    }

    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|dt| Self::Zoned(dt.fixed_offset()))
    }

    /// Wall-clock time in `tz`; naive timestamps are returned unchanged
    pub fn in_zone<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDateTime {
        match self {
            Self::Zoned(dt) => dt.with_timezone(tz).naive_local(),
            Self::Local(naive) => *naive,
        }
    }

    pub fn format_in<Tz: TimeZone>(&self, tz: &Tz, fmt: &str) -> String {
        self.in_zone(tz).format(fmt).to_string()
    }
}

impl Serialize for SaleTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Zoned(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Self::Local(naive) => {
                serializer.serialize_str(&naive.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
        }
    }
}

impl<'de> Deserialize<'de> for SaleTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SaleTimestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

pub fn lenient<'de, D>(deserializer: D) -> Result<Option<SaleTimestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => SaleTimestamp::parse(&s),
        Some(Value::Number(n)) => n.as_i64().and_then(SaleTimestamp::from_epoch_millis),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_converted_to_zone() {
        let ts = SaleTimestamp::parse("2024-03-15T14:02:26.123Z").unwrap();
        assert_eq!(ts.format_in(&Utc, "%Y-%m-%d %H:%M:%S"), "2024-03-15 14:02:26");

        let vientiane = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(
            ts.format_in(&vientiane, "%Y-%m-%d %H:%M"),
            "2024-03-15 21:02"
        );
    }

    #[test]
    fn test_naive_formats_kept_as_is() {
        let vientiane = FixedOffset::east_opt(7 * 3600).unwrap();
        for raw in ["2024-03-15 14:02:26", "2024-03-15T14:02:26", "2024-03-15 14:02"] {
            let ts = SaleTimestamp::parse(raw).unwrap();
            assert_eq!(ts.format_in(&vientiane, "%Y-%m-%d %H:%M"), "2024-03-15 14:02");
        }
        let date_only = SaleTimestamp::parse("2024-03-15").unwrap();
        assert_eq!(
            date_only.format_in(&Utc, "%Y-%m-%d %H:%M:%S"),
            "2024-03-15 00:00:00"
        );
    }

    #[test]
    fn test_invalid_timestamps() {
        assert_eq!(SaleTimestamp::parse(""), None);
        assert_eq!(SaleTimestamp::parse("yesterday"), None);
        assert_eq!(SaleTimestamp::parse("2024-13-40"), None);
    }

    #[test]
    fn test_epoch_millis() {
        let ts = SaleTimestamp::from_epoch_millis(0).unwrap();
        assert_eq!(ts.format_in(&Utc, "%Y-%m-%d %H:%M:%S"), "1970-01-01 00:00:00");
    }
}
