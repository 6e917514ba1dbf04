/// Utilities for date and time formatting
///
/// Sale timestamps are shown in the browser's local zone; callers pass the
/// zone explicitly so the formatting stays testable.
use chrono::{DateTime, TimeZone};
use contracts::domain::common::SaleTimestamp;
use std::fmt::Display;

/// Table column: `2024-03-15 14:02:26`
pub const TABLE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Export files: `2024-03-15 14:02`
pub const EXPORT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Suffix of export file names: `2024-03-15-140226`
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// Format an optional sale timestamp; missing values render as an empty string
pub fn format_sale_time<Tz: TimeZone>(ts: Option<&SaleTimestamp>, tz: &Tz, fmt: &str) -> String {
    ts.map(|t| t.format_in(tz, fmt)).unwrap_or_default()
}

/// Generation stamp used in export file names
pub fn file_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format(FILE_STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_sale_time() {
        let ts = SaleTimestamp::parse("2024-03-15T07:02:26Z");
        let vientiane = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(
            format_sale_time(ts.as_ref(), &vientiane, TABLE_DATETIME_FORMAT),
            "2024-03-15 14:02:26"
        );
        assert_eq!(
            format_sale_time(ts.as_ref(), &vientiane, EXPORT_DATETIME_FORMAT),
            "2024-03-15 14:02"
        );
        assert_eq!(format_sale_time(None, &Utc, TABLE_DATETIME_FORMAT), "");
    }

    #[test]
    fn test_file_stamp_has_day_and_time() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(file_stamp(&now), "2024-12-31-235958");
    }
}
