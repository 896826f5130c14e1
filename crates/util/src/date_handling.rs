//! # Date Handling Utilities
//!
//! Formatting of monitoring-data time ranges. The ContinuITy frontend expects
//! range bounds as `yyyy/MM/dd/HH:mm:ss` wall-clock timestamps appended to the
//! data link as `fromDate` / `toDate` query parameters.

use chrono::{DateTime, TimeZone};

/// `strftime` pattern for range bounds (`yyyy/MM/dd/HH:mm:ss`).
pub const DATA_RANGE_PATTERN: &str = "%Y/%m/%d/%H:%M:%S";

/// Format a timestamp as a range bound in its own time zone.
///
/// # Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use continuity_util::format_range_timestamp;
///
/// let start = Utc.with_ymd_and_hms(2018, 3, 1, 9, 5, 7).unwrap();
/// assert_eq!(format_range_timestamp(&start), "2018/03/01/09:05:07");
/// ```
pub fn format_range_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(DATA_RANGE_PATTERN).to_string()
}

/// Append a `fromDate`/`toDate` range to a data link.
///
/// The range is applied only when both bounds are present. Bounds are appended
/// verbatim, without percent-encoding, since the frontend parses them as-is.
///
/// # Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use continuity_util::append_time_range;
///
/// let start = Utc.with_ymd_and_hms(2018, 3, 1, 9, 0, 0).unwrap();
/// let stop = Utc.with_ymd_and_hms(2018, 3, 1, 10, 30, 0).unwrap();
///
/// assert_eq!(
///     append_time_range("session-logs/my-app", Some(&start), Some(&stop)),
///     "session-logs/my-app?fromDate=2018/03/01/09:00:00&toDate=2018/03/01/10:30:00"
/// );
/// assert_eq!(append_time_range("session-logs/my-app", Some(&start), None), "session-logs/my-app");
/// ```
pub fn append_time_range<Tz>(data_link: &str, start: Option<&DateTime<Tz>>, stop: Option<&DateTime<Tz>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match (start, stop) {
        (Some(start), Some(stop)) => format!(
            "{}?fromDate={}&toDate={}",
            data_link,
            format_range_timestamp(start),
            format_range_timestamp(stop)
        ),
        _ => data_link.to_string(),
    }
}
