use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Build a UTC instant from split calendar components.
///
/// `month` is 1-based, as written in the logs. Out-of-range components
/// (month 13, day 31 in a 30-day month, hour 24, ...) yield `None` rather
/// than rolling over into the next unit. Years 0 through 99 are read as
/// 1900 through 1999.
pub fn utc_from_components(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Option<DateTime<Utc>> {
    let year = if (0..=99).contains(&year) { 1900 + year } else { year };
    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;
    let time = date.and_hms_opt(
        u32::try_from(hour).ok()?,
        u32::try_from(minute).ok()?,
        u32::try_from(second).ok()?,
    )?;
    Some(time.and_utc())
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-01-15T10:30:00.000Z`.
pub fn format_iso_millis(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
