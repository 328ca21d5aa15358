//! Timestamp rule: Pacific wall-clock text to Eastern ISO 8601.
//!
//! Both zones are fixed offsets. There is no daylight-saving handling and no
//! timezone database lookup: the conversion is always a +3 hour shift.

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};

use csvnorm_model::RowError;

/// chrono format a source timestamp is parsed with once its two-digit year
/// has been expanded, e.g. `4/1/2011 11:00:00 AM`.
pub const SOURCE_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Two-digit years from here up are 19xx, below it 20xx.
pub const CENTURY_PIVOT: u16 = 69;

/// US Pacific standard time, UTC-08:00.
pub const PACIFIC: FixedOffset = match FixedOffset::west_opt(8 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC-08:00 is a valid offset"),
};

/// US Eastern standard time, UTC-05:00.
pub const EASTERN: FixedOffset = match FixedOffset::west_opt(5 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC-05:00 is a valid offset"),
};

/// Parse a source timestamp as Pacific local time.
///
/// The shape is checked before chrono sees the value: three space-separated
/// parts, a two-digit year, and an upper-case `AM`/`PM` marker. The year is
/// expanded around [`CENTURY_PIVOT`], then chrono validates the ranges
/// (month 1-12, hour 1-12, real calendar days).
pub fn parse_pacific_timestamp(value: &str) -> Result<DateTime<FixedOffset>, RowError> {
    let parts = check_shape(value).map_err(|reason| RowError::timestamp_parse(value, reason))?;
    let expanded = format!(
        "{}/{}/{} {} {}",
        parts.month,
        parts.day,
        expand_year(parts.year),
        parts.time,
        parts.marker
    );
    let naive = NaiveDateTime::parse_from_str(&expanded, SOURCE_TIMESTAMP_FORMAT)
        .map_err(|error| RowError::timestamp_parse(value, error.to_string()))?;
    naive
        .and_local_timezone(PACIFIC)
        .single()
        .ok_or_else(|| RowError::timestamp_parse(value, "out of range for UTC-08:00"))
}

/// Shift a timestamp to Eastern time.
pub fn to_eastern(timestamp: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    timestamp.with_timezone(&EASTERN)
}

/// Apply the full timestamp rule, e.g. `4/1/11 11:00:00 AM` becomes
/// `2011-04-01T14:00:00-05:00`.
pub fn normalize_timestamp(value: &str) -> Result<String, RowError> {
    let eastern = to_eastern(parse_pacific_timestamp(value)?);
    Ok(eastern.to_rfc3339_opts(SecondsFormat::Secs, false))
}

/// Components of a source timestamp that passed the shape check.
struct SourceParts<'a> {
    month: &'a str,
    day: &'a str,
    year: u16,
    time: &'a str,
    marker: &'a str,
}

fn expand_year(year: u16) -> u16 {
    if year >= CENTURY_PIVOT {
        1900 + year
    } else {
        2000 + year
    }
}

fn check_shape(value: &str) -> Result<SourceParts<'_>, &'static str> {
    let mut parts = value.split(' ');
    let (Some(date), Some(time), Some(marker), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err("expected 'M/D/YY H:MM:SS AM|PM'");
    };
    if marker != "AM" && marker != "PM" {
        return Err("expected an AM or PM marker");
    }
    let date_parts: Vec<&str> = date.split('/').collect();
    let [month, day, year] = date_parts.as_slice() else {
        return Err("expected a M/D/YY date");
    };
    if !(is_digits(month, 1, 2) && is_digits(day, 1, 2)) {
        return Err("expected a M/D/YY date");
    }
    if !is_digits(year, 2, 2) {
        return Err("expected a two-digit year");
    }
    let time_parts: Vec<&str> = time.split(':').collect();
    let [hour, minute, second] = time_parts.as_slice() else {
        return Err("expected a H:MM:SS time");
    };
    if !(is_digits(hour, 1, 2) && is_digits(minute, 1, 2) && is_digits(second, 1, 2)) {
        return Err("expected a H:MM:SS time");
    }
    let year = year.parse().map_err(|_| "expected a two-digit year")?;
    Ok(SourceParts {
        month: *month,
        day: *day,
        year,
        time,
        marker,
    })
}

fn is_digits(part: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
