//! Duration rule: `H:MM:SS[.fraction]` text to elapsed time.

use std::fmt;

use chrono::TimeDelta;

use csvnorm_model::{DurationFormat, RowError};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Elapsed time with microsecond resolution and no calendar anchor.
///
/// Addition is exact: values are whole microseconds, so `foo + bar` never
/// accumulates floating-point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(TimeDelta);

impl Elapsed {
    pub fn as_time_delta(self) -> TimeDelta {
        self.0
    }

    pub fn checked_add(self, other: Elapsed) -> Option<Elapsed> {
        self.0.checked_add(&other.0).map(Elapsed)
    }

    /// Total length in seconds.
    pub fn total_seconds(self) -> f64 {
        match self.0.num_microseconds() {
            Some(micros) => micros as f64 / MICROS_PER_SECOND,
            None => {
                self.0.num_seconds() as f64
                    + f64::from(self.0.subsec_nanos() / 1_000) / MICROS_PER_SECOND
            }
        }
    }

    /// Render in the configured representation.
    pub fn format(self, format: DurationFormat) -> String {
        match format {
            DurationFormat::Seconds => format_seconds(self.total_seconds()),
            DurationFormat::Iso8601 => format_iso8601_duration(self),
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_iso8601_duration(*self))
    }
}

/// Parse `hours:minutes:seconds`, each a non-negative real number.
///
/// Hours are not capped at 24: `31:23:32.123` is 31 hours. The total is
/// rounded to the nearest microsecond, ties to even. `field` names the
/// column in the error.
pub fn parse_elapsed(field: &'static str, value: &str) -> Result<Elapsed, RowError> {
    let parts: Vec<&str> = value.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(RowError::duration_parse(
            field,
            value,
            format!(
                "expected hours:minutes:seconds, found {} component(s)",
                parts.len()
            ),
        ));
    };
    let hours = parse_component(field, value, "hours", hours)?;
    let minutes = parse_component(field, value, "minutes", minutes)?;
    let seconds = parse_component(field, value, "seconds", seconds)?;

    let micros =
        ((hours * 3600.0 + minutes * 60.0 + seconds) * MICROS_PER_SECOND).round_ties_even();
    if !(micros.is_finite() && micros < i64::MAX as f64) {
        return Err(RowError::duration_parse(field, value, "duration is too large"));
    }
    Ok(Elapsed(TimeDelta::microseconds(micros as i64)))
}

fn parse_component(
    field: &'static str,
    value: &str,
    name: &str,
    component: &str,
) -> Result<f64, RowError> {
    let parsed: f64 = component.trim().parse().map_err(|_| {
        RowError::duration_parse(field, value, format!("{name} '{component}' is not a number"))
    })?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(RowError::duration_parse(
            field,
            value,
            format!("{name} must be a finite, non-negative number"),
        ));
    }
    Ok(parsed)
}

/// Format seconds with at least one fractional digit: `3600.0`, `1800.5`.
pub fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{seconds:.1}")
    } else {
        seconds.to_string()
    }
}

/// Format as an ISO 8601 duration with hours, minutes and seconds always
/// present: `PT1H30M0.5S`.
pub fn format_iso8601_duration(elapsed: Elapsed) -> String {
    let delta = elapsed.as_time_delta();
    let total = delta.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    let nanos = delta.subsec_nanos();
    if nanos == 0 {
        format!("PT{hours}H{minutes}M{seconds}S")
    } else {
        let fraction = format!("{nanos:09}");
        let fraction = fraction.trim_end_matches('0');
        format!("PT{hours}H{minutes}M{seconds}.{fraction}S")
    }
}
