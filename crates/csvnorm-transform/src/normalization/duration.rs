//! Duration normalization.
//!
//! Durations arrive as `hours:minutes:seconds[.fraction]` and leave as a
//! total second count. All arithmetic is exact decimal arithmetic so the
//! derived sum column never picks up binary floating-point rounding
//! error.

use rust_decimal::Decimal;

use csvnorm_model::{NormalizeError, Result};

use crate::registry::{BAR_DURATION, FOO_DURATION};

/// Parse a `hours:minutes:seconds[.fraction]` value into total seconds.
///
/// All three components must be non-negative; seconds may carry a
/// fractional part. Any component that is not a valid number, a negative
/// component, or a shape other than three colon-separated parts fails
/// with a `Number` error.
pub fn duration_seconds(column: &str, value: &str) -> Result<Decimal> {
    let parts: Vec<&str> = value.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(NormalizeError::number(
            column,
            value,
            "expected hours:minutes:seconds",
        ));
    };
    let hours: u32 = hours
        .parse()
        .map_err(|error: std::num::ParseIntError| {
            NormalizeError::number(column, value, format!("hours: {error}"))
        })?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|error: std::num::ParseIntError| {
            NormalizeError::number(column, value, format!("minutes: {error}"))
        })?;
    let seconds: Decimal = seconds.parse().map_err(|error: rust_decimal::Error| {
        NormalizeError::number(column, value, format!("seconds: {error}"))
    })?;
    if seconds.is_sign_negative() {
        return Err(NormalizeError::number(
            column,
            value,
            "seconds must be non-negative",
        ));
    }
    Ok(Decimal::from(u64::from(hours) * 3600 + u64::from(minutes) * 60) + seconds)
}

/// Normalize a duration column value to its total seconds as a decimal
/// string.
pub fn normalize_duration(column: &str, value: &str) -> Result<String> {
    duration_seconds(column, value).map(|total| total.to_string())
}

/// Compute the derived total-duration value for a row.
///
/// Both source durations are normalized independently and summed with
/// decimal arithmetic; whichever failure a sub-computation raises is
/// propagated as-is.
pub fn total_duration(foo_value: &str, bar_value: &str) -> Result<String> {
    let foo = duration_seconds(FOO_DURATION, foo_value)?;
    let bar = duration_seconds(BAR_DURATION, bar_value)?;
    Ok((foo + bar).to_string())
}
