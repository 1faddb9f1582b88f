//! Timestamp normalization.
//!
//! Input timestamps use the fixed 12-hour pattern `M/D/YY H:MM:SS AM|PM`
//! and are interpreted as local times in the source zone. The output is
//! the same instant rendered in the target zone as ISO 8601 extended with
//! millisecond precision and a numeric UTC offset.

use chrono::{LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use csvnorm_model::{NormalizeError, Result};

/// Example: `10/2/04 8:44:11 AM`.
const INPUT_FORMAT: &str = "%m/%d/%y %I:%M:%S %p";
/// Example: `2004-10-02T10:44:11.000-05:00`.
const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Convert a source-zone local timestamp to ISO 8601 in the target zone.
///
/// A value that does not match the input pattern (including a missing
/// AM/PM marker) fails with a `Parse` error. Local times that fall in a
/// DST fall-back overlap resolve to the earlier instant; times inside a
/// spring-forward gap do not exist and also fail with `Parse`.
pub fn normalize_timestamp(column: &str, value: &str, source: Tz, target: Tz) -> Result<String> {
    let naive = NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .map_err(|error| NormalizeError::parse(column, value, error.to_string()))?;
    let instant = match source.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            return Err(NormalizeError::parse(
                column,
                value,
                format!("local time does not exist in {source}"),
            ));
        }
    };
    Ok(instant.with_timezone(&target).format(OUTPUT_FORMAT).to_string())
}
