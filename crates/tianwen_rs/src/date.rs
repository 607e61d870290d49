//! Instant parsing at the API boundary.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tianwen_time::{Zone, to_julian_day};

use crate::error::TianwenError;

const LOCAL_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an instant into a UT Julian Day.
///
/// RFC 3339 strings carry their own offset. Bare wall-clock times and bare
/// dates (local midnight) are read in `zone`.
pub fn parse_instant(s: &str, zone: &Zone) -> Result<f64, TianwenError> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(to_julian_day(&t));
    }
    for layout in LOCAL_LAYOUTS {
        if let Ok(local) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(zone.local_to_jd(&local)?);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(zone.date_start_jd(date)?);
    }
    Err(TianwenError::InvalidInstant(s.to_string()))
}
