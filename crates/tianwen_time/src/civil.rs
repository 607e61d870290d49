//! Civil time zones at the API boundary.
//!
//! A [`Zone`] is resolved once from a user-supplied identifier and then used
//! to move between Julian Days (always UT) and zoned civil timestamps.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::{naive_utc_to_jd, to_calendar_day};

/// Largest offset accepted for fixed zones, in seconds (±18h, chrono's limit).
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// A resolved civil time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Constant UTC offset.
    Fixed(FixedOffset),
    /// IANA zone with daylight-saving rules.
    Named(Tz),
}

impl Zone {
    /// Coordinated Universal Time.
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Fixed zone from an offset in hours east of UTC.
    pub fn from_offset_hours(hours: f64) -> Result<Self, TimeError> {
        let seconds = (hours * 3600.0).round();
        if !seconds.is_finite() || seconds.abs() > MAX_OFFSET_SECONDS as f64 {
            return Err(TimeError::InvalidTimeZone(format!("{hours}h")));
        }
        FixedOffset::east_opt(seconds as i32)
            .map(Self::Fixed)
            .ok_or_else(|| TimeError::InvalidTimeZone(format!("{hours}h")))
    }

    /// UTC offset in effect at a UT instant.
    pub fn offset_at_utc(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Self::Fixed(off) => *off,
            Self::Named(tz) => tz.offset_from_utc_datetime(utc).fix(),
        }
    }

    /// UTC offset in effect at a Julian Day.
    pub fn offset_at(&self, jd: f64) -> Result<FixedOffset, TimeError> {
        Ok(self.offset_at_utc(&to_calendar_day(jd)?))
    }

    /// Offset in hours east of UTC at a Julian Day.
    pub fn offset_hours_at(&self, jd: f64) -> Result<f64, TimeError> {
        Ok(self.offset_at(jd)?.local_minus_utc() as f64 / 3600.0)
    }

    /// Civil timestamp in this zone for a Julian Day.
    pub fn local(&self, jd: f64) -> Result<DateTime<FixedOffset>, TimeError> {
        let utc = to_calendar_day(jd)?;
        let offset = self.offset_at_utc(&utc);
        Ok(offset.from_utc_datetime(&utc))
    }

    /// Julian Day of a local wall-clock time in this zone.
    ///
    /// Ambiguous wall times (DST fall-back) resolve to the earlier instant;
    /// non-existent ones (spring-forward gap) are an error.
    pub fn local_to_jd(&self, local: &NaiveDateTime) -> Result<f64, TimeError> {
        let instant = match self {
            Self::Fixed(off) => off.from_local_datetime(local).earliest().map(|d| d.naive_utc()),
            Self::Named(tz) => tz.from_local_datetime(local).earliest().map(|d| d.naive_utc()),
        };
        let utc = instant.ok_or_else(|| TimeError::InvalidTimeZone(format!("{self} has no {local}")))?;
        Ok(naive_utc_to_jd(&utc))
    }

    /// Julian Day of local midnight starting the given civil date.
    pub fn date_start_jd(&self, date: NaiveDate) -> Result<f64, TimeError> {
        self.local_to_jd(&date.and_time(NaiveTime::MIN))
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(off) => write!(f, "UTC{off}"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

impl FromStr for Zone {
    type Err = TimeError;

    /// Accepts `UTC`, `GMT`, `Z`, `±HH:MM`, `±HHMM`, `±H`, `UTC±H[:MM]`,
    /// `GMT±H[:MM]` or an IANA identifier such as `Asia/Shanghai`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        let invalid = || TimeError::InvalidTimeZone(s.to_string());
        if id.is_empty() {
            return Err(invalid());
        }
        let upper = id.to_ascii_uppercase();
        if matches!(upper.as_str(), "UTC" | "GMT" | "Z" | "UT") {
            return Ok(Self::utc());
        }

        let offset_part = ["UTC", "GMT"]
            .iter()
            .find_map(|p| upper.strip_prefix(*p))
            .unwrap_or(&upper);
        if offset_part.starts_with('+') || offset_part.starts_with('-') {
            let seconds = parse_offset_seconds(offset_part).ok_or_else(invalid)?;
            return FixedOffset::east_opt(seconds)
                .map(Self::Fixed)
                .ok_or_else(invalid);
        }

        id.parse::<Tz>().map(Self::Named).map_err(|_| invalid())
    }
}

/// Parse `±H`, `±HH`, `±HHMM` or `±H:MM` into seconds east of UTC.
fn parse_offset_seconds(s: &str) -> Option<i32> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => (&rest[..2], &rest[2..]),
        None => (rest, "0"),
    };
    if hours.is_empty() || !hours.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !minutes.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let h: i32 = hours.parse().ok()?;
    let m: i32 = minutes.parse().ok()?;
    if m >= 60 {
        return None;
    }
    let total = h * 3600 + m * 60;
    if total > MAX_OFFSET_SECONDS {
        return None;
    }
    Some(sign * total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_utc_aliases() {
        for id in ["UTC", "utc", "Z", "GMT", " UT "] {
            assert_eq!(id.parse::<Zone>().unwrap(), Zone::utc(), "{id}");
        }
    }

    #[test]
    fn parse_fixed_offsets() {
        let cases = [
            ("+08:00", 8 * 3600),
            ("-0530", -(5 * 3600 + 30 * 60)),
            ("UTC+8", 8 * 3600),
            ("GMT-3", -3 * 3600),
            ("utc+05:45", 5 * 3600 + 45 * 60),
        ];
        for (id, secs) in cases {
            match id.parse::<Zone>().unwrap() {
                Zone::Fixed(off) => assert_eq!(off.local_minus_utc(), secs, "{id}"),
                other => panic!("{id} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn parse_iana() {
        let z: Zone = "Asia/Shanghai".parse().unwrap();
        assert!(matches!(z, Zone::Named(_)));
        assert_eq!(z.offset_hours_at(J2000_JD).unwrap(), 8.0);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        for id in ["", "Mars/Olympus_Mons", "+25:00", "UTC+8:75", "++1", "abc"] {
            assert!(
                matches!(id.parse::<Zone>(), Err(TimeError::InvalidTimeZone(_))),
                "{id:?} should be rejected"
            );
        }
    }

    #[test]
    fn named_zone_follows_dst() {
        let z: Zone = "America/New_York".parse().unwrap();
        let winter = crate::julian::calendar_to_jd(2024, 1, 15.5);
        let summer = crate::julian::calendar_to_jd(2024, 7, 15.5);
        assert_eq!(z.offset_hours_at(winter).unwrap(), -5.0);
        assert_eq!(z.offset_hours_at(summer).unwrap(), -4.0);
    }

    #[test]
    fn local_timestamp_from_jd() {
        let z: Zone = "+08:00".parse().unwrap();
        let t = z.local(J2000_JD).unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2000, 1, 1));
        assert_eq!((t.hour(), t.minute()), (20, 0));
    }

    #[test]
    fn local_midnight_jd() {
        let z: Zone = "+08:00".parse().unwrap();
        let date = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap();
        let jd = z.date_start_jd(date).unwrap();
        // 2000-01-02 00:00 +08:00 = 2000-01-01 16:00 UTC
        assert!((jd - (J2000_JD + 4.0 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn offset_hours_constructor() {
        let z = Zone::from_offset_hours(-3.5).unwrap();
        assert_eq!(z.offset_hours_at(J2000_JD).unwrap(), -3.5);
        assert!(Zone::from_offset_hours(30.0).is_err());
        assert!(Zone::from_offset_hours(f64::NAN).is_err());
    }
}
