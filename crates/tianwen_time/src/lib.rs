//! Calendar and time foundations.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions (Julian/Gregorian reform aware)
//! - Angle normalization and sexagesimal formatting
//! - Greenwich/local sidereal time and its inverse
//! - Civil time zones (fixed offsets and IANA names)
//!
//! All Julian Days are Universal Time. No ΔT is applied anywhere.

pub mod angle;
pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use angle::{Dms, Hms, acos_clamped, asin_clamped, normalize_angle, normalize_signed};
pub use civil::Zone;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000_JD, SECONDS_PER_DAY, calendar_to_jd,
    day_of_week, day_of_year, is_leap_year, jd_at_midnight, jd_to_calendar, julian_centuries,
    julian_millennia, naive_utc_to_jd, to_calendar_day, to_julian_day,
};
pub use sidereal::{
    SIDEREAL_PER_SOLAR, SOLAR_PER_SIDEREAL, apparent_sidereal_time_deg, gmst_deg, gmst0_deg,
    lmst_deg, local_sidereal_time_deg, sidereal_to_zone_hours, ut_sidereal_time_deg,
};

/// A UT instant represented as a Julian Day.
///
/// Thin wrapper used where a signature would otherwise take a bare `f64`
/// that could be mistaken for centuries or millennia.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    jd: f64,
}

impl Epoch {
    /// The J2000.0 epoch.
    pub const J2000: Self = Self { jd: J2000_JD };

    /// Create an epoch from a UT Julian Day.
    pub fn from_jd(jd: f64) -> Self {
        Self { jd }
    }

    /// Create an epoch from any zoned chrono timestamp.
    pub fn from_datetime<Tz: chrono::TimeZone>(t: &chrono::DateTime<Tz>) -> Self {
        Self {
            jd: to_julian_day(t),
        }
    }

    /// Julian Day (UT).
    pub fn jd(self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(self) -> f64 {
        julian_centuries(self.jd)
    }

    /// Julian millennia since J2000.0.
    pub fn millennia(self) -> f64 {
        julian_millennia(self.jd)
    }

    /// UTC calendar timestamp, rounded to the millisecond.
    pub fn to_utc(self) -> Result<chrono::NaiveDateTime, TimeError> {
        to_calendar_day(self.jd)
    }

    /// Shift by a number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn epoch_j2000_scales() {
        assert_eq!(Epoch::J2000.centuries(), 0.0);
        assert_eq!(Epoch::J2000.add_days(DAYS_PER_MILLENNIUM).millennia(), 1.0);
    }

    #[test]
    fn epoch_from_datetime() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(Epoch::from_datetime(&t), Epoch::J2000);
    }

    #[test]
    fn epoch_to_utc() {
        let utc = Epoch::from_jd(2_451_544.5).to_utc().unwrap();
        assert_eq!(utc.to_string(), "2000-01-01 00:00:00");
    }
}
