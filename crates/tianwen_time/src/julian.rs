//! Julian Day ↔ calendar conversions.
//!
//! Meeus, _Astronomical Algorithms_ (2nd ed.), chapter 7. The numeric
//! field functions ([`calendar_to_jd`], [`jd_to_calendar`]) interpret dates
//! before 1582-10-15 in the Julian calendar and later dates in the
//! Gregorian calendar.
//!
//! chrono timestamps are proleptic Gregorian on every date, so the chrono
//! boundary ([`to_julian_day`], [`to_calendar_day`]) counts days from the
//! common era instead of going through the calendar fields.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike};

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian millennium.
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First Julian Day of the Gregorian calendar (1582-10-15 00:00).
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

/// Julian Day of proleptic Gregorian 0000-12-31 00:00, the day before
/// chrono's `num_days_from_ce` day 1.
const CE_DAY_ZERO_JD: f64 = 1_721_424.5;

/// Whether the calendar date falls on or after the Gregorian reform.
fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    (year, month, day.floor() as i64) >= (1582, 10, 15)
}

/// Convert a calendar date with fractional day to a Julian Day.
///
/// January and February are handled as months 13 and 14 of the previous
/// year. The leap correction `2 − A + ⌊A/4⌋` is applied only from
/// 1582-10-15 onward.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let b = if is_gregorian(year, month, day_frac) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Day to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian Day of a zoned civil timestamp.
///
/// The timestamp is first shifted to UTC by its offset.
pub fn to_julian_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    naive_utc_to_jd(&instant.naive_utc())
}

/// Julian Day of a naive UTC date-time (proleptic Gregorian).
pub fn naive_utc_to_jd(utc: &NaiveDateTime) -> f64 {
    let seconds = utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 * 1e-9;
    CE_DAY_ZERO_JD + utc.num_days_from_ce() as f64 + seconds / SECONDS_PER_DAY
}

/// Convert a Julian Day back to a UTC date-time (proleptic Gregorian).
///
/// The time of day is rounded to the nearest millisecond. Before the
/// reform the chrono date differs from the Julian-calendar fields of
/// [`jd_to_calendar`] for the same instant (e.g. Julian 1500-02-29 is
/// 1500-03-10 here).
pub fn to_calendar_day(jd: f64) -> Result<NaiveDateTime, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::UnrepresentableJulianDay(jd));
    }
    let since = jd - CE_DAY_ZERO_JD;
    let days = since.floor();
    if days < i32::MIN as f64 || days > i32::MAX as f64 {
        return Err(TimeError::UnrepresentableJulianDay(jd));
    }
    let millis = ((since - days) * SECONDS_PER_DAY * 1000.0).round() as i64;

    NaiveDate::from_num_days_from_ce_opt(days as i32)
        .and_then(|date| {
            date.and_time(NaiveTime::MIN)
                .checked_add_signed(TimeDelta::milliseconds(millis))
        })
        .ok_or(TimeError::UnrepresentableJulianDay(jd))
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian millennia since J2000.0.
pub fn julian_millennia(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_MILLENNIUM
}

/// Julian Day of 0h UT on the same UTC civil date as `jd`.
pub fn jd_at_midnight(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Day of the week, 0 = Sunday … 6 = Saturday.
pub fn day_of_week(jd: f64) -> u32 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u32
}

/// Leap-year rule: Julian calendar up to 1582, Gregorian afterwards.
pub fn is_leap_year(year: i32) -> bool {
    if year <= 1582 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Ordinal day within the year (1-based).
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let k = if is_leap_year(year) { 1 } else { 2 };
    let m = month as i64;
    let n = (275 * m) / 9 - k * ((m + 9) / 12) + day as i64 - 30;
    n as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert_eq!(jd, J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957 Oct 4.81 → JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn julian_calendar_date() {
        // 333 Jan 27.5 (Julian) → JD 1842713.0
        let jd = calendar_to_jd(333, 1, 27.5);
        assert!((jd - 1_842_713.0).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn gregorian_cutover_is_contiguous() {
        // 1582-10-04 (Julian) is followed directly by 1582-10-15 (Gregorian).
        let last_julian = calendar_to_jd(1582, 10, 4.0);
        let first_gregorian = calendar_to_jd(1582, 10, 15.0);
        assert!((first_gregorian - last_julian - 1.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_meeus_example_7c() {
        // JD 2436116.31 → 1957 Oct 4.81
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn inverse_before_reform() {
        // JD 1842713.0 → 333 Jan 27.5
        let (y, m, d) = jd_to_calendar(1_842_713.0);
        assert_eq!((y, m), (333, 1));
        assert!((d - 27.5).abs() < 1e-9);
    }

    #[test]
    fn zoned_timestamp_shifts_to_utc() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2000, 1, 1, 20, 0, 0).unwrap();
        assert!((to_julian_day(&local) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn utc_reference_value() {
        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(to_julian_day(&utc), 2_451_545.0);
    }

    #[test]
    fn calendar_day_roundtrip_one_second() {
        let start = NaiveDate::from_ymd_opt(-1000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        // Walk ~3200 years across the reform in irregular strides.
        let mut t = start;
        for i in 0..5000 {
            let jd = naive_utc_to_jd(&t);
            let back = to_calendar_day(jd).unwrap();
            let diff = (back - t).num_milliseconds().abs();
            assert!(diff <= 1000, "roundtrip drift {diff} ms at {t}");
            t += TimeDelta::seconds(164_317 + i * 7919);
        }
    }

    #[test]
    fn julian_century_leap_days_have_a_calendar_day() {
        // (Julian fields, proleptic Gregorian date of the same instant)
        let cases = [
            ((1500, 2, 29.5), (1500, 3, 10), 12),
            ((1300, 2, 29.0), (1300, 3, 8), 0),
            ((1200, 3, 1.25), (1200, 3, 8), 6),
            ((333, 1, 27.5), (333, 1, 28), 12),
        ];
        for ((y, m, d), (gy, gm, gd), hour) in cases {
            let jd = calendar_to_jd(y, m, d);
            let t = to_calendar_day(jd).unwrap();
            assert_eq!((t.year(), t.month(), t.day(), t.hour()), (gy, gm, gd, hour), "{y}-{m}-{d}");
            assert!((naive_utc_to_jd(&t) - jd).abs() < 1e-9);
        }
    }

    #[test]
    fn reform_gap_is_consecutive_days() {
        let last_julian = to_calendar_day(calendar_to_jd(1582, 10, 4.0)).unwrap();
        let first_gregorian = to_calendar_day(calendar_to_jd(1582, 10, 15.0)).unwrap();
        assert_eq!(last_julian.date(), NaiveDate::from_ymd_opt(1582, 10, 14).unwrap());
        assert_eq!(first_gregorian - last_julian, TimeDelta::days(1));
    }

    #[test]
    fn pre_reform_weekdays_agree_with_chrono() {
        let mut jd = calendar_to_jd(-1000, 1, 1.0);
        let end = calendar_to_jd(1582, 10, 15.0);
        while jd < end {
            let t = to_calendar_day(jd).unwrap();
            assert_eq!(t.weekday().num_days_from_sunday(), day_of_week(jd), "jd {jd}");
            jd += 1_009.25;
        }
    }

    #[test]
    fn julian_fields_roundtrip_before_reform() {
        let mut checked = 0;
        for year in (-1000..=1582).step_by(7) {
            for month in 1..=12u32 {
                let days = match month {
                    2 if is_leap_year(year) => 29,
                    2 => 28,
                    4 | 6 | 9 | 11 => 30,
                    _ => 31,
                };
                for day in [1, 15, days] {
                    if (year, month, day) > (1582, 10, 4) {
                        continue;
                    }
                    let jd = calendar_to_jd(year, month, day as f64 + 0.25);
                    let (by, bm, bd) = jd_to_calendar(jd);
                    assert_eq!((by, bm), (year, month), "{year}-{month}-{day}");
                    assert!((bd - (day as f64 + 0.25)).abs() < 1e-6);
                    let t = to_calendar_day(jd).unwrap();
                    assert!((naive_utc_to_jd(&t) - jd).abs() < 1e-6);
                    checked += 1;
                }
            }
        }
        assert!(checked > 5000);
    }

    #[test]
    fn calendar_day_rejects_nan() {
        assert!(to_calendar_day(f64::NAN).is_err());
    }

    #[test]
    fn midnight_of_day() {
        assert_eq!(jd_at_midnight(2_451_545.0), 2_451_544.5);
        assert_eq!(jd_at_midnight(2_451_544.5), 2_451_544.5);
        assert_eq!(jd_at_midnight(2_451_545.49), 2_451_544.5);
    }

    #[test]
    fn weekday() {
        // 1954 June 30 was a Wednesday (Meeus example 7.e).
        let jd = calendar_to_jd(1954, 6, 30.0);
        assert_eq!(day_of_week(jd), 3);
        // 2000-01-01 was a Saturday.
        assert_eq!(day_of_week(J2000_JD), 6);
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(1978, 11, 14), 318);
        assert_eq!(day_of_year(1988, 4, 22), 113);
        assert_eq!(day_of_year(2024, 12, 31), 366);
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(900));
        assert!(is_leap_year(1500));
        assert!(!is_leap_year(1700));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn century_and_millennium_scales() {
        assert_eq!(julian_centuries(J2000_JD + DAYS_PER_CENTURY), 1.0);
        assert_eq!(julian_millennia(J2000_JD - DAYS_PER_MILLENNIUM), -1.0);
    }
}
