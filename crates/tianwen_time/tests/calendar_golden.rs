//! Golden values for calendar, sidereal and zone conversions.

use chrono::{Datelike, NaiveDate, Timelike};
use tianwen_time::{
    Dms, Epoch, Hms, J2000_JD, Zone, calendar_to_jd, gmst_deg, jd_to_calendar, lmst_deg,
    normalize_angle, sidereal_to_zone_hours, to_calendar_day,
};

#[test]
fn published_julian_days() {
    // (year, month, day_frac, JD) from Meeus table 7.a
    let cases = [
        (2000, 1, 1.5, 2_451_545.0),
        (1999, 1, 1.0, 2_451_179.5),
        (1987, 1, 27.0, 2_446_822.5),
        (1987, 6, 19.5, 2_446_966.0),
        (1988, 1, 27.0, 2_447_187.5),
        (1988, 6, 19.5, 2_447_332.0),
        (1900, 1, 1.0, 2_415_020.5),
        (1600, 1, 1.0, 2_305_447.5),
        (1600, 12, 31.0, 2_305_812.5),
        (837, 4, 10.3, 2_026_871.8),
        (-123, 12, 31.0, 1_676_496.5),
        (-1000, 7, 12.5, 1_356_001.0),
        (-4712, 1, 1.5, 0.0),
    ];
    for (y, m, d, expected) in cases {
        let jd = calendar_to_jd(y, m, d);
        assert!((jd - expected).abs() < 1e-6, "{y}-{m}-{d}: {jd} != {expected}");
        let (by, bm, bd) = jd_to_calendar(expected);
        assert_eq!((by, bm), (y, m), "inverse of {expected}");
        assert!((bd - d).abs() < 1e-6, "inverse day of {expected}: {bd}");
    }
}

#[test]
fn zoned_calendar_day_of_jd() {
    let z: Zone = "Asia/Shanghai".parse().unwrap();
    let t = z.local(calendar_to_jd(2024, 2, 9.5)).unwrap();
    assert_eq!((t.year(), t.month(), t.day(), t.hour()), (2024, 2, 9, 20));
    assert_eq!(t.offset().local_minus_utc(), 8 * 3600);
}

#[test]
fn calendar_day_of_j2000() {
    let utc = to_calendar_day(J2000_JD).unwrap();
    assert_eq!(utc, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap());
}

#[test]
fn sidereal_roundtrip_across_zones() {
    let jd0 = calendar_to_jd(2010, 12, 21.0);
    for (lon, offset) in [(-74.0, -5.0), (0.0, 0.0), (139.7, 9.0), (-157.8, -10.0)] {
        let ut = 14.25;
        let lst = lmst_deg(jd0 + ut / 24.0, lon).unwrap();
        let zone = sidereal_to_zone_hours(lst, lon, jd0, offset).unwrap();
        let expected = f64::rem_euclid(ut + offset, 24.0);
        assert!((zone - expected).abs() < 1e-4, "lon {lon}: {zone} vs {expected}");
    }
}

#[test]
fn gmst_stays_in_range_over_centuries() {
    let mut jd = Epoch::J2000.add_days(-36_525.0 * 20.0).jd();
    while jd < J2000_JD + 36_525.0 * 20.0 {
        let g = gmst_deg(jd).unwrap();
        assert!((0.0..=360.0).contains(&g));
        jd += 1_234.567;
    }
}

#[test]
fn sexagesimal_matches_normalized_angle() {
    let lon = normalize_angle(-75.25).unwrap();
    assert_eq!(Dms::from_degrees(lon).to_string(), "284°45′00.00″");
    assert_eq!(Hms::from_degrees(lon).to_string(), "18h59m00.00s");
}
