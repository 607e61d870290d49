//! Solar-term and equinox instants against published almanac times.

use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc};
use tianwen_search::{
    Season, SolarTerm, equinox_solstice_jde, get_equinox_and_solstice, get_solar_term,
    solar_terms_for_year,
};
use tianwen_time::{Zone, to_julian_day};

fn utc_jd(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> f64 {
    to_julian_day(&Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
}

fn minutes(a: f64, b: f64) -> f64 {
    (a - b) * 1440.0
}

#[test]
fn spring_equinox_2000_by_search() {
    // 2000 March 20, 07:35 UTC
    let e = get_solar_term(2000, SolarTerm::SpringEquinox, &Zone::utc()).unwrap();
    assert!(e.search.iterations <= 40);
    let lon = e.search.longitude_deg;
    assert!(lon < 1e-4 || lon > 360.0 - 1e-4, "λ = {lon}");
    let d = minutes(e.jd, utc_jd(2000, 3, 20, 7, 35));
    assert!(d.abs() < 30.0, "off by {d} min");
}

#[test]
fn closed_form_equinox_2000() {
    let jde = equinox_solstice_jde(2000, Season::MarchEquinox).unwrap();
    let d = minutes(jde, utc_jd(2000, 3, 20, 7, 35));
    assert!(d.abs() < 20.0, "off by {d} min");
}

#[test]
fn closed_form_and_search_agree() {
    let zone = Zone::utc();
    for year in [1950, 2000, 2024, 2050] {
        for season in Season::ALL {
            let jde = equinox_solstice_jde(year, season).unwrap();
            let e = get_solar_term(year, season.term(), &zone).unwrap();
            let d = minutes(e.jd, jde);
            assert!(d.abs() < 30.0, "{year} {season:?}: {d} min");
        }
    }
}

#[test]
fn shanghai_2024_terms() {
    // Purple Mountain Observatory times, UTC+8.
    let zone: Zone = "Asia/Shanghai".parse().unwrap();
    let cases = [
        (SolarTerm::StartOfSpring, (2, 4), (16, 27)),
        (SolarTerm::SpringEquinox, (3, 20), (11, 6)),
        (SolarTerm::PureBrightness, (4, 4), (15, 2)),
        (SolarTerm::SummerSolstice, (6, 21), (4, 51)),
        (SolarTerm::AutumnEquinox, (9, 22), (20, 44)),
        (SolarTerm::WinterSolstice, (12, 21), (17, 21)),
    ];
    for (term, (month, day), (hour, minute)) in cases {
        let e = get_solar_term(2024, term, &zone).unwrap();
        assert_eq!((e.local.month(), e.local.day()), (month, day), "{term}");
        let got = e.local.hour() as f64 * 60.0 + e.local.minute() as f64;
        let want = hour as f64 * 60.0 + minute as f64;
        assert!((got - want).abs() < 30.0, "{term}: {}", e.local);
    }
}

#[test]
fn year_of_terms_is_ordered() {
    let zone: Zone = "+08:00".parse().unwrap();
    let events = solar_terms_for_year(2024, &zone).unwrap();
    assert_eq!(events.len(), 24);
    assert_eq!(events[0].term, SolarTerm::MinorCold);
    assert_eq!(events[23].term, SolarTerm::WinterSolstice);
    for w in events.windows(2) {
        let gap = w[1].jd - w[0].jd;
        assert!((14.0..16.5).contains(&gap), "{} → {}: {gap} d", w[0].term, w[1].term);
    }
    for e in &events {
        assert_eq!(e.local.year(), 2024);
    }
}

#[test]
fn four_seasons_strictly_increasing_in_year() {
    for zone in ["UTC", "Asia/Shanghai", "America/Los_Angeles", "+14:00", "-12:00"] {
        let zone: Zone = zone.parse().unwrap();
        for year in [-800, 1, 1582, 1900, 2024, 2999] {
            let s = get_equinox_and_solstice(year, &zone).unwrap();
            assert!(s.windows(2).all(|w| w[0] < w[1]), "{year} {zone}");
            for t in &s {
                assert_eq!(t.year(), year, "{zone}: {t}");
            }
        }
    }
}

#[test]
fn seasons_2024_dates() {
    let s = get_equinox_and_solstice(2024, &Zone::utc()).unwrap();
    let dates: Vec<NaiveDate> = s.iter().map(|t| t.date_naive()).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 22).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
        ]
    );
}
