//! Façade reports against published almanac values.

use tianwen_rs::*;

fn shanghai() -> (Zone, Observer) {
    let zone: Zone = "Asia/Shanghai".parse().unwrap();
    (zone, Observer::new(31.23, 121.47, zone).unwrap())
}

#[test]
fn report_for_every_display_body() {
    let (zone, observer) = shanghai();
    let jd = parse_instant("2024-03-20T12:00:00", &zone).unwrap();
    let reports = observe_all(jd, &observer).unwrap();
    assert_eq!(reports.len(), Body::DISPLAY.len());
    for (r, b) in reports.iter().zip(Body::DISPLAY) {
        assert_eq!(r.body, b);
        assert!((0.0..360.0).contains(&r.ecliptic.lon_deg), "{b}");
        assert!((-90.0..=90.0).contains(&r.elevation_deg), "{b}");
        assert!((0.0..360.0).contains(&r.azimuth_deg), "{b}");
        assert!(r.earth_distance_au > 0.0, "{b}");
    }
}

#[test]
fn sun_at_equinox_noon() {
    let (zone, observer) = shanghai();
    let jd = parse_instant("2024-03-20T12:00:00", &zone).unwrap();
    let sun = observe(Body::Sun, jd, &observer).unwrap();

    assert!(sun.ecliptic.lon_deg < 0.5 || sun.ecliptic.lon_deg > 359.5);
    assert!(sun.equatorial.dec_deg.abs() < 0.2);
    assert!((sun.earth_distance_au - 0.996).abs() < 0.002);
    assert_eq!(sun.sun_distance_au, 0.0);
    // Local noon near the meridian: high in the south.
    assert!(sun.elevation_deg > 55.0, "elevation {}", sun.elevation_deg);
    assert!((sun.azimuth_deg - 180.0).abs() < 15.0, "azimuth {}", sun.azimuth_deg);

    // Almanac: sunrise 05:59, sunset 18:09 (UTC+8).
    let rise = sun.rise.unwrap();
    let set = sun.setting.unwrap();
    let culmination = sun.culmination.unwrap();
    let minutes = |t: chrono::NaiveTime| {
        use chrono::Timelike;
        t.hour() as f64 * 60.0 + t.minute() as f64
    };
    assert!((minutes(rise) - 359.0).abs() < 10.0, "rise {rise}");
    assert!((minutes(set) - 1089.0).abs() < 10.0, "set {set}");
    assert!(rise < culmination && culmination < set);
}

#[test]
fn planet_distances_are_consistent() {
    let (_, observer) = shanghai();
    let jd = to_julian_day(
        &chrono::DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z").unwrap(),
    );
    let jupiter = observe(Body::Jupiter, jd, &observer).unwrap();
    assert!((4.9..5.5).contains(&jupiter.sun_distance_au));
    // Earth-Jupiter distance is bounded by the triangle inequality.
    assert!(jupiter.earth_distance_au > jupiter.sun_distance_au - 1.02);
    assert!(jupiter.earth_distance_au < jupiter.sun_distance_au + 1.02);
}

#[test]
fn polar_summer_sun_never_sets() {
    let observer = Observer::new(80.0, 15.0, Zone::utc()).unwrap();
    let jd = parse_instant("2024-06-21T12:00:00Z", &Zone::utc()).unwrap();
    let sun = observe(Body::Sun, jd, &observer).unwrap();
    assert_eq!(sun.events, RiseTransitSet::NeverSets);
    assert!(sun.rise.is_none() && sun.setting.is_none());
    assert!(sun.elevation_deg > 0.0);
}

#[test]
fn earth_is_rejected() {
    let (_, observer) = shanghai();
    assert_eq!(
        observe(Body::Earth, 2_451_545.0, &observer),
        Err(TianwenError::NotObservable(Body::Earth))
    );
}

#[test]
fn body_lookup() {
    assert_eq!(body_by_name("saturn").unwrap(), Body::Saturn);
    assert!(matches!(body_by_name("Pluto"), Err(TianwenError::UnknownBody(_))));
}
