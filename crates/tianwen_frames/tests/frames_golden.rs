//! Published reference values for nutation, obliquity and frame rotation.

use tianwen_frames::{
    EclipticCoord, EquatorialCoord, ObliquityMode, ecliptic_obliquity_deg, ecliptic_to_equatorial,
    equatorial_to_ecliptic, get_nutation, rectangular_to_spherical, spherical_to_rectangular,
};

/// Meeus example 22.a epoch: 1987 April 10, 0h TD.
const JD_1987_APR_10: f64 = 2_446_895.5;

#[test]
fn apparent_sun_example_25a() {
    // Meeus example 25.a (1992 Oct 13.0 TD): apparent λ = 199.90895°,
    // ε = 23.43999° → α = 198.38083°, δ = −7.78507°.
    let ecl = EclipticCoord::new(199.908_95, 0.0);
    let eq = tianwen_frames::ecliptic_to_equatorial_with(&ecl, 23.439_99).unwrap();
    assert!((eq.ra_deg - 198.380_83).abs() < 2e-4, "α = {}", eq.ra_deg);
    assert!((eq.dec_deg + 7.785_07).abs() < 2e-4, "δ = {}", eq.dec_deg);
}

#[test]
fn time_dependent_roundtrip() {
    for mode in [
        ObliquityMode::FixedJ2000,
        ObliquityMode::MeanAt(JD_1987_APR_10),
        ObliquityMode::TrueAt(JD_1987_APR_10),
    ] {
        let e = EclipticCoord::new(301.25, -4.75);
        let q = ecliptic_to_equatorial(&e, mode).unwrap();
        let back = equatorial_to_ecliptic(&q, mode).unwrap();
        assert!((back.lon_deg - e.lon_deg).abs() < 1e-9, "{mode:?}");
        assert!((back.lat_deg - e.lat_deg).abs() < 1e-9, "{mode:?}");
    }
}

#[test]
fn true_obliquity_example_22a() {
    let e = ecliptic_obliquity_deg(JD_1987_APR_10, true).unwrap();
    let expected = 23.0 + 26.0 / 60.0 + 36.850 / 3600.0;
    assert!((e - expected).abs() * 3600.0 < 0.06, "ε = {e}");
}

#[test]
fn nutation_sign_at_example_epoch() {
    let n = get_nutation(JD_1987_APR_10).unwrap();
    assert!(n.longitude_deg < 0.0);
    assert!(n.obliquity_deg > 0.0);
}

#[test]
fn north_celestial_pole_maps_to_ecliptic_latitude() {
    let pole = EquatorialCoord::new(0.0, 90.0);
    let ecl = equatorial_to_ecliptic(&pole, ObliquityMode::FixedJ2000).unwrap();
    assert!((ecl.lat_deg - (90.0 - 23.439_291)).abs() < 1e-6);
    assert!((ecl.lon_deg - 90.0).abs() < 1e-6);
}

#[test]
fn rectangular_spherical_grid() {
    let mut lon = 3.0;
    while lon < 360.0 {
        for lat in [-60.0, -1.5, 0.0, 2.25, 45.0] {
            let s = tianwen_frames::SphericalCoords {
                lon_deg: lon,
                lat_deg: lat,
                distance_au: 1.523_7,
            };
            let back = rectangular_to_spherical(&spherical_to_rectangular(&s));
            assert!((back.lon_deg - lon).abs() < 1e-9);
            assert!((back.lat_deg - lat).abs() < 1e-9);
            assert!((back.distance_au - 1.523_7).abs() < 1e-12);
        }
        lon += 11.0;
    }
}
