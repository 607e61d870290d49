//! Heliocentric → geocentric transform.
//!
//! The geocentric vector is target minus Earth, both taken from their
//! heliocentric theories. The apparent branch applies one light-time pass
//! and nutation in longitude. Annual aberration is not applied.

use tianwen_frames::{
    EclipticCoord, get_nutation, rectangular_to_spherical, spherical_to_rectangular, vector_sub,
};
use tianwen_time::{TimeError, normalize_angle};

use crate::body::{Body, body_model};
use crate::vsop87::EARTH;

/// Light travel time over 1 AU, days.
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Geocentric ecliptic position of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    pub body: Body,
    /// Longitude in [0, 360), latitude in [-90, 90].
    pub ecliptic: EclipticCoord,
    /// Earth distance, AU. Light-time corrected in the apparent branch.
    pub distance_au: f64,
    /// Light-time applied to the target, days. Zero when geometric.
    pub light_time_days: f64,
}

/// Heliocentric ecliptic longitude/latitude of a body, evaluated
/// `light_time_days` before `jd`.
pub fn heliocentric_ecliptic(
    body: Body,
    jd: f64,
    light_time_days: f64,
) -> Result<EclipticCoord, TimeError> {
    Ok(body_model(body)
        .heliocentric_position(jd - light_time_days)?
        .ecliptic())
}

/// Distance from the Sun, AU, evaluated `light_time_days` before `jd`.
pub fn sun_distance_au(body: Body, jd: f64, light_time_days: f64) -> Result<f64, TimeError> {
    body_model(body).sun_distance(jd - light_time_days)
}

/// Geocentric ecliptic coordinates of a body at a Julian Day.
///
/// With `apparent = false` the result is geometric: no light-time and no
/// nutation. With `apparent = true` the target is re-evaluated once at
/// `jd − τ`, τ = 0.0057755183 · distance, and nutation in longitude is added.
pub fn geocentric_position(
    body: Body,
    jd: f64,
    apparent: bool,
) -> Result<GeocentricPosition, TimeError> {
    let model = body_model(body);
    let earth = spherical_to_rectangular(&EARTH.evaluate(jd)?);
    let target = spherical_to_rectangular(&model.heliocentric_position(jd)?);
    let geometric = rectangular_to_spherical(&vector_sub(&target, &earth));

    if !apparent {
        return Ok(GeocentricPosition {
            body,
            ecliptic: EclipticCoord::new(geometric.lon_deg, geometric.lat_deg),
            distance_au: geometric.distance_au,
            light_time_days: 0.0,
        });
    }

    let tau = LIGHT_TIME_DAYS_PER_AU * geometric.distance_au;
    let retarded = spherical_to_rectangular(&model.heliocentric_position(jd - tau)?);
    let corrected = rectangular_to_spherical(&vector_sub(&retarded, &earth));
    let nutation = get_nutation(jd)?;

    Ok(GeocentricPosition {
        body,
        ecliptic: EclipticCoord::new(
            wrap_open(corrected.lon_deg + nutation.longitude_deg)?,
            corrected.lat_deg,
        ),
        distance_au: corrected.distance_au,
        light_time_days: tau,
    })
}

/// Earth distance, AU (apparent branch).
pub fn earth_distance_au(body: Body, jd: f64) -> Result<f64, TimeError> {
    Ok(geocentric_position(body, jd, true)?.distance_au)
}

/// Normalize into [0, 360).
fn wrap_open(deg: f64) -> Result<f64, TimeError> {
    let d = normalize_angle(deg)?;
    Ok(if d >= 360.0 { 0.0 } else { d })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_is_at_geocentric_origin() {
        let p = geocentric_position(Body::Earth, 2_451_545.0, false).unwrap();
        assert_eq!(p.distance_au, 0.0);
    }

    #[test]
    fn sun_is_opposite_earth() {
        let jd = 2_448_908.5;
        let earth = heliocentric_ecliptic(Body::Earth, jd, 0.0).unwrap();
        let sun = geocentric_position(Body::Sun, jd, false).unwrap();
        let diff = (sun.ecliptic.lon_deg - earth.lon_deg).rem_euclid(360.0);
        assert!((diff - 180.0).abs() < 1e-9);
        assert!((sun.ecliptic.lat_deg + earth.lat_deg).abs() < 1e-12);
    }

    #[test]
    fn geometric_branch_has_no_light_time() {
        let p = geocentric_position(Body::Mars, 2_451_545.0, false).unwrap();
        assert_eq!(p.light_time_days, 0.0);
    }

    #[test]
    fn apparent_branch_light_time_scales_with_distance() {
        let jd = 2_451_545.0;
        let geo = geocentric_position(Body::Jupiter, jd, false).unwrap();
        let app = geocentric_position(Body::Jupiter, jd, true).unwrap();
        assert!((app.light_time_days - LIGHT_TIME_DAYS_PER_AU * geo.distance_au).abs() < 1e-12);
        // Jupiter moves < 0.1°/day; light-time of ~0.03 d plus nutation stays tiny.
        let dl = (app.ecliptic.lon_deg - geo.ecliptic.lon_deg + 180.0).rem_euclid(360.0) - 180.0;
        assert!(dl.abs() < 0.02, "Δλ = {dl}");
    }

    #[test]
    fn sun_distance_with_light_time_offset() {
        let jd = 2_451_545.0;
        let a = sun_distance_au(Body::Mars, jd, 0.01).unwrap();
        let b = sun_distance_au(Body::Mars, jd - 0.01, 0.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn longitudes_are_half_open() {
        let mut jd = 2_451_545.0;
        for _ in 0..200 {
            for b in Body::DISPLAY {
                let p = geocentric_position(b, jd, true).unwrap();
                assert!((0.0..360.0).contains(&p.ecliptic.lon_deg), "{b}: {}", p.ecliptic.lon_deg);
                assert!((-90.0..=90.0).contains(&p.ecliptic.lat_deg));
            }
            jd += 17.3;
        }
    }

    #[test]
    fn rejects_non_finite_epoch() {
        assert!(geocentric_position(Body::Venus, f64::NAN, true).is_err());
    }
}
