//! Greenwich and local sidereal time, and the inverse mapping from a local
//! sidereal time back to civil zone time.
//!
//! All angles are degrees. Julian Days are UT.
//!
//! Source: Meeus, _Astronomical Algorithms_, chapter 12 (eq. 12.4).

use crate::angle::normalize_angle;
use crate::error::TimeError;
use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Sidereal degrees gained per mean solar day beyond one full turn.
const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Mean solar time elapsed per unit of sidereal time.
pub const SOLAR_PER_SIDEREAL: f64 = 0.997_269_566_3;

/// Sidereal time elapsed per unit of mean solar time.
pub const SIDEREAL_PER_SOLAR: f64 = 1.002_737_909_35;

/// Greenwich mean sidereal time at any UT instant, degrees in `[0, 360]`.
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd_ut: f64) -> Result<f64, TimeError> {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + SIDEREAL_DEG_PER_DAY * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_angle(theta)
}

/// Sidereal time at Greenwich for the UT instant itself.
///
/// Alias kept for callers that think of it as "UT sidereal time".
pub fn ut_sidereal_time_deg(jd_ut: f64) -> Result<f64, TimeError> {
    gmst_deg(jd_ut)
}

/// Greenwich mean sidereal time at 0h UT of the civil date containing `jd_ut`.
pub fn gmst0_deg(jd_ut: f64) -> Result<f64, TimeError> {
    gmst_deg(crate::julian::jd_at_midnight(jd_ut))
}

/// Greenwich apparent sidereal time from mean sidereal time and nutation.
///
/// GAST = GMST + Δψ·cos ε
pub fn apparent_sidereal_time_deg(
    gmst_deg: f64,
    nutation_longitude_deg: f64,
    true_obliquity_deg: f64,
) -> Result<f64, TimeError> {
    normalize_angle(gmst_deg + nutation_longitude_deg * true_obliquity_deg.to_radians().cos())
}

/// Local sidereal time from Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_deg(gst_deg: f64, longitude_east_deg: f64) -> Result<f64, TimeError> {
    normalize_angle(gst_deg + longitude_east_deg)
}

/// Local mean sidereal time at a UT instant.
pub fn lmst_deg(jd_ut: f64, longitude_east_deg: f64) -> Result<f64, TimeError> {
    local_sidereal_time_deg(gmst_deg(jd_ut)?, longitude_east_deg)
}

/// Convert a local sidereal time on a given civil date to zone time of day.
///
/// `jd_midnight` is 0h UT of the date. The sidereal interval since 0h is
/// scaled by [`SOLAR_PER_SIDEREAL`] to mean solar hours, shifted by the zone
/// offset and wrapped into `[0, 24)`.
pub fn sidereal_to_zone_hours(
    lst_deg: f64,
    longitude_east_deg: f64,
    jd_midnight: f64,
    utc_offset_hours: f64,
) -> Result<f64, TimeError> {
    let theta0 = gmst_deg(jd_midnight)?;
    let sidereal_since_midnight = normalize_angle(lst_deg - longitude_east_deg - theta0)?;
    let ut_hours = sidereal_since_midnight / 15.0 * SOLAR_PER_SIDEREAL;
    Ok((ut_hours + utc_offset_hours).rem_euclid(24.0))
}
