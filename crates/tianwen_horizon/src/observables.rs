//! Hour angle, elevation and azimuth.
//!
//! Azimuth is measured from north through east. Sidereal time is mean
//! sidereal time; Julian Days are UT.

use tianwen_frames::EquatorialCoord;
use tianwen_time::{TimeError, acos_clamped, asin_clamped, lmst_deg, normalize_angle, normalize_signed};

use crate::error::HorizonError;
use crate::observer::Observer;

/// Elevation and azimuth of a body, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoord {
    /// Elevation above the horizon in [-90, 90].
    pub elevation_deg: f64,
    /// Azimuth in [0, 360), north = 0, east = 90.
    pub azimuth_deg: f64,
}

/// Local hour angle in [0, 360]: local sidereal time minus right ascension.
pub fn hour_angle_deg(jd: f64, ra_deg: f64, longitude_deg: f64) -> Result<f64, TimeError> {
    normalize_angle(lmst_deg(jd, longitude_deg)? - ra_deg)
}

/// Elevation from declination, latitude and hour angle.
///
/// sin h = sin φ·sin δ + cos φ·cos δ·cos H
pub fn elevation_deg(dec_deg: f64, latitude_deg: f64, hour_angle_deg: f64) -> f64 {
    let (sd, cd) = dec_deg.to_radians().sin_cos();
    let (sp, cp) = latitude_deg.to_radians().sin_cos();
    asin_clamped(sp * sd + cp * cd * hour_angle_deg.to_radians().cos()).to_degrees()
}

/// Azimuth from declination, latitude, hour angle and elevation.
///
/// cos A = (sin δ − sin φ·sin h) / (cos φ·cos h), mirrored to `360 − A`
/// when the signed hour angle is ≥ 0. At the zenith and at the poles the
/// azimuth is undefined and 0 is returned.
pub fn azimuth_deg(
    dec_deg: f64,
    latitude_deg: f64,
    hour_angle_deg: f64,
    elevation_deg: f64,
) -> Result<f64, TimeError> {
    let (sp, cp) = latitude_deg.to_radians().sin_cos();
    let (sh, ch) = elevation_deg.to_radians().sin_cos();
    let denom = cp * ch;
    if denom.abs() < 1e-12 {
        return Ok(0.0);
    }
    let a = acos_clamped((dec_deg.to_radians().sin() - sp * sh) / denom).to_degrees();
    let az = if normalize_signed(hour_angle_deg)? >= 0.0 {
        360.0 - a
    } else {
        a
    };
    Ok(if az >= 360.0 { az - 360.0 } else { az })
}

/// Elevation and azimuth of an equatorial position seen by an observer.
pub fn horizontal(
    eq: &EquatorialCoord,
    jd: f64,
    observer: &Observer,
) -> Result<HorizontalCoord, HorizonError> {
    observer.validate()?;
    let ha = hour_angle_deg(jd, eq.ra_deg, observer.longitude_deg)?;
    let elevation = elevation_deg(eq.dec_deg, observer.latitude_deg, ha);
    let azimuth = azimuth_deg(eq.dec_deg, observer.latitude_deg, ha, elevation)?;
    Ok(HorizontalCoord {
        elevation_deg: elevation,
        azimuth_deg: azimuth,
    })
}
