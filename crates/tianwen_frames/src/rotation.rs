//! Ecliptic ↔ equatorial conversion.
//!
//! Rotation about the equinox direction by the obliquity ε
//! (Meeus eqs. 13.3 and 13.4).

use tianwen_time::{TimeError, asin_clamped, normalize_angle};

use crate::coords::{EclipticCoord, EquatorialCoord};
use crate::obliquity::{OBLIQUITY_J2000_DEG, ecliptic_obliquity_deg};

/// Which obliquity to rotate by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObliquityMode {
    /// Constant J2000.0 obliquity (23.439291°), frame-agnostic.
    FixedJ2000,
    /// Mean obliquity at the given Julian Day.
    MeanAt(f64),
    /// Mean obliquity plus nutation in obliquity at the given Julian Day.
    TrueAt(f64),
}

impl ObliquityMode {
    /// Time-dependent mode selected by an "apparent" flag.
    pub fn at(jd: f64, is_true: bool) -> Self {
        if is_true {
            Self::TrueAt(jd)
        } else {
            Self::MeanAt(jd)
        }
    }

    /// Obliquity for this mode, degrees.
    pub fn obliquity_deg(self) -> Result<f64, TimeError> {
        match self {
            Self::FixedJ2000 => Ok(OBLIQUITY_J2000_DEG),
            Self::MeanAt(jd) => ecliptic_obliquity_deg(jd, false),
            Self::TrueAt(jd) => ecliptic_obliquity_deg(jd, true),
        }
    }
}

/// Ecliptic (λ, β) → equatorial (α, δ) by an explicit obliquity in degrees.
pub fn ecliptic_to_equatorial_with(
    ecl: &EclipticCoord,
    obliquity_deg: f64,
) -> Result<EquatorialCoord, TimeError> {
    let (sl, cl) = ecl.lon_deg.to_radians().sin_cos();
    let (sb, cb) = ecl.lat_deg.to_radians().sin_cos();
    let (se, ce) = obliquity_deg.to_radians().sin_cos();
    let tb = sb / cb;

    let ra = f64::atan2(sl * ce - tb * se, cl);
    let dec = asin_clamped(sb * ce + cb * se * sl);
    Ok(EquatorialCoord {
        ra_deg: wrap_open(ra.to_degrees())?,
        dec_deg: dec.to_degrees(),
    })
}

/// Equatorial (α, δ) → ecliptic (λ, β) by an explicit obliquity in degrees.
pub fn equatorial_to_ecliptic_with(
    eq: &EquatorialCoord,
    obliquity_deg: f64,
) -> Result<EclipticCoord, TimeError> {
    let (sa, ca) = eq.ra_deg.to_radians().sin_cos();
    let (sd, cd) = eq.dec_deg.to_radians().sin_cos();
    let (se, ce) = obliquity_deg.to_radians().sin_cos();
    let td = sd / cd;

    let lon = f64::atan2(sa * ce + td * se, ca);
    let lat = asin_clamped(sd * ce - cd * se * sa);
    Ok(EclipticCoord {
        lon_deg: wrap_open(lon.to_degrees())?,
        lat_deg: lat.to_degrees(),
    })
}

/// Ecliptic → equatorial for the given obliquity mode.
pub fn ecliptic_to_equatorial(
    ecl: &EclipticCoord,
    mode: ObliquityMode,
) -> Result<EquatorialCoord, TimeError> {
    ecliptic_to_equatorial_with(ecl, mode.obliquity_deg()?)
}

/// Equatorial → ecliptic for the given obliquity mode.
pub fn equatorial_to_ecliptic(
    eq: &EquatorialCoord,
    mode: ObliquityMode,
) -> Result<EclipticCoord, TimeError> {
    equatorial_to_ecliptic_with(eq, mode.obliquity_deg()?)
}

/// Great-circle separation between two equatorial positions, degrees.
pub fn angular_separation_deg(a: &EquatorialCoord, b: &EquatorialCoord) -> f64 {
    let (s1, c1) = a.dec_deg.to_radians().sin_cos();
    let (s2, c2) = b.dec_deg.to_radians().sin_cos();
    let dra = (a.ra_deg - b.ra_deg).to_radians();

    // Vincenty formula.
    let num_x = c2 * dra.sin();
    let num_y = c1 * s2 - s1 * c2 * dra.cos();
    let den = s1 * s2 + c1 * c2 * dra.cos();
    f64::atan2(num_x.hypot(num_y), den).to_degrees()
}

/// Normalize into [0, 360) so that a full turn reads 0.
fn wrap_open(deg: f64) -> Result<f64, TimeError> {
    let d = normalize_angle(deg)?;
    Ok(if d >= 360.0 { d - 360.0 } else { d })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_13a() {
        // Pollux: α = 116.328942°, δ = 28.026183°, ε = 23.4392911°
        // → λ = 113.215630°, β = 6.684170°
        let eq = EquatorialCoord::new(116.328_942, 28.026_183);
        let ecl = equatorial_to_ecliptic_with(&eq, 23.439_291_1).unwrap();
        assert!((ecl.lon_deg - 113.215_630).abs() < 1e-5, "λ = {}", ecl.lon_deg);
        assert!((ecl.lat_deg - 6.684_170).abs() < 1e-5, "β = {}", ecl.lat_deg);
    }

    #[test]
    fn equinox_point_is_fixed() {
        let eq = ecliptic_to_equatorial(&EclipticCoord::new(0.0, 0.0), ObliquityMode::FixedJ2000)
            .unwrap();
        assert!(eq.ra_deg.abs() < 1e-12);
        assert!(eq.dec_deg.abs() < 1e-12);
    }

    #[test]
    fn summer_solstice_declination_equals_obliquity() {
        let eq = ecliptic_to_equatorial(&EclipticCoord::new(90.0, 0.0), ObliquityMode::FixedJ2000)
            .unwrap();
        assert!((eq.ra_deg - 90.0).abs() < 1e-9);
        assert!((eq.dec_deg - OBLIQUITY_J2000_DEG).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_grid_fixed_obliquity() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let mut lat = -85.0;
            while lat <= 85.0 {
                let e = EclipticCoord::new(lon, lat);
                let q = ecliptic_to_equatorial(&e, ObliquityMode::FixedJ2000).unwrap();
                let back = equatorial_to_ecliptic(&q, ObliquityMode::FixedJ2000).unwrap();
                let dl = (back.lon_deg - lon + 540.0).rem_euclid(360.0) - 180.0;
                assert!(dl.abs() < 1e-6, "λ {lon} β {lat}: back {back:?}");
                assert!((back.lat_deg - lat).abs() < 1e-6);
                lat += 8.5;
            }
            lon += 7.3;
        }
    }

    #[test]
    fn right_ascension_in_open_range() {
        let q = ecliptic_to_equatorial(&EclipticCoord::new(359.999_999, -0.5), ObliquityMode::FixedJ2000)
            .unwrap();
        assert!((0.0..360.0).contains(&q.ra_deg));
    }

    #[test]
    fn true_and_mean_modes_differ_by_nutation() {
        let jd = 2_446_895.5;
        let mean = ObliquityMode::at(jd, false).obliquity_deg().unwrap();
        let tru = ObliquityMode::at(jd, true).obliquity_deg().unwrap();
        assert!(((tru - mean) * 3600.0 - 9.443).abs() < 0.05);
    }

    #[test]
    fn separation_known() {
        // Arcturus and Spica (Meeus example 17.a): 32.7930°
        let arcturus = EquatorialCoord::new(213.9154, 19.1825);
        let spica = EquatorialCoord::new(201.2983, -11.1614);
        let d = angular_separation_deg(&arcturus, &spica);
        assert!((d - 32.7930).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn separation_zero_and_antipodal() {
        let a = EquatorialCoord::new(10.0, 20.0);
        assert!(angular_separation_deg(&a, &a).abs() < 1e-12);
        let b = EquatorialCoord::new(190.0, -20.0);
        assert!((angular_separation_deg(&a, &b) - 180.0).abs() < 1e-9);
    }
}
