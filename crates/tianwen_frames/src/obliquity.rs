//! Obliquity of the ecliptic.
//!
//! Mean obliquity from Laskar's 10th-degree polynomial (Meeus eq. 22.3),
//! valid to ~0.01″ within ±1000 years of J2000 and a few arcseconds
//! over ±10000 years.

use tianwen_time::{TimeError, julian_centuries};

use crate::nutation::get_nutation;

/// Fixed J2000.0 obliquity, degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291;

/// Fixed J2000.0 obliquity, radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * std::f64::consts::PI / 180.0;

/// Laskar coefficients in arcseconds for U¹ … U¹⁰.
#[rustfmt::skip]
const LASKAR_ARCSEC: [f64; 10] = [
    -4680.93, -1.55, 1999.25, -51.38, -249.67,
    -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// ε₀ at J2000.0: 23°26′21.448″ in arcseconds.
const EPS0_ARCSEC: f64 = 84_381.448;

/// Mean obliquity of the ecliptic at a Julian Day, degrees.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let u = julian_centuries(jd) / 100.0;
    // Horner from the highest power down.
    let poly = LASKAR_ARCSEC.iter().rev().fold(0.0, |acc, c| (acc + c) * u);
    (EPS0_ARCSEC + poly) / 3600.0
}

/// Ecliptic obliquity at a Julian Day.
///
/// With `is_true` the nutation in obliquity is added to the mean value.
pub fn ecliptic_obliquity_deg(jd: f64, is_true: bool) -> Result<f64, TimeError> {
    let mean = mean_obliquity_deg(jd);
    if is_true {
        Ok(mean + get_nutation(jd)?.obliquity_deg)
    } else {
        Ok(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tianwen_time::J2000_JD;

    #[test]
    fn j2000_value() {
        let e = mean_obliquity_deg(J2000_JD);
        assert!((e - 84_381.448 / 3600.0).abs() < 1e-12);
        assert!((e - OBLIQUITY_J2000_DEG).abs() < 1e-5);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε₀ = 23°26′27.407″, ε = 23°26′36.850″
        let jd = 2_446_895.5;
        let mean = mean_obliquity_deg(jd) * 3600.0 - 23.0 * 3600.0 - 26.0 * 60.0;
        assert!((mean - 27.407).abs() < 0.002, "ε₀ seconds = {mean}");
        let t = ecliptic_obliquity_deg(jd, true).unwrap() * 3600.0 - 23.0 * 3600.0 - 26.0 * 60.0;
        assert!((t - 36.850).abs() < 0.06, "ε seconds = {t}");
    }

    #[test]
    fn mean_variant_ignores_nutation() {
        let jd = 2_460_000.5;
        assert_eq!(ecliptic_obliquity_deg(jd, false).unwrap(), mean_obliquity_deg(jd));
    }

    #[test]
    fn decreasing_in_current_epoch() {
        assert!(mean_obliquity_deg(J2000_JD + 36_525.0) < mean_obliquity_deg(J2000_JD));
    }
}
