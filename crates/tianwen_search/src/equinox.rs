//! Closed-form equinox and solstice instants.
//!
//! Meeus, _Astronomical Algorithms_, chapter 27: a quartic in millennia gives
//! the mean instant, refined by a 24-term periodic correction.

use tianwen_frames::{Trig, evaluate_series};
use tianwen_time::{DAYS_PER_CENTURY, J2000_JD};

use crate::error::SearchError;
use crate::solar_term_types::Season;

/// Quartic coefficients for years −1000..1000, Y = year / 1000 (table 27.A).
const MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1_721_139.291_89, 365_242.137_40, 0.061_34, 0.001_11, -0.000_71],
    [1_721_233.254_01, 365_241.725_62, -0.053_23, 0.009_07, 0.000_25],
    [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97, 0.000_74],
    [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
];

/// Quartic coefficients for years 1000..3000, Y = (year − 2000) / 1000 (table 27.B).
const MEAN_AFTER_1000: [[f64; 5]; 4] = [
    [2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03, 0.003_25, 0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75, 0.003_37, 0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23, 0.000_32],
];

/// Periodic correction terms `A cos(B + C·T)`, B in degrees, C in degrees
/// per Julian century (table 27.C).
#[rustfmt::skip]
static CORRECTION: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1_934.136),
    (203.0, 337.23, 32_964.467),
    (199.0, 342.08, 20.186),
    (182.0, 27.85, 445_267.112),
    (156.0, 73.14, 45_036.886),
    (136.0, 171.52, 22_518.443),
    (77.0, 222.54, 65_928.934),
    (74.0, 296.72, 3_034.906),
    (70.0, 243.58, 9_037.513),
    (58.0, 119.81, 33_718.147),
    (52.0, 297.17, 150.678),
    (50.0, 21.02, 2_281.226),
    (45.0, 247.54, 29_929.562),
    (44.0, 325.15, 31_555.956),
    (29.0, 60.93, 4_443.417),
    (18.0, 155.12, 67_555.328),
    (17.0, 288.79, 4_562.452),
    (16.0, 198.04, 62_894.029),
    (14.0, 199.76, 31_436.921),
    (12.0, 95.39, 14_577.848),
    (12.0, 287.11, 31_931.756),
    (12.0, 320.81, 34_777.259),
    (9.0, 227.73, 1_222.114),
    (8.0, 15.45, 16_859.074),
];

static CORRECTION_ORDERS: [&[(f64, f64, f64)]; 1] = [&CORRECTION];

fn season_index(season: Season) -> usize {
    match season {
        Season::MarchEquinox => 0,
        Season::JuneSolstice => 1,
        Season::SeptemberEquinox => 2,
        Season::DecemberSolstice => 3,
    }
}

/// Mean instant (JDE₀) before the periodic correction.
pub fn mean_equinox_solstice_jde(year: i32, season: Season) -> Result<f64, SearchError> {
    if !(-1000..=3000).contains(&year) {
        return Err(SearchError::YearOutOfRange(year));
    }
    let (c, y) = if year < 1000 {
        (&MEAN_BEFORE_1000[season_index(season)], year as f64 / 1000.0)
    } else {
        (
            &MEAN_AFTER_1000[season_index(season)],
            (year - 2000) as f64 / 1000.0,
        )
    };
    Ok(c[0] + y * (c[1] + y * (c[2] + y * (c[3] + y * c[4]))))
}

/// Instant of an equinox or solstice, Julian Ephemeris Day.
///
/// JDE = JDE₀ + 0.00001·S / Δλ, with S the periodic sum and
/// Δλ = 1 + 0.0334 cos W + 0.0007 cos 2W.
pub fn equinox_solstice_jde(year: i32, season: Season) -> Result<f64, SearchError> {
    let jde0 = mean_equinox_solstice_jde(year, season)?;
    let t = (jde0 - J2000_JD) / DAYS_PER_CENTURY;
    let w = (35_999.373 * t - 2.47).to_radians();
    let dl = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    let s = evaluate_series(&CORRECTION_ORDERS, t, Trig::Cos, |_, &(a, b, c)| {
        (a, (b + c * t).to_radians())
    });
    Ok(jde0 + 0.000_01 * s / dl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_27a() {
        // 1962 June solstice: JDE₀ = 2437837.38589, JDE = 2437837.39245
        let jde0 = mean_equinox_solstice_jde(1962, Season::JuneSolstice).unwrap();
        assert!((jde0 - 2_437_837.385_89).abs() < 1e-5, "JDE₀ = {jde0}");
        let jde = equinox_solstice_jde(1962, Season::JuneSolstice).unwrap();
        assert!((jde - 2_437_837.392_45).abs() < 1e-4, "JDE = {jde}");
    }

    #[test]
    fn early_table_is_continuous_at_1000() {
        // Both tables are valid around 1000; they agree to a few minutes.
        let a = mean_equinox_solstice_jde(999, Season::MarchEquinox).unwrap();
        let b = mean_equinox_solstice_jde(1000, Season::MarchEquinox).unwrap();
        assert!((b - a - 365.24).abs() < 0.01, "step {}", b - a);
    }

    #[test]
    fn seasons_in_order() {
        for year in [-500, 0, 1582, 2000, 2999] {
            let jds: Vec<f64> = Season::ALL
                .iter()
                .map(|s| equinox_solstice_jde(year, *s).unwrap())
                .collect();
            assert!(jds.windows(2).all(|w| w[1] > w[0] + 85.0), "{year}: {jds:?}");
        }
    }

    #[test]
    fn out_of_range_year() {
        assert_eq!(
            equinox_solstice_jde(3001, Season::MarchEquinox),
            Err(SearchError::YearOutOfRange(3001))
        );
        assert!(equinox_solstice_jde(-1001, Season::JuneSolstice).is_err());
    }
}
