//! Nutation in longitude and obliquity.
//!
//! IAU 2000B lunisolar series (77 terms) evaluated through the shared
//! periodic-series kernel. Each row is `Σ (S + S'·T)·sin(arg)` for Δψ and
//! `Σ (C + C'·T)·cos(arg)` for Δε, which is exactly a two-order series in T.
//!
//! Source: IERS Conventions 2010, Chapter 5, Tables 5.2e and 5.3b.

use tianwen_time::{TimeError, julian_centuries, normalize_angle};

use crate::series::{Trig, evaluate_series};

/// One table unit (0.1 μas) in degrees.
const UNIT_DEG: f64 = 1e-7 / 3600.0;

/// Nutation pair, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude_deg: f64,
    /// Δε, nutation in obliquity.
    pub obliquity_deg: f64,
}

/// The five Delaunay arguments in degrees, each normalized into [0, 360].
///
/// `t` = Julian centuries since J2000.0. Returns `[l, l', F, D, Ω]`:
/// Moon mean anomaly, Sun mean anomaly, Moon argument of latitude,
/// Moon mean elongation, longitude of the Moon's ascending node.
pub fn fundamental_arguments_deg(t: f64) -> Result<[f64; 5], TimeError> {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = 134.963_402_51 + 477_198.867_560_5 * t + 0.008_855_333 * t2
        + 1.434_306e-5 * t3
        - 6.797_222e-8 * t4;
    let lp = 357.529_109_18 + 35_999.050_291_14 * t - 1.536_667e-4 * t2
        + 3.777_778e-8 * t3
        - 3.191_667e-9 * t4;
    let f = 93.272_090_62 + 483_202.017_457_7 * t - 0.003_542 * t2 - 2.880_556e-7 * t3
        + 1.158_333e-9 * t4;
    let d = 297.850_195_47 + 445_267.111_446_9 * t - 0.001_769_611 * t2
        + 1.831_389e-6 * t3
        - 8.802_778e-9 * t4;
    let om = 125.044_555_01 - 1_934.136_261_972 * t + 0.002_075_611 * t2
        + 2.139_444e-6 * t3
        - 1.649_722e-8 * t4;

    Ok([
        normalize_angle(l)?,
        normalize_angle(lp)?,
        normalize_angle(f)?,
        normalize_angle(d)?,
        normalize_angle(om)?,
    ])
}

/// IAU 2000B lunisolar coefficients.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S, S', C, C']`, amplitudes in 0.1 μas.
#[rustfmt::skip]
static NUTATION_COEFFS: [[i64; 9]; 77] = [
    //  nl  nl'  nF   nD   nΩ       S_i         S'_i         C_i         C'_i
    [   0,   0,   0,   0,   1, -172064161,  -174666,   92052331,    9086],
    [   0,   0,   2,  -2,   2,  -13170906,    -1675,    5730336,   -3015],
    [   0,   0,   2,   0,   2,   -2276413,     -234,     978459,    -485],
    [   0,   0,   0,   0,   2,    2074554,      207,    -897492,     470],
    [   0,   1,   0,   0,   0,    1475877,    -3633,      73871,    -184],
    [   0,   1,   2,  -2,   2,    -516821,     1226,     224386,    -677],
    [   1,   0,   0,   0,   0,     711159,       73,      -6750,       0],
    [   0,   0,   2,   0,   1,    -387298,     -367,     200728,      18],
    [   1,   0,   2,   0,   2,    -301461,      -36,     129025,     -63],
    [   0,  -1,   2,  -2,   2,     215829,     -494,     -95929,     299],
    [   0,   0,   2,  -2,   1,     128227,      137,     -68982,      -9],
    [  -1,   0,   2,   0,   2,     123457,       11,     -53311,      32],
    [  -1,   0,   0,   2,   0,     156994,       10,      -1235,       0],
    [   1,   0,   0,   0,   1,      63110,       63,     -33228,       0],
    [  -1,   0,   0,   0,   1,     -57976,      -63,      31429,       0],
    [  -1,   0,   2,   2,   2,     -59641,      -11,      25543,     -11],
    [   1,   0,   2,   0,   1,     -51613,      -42,      26366,       0],
    [  -2,   0,   2,   0,   1,      45893,       50,     -24236,     -10],
    [   0,   0,   0,   2,   0,      63384,       11,      -1220,       0],
    [   0,   0,   2,   2,   2,     -38571,       -1,      16452,     -11],
    [   0,  -2,   2,  -2,   2,      32481,        0,     -13870,       0],
    [  -2,   0,   0,   2,   0,     -47722,        0,        477,       0],
    [   2,   0,   2,   0,   2,     -31046,       -1,      13238,     -11],
    [   1,   0,   2,  -2,   2,      28593,        0,     -12338,      10],
    [  -1,   0,   2,   0,   1,      20441,       21,     -10758,       0],
    [   2,   0,   0,   0,   0,      29243,        0,       -609,       0],
    [   0,   0,   2,   0,   0,      25887,        0,       -550,       0],
    [   0,   1,   0,   0,   1,     -14053,      -25,       8551,      -2],
    [  -1,   0,   0,   2,   1,      15164,       10,      -8001,       0],
    [   0,   2,   2,  -2,   2,     -15794,       72,       6850,     -42],
    [   0,   0,  -2,   2,   0,      21783,        0,       -167,       0],
    [   1,   0,   0,  -2,   1,     -12873,      -10,       6953,       0],
    [   0,  -1,   0,   0,   1,     -12654,       11,       6415,       0],
    [  -1,   0,   2,   2,   1,     -10204,        0,       5222,       0],
    [   0,   2,   0,   0,   0,      16707,      -85,        168,      -1],
    [   1,   0,   2,   2,   2,      -7691,        0,       3268,       0],
    [  -2,   0,   2,   0,   0,     -11024,        0,        104,       0],
    [   0,   1,   2,   0,   2,       7566,      -21,      -3250,       0],
    [   0,   0,   2,   2,   1,      -6637,      -11,       3353,       0],
    [   0,  -1,   2,   0,   2,      -7141,       21,       3070,       0],
    [   0,   0,   0,   2,   1,      -6302,      -11,       3272,       0],
    [   1,   0,   2,  -2,   1,       5800,       10,      -3045,       0],
    [   2,   0,   2,  -2,   2,       6443,        0,      -2768,       0],
    [  -2,   0,   0,   2,   1,      -5774,      -11,       3041,       0],
    [   2,   0,   2,   0,   1,      -5350,        0,       2695,       0],
    [   0,  -1,   2,  -2,   1,      -4752,      -11,       2719,       0],
    [   0,   0,   0,  -2,   1,      -4940,      -11,       2720,       0],
    [  -1,  -1,   0,   2,   0,       7350,        0,        -51,       0],
    [   2,   0,   0,  -2,   1,      -4803,      -11,       2556,       0],
    [   1,   0,   0,   2,   0,      -7677,        0,        462,       0],
    [   0,   1,   2,  -2,   1,       5417,        0,      -2520,       0],
    [   1,  -1,   0,   0,   0,       6624,        0,       -468,       0],
    [  -2,   0,   2,   0,   2,      -5433,        0,       2334,       0],
    [   3,   0,   2,   0,   2,      -4632,        0,       1991,       0],
    [   0,  -1,   0,   2,   0,       6106,        0,       -167,       0],
    [   1,  -1,   2,   0,   2,      -3593,        0,       1556,       0],
    [   0,   0,   0,   1,   0,      -4766,        0,        270,       0],
    [  -1,  -1,   2,   2,   2,      -4095,        0,       1793,       0],
    [  -1,   0,   2,   0,   0,       4229,        0,       -101,       0],
    [   0,  -1,   2,   2,   2,      -3372,        0,       1487,       0],
    [   2,   0,   0,   0,   1,      -3353,        0,       1758,       0],
    [   1,   0,   2,   0,   0,      -3523,        0,        246,       0],
    [   1,   1,   0,   0,   0,      -3613,        0,        329,       0],
    [  -1,   0,   2,  -2,   1,       3522,        0,      -1830,       0],
    [   2,   0,   0,   0,  -1,       3312,        0,      -1730,       0],
    [   0,   0,  -2,   2,   1,      -3142,        0,       1704,       0],
    [   0,   1,   0,   0,  -1,      -2927,        0,       1564,       0],
    [   0,   1,   2,   0,   1,      -2887,        0,       1401,       0],
    [   0,  -1,   2,   0,   1,       2451,        0,      -1200,       0],
    [   2,   0,  -2,   0,   0,      -2790,        0,        410,       0],
    [  -1,   0,   0,   2,  -1,       2145,        0,      -1154,       0],
    [   0,   0,   2,  -2,   0,       2816,        0,        286,       0],
    [   0,   1,   0,  -2,   0,       2700,        0,       -258,       0],
    [   1,   0,   0,  -1,   0,      -2330,        0,        -37,       0],
    [   0,   0,   0,   0,   2,       2283,        0,      -1039,       0],
    [   1,   0,  -2,   0,   0,      -2321,        0,        284,       0],
    [  -1,   0,   0,   1,   1,      -2049,        0,       1112,       0],
];

/// Constant offsets approximating the IAU 2000A frame bias, in 0.1 μas.
const DPSI_OFFSET: f64 = -1_350.0;
const DEPS_OFFSET: f64 = -3_880.0;

fn argument_rad(row: &[i64; 9], args: &[f64; 5]) -> f64 {
    let deg: f64 = row[..5]
        .iter()
        .zip(args)
        .map(|(&n, a)| n as f64 * a)
        .sum();
    deg.to_radians()
}

/// Nutation at `t` Julian centuries since J2000.0.
pub fn nutation_at(t: f64) -> Result<Nutation, TimeError> {
    let args = fundamental_arguments_deg(t)?;
    let orders: [&[[i64; 9]]; 2] = [&NUTATION_COEFFS, &NUTATION_COEFFS];

    let dpsi = evaluate_series(&orders, t, Trig::Sin, |k, row| {
        (row[5 + k] as f64, argument_rad(row, &args))
    });
    let deps = evaluate_series(&orders, t, Trig::Cos, |k, row| {
        (row[7 + k] as f64, argument_rad(row, &args))
    });

    Ok(Nutation {
        longitude_deg: (dpsi + DPSI_OFFSET) * UNIT_DEG,
        obliquity_deg: (deps + DEPS_OFFSET) * UNIT_DEG,
    })
}

/// Nutation at a Julian Day.
pub fn get_nutation(jd: f64) -> Result<Nutation, TimeError> {
    nutation_at(julian_centuries(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = −3.788″, Δε = +9.443″
        let n = get_nutation(2_446_895.5).unwrap();
        let dpsi = n.longitude_deg * 3600.0;
        let deps = n.obliquity_deg * 3600.0;
        assert!((dpsi + 3.788).abs() < 0.05, "Δψ = {dpsi}″");
        assert!((deps - 9.443).abs() < 0.05, "Δε = {deps}″");
    }

    #[test]
    fn fundamental_arguments_in_range() {
        for &t in &[-30.0, -1.0, 0.0, 0.24, 10.0, 30.0] {
            for a in fundamental_arguments_deg(t).unwrap() {
                assert!((0.0..=360.0).contains(&a), "T={t}: {a}");
            }
        }
    }

    #[test]
    fn node_argument_at_meeus_epoch() {
        // Meeus example 22.a: Ω = 11.2531°
        let t = julian_centuries(2_446_895.5);
        let om = fundamental_arguments_deg(t).unwrap()[4];
        assert!((om - 11.2531).abs() < 1e-3, "Ω = {om}");
    }

    #[test]
    fn amplitude_bounded() {
        let mut t = -2.0;
        while t < 2.0 {
            let n = nutation_at(t).unwrap();
            assert!(n.longitude_deg.abs() * 3600.0 < 20.0);
            assert!(n.obliquity_deg.abs() * 3600.0 < 10.5);
            t += 0.013;
        }
    }

    #[test]
    fn dominant_period_is_node_cycle() {
        // Half a node cycle (~9.3 yr) flips the sign of the dominant term.
        let t1 = julian_centuries(2_446_895.5);
        let t2 = t1 + 18.6 / 100.0 / 2.0;
        let a = nutation_at(t1).unwrap().obliquity_deg;
        let b = nutation_at(t2).unwrap().obliquity_deg;
        assert!(a * b < 0.0, "expected sign flip: {a} vs {b}");
    }

    #[test]
    fn table_has_77_terms() {
        assert_eq!(NUTATION_COEFFS.len(), 77);
    }

    #[test]
    fn non_finite_time_is_rejected() {
        assert!(nutation_at(f64::NAN).is_err());
    }
}
