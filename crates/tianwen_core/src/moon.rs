//! Geocentric lunar theory.
//!
//! Truncated ELP-2000/82 as given in Meeus, _Astronomical Algorithms_,
//! chapter 47 (tables 47.A and 47.B). Arguments are in degrees, coefficients
//! in 10⁻⁶ degree (longitude, latitude) and 10⁻³ km (distance).

use tianwen_frames::{
    SphericalCoords, Trig, evaluate_series, rectangular_to_spherical, spherical_to_rectangular,
    vector_add,
};
use tianwen_time::{TimeError, julian_centuries, normalize_angle};

use crate::body::{Body, CelestialBody};
use crate::vsop87::EARTH;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Mean Earth–Moon distance term of the distance series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Multipliers of D, M, M′, F and the longitude/distance coefficients.
#[derive(Debug, Clone, Copy)]
struct LonDistTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sigma_l: f64,
    sigma_r: f64,
}

/// Multipliers of D, M, M′, F and the latitude coefficient.
#[derive(Debug, Clone, Copy)]
struct LatTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sigma_b: f64,
}

const fn lr(d: i8, m: i8, mp: i8, f: i8, sigma_l: f64, sigma_r: f64) -> LonDistTerm {
    LonDistTerm {
        d,
        m,
        mp,
        f,
        sigma_l,
        sigma_r,
    }
}

const fn b(d: i8, m: i8, mp: i8, f: i8, sigma_b: f64) -> LatTerm {
    LatTerm {
        d,
        m,
        mp,
        f,
        sigma_b,
    }
}

#[rustfmt::skip]
static LON_DIST: [LonDistTerm; 60] = [
    lr(0, 0, 1, 0, 6_288_774.0, -20_905_355.0),
    lr(2, 0, -1, 0, 1_274_027.0, -3_699_111.0),
    lr(2, 0, 0, 0, 658_314.0, -2_955_968.0),
    lr(0, 0, 2, 0, 213_618.0, -569_925.0),
    lr(0, 1, 0, 0, -185_116.0, 48_888.0),
    lr(0, 0, 0, 2, -114_332.0, -3_149.0),
    lr(2, 0, -2, 0, 58_793.0, 246_158.0),
    lr(2, -1, -1, 0, 57_066.0, -152_138.0),
    lr(2, 0, 1, 0, 53_322.0, -170_733.0),
    lr(2, -1, 0, 0, 45_758.0, -204_586.0),
    lr(0, 1, -1, 0, -40_923.0, -129_620.0),
    lr(1, 0, 0, 0, -34_720.0, 108_743.0),
    lr(0, 1, 1, 0, -30_383.0, 104_755.0),
    lr(2, 0, 0, -2, 15_327.0, 10_321.0),
    lr(0, 0, 1, 2, -12_528.0, 0.0),
    lr(0, 0, 1, -2, 10_980.0, 79_661.0),
    lr(4, 0, -1, 0, 10_675.0, -34_782.0),
    lr(0, 0, 3, 0, 10_034.0, -23_210.0),
    lr(4, 0, -2, 0, 8_548.0, -21_636.0),
    lr(2, 1, -1, 0, -7_888.0, 24_208.0),
    lr(2, 1, 0, 0, -6_766.0, 30_824.0),
    lr(1, 0, -1, 0, -5_163.0, -8_379.0),
    lr(1, 1, 0, 0, 4_987.0, -16_675.0),
    lr(2, -1, 1, 0, 4_036.0, -12_831.0),
    lr(2, 0, 2, 0, 3_994.0, -10_445.0),
    lr(4, 0, 0, 0, 3_861.0, -11_650.0),
    lr(2, 0, -3, 0, 3_665.0, 14_403.0),
    lr(0, 1, -2, 0, -2_689.0, -7_003.0),
    lr(2, 0, -1, 2, -2_602.0, 0.0),
    lr(2, -1, -2, 0, 2_390.0, 10_056.0),
    lr(1, 0, 1, 0, -2_348.0, 6_322.0),
    lr(2, -2, 0, 0, 2_236.0, -9_884.0),
    lr(0, 1, 2, 0, -2_120.0, 5_751.0),
    lr(0, 2, 0, 0, -2_069.0, 0.0),
    lr(2, -2, -1, 0, 2_048.0, -4_950.0),
    lr(2, 0, 1, -2, -1_773.0, 4_130.0),
    lr(2, 0, 0, 2, -1_595.0, 0.0),
    lr(4, -1, -1, 0, 1_215.0, -3_958.0),
    lr(0, 0, 2, 2, -1_110.0, 0.0),
    lr(3, 0, -1, 0, -892.0, 3_258.0),
    lr(2, 1, 1, 0, -810.0, 2_616.0),
    lr(4, -1, -2, 0, 759.0, -1_897.0),
    lr(0, 2, -1, 0, -713.0, -2_117.0),
    lr(2, 2, -1, 0, -700.0, 2_354.0),
    lr(2, 1, -2, 0, 691.0, 0.0),
    lr(2, -1, 0, -2, 596.0, 0.0),
    lr(4, 0, 1, 0, 549.0, -1_423.0),
    lr(0, 0, 4, 0, 537.0, -1_117.0),
    lr(4, -1, 0, 0, 520.0, -1_571.0),
    lr(1, 0, -2, 0, -487.0, -1_739.0),
    lr(2, 1, 0, -2, -399.0, 0.0),
    lr(0, 0, 2, -2, -381.0, -4_421.0),
    lr(1, 1, 1, 0, 351.0, 0.0),
    lr(3, 0, -2, 0, -340.0, 0.0),
    lr(4, 0, -3, 0, 330.0, 0.0),
    lr(2, -1, 2, 0, 327.0, 0.0),
    lr(0, 2, 1, 0, -323.0, 1_165.0),
    lr(1, 1, -1, 0, 299.0, 0.0),
    lr(2, 0, 3, 0, 294.0, 0.0),
    lr(2, 0, -1, -2, 0.0, 8_752.0),
];

#[rustfmt::skip]
static LAT: [LatTerm; 60] = [
    b(0, 0, 0, 1, 5_128_122.0),
    b(0, 0, 1, 1, 280_602.0),
    b(0, 0, 1, -1, 277_693.0),
    b(2, 0, 0, -1, 173_237.0),
    b(2, 0, -1, 1, 55_413.0),
    b(2, 0, -1, -1, 46_271.0),
    b(2, 0, 0, 1, 32_573.0),
    b(0, 0, 2, 1, 17_198.0),
    b(2, 0, 1, -1, 9_266.0),
    b(0, 0, 2, -1, 8_822.0),
    b(2, -1, 0, -1, 8_216.0),
    b(2, 0, -2, -1, 4_324.0),
    b(2, 0, 1, 1, 4_200.0),
    b(2, 1, 0, -1, -3_359.0),
    b(2, -1, -1, 1, 2_463.0),
    b(2, -1, 0, 1, 2_211.0),
    b(2, -1, -1, -1, 2_065.0),
    b(0, 1, -1, -1, -1_870.0),
    b(4, 0, -1, -1, 1_828.0),
    b(0, 1, 0, 1, -1_794.0),
    b(0, 0, 0, 3, -1_749.0),
    b(0, 1, -1, 1, -1_565.0),
    b(1, 0, 0, 1, -1_491.0),
    b(0, 1, 1, 1, -1_475.0),
    b(0, 1, 1, -1, -1_410.0),
    b(0, 1, 0, -1, -1_344.0),
    b(1, 0, 0, -1, -1_335.0),
    b(0, 0, 3, 1, 1_107.0),
    b(4, 0, 0, -1, 1_021.0),
    b(4, 0, -1, 1, 833.0),
    b(0, 0, 1, -3, 777.0),
    b(4, 0, -2, 1, 671.0),
    b(2, 0, 0, -3, 607.0),
    b(2, 0, 2, -1, 596.0),
    b(2, -1, 1, -1, 491.0),
    b(2, 0, -2, 1, -451.0),
    b(0, 0, 3, -1, 439.0),
    b(2, 0, 2, 1, 422.0),
    b(2, 0, -3, -1, 421.0),
    b(2, 1, -1, 1, -366.0),
    b(2, 1, 0, 1, -351.0),
    b(4, 0, 0, 1, 331.0),
    b(2, -1, 1, 1, 315.0),
    b(2, -2, 0, -1, 302.0),
    b(0, 0, 1, 3, -283.0),
    b(2, 1, 1, -1, -229.0),
    b(1, 1, 0, -1, 223.0),
    b(1, 1, 0, 1, 223.0),
    b(0, 1, -2, -1, -220.0),
    b(2, 1, -1, -1, -220.0),
    b(1, 0, 1, 1, -185.0),
    b(2, -1, -2, -1, 181.0),
    b(0, 1, 2, 1, -177.0),
    b(4, 0, -2, -1, 176.0),
    b(4, -1, -1, -1, 166.0),
    b(1, 0, 1, -1, -164.0),
    b(4, 0, 1, -1, 132.0),
    b(1, 0, -1, -1, -119.0),
    b(4, -1, 0, -1, 115.0),
    b(2, -2, 0, 1, 107.0),
];

static LON_DIST_ORDERS: [&[LonDistTerm]; 1] = [&LON_DIST];
static LAT_ORDERS: [&[LatTerm]; 1] = [&LAT];

/// Mean arguments of the lunar theory, degrees, each in [0, 360].
#[derive(Debug, Clone, Copy)]
struct LunarArguments {
    /// Mean longitude L′.
    mean_longitude: f64,
    /// Mean elongation D.
    elongation: f64,
    /// Sun's mean anomaly M.
    sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    moon_anomaly: f64,
    /// Argument of latitude F.
    latitude_arg: f64,
    /// Eccentricity factor applied once per unit of |M|.
    e: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Result<Self, TimeError> {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Ok(Self {
            mean_longitude: normalize_angle(
                218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                    - t4 / 65_194_000.0,
            )?,
            elongation: normalize_angle(
                297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                    - t4 / 113_065_000.0,
            )?,
            sun_anomaly: normalize_angle(
                357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            )?,
            moon_anomaly: normalize_angle(
                134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                    - t4 / 14_712_000.0,
            )?,
            latitude_arg: normalize_angle(
                93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                    + t4 / 863_310_000.0,
            )?,
            e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        })
    }

    fn argument_rad(&self, d: i8, m: i8, mp: i8, f: i8) -> f64 {
        (d as f64 * self.elongation
            + m as f64 * self.sun_anomaly
            + mp as f64 * self.moon_anomaly
            + f as f64 * self.latitude_arg)
            .to_radians()
    }

    fn eccentricity_factor(&self, m: i8) -> f64 {
        match m.unsigned_abs() {
            0 => 1.0,
            1 => self.e,
            _ => self.e * self.e,
        }
    }
}

/// Geocentric ecliptic position of the Moon (mean equinox of date).
///
/// Longitude and latitude in degrees, distance in AU.
pub fn moon_geocentric(jd: f64) -> Result<SphericalCoords, TimeError> {
    let t = julian_centuries(jd);
    let a = LunarArguments::at(t)?;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let lp = a.mean_longitude.to_radians();
    let mp = a.moon_anomaly.to_radians();
    let f = a.latitude_arg.to_radians();

    let sigma_l = evaluate_series(&LON_DIST_ORDERS, t, Trig::Sin, |_, r| {
        (
            r.sigma_l * a.eccentricity_factor(r.m),
            a.argument_rad(r.d, r.m, r.mp, r.f),
        )
    }) + 3958.0 * a1.sin()
        + 1962.0 * (lp - f).sin()
        + 318.0 * a2.sin();

    let sigma_r = evaluate_series(&LON_DIST_ORDERS, t, Trig::Cos, |_, r| {
        (
            r.sigma_r * a.eccentricity_factor(r.m),
            a.argument_rad(r.d, r.m, r.mp, r.f),
        )
    });

    let sigma_b = evaluate_series(&LAT_ORDERS, t, Trig::Sin, |_, r| {
        (
            r.sigma_b * a.eccentricity_factor(r.m),
            a.argument_rad(r.d, r.m, r.mp, r.f),
        )
    }) - 2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    let lon = normalize_angle(a.mean_longitude + sigma_l / 1e6)?;
    Ok(SphericalCoords {
        lon_deg: if lon >= 360.0 { 0.0 } else { lon },
        lat_deg: sigma_b / 1e6,
        distance_au: (MEAN_DISTANCE_KM + sigma_r / 1000.0) / KM_PER_AU,
    })
}

/// The Moon as a [`CelestialBody`].
///
/// The theory is geocentric; the heliocentric position adds Earth's
/// heliocentric vector at the same instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunarTheory;

impl CelestialBody for LunarTheory {
    fn body(&self) -> Body {
        Body::Moon
    }

    fn heliocentric_position(&self, jd: f64) -> Result<SphericalCoords, TimeError> {
        let geo = spherical_to_rectangular(&moon_geocentric(jd)?);
        let earth = spherical_to_rectangular(&EARTH.evaluate(jd)?);
        Ok(rectangular_to_spherical(&vector_add(&earth, &geo)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD_1992_APR_12: f64 = 2_448_724.5;

    #[test]
    fn meeus_example_47a() {
        let p = moon_geocentric(JD_1992_APR_12).unwrap();
        assert!((p.lon_deg - 133.162_655).abs() < 1e-5, "λ = {}", p.lon_deg);
        assert!((p.lat_deg + 3.229_126).abs() < 1e-5, "β = {}", p.lat_deg);
        let km = p.distance_au * KM_PER_AU;
        assert!((km - 368_409.7).abs() < 0.5, "Δ = {km}");
    }

    #[test]
    fn mean_arguments_example_47a() {
        let a = LunarArguments::at(julian_centuries(JD_1992_APR_12)).unwrap();
        assert!((a.mean_longitude - 134.290_182).abs() < 1e-5);
        assert!((a.elongation - 113.842_304).abs() < 1e-5);
        assert!((a.sun_anomaly - 97.643_514).abs() < 1e-5);
        assert!((a.moon_anomaly - 5.150_833).abs() < 1e-5);
        assert!((a.latitude_arg - 219.889_721).abs() < 1e-5);
        assert!((a.e - 1.000_194).abs() < 1e-6);
    }

    #[test]
    fn distance_stays_in_orbit_range() {
        let mut jd = 2_451_545.0;
        for _ in 0..120 {
            let km = moon_geocentric(jd).unwrap().distance_au * KM_PER_AU;
            assert!((356_000.0..407_000.0).contains(&km), "Δ = {km} at {jd}");
            jd += 3.3;
        }
    }

    #[test]
    fn heliocentric_moon_is_near_earth() {
        let moon = LunarTheory.heliocentric_position(JD_1992_APR_12).unwrap();
        let earth = EARTH.evaluate(JD_1992_APR_12).unwrap();
        assert!((moon.distance_au - earth.distance_au).abs() < 0.003);
    }
}
