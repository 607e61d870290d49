//! Golden-section search for an apparent solar longitude crossing.

use tianwen_core::{Body, geocentric_position};
use tianwen_time::TimeError;

use crate::error::SearchError;
use crate::solar_term_types::{CrossingSearch, SolarTermConfig};

/// Longitudes above this are taken as negative when the target is 0°.
const WRAP_THRESHOLD_DEG: f64 = 345.0;

/// Apparent geocentric ecliptic longitude of the Sun, degrees in [0, 360).
pub fn sun_apparent_longitude_deg(jd: f64) -> Result<f64, TimeError> {
    Ok(geocentric_position(Body::Sun, jd, true)?.ecliptic.lon_deg)
}

/// Shrink `[l_jd, r_jd]` around the instant the Sun's apparent longitude
/// reaches `target_deg`.
///
/// Each candidate sits at `l + ratio·(r − l)`. Longitude above the target
/// moves the right edge in, otherwise the left edge. Stops when the bracket
/// is narrower than `config.convergence_days`; the result is the midpoint
/// of the last bracket, without the fixed correction.
///
/// The crossing must lie inside the bracket and the longitude must increase
/// monotonically across it; callers verify the converged longitude.
pub fn golden_section_crossing(
    target_deg: f64,
    l_jd: f64,
    r_jd: f64,
    config: &SolarTermConfig,
) -> Result<CrossingSearch, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !target_deg.is_finite() || !(0.0..360.0).contains(&target_deg) {
        return Err(SearchError::InvalidConfig("target must be within [0, 360)"));
    }
    if !l_jd.is_finite() || !r_jd.is_finite() || l_jd >= r_jd {
        return Err(SearchError::InvalidConfig("bracket must satisfy l_jd < r_jd"));
    }

    let comparable = |lon: f64| {
        if target_deg == 0.0 && lon > WRAP_THRESHOLD_DEG {
            lon - 360.0
        } else {
            lon
        }
    };

    let (mut l, mut r) = (l_jd, r_jd);
    let mut iterations = 0;
    while r - l >= config.convergence_days {
        if iterations >= config.max_iterations {
            return Err(SearchError::NoConvergence(
                "solar longitude bracket did not shrink within max_iterations",
            ));
        }
        let candidate = l + config.golden_ratio * (r - l);
        let lon = comparable(sun_apparent_longitude_deg(candidate)?);
        if lon > target_deg {
            r = candidate;
        } else {
            l = candidate;
        }
        iterations += 1;
    }

    let jd = 0.5 * (l + r);
    Ok(CrossingSearch {
        jd,
        iterations,
        longitude_deg: sun_apparent_longitude_deg(jd)?,
    })
}

/// Signed difference `lon − target` in (−180, 180].
pub(crate) fn longitude_offset_deg(lon: f64, target: f64) -> f64 {
    let d = (lon - target).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tianwen_time::calendar_to_jd;

    #[test]
    fn spring_equinox_2000_converges() {
        let c = SolarTermConfig::default();
        let s = golden_section_crossing(
            0.0,
            calendar_to_jd(2000, 3, 18.0),
            calendar_to_jd(2000, 3, 25.0),
            &c,
        )
        .unwrap();
        assert!(s.iterations <= 40, "{} iterations", s.iterations);
        assert!(longitude_offset_deg(s.longitude_deg, 0.0).abs() < 1e-4, "λ = {}", s.longitude_deg);
    }

    #[test]
    fn summer_solstice_converges() {
        let c = SolarTermConfig::default();
        let s = golden_section_crossing(
            90.0,
            calendar_to_jd(2024, 6, 19.0),
            calendar_to_jd(2024, 6, 26.0),
            &c,
        )
        .unwrap();
        assert!((s.longitude_deg - 90.0).abs() < 1e-4);
    }

    #[test]
    fn rejects_reversed_bracket() {
        let c = SolarTermConfig::default();
        assert!(matches!(
            golden_section_crossing(0.0, 10.0, 5.0, &c),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn iteration_budget_is_enforced() {
        let c = SolarTermConfig {
            max_iterations: 3,
            ..Default::default()
        };
        let r = golden_section_crossing(
            0.0,
            calendar_to_jd(2000, 3, 18.0),
            calendar_to_jd(2000, 3, 25.0),
            &c,
        );
        assert!(matches!(r, Err(SearchError::NoConvergence(_))));
    }

    #[test]
    fn offset_wraps() {
        assert!((longitude_offset_deg(359.9, 0.0) + 0.1).abs() < 1e-9);
        assert!((longitude_offset_deg(0.1, 0.0) - 0.1).abs() < 1e-9);
        assert!((longitude_offset_deg(100.0, 90.0) - 10.0).abs() < 1e-9);
    }
}
