//! Horizon crossings and rise/transit/set times.
//!
//! The crossing hour angle comes from the closed form
//! `cos H = (sin h₀ − sin φ·sin δ) / (cos φ·cos δ)` with the body's
//! equatorial position held fixed over the day. Each hour angle gives a local
//! sidereal time that is mapped back to zone time of day on the requested
//! civil date.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use tianwen_frames::EquatorialCoord;
use tianwen_time::{
    TimeError, acos_clamped, naive_utc_to_jd, normalize_angle, sidereal_to_zone_hours,
};

use crate::error::HorizonError;
use crate::observer::Observer;

/// Outcome of solving for the two crossings of a target elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonCrossing {
    /// Zone time of day in hours, [0, 24), of the ascending and descending
    /// crossings.
    Crossing {
        rising_hours: f64,
        setting_hours: f64,
    },
    /// The body stays below the target elevation all day.
    NeverRises,
    /// The body stays above the target elevation all day.
    NeverSets,
}

impl HorizonCrossing {
    /// `(rising, setting)` hours, or the `(0, 0)` sentinel when the target
    /// elevation is never reached.
    pub fn as_pair(&self) -> (f64, f64) {
        match *self {
            Self::Crossing {
                rising_hours,
                setting_hours,
            } => (rising_hours, setting_hours),
            Self::NeverRises | Self::NeverSets => (0.0, 0.0),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !matches!(self, Self::Crossing { .. })
    }
}

/// Rise, transit and set on one civil date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseTransitSet {
    /// Zone time of day in hours, [0, 24).
    Events {
        rise_hours: f64,
        transit_hours: f64,
        set_hours: f64,
    },
    NeverRises,
    NeverSets,
}

impl RiseTransitSet {
    pub fn rise(&self) -> Option<f64> {
        match *self {
            Self::Events { rise_hours, .. } => Some(rise_hours),
            _ => None,
        }
    }

    pub fn transit(&self) -> Option<f64> {
        match *self {
            Self::Events { transit_hours, .. } => Some(transit_hours),
            _ => None,
        }
    }

    pub fn set(&self) -> Option<f64> {
        match *self {
            Self::Events { set_hours, .. } => Some(set_hours),
            _ => None,
        }
    }
}

impl From<HorizonCrossing> for RiseTransitSet {
    fn from(c: HorizonCrossing) -> Self {
        match c {
            HorizonCrossing::Crossing {
                rising_hours,
                setting_hours,
            } => Self::Events {
                rise_hours: rising_hours,
                transit_hours: transit_between(rising_hours, setting_hours),
                set_hours: setting_hours,
            },
            HorizonCrossing::NeverRises => Self::NeverRises,
            HorizonCrossing::NeverSets => Self::NeverSets,
        }
    }
}

/// Midpoint of rise and set, shifted by 12 h when the pair straddles local
/// midnight (rise later in the day than set).
fn transit_between(rise: f64, set: f64) -> f64 {
    let mid = 0.5 * (rise + set);
    if rise > set {
        if mid > 12.0 { mid - 12.0 } else { mid + 12.0 }
    } else {
        mid
    }
}

/// Zone time of day for a fractional hour value in [0, 24).
///
/// Rounded to the nearest second; 24:00 after rounding wraps to 00:00.
pub fn hours_to_time(hours: f64) -> Option<NaiveTime> {
    if !hours.is_finite() {
        return None;
    }
    let secs = (hours.rem_euclid(24.0) * 3600.0).round() as i64;
    Some(NaiveTime::MIN.overflowing_add_signed(TimeDelta::seconds(secs)).0)
}

/// Solve for the two zone times at which a fixed equatorial position reaches
/// `target_elevation_deg` on `date` (the observer's civil date).
pub fn elevation_to_time(
    eq: &EquatorialCoord,
    target_elevation_deg: f64,
    observer: &Observer,
    date: NaiveDate,
) -> Result<HorizonCrossing, HorizonError> {
    observer.validate()?;
    let sh = target_elevation_deg.to_radians().sin();
    let (sp, cp) = observer.latitude_deg.to_radians().sin_cos();
    let (sd, cd) = eq.dec_deg.to_radians().sin_cos();

    // Infinite at a pole; NaN only for a grazing pole crossing.
    let cos_h = (sh - sp * sd) / (cp * cd);
    if cos_h.is_nan() || cos_h > 1.0 {
        return Ok(HorizonCrossing::NeverRises);
    }
    if cos_h < -1.0 {
        return Ok(HorizonCrossing::NeverSets);
    }
    let h = acos_clamped(cos_h).to_degrees();

    // Anchor at local midnight of `date` so every crossing falls on that
    // civil day; the offset in force at 12h UT holds for the whole day.
    let utc_midnight = naive_utc_to_jd(&date.and_time(NaiveTime::MIN));
    let offset = observer.utc_offset_hours(utc_midnight + 0.5)?;
    let local_midnight = utc_midnight - offset / 24.0;
    let to_zone = |hour_angle: f64| -> Result<f64, TimeError> {
        let lst = normalize_angle(hour_angle + eq.ra_deg)?;
        sidereal_to_zone_hours(lst, observer.longitude_deg, local_midnight, 0.0)
    };

    Ok(HorizonCrossing::Crossing {
        rising_hours: to_zone(360.0 - h)?,
        setting_hours: to_zone(h)?,
    })
}

/// Rise, transit and set of a fixed equatorial position on `date`.
pub fn rise_transit_set(
    eq: &EquatorialCoord,
    target_elevation_deg: f64,
    observer: &Observer,
    date: NaiveDate,
) -> Result<RiseTransitSet, HorizonError> {
    Ok(elevation_to_time(eq, target_elevation_deg, observer, date)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tianwen_time::{SOLAR_PER_SIDEREAL, Zone};

    fn boston() -> Observer {
        Observer::new(42.3333, -71.0833, Zone::utc()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sentinel_pair() {
        assert_eq!(HorizonCrossing::NeverRises.as_pair(), (0.0, 0.0));
        assert_eq!(HorizonCrossing::NeverSets.as_pair(), (0.0, 0.0));
        assert!(HorizonCrossing::NeverSets.is_degenerate());
    }

    #[test]
    fn transit_midpoint_without_wrap() {
        assert!((transit_between(6.0, 18.0) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn transit_midpoint_wraps_over_midnight() {
        // Rise 12.4h, set 2.9h (next morning): transit 19.65h.
        assert!((transit_between(12.4, 2.9) - 19.65).abs() < 1e-12);
        // Rise 22h, set 10h: naive mid 16 → 4h.
        assert!((transit_between(22.0, 10.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn venus_boston_example_15a() {
        // Meeus 15.a, 1988 March 20: α = 41.73129°, δ = 18.44092°.
        // Rise 12h25m, transit 19h41m, set 2h55m UT.
        let eq = EquatorialCoord::new(41.731_29, 18.440_92);
        let rts = rise_transit_set(&eq, -0.5667, &boston(), date(1988, 3, 20)).unwrap();
        let (rise, transit, set) = (rts.rise().unwrap(), rts.transit().unwrap(), rts.set().unwrap());
        assert!((rise - 12.417).abs() < 5.0 / 60.0, "rise {rise}");
        assert!((transit - 19.683).abs() < 5.0 / 60.0, "transit {transit}");
        assert!((set - 2.917).abs() < 5.0 / 60.0, "set {set}");
    }

    #[test]
    fn polar_day_never_sets() {
        let o = Observer::new(80.0, 15.0, Zone::utc()).unwrap();
        let sun = EquatorialCoord::new(90.0, 23.44);
        let c = elevation_to_time(&sun, -0.5667, &o, date(2024, 6, 21)).unwrap();
        assert_eq!(c, HorizonCrossing::NeverSets);
        assert_eq!(c.as_pair(), (0.0, 0.0));
    }

    #[test]
    fn polar_night_never_rises() {
        let o = Observer::new(80.0, 15.0, Zone::utc()).unwrap();
        let sun = EquatorialCoord::new(270.0, -23.44);
        let c = rise_transit_set(&sun, -0.5667, &o, date(2024, 12, 21)).unwrap();
        assert_eq!(c, RiseTransitSet::NeverRises);
        assert_eq!(c.rise(), None);
    }

    #[test]
    fn observer_at_pole() {
        let o = Observer::new(90.0, 0.0, Zone::utc()).unwrap();
        let up = EquatorialCoord::new(0.0, 10.0);
        let down = EquatorialCoord::new(0.0, -10.0);
        let d = date(2024, 6, 21);
        assert_eq!(elevation_to_time(&up, -0.5667, &o, d).unwrap(), HorizonCrossing::NeverSets);
        assert_eq!(elevation_to_time(&down, -0.5667, &o, d).unwrap(), HorizonCrossing::NeverRises);
    }

    #[test]
    fn zone_offset_shifts_times() {
        let eq = EquatorialCoord::new(41.731_29, 18.440_92);
        let utc = elevation_to_time(&eq, -0.5667, &boston(), date(1988, 3, 20)).unwrap();
        let est = Observer::new(42.3333, -71.0833, "-05:00".parse().unwrap()).unwrap();
        let local = elevation_to_time(&eq, -0.5667, &est, date(1988, 3, 20)).unwrap();
        let (r0, s0) = utc.as_pair();
        let (r1, s1) = local.as_pair();
        // Rise 12:25 UT is 07:25 EST on the same day.
        assert!((r1 - (r0 - 5.0)).abs() < 1e-6, "rise {r1}");
        // Set 02:55 UT belongs to March 19 EST; the March 20 set is one
        // sidereal day later.
        assert!((s1 - (s0 + 24.0 * SOLAR_PER_SIDEREAL - 5.0)).abs() < 1e-6, "set {s1}");
    }

    #[test]
    fn far_east_zone_events_fall_on_local_date() {
        // Kiritimati, UTC+14: 2024-03-20 00:00 local is 2024-03-19 10:00 UT.
        let eq = EquatorialCoord::new(120.0, 10.0);
        let line = Observer::new(1.87, -157.4, "+14:00".parse().unwrap()).unwrap();
        let gmt = Observer::new(1.87, -157.4, Zone::utc()).unwrap();
        let local_midnight = naive_utc_to_jd(&date(2024, 3, 19).and_hms_opt(10, 0, 0).unwrap());
        let (r, s) = elevation_to_time(&eq, -0.5667, &line, date(2024, 3, 20)).unwrap().as_pair();

        let mut ut_events = Vec::new();
        for d in [date(2024, 3, 19), date(2024, 3, 20)] {
            let midnight = naive_utc_to_jd(&d.and_time(NaiveTime::MIN));
            let (ru, su) = elevation_to_time(&eq, -0.5667, &gmt, d).unwrap().as_pair();
            ut_events.extend([midnight + ru / 24.0, midnight + su / 24.0]);
        }
        for hours in [r, s] {
            assert!((0.0..24.0).contains(&hours));
            let instant = local_midnight + hours / 24.0;
            assert!(
                ut_events.iter().any(|jd| (jd - instant).abs() < 1e-6),
                "no UT event at {instant}"
            );
        }
    }

    #[test]
    fn equator_day_is_about_twelve_hours() {
        let o = Observer::new(0.0, 0.0, Zone::utc()).unwrap();
        let eq = EquatorialCoord::new(0.0, 0.0);
        let (r, s) = elevation_to_time(&eq, 0.0, &o, date(2024, 3, 20)).unwrap().as_pair();
        let up = (s - r).rem_euclid(24.0);
        // 12 sidereal hours ≈ 11.967 solar hours
        assert!((up - 11.967).abs() < 0.01, "up {up}");
    }

    #[test]
    fn hours_to_time_rounds() {
        assert_eq!(hours_to_time(6.5), NaiveTime::from_hms_opt(6, 30, 0));
        assert_eq!(hours_to_time(23.99999), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(hours_to_time(f64::NAN), None);
    }
}
