use chrono::NaiveTime;
use tianwen_core::{Body, geocentric_position, sun_distance_au};
use tianwen_frames::{EclipticCoord, EquatorialCoord, ObliquityMode, ecliptic_to_equatorial};
use tianwen_horizon::{Observer, RiseTransitSet, body_rise_transit_set, horizontal, hours_to_time};

use crate::error::TianwenError;

/// Everything the pipeline derives for one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyReport {
    pub body: Body,
    /// Apparent geocentric ecliptic longitude/latitude, degrees.
    pub ecliptic: EclipticCoord,
    /// Apparent right ascension/declination (true obliquity of date).
    pub equatorial: EquatorialCoord,
    /// Rise/transit/set on the observer's civil date, zone hours.
    pub events: RiseTransitSet,
    pub rise: Option<NaiveTime>,
    pub culmination: Option<NaiveTime>,
    pub setting: Option<NaiveTime>,
    /// Light-time corrected distance from Earth, AU.
    pub earth_distance_au: f64,
    /// Distance from the Sun at the light-time retarded epoch, AU.
    pub sun_distance_au: f64,
    pub elevation_deg: f64,
    /// Degrees east of north.
    pub azimuth_deg: f64,
}

/// Report for one body at a UT Julian Day.
///
/// Rise, culmination and setting refer to the civil date containing `jd`
/// in the observer's zone.
pub fn observe(body: Body, jd: f64, observer: &Observer) -> Result<BodyReport, TianwenError> {
    if body == Body::Earth {
        return Err(TianwenError::NotObservable(body));
    }
    let position = geocentric_position(body, jd, true)?;
    let equatorial = ecliptic_to_equatorial(&position.ecliptic, ObliquityMode::TrueAt(jd))?;
    let sky = horizontal(&equatorial, jd, observer)?;
    let date = observer.zone.local(jd)?.date_naive();
    let events = body_rise_transit_set(body, observer, date)?;

    Ok(BodyReport {
        body,
        ecliptic: position.ecliptic,
        equatorial,
        events,
        rise: events.rise().and_then(hours_to_time),
        culmination: events.transit().and_then(hours_to_time),
        setting: events.set().and_then(hours_to_time),
        earth_distance_au: position.distance_au,
        sun_distance_au: sun_distance_au(body, jd, position.light_time_days)?,
        elevation_deg: sky.elevation_deg,
        azimuth_deg: sky.azimuth_deg,
    })
}

/// Reports for every body in [`Body::DISPLAY`] order.
pub fn observe_all(jd: f64, observer: &Observer) -> Result<Vec<BodyReport>, TianwenError> {
    Body::DISPLAY
        .into_iter()
        .map(|body| observe(body, jd, observer))
        .collect()
}

/// Look up a body by case-insensitive name.
pub fn body_by_name(name: &str) -> Result<Body, TianwenError> {
    Ok(name.parse::<Body>()?)
}
