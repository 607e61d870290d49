//! Horizon quantities for bodies from the position pipeline.

use chrono::{NaiveDate, NaiveTime};
use tianwen_core::{Body, geocentric_position};
use tianwen_frames::{EquatorialCoord, ObliquityMode, ecliptic_to_equatorial};
use tianwen_time::TimeError;

use crate::error::HorizonError;
use crate::observables::{HorizontalCoord, horizontal};
use crate::observer::{HorizonTarget, Observer};
use crate::riseset::{RiseTransitSet, rise_transit_set};

/// Apparent geocentric right ascension and declination (true obliquity).
pub fn apparent_equatorial(body: Body, jd: f64) -> Result<EquatorialCoord, TimeError> {
    let p = geocentric_position(body, jd, true)?;
    ecliptic_to_equatorial(&p.ecliptic, ObliquityMode::TrueAt(jd))
}

/// Elevation and azimuth of a body at a Julian Day.
pub fn body_horizontal(
    body: Body,
    jd: f64,
    observer: &Observer,
) -> Result<HorizontalCoord, HorizonError> {
    horizontal(&apparent_equatorial(body, jd)?, jd, observer)
}

/// Rise, transit and set of a body on the observer's civil date.
///
/// The body's position is taken at local noon and held fixed for the day;
/// the target elevation is [`HorizonTarget::for_body`].
pub fn body_rise_transit_set(
    body: Body,
    observer: &Observer,
    date: NaiveDate,
) -> Result<RiseTransitSet, HorizonError> {
    observer.validate()?;
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    let jd_noon = observer.zone.local_to_jd(&date.and_time(noon))?;
    let eq = apparent_equatorial(body, jd_noon)?;
    rise_transit_set(&eq, HorizonTarget::for_body(body).elevation_deg(), observer, date)
}
