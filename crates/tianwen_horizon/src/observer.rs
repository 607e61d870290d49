//! Observer location and horizon target elevations.

use tianwen_core::Body;
use tianwen_time::{TimeError, Zone};

use crate::error::HorizonError;

/// Geographic observer with a civil time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Zone used for every local-time conversion.
    pub zone: Zone,
}

impl Observer {
    /// Create a validated observer.
    pub fn new(latitude_deg: f64, longitude_deg: f64, zone: Zone) -> Result<Self, HorizonError> {
        let observer = Self {
            latitude_deg,
            longitude_deg,
            zone,
        };
        observer.validate()?;
        Ok(observer)
    }

    pub(crate) fn validate(&self) -> Result<(), HorizonError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(HorizonError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(HorizonError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }

    /// Zone offset in hours east of UTC at a Julian Day.
    pub fn utc_offset_hours(&self, jd: f64) -> Result<f64, TimeError> {
        self.zone.offset_hours_at(jd)
    }
}

/// Elevation of the horizon crossing being solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonTarget {
    /// Refraction-corrected horizon used for the Sun and planets.
    Refracted,
    /// Generic star horizon.
    Star,
    /// Moon, with horizontal parallax folded in.
    Moon,
    /// Arbitrary elevation in degrees.
    Custom(f64),
}

impl HorizonTarget {
    pub fn elevation_deg(self) -> f64 {
        match self {
            Self::Refracted => -0.5667,
            Self::Star => -0.8333,
            Self::Moon => 0.125,
            Self::Custom(deg) => deg,
        }
    }

    /// Default target for a body.
    pub fn for_body(body: Body) -> Self {
        match body {
            Body::Moon => Self::Moon,
            _ => Self::Refracted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_location() {
        let utc = Zone::utc();
        assert!(Observer::new(91.0, 0.0, utc).is_err());
        assert!(Observer::new(0.0, -181.0, utc).is_err());
        assert!(Observer::new(f64::NAN, 0.0, utc).is_err());
        assert!(Observer::new(-90.0, 180.0, utc).is_ok());
    }

    #[test]
    fn target_elevations() {
        assert_eq!(HorizonTarget::Refracted.elevation_deg(), -0.5667);
        assert_eq!(HorizonTarget::Star.elevation_deg(), -0.8333);
        assert_eq!(HorizonTarget::Moon.elevation_deg(), 0.125);
        assert_eq!(HorizonTarget::Custom(-6.0).elevation_deg(), -6.0);
    }

    #[test]
    fn body_targets() {
        assert_eq!(HorizonTarget::for_body(Body::Moon), HorizonTarget::Moon);
        assert_eq!(HorizonTarget::for_body(Body::Sun), HorizonTarget::Refracted);
        assert_eq!(HorizonTarget::for_body(Body::Jupiter), HorizonTarget::Refracted);
    }

    #[test]
    fn offset_follows_zone() {
        let o = Observer::new(31.23, 121.47, "Asia/Shanghai".parse().unwrap()).unwrap();
        assert_eq!(o.utc_offset_hours(2_451_545.0).unwrap(), 8.0);
    }
}
