//! Coordinate value types.

use std::fmt::{Display, Formatter};

use tianwen_time::{Dms, Hms};

/// Ecliptic longitude/latitude pair, degrees.
///
/// Whether the pair is heliocentric or geocentric depends on which function
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoord {
    /// Longitude λ in [0, 360).
    pub lon_deg: f64,
    /// Latitude β in [-90, 90].
    pub lat_deg: f64,
}

impl EclipticCoord {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

impl Display for EclipticCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "λ {} β {}",
            Dms::from_degrees(self.lon_deg),
            Dms::from_degrees(self.lat_deg)
        )
    }
}

/// Right ascension/declination pair, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoord {
    /// Right ascension α in [0, 360).
    pub ra_deg: f64,
    /// Declination δ in [-90, 90].
    pub dec_deg: f64,
}

impl EquatorialCoord {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Right ascension in hours.
    pub fn ra_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }
}

impl Display for EquatorialCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "α {} δ {}",
            Hms::from_degrees(self.ra_deg),
            Dms::from_degrees(self.dec_deg)
        )
    }
}
