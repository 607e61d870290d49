//! Heliocentric theory tables.

use tianwen_frames::{PeriodicSeries, PeriodicTerm, SphericalCoords, Trig};
use tianwen_time::{TimeError, julian_millennia, normalize_angle};

/// Amplitude unit of the VSOP87 tables: 10⁻⁸ rad or 10⁻⁸ AU.
const VSOP87_SCALE: f64 = 1e-8;

/// Periodic series for the three heliocentric ecliptic components of one body.
///
/// Each component is a sum over orders 0..=5 in Julian millennia since
/// J2000.0. Longitude and latitude evaluate to radians, radius to AU.
#[derive(Debug, Clone, Copy)]
pub struct TheoryTable {
    pub longitude: PeriodicSeries,
    pub latitude: PeriodicSeries,
    pub radius: PeriodicSeries,
}

impl TheoryTable {
    /// Table built from VSOP87D-style cosine series.
    pub const fn vsop87(
        longitude: &'static [&'static [PeriodicTerm]],
        latitude: &'static [&'static [PeriodicTerm]],
        radius: &'static [&'static [PeriodicTerm]],
    ) -> Self {
        Self {
            longitude: PeriodicSeries::new(longitude, Trig::Cos, VSOP87_SCALE),
            latitude: PeriodicSeries::new(latitude, Trig::Cos, VSOP87_SCALE),
            radius: PeriodicSeries::new(radius, Trig::Cos, VSOP87_SCALE),
        }
    }

    /// A table with no terms. Every component evaluates to zero, which puts
    /// the body at the heliocentric origin.
    pub const fn empty() -> Self {
        Self {
            longitude: PeriodicSeries::empty(),
            latitude: PeriodicSeries::empty(),
            radius: PeriodicSeries::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.longitude.is_empty() && self.latitude.is_empty() && self.radius.is_empty()
    }

    /// Total term count across the three components.
    pub fn term_count(&self) -> usize {
        self.longitude.term_count() + self.latitude.term_count() + self.radius.term_count()
    }

    /// Heliocentric ecliptic position (mean equinox of date) at a Julian Day.
    pub fn evaluate(&self, jd: f64) -> Result<SphericalCoords, TimeError> {
        let tau = julian_millennia(jd);
        let lon = normalize_angle(self.longitude.evaluate(tau).to_degrees())?;
        Ok(SphericalCoords {
            lon_deg: if lon >= 360.0 { 0.0 } else { lon },
            lat_deg: self.latitude.evaluate(tau).to_degrees(),
            distance_au: self.radius.evaluate(tau),
        })
    }
}
