//! Body positions from periodic-series theories.
//!
//! This crate provides:
//! - [`TheoryTable`]: heliocentric longitude/latitude/radius series
//! - Truncated VSOP87D tables for the eight planets ([`vsop87`])
//! - A truncated ELP-2000/82 lunar theory ([`moon`])
//! - The [`CelestialBody`] capability and the [`body_model`] registry
//! - The heliocentric → geocentric transform ([`geocentric_position`])
//!
//! All tables are immutable `static` data and every function is pure, so
//! calls may run concurrently from any number of threads.

pub mod body;
pub mod moon;
pub mod theory;
pub mod transform;
pub mod vsop87;

pub use body::{Body, CelestialBody, Planet, UnknownBody, body_model};
pub use moon::{KM_PER_AU, LunarTheory, moon_geocentric};
pub use theory::TheoryTable;
pub use transform::{
    GeocentricPosition, LIGHT_TIME_DAYS_PER_AU, earth_distance_au, geocentric_position,
    heliocentric_ecliptic, sun_distance_au,
};
