//! Periodic series, nutation, obliquity and frame conversion.
//!
//! Provides the shared periodic-series kernel used by planetary theories and
//! nutation, ecliptic ↔ equatorial rotation (fixed J2000 or time-dependent
//! obliquity), and rectangular ↔ spherical conversion.

pub mod coords;
pub mod nutation;
pub mod obliquity;
pub mod rotation;
pub mod series;
pub mod spherical;

pub use coords::{EclipticCoord, EquatorialCoord};
pub use nutation::{Nutation, fundamental_arguments_deg, get_nutation, nutation_at};
pub use obliquity::{
    OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, ecliptic_obliquity_deg, mean_obliquity_deg,
};
pub use rotation::{
    ObliquityMode, angular_separation_deg, ecliptic_to_equatorial, ecliptic_to_equatorial_with,
    equatorial_to_ecliptic, equatorial_to_ecliptic_with,
};
pub use series::{PeriodicSeries, PeriodicTerm, Trig, evaluate_series};
pub use spherical::{
    SphericalCoords, rectangular_to_spherical, spherical_to_rectangular, vector_add, vector_norm,
    vector_sub,
};
