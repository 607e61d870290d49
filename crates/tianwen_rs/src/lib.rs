//! Convenience wrapper for the tianwen ephemeris pipeline.
//!
//! Bundles the layer crates behind a handful of functions that take an
//! explicit instant and observer and return complete per-body reports.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tianwen_rs::*;
//!
//! let zone: Zone = "Asia/Shanghai".parse().unwrap();
//! let observer = Observer::new(31.23, 121.47, zone).unwrap();
//! let jd = parse_instant("2024-03-20T12:00:00", &zone).unwrap();
//! for r in observe_all(jd, &observer).unwrap() {
//!     println!("{}: RA {} Dec {}", r.body, Hms::from_degrees(r.equatorial.ra_deg),
//!         Dms::from_degrees(r.equatorial.dec_deg));
//! }
//! ```

pub mod convenience;
pub mod date;
pub mod error;

pub use convenience::{BodyReport, body_by_name, observe, observe_all};
pub use date::parse_instant;
pub use error::TianwenError;

pub use tianwen_core::{Body, GeocentricPosition, geocentric_position};
pub use tianwen_frames::{EclipticCoord, EquatorialCoord, ObliquityMode};
pub use tianwen_horizon::{HorizonTarget, Observer, RiseTransitSet};
pub use tianwen_search::{
    Season, SolarTerm, SolarTermEvent, get_equinox_and_solstice, get_solar_term,
    solar_terms_for_year,
};
pub use tianwen_time::{Dms, Hms, Zone, to_calendar_day, to_julian_day};
