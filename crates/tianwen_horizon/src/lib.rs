//! Horizon observables and the rise/transit/set solver.
//!
//! This crate provides:
//! - [`Observer`] and [`HorizonTarget`] elevations per body class
//! - Hour angle, elevation and azimuth ([`observables`])
//! - Closed-form horizon crossings with the `(0, 0)` no-event sentinel
//! - Rise/transit/set in observer zone time ([`riseset`])
//!
//! Times of day are zone hours in [0, 24) on the observer's civil date.

pub mod bodies;
pub mod error;
pub mod observables;
pub mod observer;
pub mod riseset;

pub use bodies::{apparent_equatorial, body_horizontal, body_rise_transit_set};
pub use error::HorizonError;
pub use observables::{HorizontalCoord, azimuth_deg, elevation_deg, horizontal, hour_angle_deg};
pub use observer::{HorizonTarget, Observer};
pub use riseset::{
    HorizonCrossing, RiseTransitSet, elevation_to_time, hours_to_time, rise_transit_set,
};
