//! Ecliptic-longitude crossing solvers.
//!
//! This crate provides:
//! - Closed-form equinox/solstice instants ([`equinox_solstice_jde`])
//! - Golden-section search for apparent solar longitude crossings
//! - The 24 solar terms, seeded from a per-term calendar window table
//!   ([`SOLAR_TERM_BRACKETS`])

pub mod crossing;
pub mod equinox;
pub mod error;
pub mod solar_term;
pub mod solar_term_types;

pub use crossing::{golden_section_crossing, sun_apparent_longitude_deg};
pub use equinox::{equinox_solstice_jde, mean_equinox_solstice_jde};
pub use error::SearchError;
pub use solar_term::{
    get_equinox_and_solstice, get_solar_term, get_solar_term_with_config, solar_terms_for_year,
    solar_terms_for_year_with_config,
};
pub use solar_term_types::{
    ALL_SOLAR_TERMS, CrossingSearch, SOLAR_TERM_BRACKETS, Season, SeedBracket, SolarTerm,
    SolarTermConfig, SolarTermEvent,
};
