//! Error types for time and angle utilities.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion, zone lookup, or angle normalization.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Zone identifier could not be resolved to an offset or IANA zone.
    InvalidTimeZone(String),
    /// NaN or infinity reached angle normalization.
    NonFiniteAngle(f64),
    /// Julian Day maps outside the representable calendar range.
    UnrepresentableJulianDay(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeZone(id) => write!(f, "invalid time zone identifier: {id:?}"),
            Self::NonFiniteAngle(v) => write!(f, "cannot normalize non-finite angle: {v}"),
            Self::UnrepresentableJulianDay(jd) => {
                write!(f, "julian day {jd} is outside the calendar range")
            }
        }
    }
}

impl Error for TimeError {}
