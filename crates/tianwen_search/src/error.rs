//! Error types for solar-term search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tianwen_time::TimeError;

use crate::solar_term_types::SolarTerm;

/// Errors from equinox, solstice and solar-term computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from time conversion or angle normalization.
    Time(TimeError),
    /// Invalid search configuration.
    InvalidConfig(&'static str),
    /// The seed bracket for this term and year does not contain the crossing.
    NotBracketed { term: SolarTerm, year: i32 },
    /// Iteration budget exhausted before the bracket shrank enough.
    NoConvergence(&'static str),
    /// Year outside the range covered by the closed-form tables.
    YearOutOfRange(i32),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::NotBracketed { term, year } => {
                write!(f, "seed bracket for {term} does not contain the crossing in {year}")
            }
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::YearOutOfRange(year) => write!(f, "year {year} is outside -1000..=3000"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
