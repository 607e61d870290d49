//! Error types for horizon computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tianwen_time::TimeError;

/// Errors from horizon computations.
///
/// A target elevation that is never reached is not an error; see
/// [`HorizonCrossing`](crate::HorizonCrossing).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HorizonError {
    /// Error from time conversion or angle normalization.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
}

impl Display for HorizonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for HorizonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidLocation(_) => None,
        }
    }
}

impl From<TimeError> for HorizonError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
