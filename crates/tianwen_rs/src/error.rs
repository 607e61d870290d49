//! Unified error type for the façade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tianwen_core::{Body, UnknownBody};
use tianwen_horizon::HorizonError;
use tianwen_search::SearchError;
use tianwen_time::TimeError;

/// Any failure surfaced by the convenience functions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TianwenError {
    Time(TimeError),
    Horizon(HorizonError),
    Search(SearchError),
    UnknownBody(UnknownBody),
    /// Instant string matched none of the accepted layouts.
    InvalidInstant(String),
    /// The body has no geocentric report (Earth).
    NotObservable(Body),
}

impl Display for TianwenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Horizon(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::UnknownBody(e) => write!(f, "{e}"),
            Self::InvalidInstant(s) => write!(
                f,
                "invalid instant {s:?}: expected RFC 3339 or YYYY-MM-DD[Thh:mm[:ss]]"
            ),
            Self::NotObservable(b) => write!(f, "{b} cannot be observed from Earth"),
        }
    }
}

impl Error for TianwenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Horizon(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::UnknownBody(e) => Some(e),
            Self::InvalidInstant(_) | Self::NotObservable(_) => None,
        }
    }
}

impl From<TimeError> for TianwenError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<HorizonError> for TianwenError {
    fn from(e: HorizonError) -> Self {
        Self::Horizon(e)
    }
}

impl From<SearchError> for TianwenError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<UnknownBody> for TianwenError {
    fn from(e: UnknownBody) -> Self {
        Self::UnknownBody(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_layer_errors() {
        let e: TianwenError = TimeError::NonFiniteAngle(f64::INFINITY).into();
        assert!(matches!(e, TianwenError::Time(_)));
        assert!(e.source().is_some());

        let e: TianwenError = SearchError::YearOutOfRange(5000).into();
        assert!(e.to_string().contains("5000"));
    }

    #[test]
    fn not_observable_message() {
        let e = TianwenError::NotObservable(Body::Earth);
        assert_eq!(e.to_string(), "Earth cannot be observed from Earth");
        assert!(e.source().is_none());
    }
}
