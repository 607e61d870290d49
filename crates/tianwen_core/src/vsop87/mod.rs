//! Truncated VSOP87D tables for the eight planets.
//!
//! Bretagnon & Francou (1988), as abridged in Meeus, _Astronomical
//! Algorithms_, Appendix III. Each table is `(A, B, C)` with the term value
//! `A · cos(B + C·τ)`, τ in Julian millennia since J2000.0.

use tianwen_frames::PeriodicTerm;

use crate::theory::TheoryTable;

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

pub use earth::EARTH;
pub use jupiter::JUPITER;
pub use mars::MARS;
pub use mercury::MERCURY;
pub use neptune::NEPTUNE;
pub use saturn::SATURN;
pub use uranus::URANUS;
pub use venus::VENUS;

/// The Sun sits at the heliocentric origin.
pub static SUN: TheoryTable = TheoryTable::empty();

pub(crate) const fn t(amplitude: f64, phase: f64, frequency: f64) -> PeriodicTerm {
    PeriodicTerm::new(amplitude, phase, frequency)
}
