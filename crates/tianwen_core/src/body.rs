//! Bodies and the heliocentric-position capability.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tianwen_frames::SphericalCoords;
use tianwen_time::TimeError;

use crate::moon::LunarTheory;
use crate::theory::TheoryTable;
use crate::vsop87;

/// Solar System bodies known to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// Every body, Earth included.
    pub const ALL: [Self; 10] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    /// Bodies observable from Earth, in display order.
    pub const DISPLAY: [Self; 9] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized body name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBody(pub String);

impl Display for UnknownBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown body: {:?}", self.0)
    }
}

impl Error for UnknownBody {}

impl FromStr for Body {
    type Err = UnknownBody;

    /// Case-insensitive body name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownBody(s.to_string()))
    }
}

/// Anything with a heliocentric ecliptic position.
///
/// Positions are referred to the mean ecliptic and equinox of date;
/// longitude/latitude in degrees, distance in AU.
pub trait CelestialBody: Send + Sync {
    fn body(&self) -> Body;

    fn heliocentric_position(&self, jd: f64) -> Result<SphericalCoords, TimeError>;

    /// Distance from the Sun, AU.
    fn sun_distance(&self, jd: f64) -> Result<f64, TimeError> {
        Ok(self.heliocentric_position(jd)?.distance_au)
    }
}

/// A body whose position comes entirely from a [`TheoryTable`].
#[derive(Debug, Clone, Copy)]
pub struct Planet {
    body: Body,
    theory: &'static TheoryTable,
}

impl Planet {
    pub const fn new(body: Body, theory: &'static TheoryTable) -> Self {
        Self { body, theory }
    }

    pub fn theory(&self) -> &'static TheoryTable {
        self.theory
    }
}

impl CelestialBody for Planet {
    fn body(&self) -> Body {
        self.body
    }

    fn heliocentric_position(&self, jd: f64) -> Result<SphericalCoords, TimeError> {
        self.theory.evaluate(jd)
    }
}

static SUN: Planet = Planet::new(Body::Sun, &vsop87::SUN);
static MERCURY: Planet = Planet::new(Body::Mercury, &vsop87::MERCURY);
static VENUS: Planet = Planet::new(Body::Venus, &vsop87::VENUS);
static EARTH: Planet = Planet::new(Body::Earth, &vsop87::EARTH);
static MARS: Planet = Planet::new(Body::Mars, &vsop87::MARS);
static JUPITER: Planet = Planet::new(Body::Jupiter, &vsop87::JUPITER);
static SATURN: Planet = Planet::new(Body::Saturn, &vsop87::SATURN);
static URANUS: Planet = Planet::new(Body::Uranus, &vsop87::URANUS);
static NEPTUNE: Planet = Planet::new(Body::Neptune, &vsop87::NEPTUNE);
static MOON: LunarTheory = LunarTheory;

/// Position model for a body.
pub fn body_model(body: Body) -> &'static dyn CelestialBody {
    match body {
        Body::Sun => &SUN,
        Body::Moon => &MOON,
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Earth => &EARTH,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        Body::Uranus => &URANUS,
        Body::Neptune => &NEPTUNE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_body() {
        for b in Body::ALL {
            assert_eq!(body_model(b).body(), b);
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("jupiter".parse::<Body>().unwrap(), Body::Jupiter);
        assert_eq!(" MOON ".parse::<Body>().unwrap(), Body::Moon);
        assert!("Pluto".parse::<Body>().is_err());
    }

    #[test]
    fn display_set_excludes_earth() {
        assert!(!Body::DISPLAY.contains(&Body::Earth));
        assert_eq!(Body::DISPLAY.len(), 9);
    }

    #[test]
    fn sun_distance_of_sun_is_zero() {
        assert_eq!(body_model(Body::Sun).sun_distance(2_451_545.0).unwrap(), 0.0);
    }

    #[test]
    fn mean_distances() {
        let jd = 2_451_545.0;
        let cases = [
            (Body::Mercury, 0.307, 0.467),
            (Body::Venus, 0.718, 0.729),
            (Body::Earth, 0.983, 1.017),
            (Body::Mars, 1.38, 1.67),
            (Body::Jupiter, 4.95, 5.46),
            (Body::Saturn, 9.0, 10.1),
            (Body::Uranus, 18.2, 20.1),
            (Body::Neptune, 29.7, 30.4),
        ];
        for (b, lo, hi) in cases {
            let r = body_model(b).sun_distance(jd).unwrap();
            assert!((lo..=hi).contains(&r), "{b}: r = {r}");
        }
    }
}
