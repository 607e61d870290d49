//! Angle normalization and sexagesimal formatting.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;

/// Normalize an angle in degrees into `[0, 360]`.
///
/// Values already inside the range are returned unchanged, so the operation
/// is idempotent (360 stays 360). Positive inputs above the range are reduced
/// from above and negative inputs lifted from below, and the reduction uses an
/// exact floating remainder so the result never depends on how many turns were
/// removed.
///
/// Non-finite input is rejected with [`TimeError::NonFiniteAngle`].
pub fn normalize_angle(deg: f64) -> Result<f64, TimeError> {
    if !deg.is_finite() {
        return Err(TimeError::NonFiniteAngle(deg));
    }
    if (0.0..=360.0).contains(&deg) {
        return Ok(deg);
    }
    let r = deg % 360.0;
    if deg > 0.0 {
        // Whole turns reduce to 360, matching repeated subtraction while > 360.
        Ok(if r == 0.0 { 360.0 } else { r })
    } else if r == 0.0 {
        Ok(0.0)
    } else {
        Ok(r + 360.0)
    }
}

/// Normalize an angle in degrees into `(-180, 180]`.
pub fn normalize_signed(deg: f64) -> Result<f64, TimeError> {
    let d = normalize_angle(deg)?;
    Ok(if d > 180.0 { d - 360.0 } else { d })
}

/// `asin` with its argument clamped to `[-1, 1]`. Returns radians.
pub fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// `acos` with its argument clamped to `[-1, 1]`. Returns radians.
pub fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Degrees-minutes-seconds decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// True when the source angle was negative.
    pub negative: bool,
    pub degrees: u32,
    /// Arc-minutes (0..59).
    pub minutes: u32,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

impl Dms {
    /// Decompose decimal degrees. The sign is carried separately so that
    /// e.g. −0.5° becomes `-0° 30′ 0″` rather than losing the sign at 0°.
    pub fn from_degrees(deg: f64) -> Self {
        let (whole, minutes, seconds) = sexagesimal(deg.abs());
        Self {
            negative: deg < 0.0,
            degrees: whole,
            minutes,
            seconds,
        }
    }

    /// Convert back to signed decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        let v = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -v } else { v }
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}°{:02}′{:05.2}″",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Hours-minutes-seconds decomposition of a time or right ascension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub negative: bool,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Hms {
    /// Decompose decimal hours.
    pub fn from_hours(hours: f64) -> Self {
        let (whole, minutes, seconds) = sexagesimal(hours.abs());
        Self {
            negative: hours < 0.0,
            hours: whole,
            minutes,
            seconds,
        }
    }

    /// Decompose an angle in degrees at 15° per hour.
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_hours(deg / 15.0)
    }

    /// Convert back to signed decimal hours.
    pub fn to_hours(&self) -> f64 {
        let v = self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -v } else { v }
    }

    /// Convert back to degrees at 15° per hour.
    pub fn to_degrees(&self) -> f64 {
        self.to_hours() * 15.0
    }
}

impl Display for Hms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{:02}h{:02}m{:05.2}s",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Split a non-negative value into whole units, minutes and seconds.
///
/// Truncation can leave a seconds value of 59.999… that rounds up when
/// printed; the split is nudged so that seconds never reach 60.
fn sexagesimal(value: f64) -> (u32, u32, f64) {
    let whole = value.floor();
    let rem_minutes = (value - whole) * 60.0;
    let minutes = rem_minutes.floor();
    let seconds = (rem_minutes - minutes) * 60.0;
    let (mut whole, mut minutes, mut seconds) = (whole as u32, minutes as u32, seconds);
    if seconds >= 60.0 - 1e-9 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes -= 60;
        whole += 1;
    }
    (whole, minutes, seconds.max(0.0))
}
