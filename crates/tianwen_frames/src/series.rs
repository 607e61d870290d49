//! Periodic-series evaluation.
//!
//! Both planetary theories and nutation are sums of the form
//!
//! ```text
//! Σ_k [ Σ_i A_i · trig(φ_i + ω_i · t) ] · t^k
//! ```
//!
//! where `k` is the order of the series (the power of elapsed time it is
//! scaled by) and `t` is in whatever unit the theory uses: Julian millennia
//! for VSOP87, Julian centuries for nutation.
//!
//! [`evaluate_series`] is the shared kernel. Callers that store terms in a
//! different shape (e.g. nutation rows of integer multipliers) supply a
//! closure that maps each row to its `(amplitude, argument)` pair.

/// Trigonometric function applied to each term's argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sin,
    Cos,
}

impl Trig {
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
        }
    }
}

/// One `A · trig(φ + ω·t)` term. Phase in radians, frequency in radians per
/// unit of `t`, amplitude in the theory's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

impl PeriodicTerm {
    pub const fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }

    /// Argument `φ + ω·t` in radians.
    #[inline]
    pub fn argument(&self, t: f64) -> f64 {
        self.phase + self.frequency * t
    }
}

/// Evaluate a multi-order periodic series.
///
/// `orders[k]` holds the terms multiplied by `t^k`. `term(k, row)` returns
/// `(amplitude, argument_rad)` for one row. Terms are summed in table order.
pub fn evaluate_series<T, F>(orders: &[&[T]], t: f64, trig: Trig, mut term: F) -> f64
where
    F: FnMut(usize, &T) -> (f64, f64),
{
    let mut total = 0.0;
    let mut power = 1.0;
    for (k, rows) in orders.iter().enumerate() {
        let mut sum = 0.0;
        for row in rows.iter() {
            let (amplitude, argument) = term(k, row);
            sum += amplitude * trig.apply(argument);
        }
        total += sum * power;
        power *= t;
    }
    total
}

/// A complete series for one coordinate component: one term list per order,
/// a trig function and a unit scale applied to the final sum.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicSeries {
    pub orders: &'static [&'static [PeriodicTerm]],
    pub trig: Trig,
    /// Multiplier converting the summed amplitudes to output units
    /// (e.g. `1e-8` for tables stored in units of 10⁻⁸ rad or AU).
    pub scale: f64,
}

impl PeriodicSeries {
    pub const fn new(
        orders: &'static [&'static [PeriodicTerm]],
        trig: Trig,
        scale: f64,
    ) -> Self {
        Self {
            orders,
            trig,
            scale,
        }
    }

    /// A series with no terms; evaluates to zero everywhere.
    pub const fn empty() -> Self {
        Self::new(&[], Trig::Cos, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.orders.iter().all(|o| o.is_empty())
    }

    /// Total number of terms across all orders.
    pub fn term_count(&self) -> usize {
        self.orders.iter().map(|o| o.len()).sum()
    }

    /// Evaluate at `t` (theory time unit).
    pub fn evaluate(&self, t: f64) -> f64 {
        self.scale * evaluate_series(self.orders, t, self.trig, |_, p| (p.amplitude, p.argument(t)))
    }
}
