//! # Response Equations
//!
//! An [`Equation`] is the engine's output: a lazily evaluated response curve
//! `x -> Option<Point>`. It owns a small closure over precomputed coefficients,
//! so calling it is O(1), side-effect free and safe from any number of threads.
//!
//! Positions outside the equation's domain evaluate to `None`. That is the
//! "no physical value here" signal, distinct from a failed computation.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::equation::Equation;
//!
//! let parabola = Equation::new(4.0, |x| x * (4.0 - x));
//! assert_eq!(parabola.evaluate(2.0).map(|p| p.y), Some(4.0));
//! assert!(parabola.evaluate(4.5).is_none());
//!
//! let samples = parabola.sample(1.0);
//! assert_eq!(samples.len(), 5);
//! ```

use std::fmt;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::beam::Beam;

/// Upper bound on the number of positions one sampling call will generate
pub const MAX_SAMPLES: usize = 1_000_000;

/// A single sample on a response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(with = "crate::nullable")]
    pub x: f64,
    /// Non-finite values serialize as `null` and read back as `NaN`
    #[serde(with = "crate::nullable")]
    pub y: f64,
}

/// Which response quantity an equation describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quantity {
    /// Vertical displacement, positive downward
    Deflection,
    /// Internal moment, positive sagging
    BendingMoment,
    /// Internal shear, positive when the left side moves up
    ShearForce,
}

impl Quantity {
    /// All quantities in display order
    pub const ALL: [Quantity; 3] = [
        Quantity::Deflection,
        Quantity::BendingMoment,
        Quantity::ShearForce,
    ];

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::Deflection => "Deflection",
            Quantity::BendingMoment => "Bending Moment",
            Quantity::ShearForce => "Shear Force",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

type ResponseFn = dyn Fn(f64) -> f64 + Send + Sync;

/// Pure response curve over the closed domain `[0, end]`.
#[derive(Clone)]
pub struct Equation {
    end: f64,
    response: Arc<ResponseFn>,
}

impl Equation {
    /// Wrap a response function valid on `[0, end]`
    pub fn new<F>(end: f64, response: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Equation {
            end,
            response: Arc::new(response),
        }
    }

    /// Domain end (total span)
    pub fn domain_end(&self) -> f64 {
        self.end
    }

    /// Whether `x` lies in `[0, end]`. `NaN` never does.
    pub fn contains(&self, x: f64) -> bool {
        x >= 0.0 && x <= self.end
    }

    /// Evaluate at `x`; `None` outside the domain.
    pub fn evaluate(&self, x: f64) -> Option<Point> {
        if self.contains(x) {
            Some(Point {
                x,
                y: (self.response)(x),
            })
        } else {
            None
        }
    }

    /// Sample the whole domain at a fixed step
    pub fn sample(&self, step: f64) -> Vec<Point> {
        self.sample_range(0.0, self.end, step)
    }

    /// Sample `[start, end]` at a fixed step, dropping out-of-domain positions.
    ///
    /// Positions are computed as `start + i * step` so long runs do not drift. The
    /// range end is always included as the final sample. Returns an empty vector
    /// for a non-positive or non-finite step, an empty range, or a range that
    /// would need more than [`MAX_SAMPLES`] positions.
    pub fn sample_range(&self, start: f64, end: f64, step: f64) -> Vec<Point> {
        if step <= 0.0 || !step.is_finite() || !start.is_finite() || !end.is_finite() {
            return Vec::new();
        }
        if end < start {
            return Vec::new();
        }

        // Tolerance so that e.g. 4.0 / 0.1 still yields the 40th step
        let count = ((end - start) / step + 1e-9).floor();
        if !count.is_finite() || count >= MAX_SAMPLES as f64 {
            warn!(
                "sampling [{}, {}] at step {} exceeds {} samples; returning none",
                start, end, step, MAX_SAMPLES
            );
            return Vec::new();
        }
        let steps = count as usize;
        let mut points = Vec::with_capacity(steps + 2);
        for i in 0..=steps {
            let x = (start + i as f64 * step).min(end);
            if let Some(p) = self.evaluate(x) {
                points.push(p);
            }
        }

        let last_x = start + steps as f64 * step;
        if end - last_x > step * 1e-9 {
            if let Some(p) = self.evaluate(end) {
                points.push(p);
            }
        }
        points
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equation")
            .field("domain", &(0.0, self.end))
            .finish_non_exhaustive()
    }
}

/// Engine output: the beam and load an equation was built for, plus the equation.
#[derive(Debug, Clone)]
pub struct EquationResult {
    pub beam: Beam,
    pub load: f64,
    pub quantity: Quantity,
    pub equation: Equation,
}

impl EquationResult {
    /// Evaluate the equation at `x`
    pub fn at(&self, x: f64) -> Option<Point> {
        self.equation.evaluate(x)
    }

    /// Sample the full domain at a fixed step
    pub fn sample(&self, step: f64) -> Vec<Point> {
        self.equation.sample(step)
    }
}
