//! # Simply-Supported Beam
//!
//! Single span with pin support at left (x=0) and roller at right (x=L), uniform
//! load `w` over the full span.
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ═════════════════
//!    △                △
//!   R1  ←─────L─────→ R2
//! ```
//!
//! Only `primary_span` is read; `secondary_span` is ignored.

use log::debug;

use crate::analyzers::{Analyzer, SIMPLY_SUPPORTED};
use crate::beam::Beam;
use crate::equation::Equation;

/// End reactions `(R1, R2)`, each carrying half of `w·L`
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// `V(x) = w(L/2 − x)`: `+wL/2` at the pin, zero at midspan, `−wL/2` at the roller
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// `M(x) = w·x(L − x)/2`, sagging, peaking at `wL²/8` in the middle
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    w * x * (l - x) / 2.0
}

/// Downward deflection for flexural rigidity `ei`.
///
/// ```text
/// δ(x) = w·x(L³ − 2L·x² + x³) / (24·EI)      δ(L/2) = 5wL⁴/(384·EI)
/// ```
///
/// A `NaN` rigidity (material without `EI` or `E`/`I`) gives `NaN` everywhere.
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * ei)
}

/// Analyzer for `"simply-supported"`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplySupported;

impl Analyzer for SimplySupported {
    fn condition(&self) -> &'static str {
        SIMPLY_SUPPORTED
    }

    fn total_span(&self, beam: &Beam) -> f64 {
        beam.primary_span()
    }

    fn reactions(&self, beam: &Beam, load: f64) -> Vec<f64> {
        let (r1, r2) = uniform_load_reactions(load, beam.primary_span());
        vec![r1, r2]
    }

    fn deflection_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span();
        let ei = beam.material().flexural_rigidity();
        debug!("simply-supported deflection: L={}, w={}, EI={}", l, load, ei);
        Equation::new(l, move |x| uniform_load_deflection(load, l, x, ei))
    }

    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span();
        Equation::new(l, move |x| uniform_load_moment(load, l, x))
    }

    fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation {
        let l = beam.primary_span();
        Equation::new(l, move |x| uniform_load_shear(load, l, x))
    }
}
