//! # Two-Span Continuous Beam (Unequal Spans)
//!
//! Continuous beam over three pinned supports with uniform load `w` on both spans.
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ══════════════╤═══════════════════
//!    △             △                   △
//!   R1  ←── L1 ──→ R2  ←──── L2 ────→ R3
//! ```
//!
//! ## Method
//!
//! The interior moment comes from the three-moment equation with zero end moments:
//!
//! ```text
//! 2·M1·(L1 + L2) = −w·(L1³ + L2³)/4   →   M1 = −w(L1³ + L2³) / (8(L1 + L2))
//! ```
//!
//! Each span is then statically determinate. Deflection is the double integral of
//! `−M/EI` per span with zero displacement at all three supports; slope continuity
//! over the interior support holds because `M1` satisfies the three-moment equation.
//!
//! ## Domain Partition
//!
//! `[0, L1]` belongs to span 1 and `(L1, L1 + L2]` to span 2, the same for every
//! quantity. At `x = L1` shear is the span-1 formula with the interior reaction
//! included, `V2 + R2 = V3`, so the support point agrees with the span-2 side.
//! Just left of the support the shear tends to `V2`.

use log::debug;

use crate::analyzers::{Analyzer, TWO_SPAN_UNEQUAL};
use crate::beam::Beam;
use crate::equation::{Equation, Quantity};
use crate::errors::CalcResult;

/// Solved statics for a two-span beam under uniform load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSpanStatics {
    pub l1: f64,
    pub l2: f64,
    pub w: f64,
    /// Moment over the interior support (negative, hogging)
    pub m1: f64,
    /// Left end reaction
    pub r1: f64,
    /// Interior reaction
    pub r2: f64,
    /// Right end reaction
    pub r3: f64,
    /// Shear just right of the left support
    pub v1: f64,
    /// Shear just left of the interior support
    pub v2: f64,
    /// Shear just right of the interior support
    pub v3: f64,
    /// Shear just left of the right support
    pub v4: f64,
}

impl TwoSpanStatics {
    /// Solve reactions and span shears
    pub fn solve(l1: f64, l2: f64, w: f64) -> Self {
        let m1 = -w * (l1.powi(3) + l2.powi(3)) / (8.0 * (l1 + l2));

        // Span-by-span moment balance about the interior support
        let r1 = w * l1 / 2.0 + m1 / l1;
        let r3 = w * l2 / 2.0 + m1 / l2;
        let r2 = w * (l1 + l2) - r1 - r3;

        let v1 = r1;
        let v2 = r1 - w * l1;
        let v3 = v2 + r2;
        let v4 = v3 - w * l2;

        TwoSpanStatics {
            l1,
            l2,
            w,
            m1,
            r1,
            r2,
            r3,
            v1,
            v2,
            v3,
            v4,
        }
    }

    /// Combined length
    pub fn total_span(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Local coordinate for span 2, or `None` when `x` falls in span 1
    #[inline]
    fn span2_local(&self, x: f64) -> Option<f64> {
        if x <= self.l1 {
            None
        } else {
            Some(x - self.l1)
        }
    }

    /// M(x), sagging positive
    pub fn moment(&self, x: f64) -> f64 {
        let w = self.w;
        match self.span2_local(x) {
            None => self.r1 * x - w * x * x / 2.0,
            Some(u) => self.m1 + self.v3 * u - w * u * u / 2.0,
        }
    }

    /// V(x) = dM/dx
    ///
    /// At the interior support the span-1 formula picks up `R2`, giving `V3`.
    pub fn shear(&self, x: f64) -> f64 {
        match self.span2_local(x) {
            None if x == self.l1 => self.r1 - self.w * x + self.r2,
            None => self.r1 - self.w * x,
            Some(u) => self.v3 - self.w * u,
        }
    }

    /// δ(x)·EI, positive downward
    pub fn deflection_ei(&self, x: f64) -> f64 {
        let (l1, l2, w) = (self.l1, self.l2, self.w);
        match self.span2_local(x) {
            None => {
                // EI·δ = −R1·x³/6 + w·x⁴/24 + C1·x, δ(0) = δ(L1) = 0
                let c1 = self.r1 * l1 * l1 / 6.0 - w * l1.powi(3) / 24.0;
                -self.r1 * x.powi(3) / 6.0 + w * x.powi(4) / 24.0 + c1 * x
            }
            Some(u) => {
                // EI·δ = −M1·u²/2 − V3·u³/6 + w·u⁴/24 + D1·u, δ(0) = δ(L2) = 0
                let d1 = self.m1 * l2 / 2.0 + self.v3 * l2 * l2 / 6.0 - w * l2.powi(3) / 24.0;
                -self.m1 * u * u / 2.0 - self.v3 * u.powi(3) / 6.0 + w * u.powi(4) / 24.0 + d1 * u
            }
        }
    }

    /// EI·δ'(x), used to check slope continuity over the interior support
    pub fn slope_ei(&self, x: f64) -> f64 {
        let (l1, l2, w) = (self.l1, self.l2, self.w);
        match self.span2_local(x) {
            None => {
                let c1 = self.r1 * l1 * l1 / 6.0 - w * l1.powi(3) / 24.0;
                -self.r1 * x * x / 2.0 + w * x.powi(3) / 6.0 + c1
            }
            Some(u) => {
                let d1 = self.m1 * l2 / 2.0 + self.v3 * l2 * l2 / 6.0 - w * l2.powi(3) / 24.0;
                -self.m1 * u - self.v3 * u * u / 2.0 + w * u.powi(3) / 6.0 + d1
            }
        }
    }
}

/// Analyzer for `"two-span-unequal"`
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSpanUnequal;

impl TwoSpanUnequal {
    fn statics(beam: &Beam, load: f64) -> TwoSpanStatics {
        let statics = TwoSpanStatics::solve(beam.primary_span(), beam.secondary_span(), load);
        debug!(
            "two-span statics: L1={}, L2={}, w={}, M1={}, R=[{}, {}, {}]",
            statics.l1, statics.l2, load, statics.m1, statics.r1, statics.r2, statics.r3
        );
        statics
    }
}

impl Analyzer for TwoSpanUnequal {
    fn condition(&self) -> &'static str {
        TWO_SPAN_UNEQUAL
    }

    fn total_span(&self, beam: &Beam) -> f64 {
        beam.combined_span()
    }

    fn reactions(&self, beam: &Beam, load: f64) -> Vec<f64> {
        let s = Self::statics(beam, load);
        vec![s.r1, s.r2, s.r3]
    }

    fn deflection_equation(&self, beam: &Beam, load: f64) -> Equation {
        let s = Self::statics(beam, load);
        let ei = beam.material().flexural_rigidity();
        Equation::new(s.total_span(), move |x| s.deflection_ei(x) / ei)
    }

    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation {
        let s = Self::statics(beam, load);
        Equation::new(s.total_span(), move |x| s.moment(x))
    }

    fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation {
        let s = Self::statics(beam, load);
        Equation::new(s.total_span(), move |x| s.shear(x))
    }

    fn validate(&self, beam: &Beam, quantity: Quantity) -> CalcResult<()> {
        beam.validate(true)?;
        if quantity == Quantity::Deflection {
            beam.material().validate_rigidity()?;
        }
        Ok(())
    }
}
