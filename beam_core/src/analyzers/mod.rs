//! # Support-Condition Analyzers
//!
//! Each support condition is an [`Analyzer`]: a stateless strategy that turns a
//! [`Beam`] and a uniform load into three closed-form response equations.
//!
//! ## Available Conditions
//!
//! - [`simply_supported`] - single span, pin + roller (`"simply-supported"`)
//! - [`two_span_unequal`] - continuous over three supports, `L1 ≠ L2` allowed (`"two-span-unequal"`)
//!
//! ## Sign Conventions
//!
//! - **Load**: positive downward (gravity)
//! - **Moment**: positive sagging (tension on bottom fiber)
//! - **Shear**: positive when left side moves up relative to right, `V = dM/dx`
//! - **Deflection**: positive downward, `EI·δ'' = −M`
//! - **Reactions**: positive upward
//!
//! ## Adding a Condition
//!
//! Implement [`Analyzer`] and register it with
//! [`BeamAnalysis::register`](crate::engine::BeamAnalysis::register). The facade
//! does not need to change.

pub mod simply_supported;
pub mod two_span_unequal;

pub use simply_supported::SimplySupported;
pub use two_span_unequal::TwoSpanUnequal;

use crate::beam::Beam;
use crate::equation::{Equation, Quantity};
use crate::errors::CalcResult;

/// Condition key for [`SimplySupported`]
pub const SIMPLY_SUPPORTED: &str = "simply-supported";
/// Condition key for [`TwoSpanUnequal`]
pub const TWO_SPAN_UNEQUAL: &str = "two-span-unequal";

/// Strategy for one support condition.
///
/// Implementations hold no state. Every builder reads what it needs from `beam`,
/// precomputes coefficients, and returns an [`Equation`] that owns copies of them.
pub trait Analyzer: Send + Sync {
    /// Registry key, e.g. `"simply-supported"`
    fn condition(&self) -> &'static str;

    /// Length of the evaluation domain `[0, total_span]`
    fn total_span(&self, beam: &Beam) -> f64;

    /// Support reactions, left to right (positive upward)
    fn reactions(&self, beam: &Beam, load: f64) -> Vec<f64>;

    /// Deflection curve δ(x)
    fn deflection_equation(&self, beam: &Beam, load: f64) -> Equation;

    /// Bending moment curve M(x)
    fn bending_moment_equation(&self, beam: &Beam, load: f64) -> Equation;

    /// Shear force curve V(x)
    fn shear_force_equation(&self, beam: &Beam, load: f64) -> Equation;

    /// Strict input check used when the engine runs in strict mode.
    ///
    /// The default checks the primary span, plus the material when the quantity
    /// is deflection.
    fn validate(&self, beam: &Beam, quantity: Quantity) -> CalcResult<()> {
        beam.validate(false)?;
        if quantity == Quantity::Deflection {
            beam.material().validate_rigidity()?;
        }
        Ok(())
    }

    /// Build the equation for any quantity
    fn equation(&self, beam: &Beam, load: f64, quantity: Quantity) -> Equation {
        match quantity {
            Quantity::Deflection => self.deflection_equation(beam, load),
            Quantity::BendingMoment => self.bending_moment_equation(beam, load),
            Quantity::ShearForce => self.shear_force_equation(beam, load),
        }
    }
}

/// Shared helpers for analyzer tests
#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::equation::Equation;
    use crate::material::Material;

    pub fn steel() -> Arc<Material> {
        Arc::new(Material::new("Steel", [("E", 200_000.0), ("I", 0.0001)]))
    }

    pub fn y(eq: &Equation, x: f64) -> f64 {
        eq.evaluate(x).map(|p| p.y).unwrap_or(f64::NAN)
    }

    /// Central difference of `eq` at `x`
    pub fn derivative(eq: &Equation, x: f64, h: f64) -> f64 {
        (y(eq, x + h) - y(eq, x - h)) / (2.0 * h)
    }
}
