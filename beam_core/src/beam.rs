//! # Beam Geometry
//!
//! A [`Beam`] is span geometry plus a shared [`Material`]. Spans are in whatever
//! length unit the caller uses consistently with the load and material.
//!
//! ```text
//!    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
//!    ══════════════╤═════════════════
//!    △             △                 △
//!    ←── primary ──→←── secondary ──→
//! ```
//!
//! `secondary_span` is only read by multi-span conditions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::material::Material;

/// Immutable beam geometry referencing a shared material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    #[serde(with = "crate::nullable")]
    primary_span: f64,
    #[serde(default, with = "crate::nullable")]
    secondary_span: f64,
    material: Arc<Material>,
}

impl Beam {
    /// Create a beam. No validation is done here; see [`Beam::validate`].
    pub fn new(primary_span: f64, secondary_span: f64, material: Arc<Material>) -> Self {
        Beam {
            primary_span,
            secondary_span,
            material,
        }
    }

    /// Single-span beam (secondary span = 0)
    pub fn single_span(span: f64, material: Arc<Material>) -> Self {
        Self::new(span, 0.0, material)
    }

    /// Primary span length
    pub fn primary_span(&self) -> f64 {
        self.primary_span
    }

    /// Secondary span length (0 for single-span beams)
    pub fn secondary_span(&self) -> f64 {
        self.secondary_span
    }

    /// Shared material
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Primary plus secondary span
    pub fn combined_span(&self) -> f64 {
        self.primary_span + self.secondary_span
    }

    /// Check span invariants.
    ///
    /// `primary_span` must be positive and finite. `secondary_span` must be finite and
    /// non-negative, or strictly positive when `needs_secondary` is set.
    pub fn validate(&self, needs_secondary: bool) -> CalcResult<()> {
        if !self.primary_span.is_finite() || self.primary_span <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "primary_span",
                self.primary_span.to_string(),
                "Span must be positive and finite",
            ));
        }

        let secondary_ok = if needs_secondary {
            self.secondary_span > 0.0
        } else {
            self.secondary_span >= 0.0
        };
        if !self.secondary_span.is_finite() || !secondary_ok {
            let reason = if needs_secondary {
                "Multi-span conditions need a positive, finite secondary span"
            } else {
                "Secondary span must be non-negative and finite"
            };
            return Err(CalcError::invalid_geometry(
                "secondary_span",
                self.secondary_span.to_string(),
                reason,
            ));
        }
        Ok(())
    }
}
