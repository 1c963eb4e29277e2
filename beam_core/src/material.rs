//! # Materials
//!
//! A [`Material`] is a named, read-only bag of physical properties. Analyzers
//! pick the keys they need; the common ones are:
//!
//! - `E` - modulus of elasticity
//! - `I` - moment of inertia
//! - `EI` - flexural rigidity (takes precedence over `E`·`I` when present)
//!
//! No key is required at construction time. A missing property reads as `NaN`
//! and flows through the formulas, see [`Material::validate_rigidity`] for the
//! strict check.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::material::Material;
//!
//! let steel = Material::new("Steel", [("E", 200_000.0), ("I", 0.0001)]);
//! assert_eq!(steel.flexural_rigidity(), 20.0);
//!
//! let glulam = Material::new("Glulam", [("EI", 1.5e6)]);
//! assert_eq!(glulam.flexural_rigidity(), 1.5e6);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Property key for modulus of elasticity
pub const ELASTIC_MODULUS: &str = "E";
/// Property key for moment of inertia
pub const MOMENT_OF_INERTIA: &str = "I";
/// Property key for combined flexural rigidity
pub const FLEXURAL_RIGIDITY: &str = "EI";

/// Named material with arbitrary numeric properties.
///
/// Fields are private so a material cannot change once it is shared between beams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    name: String,
    properties: BTreeMap<String, f64>,
}

impl Material {
    /// Create a material from any iterator of `(key, value)` pairs
    pub fn new<K, I>(name: impl Into<String>, properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Material {
            name: name.into(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    /// Material name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All properties, sorted by key
    pub fn properties(&self) -> &BTreeMap<String, f64> {
        &self.properties
    }

    /// Look up a property by key
    pub fn property(&self, key: &str) -> Option<f64> {
        self.properties.get(key).copied()
    }

    /// Property value, `NaN` when absent
    pub fn property_or_nan(&self, key: &str) -> f64 {
        self.property(key).unwrap_or(f64::NAN)
    }

    /// Flexural rigidity used by the deflection formulas.
    ///
    /// `EI` when the material defines it, otherwise `E * I`. Missing keys give `NaN`.
    pub fn flexural_rigidity(&self) -> f64 {
        match self.property(FLEXURAL_RIGIDITY) {
            Some(ei) => ei,
            None => {
                self.property_or_nan(ELASTIC_MODULUS) * self.property_or_nan(MOMENT_OF_INERTIA)
            }
        }
    }

    /// Check that a usable flexural rigidity can be derived.
    ///
    /// Only deflection needs this; moment and shear are material independent.
    pub fn validate_rigidity(&self) -> CalcResult<()> {
        if self.property(FLEXURAL_RIGIDITY).is_none() {
            for key in [ELASTIC_MODULUS, MOMENT_OF_INERTIA] {
                if self.property(key).is_none() {
                    return Err(CalcError::invalid_material(
                        &self.name,
                        format!("missing property '{}' (or combined '{}')", key, FLEXURAL_RIGIDITY),
                    ));
                }
            }
        }

        let ei = self.flexural_rigidity();
        if !ei.is_finite() || ei <= 0.0 {
            return Err(CalcError::invalid_material(
                &self.name,
                format!("flexural rigidity must be positive and finite, got {}", ei),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
