//! # Analysis Reports
//!
//! An [`AnalysisReport`] is the serializable snapshot of one request: reactions,
//! the three sampled diagrams and their extremes. It is what the CLI prints and
//! saves. The equations themselves stay lazy; a report is just one sampling of
//! them at the engine's `sample_step`.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::{AnalysisReport, Beam, BeamAnalysis, Material};
//!
//! let steel = Arc::new(Material::new("Steel", [("E", 200_000.0), ("I", 0.0001)]));
//! let beam = Beam::single_span(4.0, steel);
//!
//! let report = AnalysisReport::generate(&BeamAnalysis::new(), &beam, 10.0, "simply-supported").unwrap();
//! assert_eq!(report.bending_moment.max.position, 2.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::beam::Beam;
use crate::engine::BeamAnalysis;
use crate::equation::{Point, Quantity};
use crate::errors::CalcResult;

/// Largest-magnitude sample of a diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    /// Signed value at the extreme
    #[serde(with = "crate::nullable")]
    pub value: f64,
    /// Position along the beam
    #[serde(with = "crate::nullable")]
    pub position: f64,
}

/// One sampled diagram plus its extreme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub quantity: Quantity,
    pub points: Vec<Point>,
    pub max: Extreme,
}

impl Diagram {
    /// Build from samples. Non-finite samples are kept in `points` but skipped
    /// when finding the extreme.
    pub fn from_points(quantity: Quantity, points: Vec<Point>) -> Self {
        let mut max = Extreme {
            value: 0.0,
            position: 0.0,
        };
        for p in points.iter().filter(|p| p.y.is_finite()) {
            if p.y.abs() > max.value.abs() {
                max = Extreme {
                    value: p.y,
                    position: p.x,
                };
            }
        }
        Diagram {
            quantity,
            points,
            max,
        }
    }
}

/// Serializable result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique identifier for this report
    pub id: Uuid,
    /// When the report was generated
    pub created: DateTime<Utc>,
    /// Support condition key
    pub condition: String,
    pub beam: Beam,
    #[serde(with = "crate::nullable")]
    pub load: f64,
    /// Downward-positive total load carried by the supports
    #[serde(with = "crate::nullable")]
    pub total_load: f64,
    /// Support reactions, left to right
    #[serde(with = "crate::nullable::vec")]
    pub reactions: Vec<f64>,
    /// Increment the diagrams were sampled at
    pub sample_step: f64,
    pub deflection: Diagram,
    pub bending_moment: Diagram,
    pub shear_force: Diagram,
}

impl AnalysisReport {
    /// Run all three quantities through `engine` and sample them.
    pub fn generate(
        engine: &BeamAnalysis,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> CalcResult<Self> {
        let step = engine.settings().sample_step;
        let total_span = engine.total_span(beam, condition)?;

        let diagram = |quantity: Quantity| -> CalcResult<Diagram> {
            let result = engine.get(quantity, beam, load, condition)?;
            Ok(Diagram::from_points(quantity, result.sample(step)))
        };

        Ok(AnalysisReport {
            id: Uuid::new_v4(),
            created: Utc::now(),
            condition: condition.to_string(),
            beam: beam.clone(),
            load,
            total_load: load * total_span,
            reactions: engine.reactions(beam, load, condition)?,
            sample_step: step,
            deflection: diagram(Quantity::Deflection)?,
            bending_moment: diagram(Quantity::BendingMoment)?,
            shear_force: diagram(Quantity::ShearForce)?,
        })
    }

    /// Diagram for a quantity
    pub fn diagram(&self, quantity: Quantity) -> &Diagram {
        match quantity {
            Quantity::Deflection => &self.deflection,
            Quantity::BendingMoment => &self.bending_moment,
            Quantity::ShearForce => &self.shear_force,
        }
    }

    /// Sum of reactions minus total load; ~0 for a balanced solution
    pub fn equilibrium_residual(&self) -> f64 {
        self.reactions.iter().sum::<f64>() - self.total_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{SIMPLY_SUPPORTED, TWO_SPAN_UNEQUAL};
    use crate::material::Material;
    use crate::settings::AnalysisSettings;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn steel() -> Arc<Material> {
        Arc::new(Material::new("Steel", [("E", 200_000.0), ("I", 0.0001)]))
    }

    #[test]
    fn test_simply_supported_report() {
        let beam = Beam::single_span(4.0, steel());
        let report = AnalysisReport::generate(&BeamAnalysis::new(), &beam, 10.0, SIMPLY_SUPPORTED).unwrap();

        assert_eq!(report.reactions.len(), 2);
        assert_relative_eq!(report.equilibrium_residual(), 0.0, epsilon = 1e-9);
        assert_eq!(report.bending_moment.points.len(), 41);
        assert_relative_eq!(report.bending_moment.max.value, 20.0, epsilon = 1e-9);
        assert_relative_eq!(report.shear_force.max.value.abs(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(report.deflection.max.position, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_two_span_report_hogging_governs() {
        let beam = Beam::new(3.0, 5.0, steel());
        let engine = BeamAnalysis::with_settings(AnalysisSettings::default().with_sample_step(0.5));
        let report = AnalysisReport::generate(&engine, &beam, 5.0, TWO_SPAN_UNEQUAL).unwrap();

        assert_eq!(report.reactions.len(), 3);
        assert_relative_eq!(report.equilibrium_residual(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(report.bending_moment.max.value, -11.875, epsilon = 1e-9);
        assert_relative_eq!(report.bending_moment.max.position, 3.0);
        assert_eq!(report.diagram(Quantity::ShearForce).points.first().map(|p| p.x), Some(0.0));
    }

    #[test]
    fn test_unknown_condition() {
        let beam = Beam::single_span(4.0, steel());
        assert!(AnalysisReport::generate(&BeamAnalysis::new(), &beam, 10.0, "propped").is_err());
    }

    #[test]
    fn test_serialization() {
        let beam = Beam::single_span(4.0, steel());
        let report = AnalysisReport::generate(&BeamAnalysis::new(), &beam, 10.0, SIMPLY_SUPPORTED).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, report.id);
        assert_eq!(back.condition, SIMPLY_SUPPORTED);
        assert_eq!(back.bending_moment.points.len(), report.bending_moment.points.len());
    }

    #[test]
    fn test_extreme_skips_nan() {
        let d = Diagram::from_points(
            Quantity::Deflection,
            vec![Point { x: 0.0, y: f64::NAN }, Point { x: 1.0, y: -3.0 }],
        );
        assert_eq!(d.max, Extreme { value: -3.0, position: 1.0 });
    }
}
