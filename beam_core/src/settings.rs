//! # Analysis Settings
//!
//! Engine-wide options. Settings serialize as JSON; every field has a default, so
//! a partial file such as `{ "strict": true }` is valid.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default sampling increment, matching the charting step the curves are drawn at
pub const DEFAULT_SAMPLE_STEP: f64 = 0.1;

/// Smallest sampling increment accepted from settings
pub const MIN_SAMPLE_STEP: f64 = 1e-6;

/// Options applied by [`BeamAnalysis`](crate::engine::BeamAnalysis) and report generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Increment used when sampling diagrams for reports
    pub sample_step: f64,

    /// Validate beam geometry and material before building equations.
    ///
    /// Off by default: bad inputs then surface as `NaN`/`inf` in the curves.
    pub strict: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            sample_step: DEFAULT_SAMPLE_STEP,
            strict: false,
        }
    }
}

impl AnalysisSettings {
    /// Settings with strict validation turned on
    pub fn strict() -> Self {
        AnalysisSettings {
            strict: true,
            ..Default::default()
        }
    }

    /// Builder-style sample step override
    pub fn with_sample_step(mut self, step: f64) -> Self {
        self.sample_step = step;
        self
    }

    /// Check the settings themselves
    pub fn validate(&self) -> CalcResult<()> {
        if !self.sample_step.is_finite() || self.sample_step < MIN_SAMPLE_STEP {
            return Err(CalcError::invalid_input(
                "sample_step",
                self.sample_step.to_string(),
                format!("Sample step must be finite and at least {}", MIN_SAMPLE_STEP),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AnalysisSettings::default();
        assert_eq!(s.sample_step, 0.1);
        assert!(!s.strict);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s: AnalysisSettings = serde_json::from_str(r#"{ "strict": true }"#).unwrap();
        assert!(s.strict);
        assert_eq!(s.sample_step, DEFAULT_SAMPLE_STEP);
    }

    #[test]
    fn test_bad_step_rejected() {
        assert!(AnalysisSettings::default().with_sample_step(0.0).validate().is_err());
        assert!(AnalysisSettings::strict().with_sample_step(0.25).validate().is_ok());
    }

    #[test]
    fn test_tiny_step_rejected() {
        let err = AnalysisSettings::default()
            .with_sample_step(1e-300)
            .validate()
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(AnalysisSettings::default()
            .with_sample_step(MIN_SAMPLE_STEP)
            .validate()
            .is_ok());
    }
}
