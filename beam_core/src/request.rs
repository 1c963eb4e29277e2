//! # Analysis Requests
//!
//! JSON input format accepted by the CLI and any other front-end:
//!
//! ```json
//! {
//!   "condition": "two-span-unequal",
//!   "load": 5.0,
//!   "beam": {
//!     "primary_span": 3.0,
//!     "secondary_span": 5.0,
//!     "material": { "name": "Steel", "properties": { "E": 200000.0, "I": 0.0001 } }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::analyzers::SIMPLY_SUPPORTED;
use crate::beam::Beam;
use crate::engine::BeamAnalysis;
use crate::errors::CalcResult;
use crate::report::AnalysisReport;

fn default_condition() -> String {
    SIMPLY_SUPPORTED.to_string()
}

/// One beam, one load, one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Support condition key; `"simply-supported"` when omitted
    #[serde(default = "default_condition")]
    pub condition: String,
    /// Uniform load, positive downward
    pub load: f64,
    pub beam: Beam,
}

impl AnalysisRequest {
    pub fn new(beam: Beam, load: f64, condition: impl Into<String>) -> Self {
        AnalysisRequest {
            condition: condition.into(),
            load,
            beam,
        }
    }

    /// Generate the full report for this request
    pub fn run(&self, engine: &BeamAnalysis) -> CalcResult<AnalysisReport> {
        AnalysisReport::generate(engine, &self.beam, self.load, &self.condition)
    }
}
