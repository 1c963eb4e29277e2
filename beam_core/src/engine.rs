//! # Analysis Engine
//!
//! [`BeamAnalysis`] is the facade over the registered analyzers. It maps a
//! condition name to an [`Analyzer`], rejects unknown names with
//! [`CalcError::InvalidCondition`], and packages each equation with the beam and
//! load it was built for.
//!
//! Nothing is cached: every call builds a fresh equation.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::beam::Beam;
//! use beam_core::engine::BeamAnalysis;
//! use beam_core::material::Material;
//!
//! let steel = Arc::new(Material::new("Steel", [("E", 200_000.0), ("I", 0.0001)]));
//! let beam = Beam::single_span(4.0, steel);
//!
//! let engine = BeamAnalysis::new();
//! let moment = engine.get_bending_moment(&beam, 10.0, "simply-supported").unwrap();
//! assert_eq!(moment.equation.evaluate(2.0).unwrap().y, 20.0);
//!
//! assert!(engine.get_shear_force(&beam, 10.0, "fixed-fixed").is_err());
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::analyzers::{Analyzer, SimplySupported, TwoSpanUnequal};
use crate::beam::Beam;
use crate::equation::{EquationResult, Quantity};
use crate::errors::{CalcError, CalcResult};
use crate::settings::AnalysisSettings;

static SHARED: Lazy<BeamAnalysis> = Lazy::new(BeamAnalysis::new);

/// Condition registry and dispatch facade.
#[derive(Clone)]
pub struct BeamAnalysis {
    analyzers: BTreeMap<String, Arc<dyn Analyzer>>,
    settings: AnalysisSettings,
}

impl BeamAnalysis {
    /// Engine with the built-in conditions and default settings
    pub fn new() -> Self {
        Self::with_settings(AnalysisSettings::default())
    }

    /// Engine with the built-in conditions and custom settings
    pub fn with_settings(settings: AnalysisSettings) -> Self {
        let mut engine = Self::empty(settings);
        engine.register(SimplySupported);
        engine.register(TwoSpanUnequal);
        engine
    }

    /// Engine with no conditions registered
    pub fn empty(settings: AnalysisSettings) -> Self {
        BeamAnalysis {
            analyzers: BTreeMap::new(),
            settings,
        }
    }

    /// Process-wide engine with default settings
    pub fn shared() -> &'static BeamAnalysis {
        &SHARED
    }

    /// Register an analyzer under its condition key, replacing any previous one.
    pub fn register<A: Analyzer + 'static>(&mut self, analyzer: A) -> &mut Self {
        let key = analyzer.condition();
        debug!("registering analyzer '{}'", key);
        if self
            .analyzers
            .insert(key.to_string(), Arc::new(analyzer))
            .is_some()
        {
            warn!("analyzer '{}' replaced an existing registration", key);
        }
        self
    }

    /// Registered condition keys, sorted
    pub fn conditions(&self) -> Vec<String> {
        self.analyzers.keys().cloned().collect()
    }

    /// Current settings
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Look up an analyzer by condition key
    pub fn analyzer(&self, condition: &str) -> CalcResult<&Arc<dyn Analyzer>> {
        self.analyzers.get(condition).ok_or_else(|| {
            warn!("rejected unknown condition '{}'", condition);
            CalcError::invalid_condition(condition, self.conditions())
        })
    }

    /// Deflection curve for `beam` under `load`
    pub fn get_deflection(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<EquationResult> {
        self.get(Quantity::Deflection, beam, load, condition)
    }

    /// Bending moment curve for `beam` under `load`
    pub fn get_bending_moment(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<EquationResult> {
        self.get(Quantity::BendingMoment, beam, load, condition)
    }

    /// Shear force curve for `beam` under `load`
    pub fn get_shear_force(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<EquationResult> {
        self.get(Quantity::ShearForce, beam, load, condition)
    }

    /// Any quantity by enum
    pub fn get(
        &self,
        quantity: Quantity,
        beam: &Beam,
        load: f64,
        condition: &str,
    ) -> CalcResult<EquationResult> {
        let analyzer = self.analyzer(condition)?;
        self.check_inputs(analyzer.as_ref(), beam, load, quantity)?;

        debug!("building {} equation for '{}' (load {})", quantity, condition, load);
        Ok(EquationResult {
            beam: beam.clone(),
            load,
            quantity,
            equation: analyzer.equation(beam, load, quantity),
        })
    }

    /// Support reactions, left to right
    pub fn reactions(&self, beam: &Beam, load: f64, condition: &str) -> CalcResult<Vec<f64>> {
        let analyzer = self.analyzer(condition)?;
        self.check_inputs(analyzer.as_ref(), beam, load, Quantity::ShearForce)?;
        Ok(analyzer.reactions(beam, load))
    }

    /// Evaluation domain length for `beam` under `condition`
    pub fn total_span(&self, beam: &Beam, condition: &str) -> CalcResult<f64> {
        Ok(self.analyzer(condition)?.total_span(beam))
    }

    fn check_inputs(
        &self,
        analyzer: &dyn Analyzer,
        beam: &Beam,
        load: f64,
        quantity: Quantity,
    ) -> CalcResult<()> {
        if self.settings.strict {
            analyzer.validate(beam, quantity)?;
            if !load.is_finite() {
                return Err(CalcError::invalid_input(
                    "load",
                    load.to_string(),
                    "Load must be finite",
                ));
            }
        } else if !load.is_finite() || !analyzer.total_span(beam).is_finite() {
            warn!(
                "non-finite input for '{}': load={}, span={}",
                analyzer.condition(),
                load,
                analyzer.total_span(beam)
            );
        }
        Ok(())
    }
}

impl Default for BeamAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BeamAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeamAnalysis")
            .field("conditions", &self.conditions())
            .field("settings", &self.settings)
            .finish()
    }
}
