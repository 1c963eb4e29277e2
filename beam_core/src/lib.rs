//! # beam_core - Beam Response Engine
//!
//! `beam_core` computes closed-form response curves (deflection, bending moment
//! and shear force) for beams under a uniformly distributed load. Each curve is a
//! pure function of position that can be evaluated anywhere along the span.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: analyzers hold no state, equations are pure closures
//! - **JSON-First**: beams, materials, requests, reports and errors serialize with serde
//! - **Rich Errors**: structured error types, not just strings
//! - **Open for extension**: new support conditions register behind one trait
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use beam_core::{Beam, BeamAnalysis, Material};
//!
//! let steel = Arc::new(Material::new("Steel", [("E", 200_000.0), ("I", 0.0001)]));
//! let beam = Beam::new(3.0, 5.0, steel);
//!
//! let engine = BeamAnalysis::new();
//! let shear = engine.get_shear_force(&beam, 5.0, "two-span-unequal").unwrap();
//!
//! // Sample the curve the way a chart would
//! for point in shear.sample(0.5) {
//!     println!("{:.1} {:.3}", point.x, point.y);
//! }
//! assert!(shear.equation.evaluate(9.0).is_none());
//! ```
//!
//! ## Modules
//!
//! - [`material`] - Named property bags (`E`, `I`, `EI`)
//! - [`beam`] - Span geometry sharing a material
//! - [`equation`] - Lazily evaluated response curves and sampling
//! - [`analyzers`] - Per-condition closed-form strategies
//! - [`engine`] - Condition registry and dispatch facade
//! - [`report`] - Sampled, serializable analysis snapshots
//! - [`request`] - JSON request format
//! - [`settings`] - Engine options
//! - [`file_io`] - JSON file loading and atomic saves
//! - [`nullable`] - `null`-for-`NaN` serde adapters
//! - [`errors`] - Structured error types

pub mod analyzers;
pub mod beam;
pub mod engine;
pub mod equation;
pub mod errors;
pub mod file_io;
pub mod material;
pub mod nullable;
pub mod report;
pub mod request;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use analyzers::{Analyzer, SIMPLY_SUPPORTED, TWO_SPAN_UNEQUAL};
pub use beam::Beam;
pub use engine::BeamAnalysis;
pub use equation::{Equation, EquationResult, Point, Quantity};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_request, load_settings, save_report};
pub use material::Material;
pub use report::AnalysisReport;
pub use request::AnalysisRequest;
pub use settings::AnalysisSettings;
