//! # Error Types
//!
//! Structured error types for beam_core. Every error serializes to JSON with a
//! `type` tag so API consumers can branch on the variant without parsing text.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn check_span(span: f64) -> CalcResult<()> {
//!     if span <= 0.0 || !span.is_finite() {
//!         return Err(CalcError::invalid_geometry(
//!             "primary_span",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The requested support condition has no registered analyzer
    #[error("Invalid condition: '{condition}' (available: {})", .available.join(", "))]
    InvalidCondition {
        condition: String,
        available: Vec<String>,
    },

    /// Beam geometry is unusable (non-positive or non-finite span)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A non-geometry input or setting is out of range (load, sample step)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material is missing a property the analyzer reads, or the value is unusable
    #[error("Invalid material '{material}': {reason}")]
    InvalidMaterial { material: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidCondition error
    pub fn invalid_condition(condition: impl Into<String>, available: Vec<String>) -> Self {
        CalcError::InvalidCondition {
            condition: condition.into(),
            available,
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidMaterial error
    pub fn invalid_material(material: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidMaterial {
            material: material.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix the request and try again.
    ///
    /// A bad condition name is a request problem, nothing about the engine
    /// state changes.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::InvalidCondition { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidCondition { .. } => "INVALID_CONDITION",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidMaterial { .. } => "INVALID_MATERIAL",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_condition(
            "fixed-fixed",
            vec!["simply-supported".to_string(), "two-span-unequal".to_string()],
        );
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidCondition\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_condition("x", vec![]).error_code(),
            "INVALID_CONDITION"
        );
        assert_eq!(
            CalcError::invalid_material("steel", "missing E").error_code(),
            "INVALID_MATERIAL"
        );
        assert_eq!(
            CalcError::invalid_geometry("primary_span", "0", "zero").error_code(),
            "INVALID_GEOMETRY"
        );
        assert_eq!(
            CalcError::invalid_input("load", "inf", "not finite").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_invalid_condition_message_lists_available() {
        let error = CalcError::invalid_condition("cantilever", vec!["simply-supported".into()]);
        let msg = error.to_string();
        assert!(msg.contains("cantilever"));
        assert!(msg.contains("simply-supported"));
        assert!(error.is_recoverable());
        assert!(!CalcError::serialization("bad").is_recoverable());
    }
}
