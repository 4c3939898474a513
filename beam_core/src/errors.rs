//! # Error Types
//!
//! Structured error types for beam_core. Every material and shape validates
//! its inputs when it is constructed, so a value that exists is always safe
//! to evaluate. Errors carry enough context (which material, which property,
//! what value) to explain the rejection without a stack trace.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(b_in: f64) -> CalcResult<()> {
//!     if b_in <= 0.0 {
//!         return Err(CalcError::invalid_geometry("b", b_in, "Width must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-2.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for material, section and input handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A material strength, modulus, strain or physical constant is out of range
    #[error("Invalid {material} property '{property}': {value} - {reason}")]
    InvalidMaterialProperty {
        material: String,
        property: String,
        value: String,
        reason: String,
    },

    /// A cross-section dimension is non-positive or not finite
    #[error("Invalid geometry '{dimension}': {value} - {reason}")]
    InvalidGeometry {
        dimension: String,
        value: String,
        reason: String,
    },

    /// A user-supplied value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidMaterialProperty error
    pub fn invalid_material(
        material: impl Into<String>,
        property: impl Into<String>,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidMaterialProperty {
            material: material.into(),
            property: property.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(dimension: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            dimension: dimension.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidMaterialProperty { .. } => "INVALID_MATERIAL_PROPERTY",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(material: &str, property: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        log::warn!("rejected {} {} = {}", material, property, value);
        Err(CalcError::invalid_material(
            material,
            property,
            value,
            "Must be a finite positive number",
        ))
    }
}

/// Poisson's ratio for an isotropic solid lies in [0, 0.5).
pub(crate) fn require_poisson(material: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && (0.0..0.5).contains(&value) {
        Ok(value)
    } else {
        log::warn!("rejected {} poisson_ratio = {}", material, value);
        Err(CalcError::invalid_material(
            material,
            "poisson_ratio",
            value,
            "Must be in the range [0, 0.5)",
        ))
    }
}
