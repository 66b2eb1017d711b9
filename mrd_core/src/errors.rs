//! # Error Types
//!
//! Structured error types for mrd_core. Every failure of the capacity
//! calculation is reported as one of these variants; nothing is clamped to a
//! "best guess" value, since a masked failure would yield an unsafe MRd.
//!
//! ## Example
//!
//! ```rust
//! use mrd_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mrd_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for capacity calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A material, solver or trial value is invalid
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Non-positive dimensions or a layer outside the section
    #[error("Invalid section geometry for '{field}': {value} - {reason}")]
    InvalidSectionGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A fiber or layer strain exceeds the material's ultimate strain
    #[error("Strain limit exceeded at {location}: strain {strain:.5} beyond limit {limit:.5}")]
    StrainLimitExceeded {
        location: String,
        strain: f64,
        limit: f64,
    },

    /// The neutral-axis search could not bracket a sign change of N(c)
    #[error("No equilibrium found for {sign} bending: {reason}")]
    NoEquilibriumFound { sign: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
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

    /// Create an InvalidSectionGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidSectionGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a StrainLimitExceeded error
    pub fn strain_limit_exceeded(location: impl Into<String>, strain: f64, limit: f64) -> Self {
        CalcError::StrainLimitExceeded {
            location: location.into(),
            strain,
            limit,
        }
    }

    /// Create a NoEquilibriumFound error
    pub fn no_equilibrium(sign: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NoEquilibriumFound {
            sign: sign.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Whether the failure describes the section itself (as opposed to bad input).
    ///
    /// Structural failures mean the inputs were well-formed but the section
    /// cannot develop a ductile capacity at the assumed strain profile.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            CalcError::StrainLimitExceeded { .. } | CalcError::NoEquilibriumFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidSectionGeometry { .. } => "INVALID_SECTION_GEOMETRY",
            CalcError::StrainLimitExceeded { .. } => "STRAIN_LIMIT_EXCEEDED",
            CalcError::NoEquilibriumFound { .. } => "NO_EQUILIBRIUM_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}
