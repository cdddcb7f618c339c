//! # Error Types
//!
//! Structured error types for prop_core. Domain outcomes (a negative
//! discriminant, unparsable text) are *values* carried by
//! [`EvaluationResult`](crate::evaluator::EvaluationResult); the errors here
//! only cover misuse of the API, such as naming a formula or variable that
//! does not exist.
//!
//! ## Example
//!
//! ```rust
//! use prop_core::errors::{CalcError, CalcResult};
//! use prop_core::formulas::Formula;
//!
//! fn lookup(name: &str) -> CalcResult<Formula> {
//!     Formula::from_name(name).ok_or_else(|| CalcError::unknown_formula(name))
//! }
//!
//! assert!(lookup("C_L").is_ok());
//! assert_eq!(lookup("C_X").unwrap_err().error_code(), "UNKNOWN_FORMULA");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for prop_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for catalog and input operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// No formula with this name exists in the catalog
    #[error("Unknown formula: '{name}'")]
    UnknownFormula { name: String },

    /// The variable is not declared by the formula
    #[error("Unknown variable '{variable}' for formula {formula}")]
    UnknownVariable { formula: String, variable: String },

    /// A `name=value` assignment could not be split
    #[error("Malformed assignment '{text}': expected <variable>=<value>")]
    MalformedAssignment { text: String },

    /// An operation needs an open formula panel
    #[error("No formula panel is open")]
    NoOpenFormula,

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl CalcError {
    /// Create an UnknownFormula error
    pub fn unknown_formula(name: impl Into<String>) -> Self {
        CalcError::UnknownFormula { name: name.into() }
    }

    /// Create an UnknownVariable error
    pub fn unknown_variable(formula: impl Into<String>, variable: impl Into<String>) -> Self {
        CalcError::UnknownVariable {
            formula: formula.into(),
            variable: variable.into(),
        }
    }

    /// Create a MalformedAssignment error
    pub fn malformed_assignment(text: impl Into<String>) -> Self {
        CalcError::MalformedAssignment { text: text.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            CalcError::UnknownVariable { .. } => "UNKNOWN_VARIABLE",
            CalcError::MalformedAssignment { .. } => "MALFORMED_ASSIGNMENT",
            CalcError::NoOpenFormula => "NO_OPEN_FORMULA",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_variable("C_L", "beta");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownVariable\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_formula("X").error_code(), "UNKNOWN_FORMULA");
        assert_eq!(CalcError::malformed_assignment("x").error_code(), "MALFORMED_ASSIGNMENT");
        assert_eq!(CalcError::NoOpenFormula.error_code(), "NO_OPEN_FORMULA");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::unknown_variable("F", "beta");
        assert_eq!(error.to_string(), "Unknown variable 'beta' for formula F");
    }
}
