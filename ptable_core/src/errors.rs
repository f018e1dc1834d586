//! # Error Types
//!
//! Structured error types for ptable_core. Lookup errors carry the offending
//! field and value so callers can report exactly which input was rejected.
//! Load errors (schema, dataset, asset) are fatal: no table is cached when one
//! of them occurs.
//!
//! ## Example
//!
//! ```rust
//! use ptable_core::errors::{TableError, TableResult};
//!
//! fn validate_period(period: u32) -> TableResult<()> {
//!     if !(1..=8).contains(&period) {
//!         return Err(TableError::out_of_range("period", period, 1, 8));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_period(9).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ptable_core operations
pub type TableResult<T> = Result<T, TableError>;

/// Structured error type for dataset loading and lookups.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TableError {
    /// A required input string is empty
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    /// A numeric input lies outside its documented bounds
    #[error("Value {value} for '{field}' is out of range (expected {min}..={max})")]
    OutOfRange {
        field: String,
        value: u32,
        min: u32,
        max: u32,
    },

    /// No substance matches the given key
    #[error("No substance with {key} '{value}'")]
    NotFound { key: String, value: String },

    /// The embedded document does not conform to the embedded schema
    #[error("Periodic table failed schema validation: {}", .errors.join("; "))]
    SchemaValidation { errors: Vec<String> },

    /// The document is not usable even though it passed validation
    /// (malformed JSON, duplicate keys across records, etc.)
    #[error("Invalid periodic table dataset: {reason}")]
    InvalidDataset { reason: String },

    /// An embedded resource could not be found
    #[error("Embedded asset not found: {path}")]
    MissingAsset { path: String },
}

impl TableError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TableError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: u32, min: u32, max: u32) -> Self {
        TableError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Create a NotFound error
    pub fn not_found(key: impl Into<String>, value: impl ToString) -> Self {
        TableError::NotFound {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// Create a SchemaValidation error
    pub fn schema_validation(errors: Vec<String>) -> Self {
        TableError::SchemaValidation { errors }
    }

    /// Create an InvalidDataset error
    pub fn invalid_dataset(reason: impl Into<String>) -> Self {
        TableError::InvalidDataset {
            reason: reason.into(),
        }
    }

    /// Create a MissingAsset error
    pub fn missing_asset(path: impl Into<String>) -> Self {
        TableError::MissingAsset { path: path.into() }
    }

    /// Check if this error comes from loading the dataset rather than from a query.
    ///
    /// Fatal errors mean the table is unavailable for the rest of the process.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TableError::SchemaValidation { .. }
                | TableError::InvalidDataset { .. }
                | TableError::MissingAsset { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            TableError::OutOfRange { .. } => "OUT_OF_RANGE",
            TableError::NotFound { .. } => "NOT_FOUND",
            TableError::SchemaValidation { .. } => "SCHEMA_VALIDATION",
            TableError::InvalidDataset { .. } => "INVALID_DATASET",
            TableError::MissingAsset { .. } => "MISSING_ASSET",
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::invalid_dataset(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TableError::out_of_range("atomic_number", 120, 1, 119);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"OutOfRange\""));
        let roundtrip: TableError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TableError::invalid_argument("name", "empty").error_code(), "INVALID_ARGUMENT");
        assert_eq!(TableError::not_found("name", "Unobtainium").error_code(), "NOT_FOUND");
        assert_eq!(TableError::missing_asset("x.json").error_code(), "MISSING_ASSET");
    }

    #[test]
    fn test_fatal_errors() {
        assert!(TableError::schema_validation(vec!["bad".to_string()]).is_fatal());
        assert!(TableError::invalid_dataset("dup").is_fatal());
        assert!(!TableError::not_found("symbol", "Xx").is_fatal());
        assert!(!TableError::out_of_range("group", 19, 1, 18).is_fatal());
    }

    #[test]
    fn test_error_messages() {
        let err = TableError::not_found("name", "Unobtainium");
        assert_eq!(err.to_string(), "No substance with name 'Unobtainium'");

        let err = TableError::schema_validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Periodic table failed schema validation: a; b");
    }

    #[test]
    fn test_json_error_converts_to_invalid_dataset() {
        let err: TableError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, TableError::InvalidDataset { .. }));
    }
}
