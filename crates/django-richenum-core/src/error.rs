//! Core error types for django-richenum.
//!
//! [`DjangoError`] covers the failures an ORM field can surface: type
//! mismatches during value conversion, enum lookup failures, validation
//! errors, and configuration problems. It mirrors the exception classes a
//! Django field raises (`TypeError`, `LookupError`, `ValidationError`,
//! `ImproperlyConfigured`).

use std::collections::HashMap;
use std::fmt;

use richenum::{EnumConstructionError, EnumLookupError};
use thiserror::Error;

/// Represents a validation error with optional field-level errors.
///
/// Validation errors can be either simple (a single message) or compound
/// (containing per-field error lists), mirroring Django's `ValidationError`.
///
/// # Examples
///
/// ```
/// use django_richenum_core::error::ValidationError;
///
/// let err = ValidationError::new("Value 7 is not a valid choice.", "invalid_choice")
///     .with_param("value", "7");
/// assert_eq!(err.code, "invalid_choice");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The primary error message.
    pub message: String,
    /// A short code identifying the type of validation failure (e.g. "invalid_choice").
    pub code: String,
    /// Additional parameters providing context for the error message.
    pub params: HashMap<String, String>,
    /// Per-field validation errors, keyed by field name.
    pub field_errors: HashMap<String, Vec<Self>>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
            field_errors: HashMap::new(),
        }
    }

    /// Creates a `ValidationError` containing per-field errors.
    pub fn with_field_errors(field_errors: HashMap<String, Vec<Self>>) -> Self {
        Self {
            message: String::new(),
            code: String::new(),
            params: HashMap::new(),
            field_errors,
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.message.is_empty() {
            write!(f, "{}", self.message)?;
        } else if !self.field_errors.is_empty() {
            let mut first = true;
            for (field, errors) in &self.field_errors {
                for error in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{field}: {error}")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The error type returned by fields, settings loading, and row access.
#[derive(Error, Debug)]
pub enum DjangoError {
    // ── Conversion ───────────────────────────────────────────────────

    /// A value of the wrong type reached a field conversion, or a field was
    /// declared with an enum type it cannot work with.
    #[error("TypeError: {0}")]
    TypeError(String),

    /// An enum lookup (by index, canonical name, or display name) found no member.
    #[error("Lookup error: {0}")]
    LookupError(String),

    // ── ORM ──────────────────────────────────────────────────────────

    /// A generic database error (missing column, malformed row).
    #[error("Database error: {0}")]
    DatabaseError(String),

    // ── Validation ───────────────────────────────────────────────────

    /// One or more fields failed validation.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A field or enum was declared inconsistently.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DjangoError {
    /// Returns `true` for errors raised by a value conversion
    /// (`TypeError` or `LookupError`).
    pub const fn is_conversion_error(&self) -> bool {
        matches!(self, Self::TypeError(_) | Self::LookupError(_))
    }
}

impl From<EnumLookupError> for DjangoError {
    fn from(err: EnumLookupError) -> Self {
        Self::LookupError(err.to_string())
    }
}

impl From<EnumConstructionError> for DjangoError {
    fn from(err: EnumConstructionError) -> Self {
        Self::ImproperlyConfigured(err.to_string())
    }
}

impl From<ValidationError> for DjangoError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err)
    }
}

/// A convenience type alias for `Result<T, DjangoError>`.
pub type DjangoResult<T> = Result<T, DjangoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_simple() {
        let err = ValidationError::new("This field cannot be null.", "null");
        assert_eq!(err.to_string(), "This field cannot be null.");
    }

    #[test]
    fn test_validation_error_display_field_errors() {
        let mut field_errors = HashMap::new();
        field_errors.insert(
            "color".to_string(),
            vec![ValidationError::new("Invalid choice.", "invalid_choice")],
        );
        let err = ValidationError::with_field_errors(field_errors);
        assert!(err.to_string().contains("color: Invalid choice."));
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("Out of range.", "max_value").with_param("max", "32767");
        assert_eq!(err.params.get("max").unwrap(), "32767");
    }

    #[test]
    fn test_type_error_display() {
        let err = DjangoError::TypeError("Cannot convert value: 1.5 (float) to an int.".into());
        assert_eq!(
            err.to_string(),
            "TypeError: Cannot convert value: 1.5 (float) to an int."
        );
        assert!(err.is_conversion_error());
    }

    #[test]
    fn test_lookup_error_from_enum_library() {
        let err: DjangoError = EnumLookupError::new("Color", "index", "9").into();
        assert!(matches!(err, DjangoError::LookupError(_)));
        assert!(err.to_string().contains("Color"));
        assert!(err.is_conversion_error());
    }

    #[test]
    fn test_construction_error_is_improperly_configured() {
        let err: DjangoError = EnumConstructionError::DuplicateIndex {
            enum_name: "Color".into(),
            index: 0,
        }
        .into();
        assert!(matches!(err, DjangoError::ImproperlyConfigured(_)));
        assert!(!err.is_conversion_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DjangoError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }
}
