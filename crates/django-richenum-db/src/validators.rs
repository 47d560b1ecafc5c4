//! Field validators for the ORM.
//!
//! Validators run on the *storage* value of a field (for enum fields, the
//! integer index) during [`EnumField::clean`](crate::fields::EnumField::clean).

use std::fmt;
use std::sync::Arc;

use django_richenum_core::{DjangoError, ValidationError};
use richenum::OrderedRichEnum;

use crate::fields::FieldType;
use crate::value::Value;

/// A trait for validating field values.
///
/// # Examples
///
/// ```
/// use django_richenum_db::fields::FieldType;
/// use django_richenum_db::validators::{IntegerRangeValidator, Validator};
/// use django_richenum_db::value::Value;
///
/// let v = IntegerRangeValidator::for_field_type(FieldType::SmallIntegerField);
/// assert!(v.validate(&Value::Int(3)).is_ok());
/// assert!(v.validate(&Value::Int(40_000)).is_err());
/// ```
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates the given value, returning an error if invalid.
    fn validate(&self, value: &Value) -> Result<(), DjangoError>;

    /// Returns a human-readable name for this validator.
    fn name(&self) -> &str;
}

/// Validates that a stored integer is the index of a member of an enum.
#[derive(Debug, Clone)]
pub struct EnumIndexValidator {
    enum_type: Arc<OrderedRichEnum>,
}

impl EnumIndexValidator {
    /// Creates a validator for the members of `enum_type`.
    pub const fn new(enum_type: Arc<OrderedRichEnum>) -> Self {
        Self { enum_type }
    }
}

impl Validator for EnumIndexValidator {
    fn validate(&self, value: &Value) -> Result<(), DjangoError> {
        if let Value::Int(index) = value {
            if self.enum_type.from_index(*index).is_err() {
                return Err(ValidationError::new(
                    format!(
                        "Value {index} is not a valid choice for {}.",
                        self.enum_type.name()
                    ),
                    "invalid_choice",
                )
                .with_param("value", index.to_string())
                .into());
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "EnumIndexValidator"
    }
}

/// Validates that an integer fits the column it will be written to.
#[derive(Debug, Clone, Copy)]
pub struct IntegerRangeValidator {
    /// The smallest accepted value.
    pub min: i64,
    /// The largest accepted value.
    pub max: i64,
}

impl IntegerRangeValidator {
    /// Creates a validator accepting `min..=max`.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Creates a validator for the range of the given integer column type.
    pub const fn for_field_type(field_type: FieldType) -> Self {
        let (min, max) = field_type.value_range();
        Self::new(min, max)
    }
}

impl Validator for IntegerRangeValidator {
    fn validate(&self, value: &Value) -> Result<(), DjangoError> {
        if let Value::Int(i) = value {
            if *i < self.min {
                return Err(ValidationError::new(
                    format!("Ensure this value is greater than or equal to {}.", self.min),
                    "min_value",
                )
                .with_param("limit_value", self.min.to_string())
                .into());
            }
            if *i > self.max {
                return Err(ValidationError::new(
                    format!("Ensure this value is less than or equal to {}.", self.max),
                    "max_value",
                )
                .with_param("limit_value", self.max.to_string())
                .into());
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "IntegerRangeValidator"
    }
}
