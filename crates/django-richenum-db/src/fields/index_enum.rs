//! Integer-backed fields for ordered rich enums.
//!
//! [`IndexEnumField`] stores the index of an [`OrderedRichEnumValue`] in an
//! integer column and hands the member back when the row is read.
//! [`LaxIndexEnumField`] also accepts the member's canonical name.
//!
//! ```
//! use django_richenum_db::fields::{EnumField, IndexEnumField};
//! use django_richenum_db::value::Value;
//! use richenum::OrderedRichEnum;
//!
//! let color = OrderedRichEnum::builder("Color")
//!     .member(0, "red", "Red")
//!     .member(1, "blue", "Blue")
//!     .build()
//!     .unwrap();
//! let blue = color.from_canonical("blue").unwrap().clone();
//!
//! let field = IndexEnumField::new("color", color).unwrap();
//! assert_eq!(field.get_prep_value(&Value::Enum(blue)).unwrap(), Value::Int(1));
//!
//! let lax = field.lax();
//! assert_eq!(lax.get_prep_value(&Value::from("blue")).unwrap(), Value::Int(1));
//! ```

use std::fmt;
use std::sync::Arc;

use django_richenum_core::{DjangoError, DjangoResult, ValidationError, SETTINGS};
use richenum::{EnumType, OrderedRichEnum, OrderedRichEnumValue};
use serde::{Deserialize, Serialize};

use super::types::{FieldDef, FieldType};
use crate::row::Row;
use crate::validators::{EnumIndexValidator, IntegerRangeValidator, Validator};
use crate::value::Value;

/// Human-readable description shared by both enum fields.
pub const DESCRIPTION: &str = "Efficient storage for OrderedRichEnums";

/// The conversions the ORM performs on an enum field.
///
/// `get_prep_value` runs on the way into the database and `to_python` on
/// the way out; [`from_row`](EnumField::from_row) and
/// [`clean`](EnumField::clean) route every assignment through `to_python`.
pub trait EnumField: Send + Sync + fmt::Debug {
    /// The enum this field stores.
    fn enum_type(&self) -> &Arc<OrderedRichEnum>;

    /// The pass-through field options.
    fn field_def(&self) -> &FieldDef;

    /// Whether canonical names are accepted as input.
    fn is_lax(&self) -> bool;

    /// Whether enum values from other enums are rejected.
    fn is_strict(&self) -> bool;

    /// Converts a value to its storage form: `Null` or `Int(index)`.
    fn get_prep_value(&self, value: &Value) -> DjangoResult<Value>;

    /// Converts a value to its in-memory form: `Null` or `Enum(member)`.
    fn to_python(&self, value: &Value) -> DjangoResult<Value>;

    /// Human-readable description of the field type.
    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    /// Returns `true` if a default value is configured.
    fn has_default(&self) -> bool {
        self.field_def().default.is_some()
    }

    /// Returns the configured default exactly as given, or `Null`.
    fn get_default(&self) -> Value {
        self.field_def().default.clone().unwrap_or(Value::Null)
    }

    /// `(Int(index), display_name)` pairs for every member, by index.
    fn choices(&self) -> Vec<(Value, String)> {
        self.enum_type()
            .members()
            .iter()
            .map(|m| (Value::Int(m.index), m.display_name.clone()))
            .collect()
    }

    /// Reads this field's column from a row and converts it to its
    /// in-memory form.
    fn from_row(&self, row: &Row) -> DjangoResult<Value> {
        let column = &self.field_def().column;
        let raw = row.get_value(column).ok_or_else(|| {
            DjangoError::DatabaseError(format!("Column '{column}' not found in row"))
        })?;
        self.to_python(raw)
    }

    /// Converts an assigned value and validates it.
    ///
    /// Rejects `Null` on non-nullable fields, then runs the column range
    /// check and every configured validator against the storage value.
    /// Returns the in-memory value.
    fn clean(&self, value: &Value) -> DjangoResult<Value> {
        let def = self.field_def();
        let value = self.to_python(value)?;
        if value.is_null() {
            if def.null {
                return Ok(Value::Null);
            }
            return Err(ValidationError::new("This field cannot be null.", "null")
                .with_param("field", def.name)
                .into());
        }

        let stored = self.get_prep_value(&value)?;
        IntegerRangeValidator::for_field_type(def.field_type).validate(&stored)?;
        for validator in &def.validators {
            validator.validate(&stored)?;
        }
        Ok(value)
    }

    /// Converts a value and extracts the enum member, if any.
    fn to_enum(&self, value: &Value) -> DjangoResult<Option<OrderedRichEnumValue>> {
        Ok(match self.to_python(value)? {
            Value::Enum(member) => Some(member),
            _ => None,
        })
    }

    /// Describes this field for migration tooling.
    fn deconstruct(&self) -> FieldDescriptor {
        let def = self.field_def();
        FieldDescriptor {
            name: def.name.to_string(),
            column: def.column.clone(),
            field_type: def.field_type,
            enum_name: self.enum_type().name().to_string(),
            lax: self.is_lax(),
            strict: self.is_strict(),
            null: def.null,
            default: def.default.clone(),
        }
    }
}

/// Serializable description of an enum field, as recorded by migrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The field's attribute name.
    pub name: String,
    /// The database column.
    pub column: String,
    /// The integer column type.
    pub field_type: FieldType,
    /// The name of the stored enum.
    pub enum_name: String,
    /// Whether canonical names are accepted.
    pub lax: bool,
    /// Whether foreign enum members are rejected.
    pub strict: bool,
    /// Whether NULL is allowed.
    pub null: bool,
    /// The configured default, if any.
    pub default: Option<Value>,
}

// ── IndexEnumField ─────────────────────────────────────────────────────

/// Stores ints in the database, exposes [`OrderedRichEnumValue`]s in Rust.
#[derive(Debug)]
pub struct IndexEnumField {
    enum_type: Arc<OrderedRichEnum>,
    def: FieldDef,
    strict: bool,
}

impl IndexEnumField {
    /// Declares an enum field.
    ///
    /// # Errors
    ///
    /// Returns [`DjangoError::ImproperlyConfigured`] if `enum_type` does not
    /// support index-based lookup.
    pub fn new(name: &'static str, enum_type: impl Into<EnumType>) -> DjangoResult<Self> {
        let enum_type = enum_type.into();
        let Some(ordered) = enum_type.as_ordered().cloned() else {
            tracing::warn!(field = name, enum_type = %enum_type, "enum type has no index lookup");
            return Err(DjangoError::ImproperlyConfigured(format!(
                "{enum_type} doesn't support index-based lookup."
            )));
        };

        let mut def = FieldDef::new(name, FieldType::IntegerField);
        def.choices = Some(
            ordered
                .members()
                .iter()
                .map(|m| (Value::Int(m.index), m.display_name.clone()))
                .collect(),
        );
        def.validators
            .push(Box::new(EnumIndexValidator::new(Arc::clone(&ordered))));

        let strict = SETTINGS.try_get().is_some_and(|s| s.strict_enum_members);
        tracing::debug!(
            field = name,
            enum_type = ordered.name(),
            members = ordered.len(),
            strict,
            "declared index enum field"
        );

        Ok(Self {
            enum_type: ordered,
            def,
            strict,
        })
    }

    /// Turns this field into a [`LaxIndexEnumField`] with the same options.
    pub fn lax(self) -> LaxIndexEnumField {
        LaxIndexEnumField { inner: self }
    }

    /// Sets the database column name.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.def = self.def.column(column);
        self
    }

    /// Allows NULL values in the database.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.def = self.def.nullable();
        self
    }

    /// Allows the field to be left blank in forms.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.def = self.def.blank();
        self
    }

    /// Marks this field as having a database index.
    #[must_use]
    pub fn db_index(mut self) -> Self {
        self.def = self.def.db_index();
        self
    }

    /// Marks this field as having a UNIQUE constraint.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.def = self.def.unique();
        self
    }

    /// Sets the default value. It is returned by `get_default` unchanged.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.def = self.def.default(value);
        self
    }

    /// Sets the verbose (human-readable) name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.def = self.def.verbose_name(name);
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.def = self.def.help_text(text);
        self
    }

    /// Appends a validator, run by `clean` after the built-in ones.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.def = self.def.validator(validator);
        self
    }

    /// Stores the index in a different integer column type.
    #[must_use]
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.def.field_type = field_type;
        self
    }

    /// Overrides the `strict_enum_members` setting for this field.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn check_member(&self, member: &OrderedRichEnumValue) -> DjangoResult<()> {
        if self.strict && !self.enum_type.contains(member) {
            tracing::debug!(
                field = self.def.name,
                member = %member.canonical_name,
                "rejected member of another enum"
            );
            return Err(DjangoError::TypeError(format!(
                "{} is not a member of {}.",
                member.canonical_name,
                self.enum_type.name()
            )));
        }
        Ok(())
    }
}

impl EnumField for IndexEnumField {
    fn enum_type(&self) -> &Arc<OrderedRichEnum> {
        &self.enum_type
    }

    fn field_def(&self) -> &FieldDef {
        &self.def
    }

    fn is_lax(&self) -> bool {
        false
    }

    fn is_strict(&self) -> bool {
        self.strict
    }

    fn get_prep_value(&self, value: &Value) -> DjangoResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Enum(member) => {
                self.check_member(member)?;
                Ok(Value::Int(member.index))
            }
            Value::Int(i) => Ok(Value::Int(*i)),
            other => {
                tracing::debug!(field = self.def.name, value_type = other.type_name(), "cannot prep value");
                Err(DjangoError::TypeError(format!(
                    "Cannot convert value: {other} ({}) to an int.",
                    other.type_name()
                )))
            }
        }
    }

    fn to_python(&self, value: &Value) -> DjangoResult<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Enum(member) => {
                self.check_member(member)?;
                Ok(value.clone())
            }
            Value::Int(i) => Ok(Value::Enum(self.enum_type.from_index(*i)?.clone())),
            other => {
                tracing::debug!(field = self.def.name, value_type = other.type_name(), "cannot interpret value");
                Err(DjangoError::TypeError(format!(
                    "Cannot interpret {other} ({}) as an OrderedRichEnumValue.",
                    other.type_name()
                )))
            }
        }
    }
}

// ── LaxIndexEnumField ──────────────────────────────────────────────────

/// Like [`IndexEnumField`], but also converts to and from canonical names.
///
/// Strings are resolved with `from_canonical`; every other value gets the
/// [`IndexEnumField`] treatment.
#[derive(Debug)]
pub struct LaxIndexEnumField {
    inner: IndexEnumField,
}

impl LaxIndexEnumField {
    /// Declares a lax enum field. Further options are set on an
    /// [`IndexEnumField`] before calling [`IndexEnumField::lax`].
    ///
    /// # Errors
    ///
    /// Returns [`DjangoError::ImproperlyConfigured`] if `enum_type` does not
    /// support index-based lookup.
    pub fn new(name: &'static str, enum_type: impl Into<EnumType>) -> DjangoResult<Self> {
        Ok(IndexEnumField::new(name, enum_type)?.lax())
    }

    /// The strict counterpart this field defers to.
    pub const fn inner(&self) -> &IndexEnumField {
        &self.inner
    }
}

impl From<IndexEnumField> for LaxIndexEnumField {
    fn from(inner: IndexEnumField) -> Self {
        inner.lax()
    }
}

impl EnumField for LaxIndexEnumField {
    fn enum_type(&self) -> &Arc<OrderedRichEnum> {
        self.inner.enum_type()
    }

    fn field_def(&self) -> &FieldDef {
        self.inner.field_def()
    }

    fn is_lax(&self) -> bool {
        true
    }

    fn is_strict(&self) -> bool {
        self.inner.is_strict()
    }

    fn get_prep_value(&self, value: &Value) -> DjangoResult<Value> {
        if let Value::String(name) = value {
            return Ok(Value::Int(self.enum_type().from_canonical(name)?.index));
        }
        self.inner.get_prep_value(value)
    }

    fn to_python(&self, value: &Value) -> DjangoResult<Value> {
        if let Value::String(name) = value {
            return Ok(Value::Enum(self.enum_type().from_canonical(name)?.clone()));
        }
        self.inner.to_python(value)
    }
}
