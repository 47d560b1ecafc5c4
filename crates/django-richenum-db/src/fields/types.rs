//! Field type definitions for the ORM.
//!
//! [`FieldType`] names the integer column an enum field is stored in, and
//! [`FieldDef`] captures the metadata the host ORM keeps for every field.

use crate::validators::Validator;
use crate::value::Value;

/// The integer column type backing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum FieldType {
    /// 32-bit signed integer.
    #[default]
    IntegerField,
    /// 16-bit signed integer.
    SmallIntegerField,
    /// 64-bit signed integer.
    BigIntegerField,
}

impl FieldType {
    /// Returns the SQL column type on PostgreSQL.
    pub const fn pg_column_type(&self) -> &'static str {
        match self {
            Self::IntegerField => "INTEGER",
            Self::SmallIntegerField => "SMALLINT",
            Self::BigIntegerField => "BIGINT",
        }
    }

    /// Returns the SQL column type on SQLite.
    pub const fn sqlite_column_type(&self) -> &'static str {
        match self {
            Self::IntegerField | Self::SmallIntegerField | Self::BigIntegerField => "INTEGER",
        }
    }

    /// The inclusive range of values the column can hold.
    pub const fn value_range(&self) -> (i64, i64) {
        match self {
            Self::IntegerField => (-2_147_483_648, 2_147_483_647),
            Self::SmallIntegerField => (-32_768, 32_767),
            Self::BigIntegerField => (i64::MIN, i64::MAX),
        }
    }
}

/// Complete definition of a model field, including metadata and constraints.
///
/// This is the set of pass-through options every field accepts: an enum
/// field wraps one and only adds its enum type on top.
#[derive(Debug)]
pub struct FieldDef {
    /// The Rust attribute name of this field.
    pub name: &'static str,
    /// The database column name (may differ from `name`).
    pub column: String,
    /// The type of this field.
    pub field_type: FieldType,
    /// Whether NULL is allowed in the database.
    pub null: bool,
    /// Whether the field may be left blank in forms.
    pub blank: bool,
    /// Default value for new instances, returned as-is.
    pub default: Option<Value>,
    /// Whether a UNIQUE constraint is applied.
    pub unique: bool,
    /// Whether a database index should be created.
    pub db_index: bool,
    /// Human-readable help text.
    pub help_text: String,
    /// Human-readable name for the field.
    pub verbose_name: String,
    /// Allowed values as (value, display_label) pairs.
    pub choices: Option<Vec<(Value, String)>>,
    /// Validators applied during model validation.
    pub validators: Vec<Box<dyn Validator>>,
}

impl FieldDef {
    /// Creates a new `FieldDef` with sensible defaults.
    ///
    /// Only the field name and type are required. All other attributes take
    /// their default values (non-null, no index, no default, etc.).
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            column: name.to_string(),
            field_type,
            null: false,
            blank: false,
            default: None,
            unique: false,
            db_index: false,
            help_text: String::new(),
            verbose_name: name.replace('_', " "),
            choices: None,
            validators: Vec::new(),
        }
    }

    /// Sets the database column name.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Allows NULL values in the database.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Allows the field to be left blank in forms.
    #[must_use]
    pub const fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    /// Marks this field as having a database index.
    #[must_use]
    pub const fn db_index(mut self) -> Self {
        self.db_index = true;
        self
    }

    /// Marks this field as having a UNIQUE constraint.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets the default value for this field.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the verbose (human-readable) name.
    #[must_use]
    pub fn verbose_name(mut self, name: impl Into<String>) -> Self {
        self.verbose_name = name.into();
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    /// Appends a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}
