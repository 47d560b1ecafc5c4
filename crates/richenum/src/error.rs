//! Errors raised while building or querying rich enums.

use thiserror::Error;

/// No member of an enum matched a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not find {enum_name} member with {field} {value}")]
pub struct EnumLookupError {
    /// The name of the enum that was searched.
    pub enum_name: String,
    /// The attribute that was matched against ("index", "canonical_name", ...).
    pub field: String,
    /// The value that was looked up, rendered as a string.
    pub value: String,
}

impl EnumLookupError {
    /// Creates a lookup error for `value` on `field` of `enum_name`.
    pub fn new(
        enum_name: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            enum_name: enum_name.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

/// An enum definition violated a uniqueness or naming rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumConstructionError {
    /// Two members share a canonical name.
    #[error("{enum_name}: duplicate canonical name {name:?}")]
    DuplicateCanonicalName {
        /// The enum being built.
        enum_name: String,
        /// The repeated canonical name.
        name: String,
    },

    /// Two members share a display name.
    #[error("{enum_name}: duplicate display name {name:?}")]
    DuplicateDisplayName {
        /// The enum being built.
        enum_name: String,
        /// The repeated display name.
        name: String,
    },

    /// Two members of an ordered enum share an index.
    #[error("{enum_name}: duplicate index {index}")]
    DuplicateIndex {
        /// The enum being built.
        enum_name: String,
        /// The repeated index.
        index: i64,
    },

    /// A member has an empty canonical name.
    #[error("{enum_name}: canonical names must not be empty")]
    EmptyCanonicalName {
        /// The enum being built.
        enum_name: String,
    },

    /// A member of an ordered enum has a canonical name that reads as an
    /// integer, which would collide with index-based representations.
    #[error("{enum_name}: canonical name {name:?} is indistinguishable from an index")]
    NumericCanonicalName {
        /// The enum being built.
        enum_name: String,
        /// The offending canonical name.
        name: String,
    },
}
