//! # django-richenum-db
//!
//! ORM fields that keep an [`OrderedRichEnumValue`](richenum::OrderedRichEnumValue)
//! in memory and its integer index in the database.
//!
//! ## Module Overview
//!
//! - [`fields`] - [`IndexEnumField`](fields::IndexEnumField),
//!   [`LaxIndexEnumField`](fields::LaxIndexEnumField), and the
//!   [`EnumField`](fields::EnumField) trait the ORM calls
//! - [`value`] - The backend-agnostic [`Value`](value::Value) enum
//! - [`row`] - Result rows that fields materialize from
//! - [`validators`] - Field validators

// doc_markdown: backtick requirements for documentation items are too strict
#![allow(clippy::doc_markdown)]
// return_self_not_must_use: builder pattern methods are self-documenting
#![allow(clippy::return_self_not_must_use)]

pub mod fields;
pub mod row;
pub mod validators;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use fields::{
    EnumField, FieldDef, FieldDescriptor, FieldType, IndexEnumField, LaxIndexEnumField,
};
pub use row::{FromValue, Row};
pub use validators::{EnumIndexValidator, IntegerRangeValidator, Validator};
pub use value::Value;
