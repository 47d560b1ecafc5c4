//! Field definitions and types for the ORM.
//!
//! [`FieldDef`] and [`FieldType`] describe a model field and its integer
//! column; [`IndexEnumField`] and [`LaxIndexEnumField`] are the enum-backed
//! fields built on top of them.

pub mod index_enum;
pub mod types;

pub use index_enum::{EnumField, FieldDescriptor, IndexEnumField, LaxIndexEnumField};
pub use types::{FieldDef, FieldType};
