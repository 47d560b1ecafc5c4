//! # django-richenum
//!
//! Store ordered rich enums as integers, work with them as enum members.
//!
//! This is the meta-crate that re-exports the sub-crates and a prelude of
//! the types a model definition needs.
//!
//! ```
//! use django_richenum::prelude::*;
//!
//! let size = OrderedRichEnum::builder("Size")
//!     .member(0, "small", "Small")
//!     .member(1, "large", "Large")
//!     .build()
//!     .unwrap();
//! let field = LaxIndexEnumField::new("size", size).unwrap();
//!
//! assert_eq!(field.get_prep_value(&Value::from("large")).unwrap(), Value::Int(1));
//! let small = field.to_python(&Value::Int(0)).unwrap();
//! assert_eq!(small.as_enum().unwrap().canonical_name, "small");
//! ```

/// Error types, settings, and logging.
pub use django_richenum_core as core;

/// Enum fields, values, rows, and validators.
pub use django_richenum_db as db;

/// The rich-enum library.
pub use richenum;

/// Third-party re-exports for user convenience.
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;

/// The types most model definitions need.
pub mod prelude {
    pub use django_richenum_core::{DjangoError, DjangoResult, Settings, SETTINGS};
    pub use django_richenum_db::{
        EnumField, FieldType, IndexEnumField, LaxIndexEnumField, Row, Value,
    };
    pub use richenum::{EnumType, OrderedRichEnum, OrderedRichEnumValue, RichEnum};
}
