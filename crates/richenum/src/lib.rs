//! # richenum
//!
//! Rich enumerations whose members carry more than a discriminant: a unique
//! canonical name (the stable identifier used in code and URLs), a unique
//! display name (for humans), and, for ordered enums, a unique integer index
//! that defines the ordering.
//!
//! Enumerations are built at runtime, usually once into a `static`, and looked
//! up by any of those keys.
//!
//! ```
//! use richenum::OrderedRichEnum;
//!
//! let color = OrderedRichEnum::builder("Color")
//!     .member(0, "red", "Red")
//!     .member(1, "blue", "Blue")
//!     .build()
//!     .unwrap();
//!
//! let blue = color.from_canonical("blue").unwrap();
//! assert_eq!(blue.index, 1);
//! assert_eq!(color.from_index(0).unwrap().canonical_name, "red");
//! assert!(color.from_index(0).unwrap() < blue);
//! ```

pub mod enums;
pub mod error;
pub mod value;

pub use enums::{EnumType, OrderedRichEnum, OrderedRichEnumBuilder, RichEnum, RichEnumBuilder};
pub use error::{EnumConstructionError, EnumLookupError};
pub use value::{OrderedRichEnumValue, RichEnumValue};
