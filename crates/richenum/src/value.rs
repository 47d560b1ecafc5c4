//! Enum member values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A member of an unordered [`RichEnum`](crate::RichEnum).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RichEnumValue {
    /// The unique, stable identifier of this member.
    pub canonical_name: String,
    /// The unique human-readable label of this member.
    pub display_name: String,
}

impl RichEnumValue {
    /// Creates a new member value.
    pub fn new(canonical_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for RichEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// A member of an [`OrderedRichEnum`](crate::OrderedRichEnum).
///
/// Values order by `index`; the canonical name only breaks ties between
/// values of different enums that happen to share an index.
///
/// # Examples
///
/// ```
/// use richenum::OrderedRichEnumValue;
///
/// let small = OrderedRichEnumValue::new(0, "small", "Small");
/// let large = OrderedRichEnumValue::new(2, "large", "Large");
/// assert!(small < large);
/// assert_eq!(large.to_string(), "Large");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderedRichEnumValue {
    /// The position of this member within its enum; stored in the database.
    pub index: i64,
    /// The unique, stable identifier of this member.
    pub canonical_name: String,
    /// The unique human-readable label of this member.
    pub display_name: String,
}

impl OrderedRichEnumValue {
    /// Creates a new ordered member value.
    pub fn new(
        index: i64,
        canonical_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            index,
            canonical_name: canonical_name.into(),
            display_name: display_name.into(),
        }
    }
}

impl PartialOrd for OrderedRichEnumValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedRichEnumValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then_with(|| self.canonical_name.cmp(&other.canonical_name))
            .then_with(|| self.display_name.cmp(&other.display_name))
    }
}

impl fmt::Display for OrderedRichEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
