//! Enumeration types: [`RichEnum`], [`OrderedRichEnum`], and the [`EnumType`]
//! handle that refers to either.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{EnumConstructionError, EnumLookupError};
use crate::value::{OrderedRichEnumValue, RichEnumValue};

/// Lookup tables shared by both enum kinds: positions into the member list,
/// keyed by canonical name and by display name.
#[derive(Debug, Clone, Default)]
struct NameIndex {
    by_canonical: HashMap<String, usize>,
    by_display: HashMap<String, usize>,
}

impl NameIndex {
    fn build<'a>(
        enum_name: &str,
        names: impl Iterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, EnumConstructionError> {
        let mut index = Self::default();
        for (pos, (canonical, display)) in names.enumerate() {
            if canonical.is_empty() {
                return Err(EnumConstructionError::EmptyCanonicalName {
                    enum_name: enum_name.to_string(),
                });
            }
            if index.by_canonical.insert(canonical.to_string(), pos).is_some() {
                return Err(EnumConstructionError::DuplicateCanonicalName {
                    enum_name: enum_name.to_string(),
                    name: canonical.to_string(),
                });
            }
            if index.by_display.insert(display.to_string(), pos).is_some() {
                return Err(EnumConstructionError::DuplicateDisplayName {
                    enum_name: enum_name.to_string(),
                    name: display.to_string(),
                });
            }
        }
        Ok(index)
    }
}

// ── RichEnum ───────────────────────────────────────────────────────────

/// An unordered rich enumeration.
///
/// Members can be found by canonical name or display name, but have no
/// index, so they cannot be stored as integers.
#[derive(Debug, Clone)]
pub struct RichEnum {
    name: String,
    members: Vec<RichEnumValue>,
    names: NameIndex,
}

impl RichEnum {
    /// Builds an enum from its members, in declaration order.
    pub fn new(
        name: impl Into<String>,
        members: Vec<RichEnumValue>,
    ) -> Result<Self, EnumConstructionError> {
        let name = name.into();
        let names = NameIndex::build(
            &name,
            members
                .iter()
                .map(|m| (m.canonical_name.as_str(), m.display_name.as_str())),
        )?;
        Ok(Self {
            name,
            members,
            names,
        })
    }

    /// Starts a builder for an enum called `name`.
    pub fn builder(name: impl Into<String>) -> RichEnumBuilder {
        RichEnumBuilder {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// The enum's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All members, in declaration order.
    pub fn members(&self) -> &[RichEnumValue] {
        &self.members
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the enum has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finds the member with the given canonical name.
    pub fn from_canonical(&self, canonical_name: &str) -> Result<&RichEnumValue, EnumLookupError> {
        self.names
            .by_canonical
            .get(canonical_name)
            .map(|&pos| &self.members[pos])
            .ok_or_else(|| EnumLookupError::new(&self.name, "canonical_name", canonical_name))
    }

    /// Finds the member with the given display name.
    pub fn from_display(&self, display_name: &str) -> Result<&RichEnumValue, EnumLookupError> {
        self.names
            .by_display
            .get(display_name)
            .map(|&pos| &self.members[pos])
            .ok_or_else(|| EnumLookupError::new(&self.name, "display_name", display_name))
    }

    /// `(canonical_name, display_name)` pairs, in declaration order.
    pub fn choices(&self) -> Vec<(String, String)> {
        self.members
            .iter()
            .map(|m| (m.canonical_name.clone(), m.display_name.clone()))
            .collect()
    }
}

/// Builder for [`RichEnum`].
#[derive(Debug)]
pub struct RichEnumBuilder {
    name: String,
    members: Vec<RichEnumValue>,
}

impl RichEnumBuilder {
    /// Adds a member.
    #[must_use]
    pub fn member(mut self, canonical_name: &str, display_name: &str) -> Self {
        self.members
            .push(RichEnumValue::new(canonical_name, display_name));
        self
    }

    /// Validates the members and builds the enum.
    pub fn build(self) -> Result<RichEnum, EnumConstructionError> {
        RichEnum::new(self.name, self.members)
    }
}

// ── OrderedRichEnum ────────────────────────────────────────────────────

/// An ordered rich enumeration: every member also has a unique integer index.
///
/// Members are kept sorted by index regardless of declaration order.
#[derive(Debug, Clone)]
pub struct OrderedRichEnum {
    name: String,
    members: Vec<OrderedRichEnumValue>,
    names: NameIndex,
    by_index: HashMap<i64, usize>,
}

impl OrderedRichEnum {
    /// Builds an ordered enum from its members.
    ///
    /// Besides the uniqueness rules shared with [`RichEnum`], indexes must be
    /// unique and canonical names must not parse as integers, so that a
    /// canonical name can never be mistaken for an index.
    pub fn new(
        name: impl Into<String>,
        mut members: Vec<OrderedRichEnumValue>,
    ) -> Result<Self, EnumConstructionError> {
        let name = name.into();
        members.sort();

        let mut by_index = HashMap::with_capacity(members.len());
        for (pos, member) in members.iter().enumerate() {
            if by_index.insert(member.index, pos).is_some() {
                return Err(EnumConstructionError::DuplicateIndex {
                    enum_name: name,
                    index: member.index,
                });
            }
            if member.canonical_name.trim().parse::<i64>().is_ok() {
                return Err(EnumConstructionError::NumericCanonicalName {
                    enum_name: name,
                    name: member.canonical_name.clone(),
                });
            }
        }

        let names = NameIndex::build(
            &name,
            members
                .iter()
                .map(|m| (m.canonical_name.as_str(), m.display_name.as_str())),
        )?;

        Ok(Self {
            name,
            members,
            names,
            by_index,
        })
    }

    /// Starts a builder for an ordered enum called `name`.
    pub fn builder(name: impl Into<String>) -> OrderedRichEnumBuilder {
        OrderedRichEnumBuilder {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// The enum's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All members, sorted by index.
    pub fn members(&self) -> &[OrderedRichEnumValue] {
        &self.members
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the enum has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if `value` is one of this enum's members.
    pub fn contains(&self, value: &OrderedRichEnumValue) -> bool {
        self.by_index
            .get(&value.index)
            .is_some_and(|&pos| self.members[pos] == *value)
    }

    /// Finds the member with the given index.
    pub fn from_index(&self, index: i64) -> Result<&OrderedRichEnumValue, EnumLookupError> {
        self.by_index
            .get(&index)
            .map(|&pos| &self.members[pos])
            .ok_or_else(|| EnumLookupError::new(&self.name, "index", index.to_string()))
    }

    /// Finds the member with the given canonical name.
    pub fn from_canonical(
        &self,
        canonical_name: &str,
    ) -> Result<&OrderedRichEnumValue, EnumLookupError> {
        self.names
            .by_canonical
            .get(canonical_name)
            .map(|&pos| &self.members[pos])
            .ok_or_else(|| EnumLookupError::new(&self.name, "canonical_name", canonical_name))
    }

    /// Finds the member with the given display name.
    pub fn from_display(
        &self,
        display_name: &str,
    ) -> Result<&OrderedRichEnumValue, EnumLookupError> {
        self.names
            .by_display
            .get(display_name)
            .map(|&pos| &self.members[pos])
            .ok_or_else(|| EnumLookupError::new(&self.name, "display_name", display_name))
    }

    /// `(canonical_name, display_name)` pairs, sorted by index.
    pub fn choices(&self) -> Vec<(String, String)> {
        self.members
            .iter()
            .map(|m| (m.canonical_name.clone(), m.display_name.clone()))
            .collect()
    }
}

/// Builder for [`OrderedRichEnum`].
#[derive(Debug)]
pub struct OrderedRichEnumBuilder {
    name: String,
    members: Vec<OrderedRichEnumValue>,
}

impl OrderedRichEnumBuilder {
    /// Adds a member.
    #[must_use]
    pub fn member(mut self, index: i64, canonical_name: &str, display_name: &str) -> Self {
        self.members
            .push(OrderedRichEnumValue::new(index, canonical_name, display_name));
        self
    }

    /// Validates the members and builds the enum.
    pub fn build(self) -> Result<OrderedRichEnum, EnumConstructionError> {
        OrderedRichEnum::new(self.name, self.members)
    }
}

// ── EnumType ───────────────────────────────────────────────────────────

/// A shared handle to either kind of enum.
///
/// Code that needs index lookup asks for it with [`EnumType::as_ordered`]
/// rather than assuming every enum is ordered.
#[derive(Debug, Clone)]
pub enum EnumType {
    /// An unordered enum; no index lookup.
    Plain(Arc<RichEnum>),
    /// An ordered enum; supports index lookup.
    Ordered(Arc<OrderedRichEnum>),
}

impl EnumType {
    /// The enum's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(e) => e.name(),
            Self::Ordered(e) => e.name(),
        }
    }

    /// Returns the ordered enum if this handle supports index lookup.
    pub const fn as_ordered(&self) -> Option<&Arc<OrderedRichEnum>> {
        match self {
            Self::Plain(_) => None,
            Self::Ordered(e) => Some(e),
        }
    }

    /// Returns `true` if this enum supports `from_index`.
    pub const fn supports_index_lookup(&self) -> bool {
        matches!(self, Self::Ordered(_))
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(e) => write!(f, "<RichEnum: {}>", e.name()),
            Self::Ordered(e) => write!(f, "<OrderedRichEnum: {}>", e.name()),
        }
    }
}

impl From<RichEnum> for EnumType {
    fn from(e: RichEnum) -> Self {
        Self::Plain(Arc::new(e))
    }
}

impl From<Arc<RichEnum>> for EnumType {
    fn from(e: Arc<RichEnum>) -> Self {
        Self::Plain(e)
    }
}

impl From<OrderedRichEnum> for EnumType {
    fn from(e: OrderedRichEnum) -> Self {
        Self::Ordered(Arc::new(e))
    }
}

impl From<Arc<OrderedRichEnum>> for EnumType {
    fn from(e: Arc<OrderedRichEnum>) -> Self {
        Self::Ordered(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> OrderedRichEnum {
        OrderedRichEnum::builder("Size")
            .member(20, "large", "Large")
            .member(0, "small", "Small")
            .member(10, "medium", "Medium")
            .build()
            .unwrap()
    }

    #[test]
    fn test_ordered_members_sorted_by_index() {
        let e = size();
        let indexes: Vec<i64> = e.members().iter().map(|m| m.index).collect();
        assert_eq!(indexes, [0, 10, 20]);
        assert_eq!(e.len(), 3);
        assert!(!e.is_empty());
    }

    #[test]
    fn test_ordered_lookups() {
        let e = size();
        assert_eq!(e.from_index(10).unwrap().canonical_name, "medium");
        assert_eq!(e.from_canonical("large").unwrap().index, 20);
        assert_eq!(e.from_display("Small").unwrap().index, 0);
    }

    #[test]
    fn test_ordered_lookup_failures() {
        let e = size();
        let err = e.from_index(5).unwrap_err();
        assert_eq!(err.field, "index");
        assert_eq!(err.value, "5");
        assert_eq!(err.enum_name, "Size");
        assert!(e.from_canonical("Large").is_err());
        assert!(e.from_display("large").is_err());
    }

    #[test]
    fn test_ordered_choices_follow_index_order() {
        let choices = size().choices();
        assert_eq!(choices[0], ("small".to_string(), "Small".to_string()));
        assert_eq!(choices[2], ("large".to_string(), "Large".to_string()));
    }

    #[test]
    fn test_contains() {
        let e = size();
        assert!(e.contains(&OrderedRichEnumValue::new(0, "small", "Small")));
        assert!(!e.contains(&OrderedRichEnumValue::new(0, "tiny", "Tiny")));
        assert!(!e.contains(&OrderedRichEnumValue::new(99, "small", "Small")));
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let err = OrderedRichEnum::builder("Dup")
            .member(1, "a", "A")
            .member(1, "b", "B")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            EnumConstructionError::DuplicateIndex {
                enum_name: "Dup".into(),
                index: 1
            }
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = OrderedRichEnum::builder("Dup")
            .member(0, "a", "A")
            .member(1, "a", "Other")
            .build()
            .unwrap_err();
        assert!(matches!(err, EnumConstructionError::DuplicateCanonicalName { .. }));

        let err = RichEnum::builder("Dup")
            .member("a", "Same")
            .member("b", "Same")
            .build()
            .unwrap_err();
        assert!(matches!(err, EnumConstructionError::DuplicateDisplayName { .. }));
    }

    #[test]
    fn test_empty_canonical_name_rejected() {
        let err = RichEnum::builder("Blank").member("", "Blank").build().unwrap_err();
        assert!(matches!(err, EnumConstructionError::EmptyCanonicalName { .. }));
    }

    #[test]
    fn test_numeric_canonical_name_rejected_for_ordered_only() {
        let err = OrderedRichEnum::builder("Shoe")
            .member(0, "42", "Forty-two")
            .build()
            .unwrap_err();
        assert!(matches!(err, EnumConstructionError::NumericCanonicalName { .. }));

        assert!(RichEnum::builder("Shoe").member("42", "Forty-two").build().is_ok());
    }

    #[test]
    fn test_plain_enum_lookups() {
        let e = RichEnum::builder("Currency")
            .member("usd", "US Dollar")
            .member("eur", "Euro")
            .build()
            .unwrap();
        assert_eq!(e.members()[0].canonical_name, "usd");
        assert_eq!(e.from_canonical("eur").unwrap().display_name, "Euro");
        assert_eq!(e.from_display("US Dollar").unwrap().canonical_name, "usd");
        assert!(e.from_canonical("gbp").is_err());
        assert_eq!(e.choices().len(), 2);
    }

    #[test]
    fn test_enum_type_capability() {
        let ordered = EnumType::from(size());
        assert!(ordered.supports_index_lookup());
        assert_eq!(ordered.as_ordered().unwrap().name(), "Size");
        assert_eq!(ordered.to_string(), "<OrderedRichEnum: Size>");

        let plain = EnumType::from(RichEnum::builder("Currency").member("usd", "USD").build().unwrap());
        assert!(!plain.supports_index_lookup());
        assert!(plain.as_ordered().is_none());
        assert_eq!(plain.name(), "Currency");
        assert_eq!(plain.to_string(), "<RichEnum: Currency>");
    }
}
