//! Optional collection type
//!
//! Entries receive their episode and local file collections from external
//! collaborators. A collection that was never populated is a different state
//! from one that was populated but turned out empty, and `Catalog` keeps that
//! difference visible in the type instead of hiding it behind an empty `Vec`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A collection that may not have been populated yet
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog<T> {
    /// The collection was never populated
    Unknown,
    /// The collection was populated (possibly with zero items)
    Known(Vec<T>),
}

impl<T> Catalog<T> {
    /// Returns the items if the collection is known
    pub fn as_known(&self) -> Option<&[T]> {
        match self {
            Catalog::Unknown => None,
            Catalog::Known(items) => Some(items.as_slice()),
        }
    }

    /// Returns true if the collection was never populated
    pub fn is_unknown(&self) -> bool {
        matches!(self, Catalog::Unknown)
    }

    /// Returns true if the collection is known and holds at least one item
    pub fn has_items(&self) -> bool {
        self.as_known().is_some_and(|items| !items.is_empty())
    }

    /// Number of items, treating an unknown collection as empty
    pub fn len(&self) -> usize {
        self.as_known().map_or(0, <[T]>::len)
    }

    /// Returns true if there are no items, whether known or not
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Catalog::Unknown
    }
}

impl<T> From<Vec<T>> for Catalog<T> {
    fn from(items: Vec<T>) -> Self {
        Catalog::Known(items)
    }
}

impl<T> From<Option<Vec<T>>> for Catalog<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        items.map_or(Catalog::Unknown, Catalog::Known)
    }
}

// Serialized as a nullable array: `null` for unknown, `[...]` for known.
impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_known().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Catalog<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(Catalog::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_empty_are_distinct() {
        let unknown: Catalog<i32> = Catalog::Unknown;
        let empty: Catalog<i32> = Catalog::Known(Vec::new());

        assert!(unknown.is_unknown());
        assert!(!empty.is_unknown());
        assert_eq!(unknown.as_known(), None);
        assert_eq!(empty.as_known(), Some(&[][..]));
        assert!(!unknown.has_items());
        assert!(!empty.has_items());
    }

    #[test]
    fn test_len_treats_unknown_as_empty() {
        assert_eq!(Catalog::<i32>::Unknown.len(), 0);
        assert_eq!(Catalog::from(vec![1, 2, 3]).len(), 3);
        assert!(Catalog::<i32>::default().is_empty());
    }

    #[test]
    fn test_json_null_maps_to_unknown() {
        let catalog: Catalog<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(catalog, Catalog::Unknown);

        let catalog: Catalog<i32> = serde_json::from_str("[]").unwrap();
        assert_eq!(catalog, Catalog::Known(vec![]));

        assert_eq!(serde_json::to_string(&Catalog::<i32>::Unknown).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Catalog::from(vec![4, 5])).unwrap(), "[4,5]");
    }
}
