//! Item and item set types for the knapsack problem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of items an [`ItemSet`] may hold.
pub const MAX_ITEMS: usize = 100;

/// A single knapsack item with a value and a weight.
///
/// Immutable once constructed; items are owned collectively by an
/// [`ItemSet`].
///
/// # Examples
///
/// ```
/// use u_exact::models::Item;
///
/// let item = Item::new(10.0, 2.0);
/// assert_eq!(item.value(), 10.0);
/// assert_eq!(item.weight(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    value: f64,
    weight: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Value gained by packing this item.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Weight this item contributes toward the capacity.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// An ordered, read-only collection of knapsack items.
///
/// Created once per problem instance (randomly generated or loaded from a
/// binary file) and never mutated during a solve.
///
/// # Examples
///
/// ```
/// use u_exact::models::{Item, ItemSet};
///
/// let set = ItemSet::new(vec![Item::new(10.0, 2.0), Item::new(6.0, 1.0)]).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(1).value(), 6.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Creates an item set from the given items.
    ///
    /// Returns `None` if there are more than [`MAX_ITEMS`] items, or if any
    /// value or weight is non-finite or negative.
    pub fn new(items: Vec<Item>) -> Option<Self> {
        if items.len() > MAX_ITEMS {
            return None;
        }
        if items
            .iter()
            .any(|it| !it.value.is_finite() || !it.weight.is_finite())
        {
            return None;
        }
        if items.iter().any(|it| it.value < 0.0 || it.weight < 0.0) {
            return None;
        }
        Some(Self { items })
    }

    /// Number of items in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// All items as a slice.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}

impl fmt::Display for ItemSet {
    /// One `v[i] = ..., w[i] = ...` line per item, matching the CLI dump.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            writeln!(f, "v[{i}] = {:4.1}, w[{i}] = {:4.1}", item.value, item.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let set = ItemSet::new(vec![Item::new(1.0, 2.0)]).expect("valid");
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_new_empty() {
        let set = ItemSet::new(vec![]).expect("empty is valid");
        assert!(set.is_empty());
    }

    #[test]
    fn test_new_too_many() {
        let items = vec![Item::new(1.0, 1.0); MAX_ITEMS + 1];
        assert!(ItemSet::new(items).is_none());
    }

    #[test]
    fn test_new_at_limit() {
        let items = vec![Item::new(1.0, 1.0); MAX_ITEMS];
        assert!(ItemSet::new(items).is_some());
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(ItemSet::new(vec![Item::new(-1.0, 1.0)]).is_none());
        assert!(ItemSet::new(vec![Item::new(1.0, -1.0)]).is_none());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(ItemSet::new(vec![Item::new(f64::NAN, 1.0)]).is_none());
        assert!(ItemSet::new(vec![Item::new(1.0, f64::INFINITY)]).is_none());
    }

    #[test]
    fn test_display_format() {
        let set = ItemSet::new(vec![Item::new(10.0, 2.5)]).expect("valid");
        let s = set.to_string();
        assert!(s.contains("v[0] = 10.0"));
        assert!(s.contains("w[0] =  2.5"));
    }
}
