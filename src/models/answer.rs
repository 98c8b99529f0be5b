//! Answer types: an objective value plus the witness that achieves it.

use super::{CityList, ItemSet};
use serde::{Deserialize, Serialize};

/// A completed knapsack search result.
///
/// `flags[i]` records whether item `i` is packed. The flags are the
/// witness for `total_value`; exactly one flags buffer is carried by the
/// winning branch of the search, the losing branch's buffer is dropped.
///
/// # Examples
///
/// ```
/// use u_exact::models::{Item, ItemSet, KnapsackAnswer};
///
/// let items = ItemSet::new(vec![Item::new(10.0, 2.0), Item::new(6.0, 1.0)]).unwrap();
/// let answer = KnapsackAnswer::new(16.0, vec![true, true]);
/// assert_eq!(answer.selected_weight(&items), 3.0);
/// assert!(answer.is_feasible(&items, 4.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnapsackAnswer {
    /// Total value of the packed items.
    pub total_value: f64,
    /// Inclusion flag per item, same order and length as the item set.
    pub flags: Vec<bool>,
}

impl KnapsackAnswer {
    /// Creates an answer from a value and its witness flags.
    pub fn new(total_value: f64, flags: Vec<bool>) -> Self {
        Self { total_value, flags }
    }

    /// Sum of the values of the selected items.
    pub fn selected_value(&self, items: &ItemSet) -> f64 {
        self.flags
            .iter()
            .zip(items.iter())
            .filter(|(packed, _)| **packed)
            .map(|(_, item)| item.value())
            .sum()
    }

    /// Sum of the weights of the selected items.
    pub fn selected_weight(&self, items: &ItemSet) -> f64 {
        self.flags
            .iter()
            .zip(items.iter())
            .filter(|(packed, _)| **packed)
            .map(|(_, item)| item.weight())
            .sum()
    }

    /// Returns `true` if the selection fits strictly under `capacity`.
    ///
    /// The capacity bound is strict: a selection weighing exactly
    /// `capacity` is infeasible.
    pub fn is_feasible(&self, items: &ItemSet, capacity: f64) -> bool {
        self.flags.len() == items.len() && self.selected_weight(items) < capacity
    }

    /// The flags rendered as a `0`/`1` string, e.g. `"1010"`.
    pub fn flags_string(&self) -> String {
        self.flags
            .iter()
            .map(|&packed| if packed { '1' } else { '0' })
            .collect()
    }
}

/// A completed TSP search result.
///
/// `route` is a permutation of `[0, n)` with `route[0] == 0`; the tour is
/// the cycle `route[0] -> route[1] -> ... -> route[n-1] -> route[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourAnswer {
    /// Total cycle distance, including the closing edge back to the start.
    pub total_distance: f64,
    /// Visit order; always starts at city 0.
    pub route: Vec<usize>,
}

impl TourAnswer {
    /// Creates an answer from a distance and its witness route.
    pub fn new(total_distance: f64, route: Vec<usize>) -> Self {
        Self {
            total_distance,
            route,
        }
    }

    /// Returns `true` if `route` is a permutation of `[0, n)` starting at
    /// city 0, where `n` is the size of `cities`.
    pub fn is_valid_route(&self, cities: &CityList) -> bool {
        let n = cities.len();
        if self.route.len() != n || self.route.first() != Some(&0) {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.route {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// The route rendered as `"0 -> 3 -> 1 -> 2 -> 0"`.
    pub fn route_string(&self) -> String {
        let mut s = String::new();
        for &c in &self.route {
            s.push_str(&format!("{c} -> "));
        }
        s.push('0');
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Item};

    fn sample_items() -> ItemSet {
        ItemSet::new(vec![
            Item::new(10.0, 2.0),
            Item::new(6.0, 1.0),
            Item::new(8.0, 3.0),
            Item::new(5.0, 1.0),
        ])
        .expect("valid")
    }

    #[test]
    fn test_selected_sums() {
        let items = sample_items();
        let answer = KnapsackAnswer::new(15.0, vec![true, false, false, true]);
        assert_eq!(answer.selected_value(&items), 15.0);
        assert_eq!(answer.selected_weight(&items), 3.0);
    }

    #[test]
    fn test_feasibility_is_strict() {
        let items = sample_items();
        // Weight exactly 4.0 must be infeasible under capacity 4.0.
        let answer = KnapsackAnswer::new(11.0, vec![false, true, true, false]);
        assert_eq!(answer.selected_weight(&items), 4.0);
        assert!(!answer.is_feasible(&items, 4.0));
        assert!(answer.is_feasible(&items, 4.1));
    }

    #[test]
    fn test_flags_string() {
        let answer = KnapsackAnswer::new(0.0, vec![true, false, true, false]);
        assert_eq!(answer.flags_string(), "1010");
    }

    fn square() -> CityList {
        CityList::new(vec![
            City::new(0, 0),
            City::new(1, 0),
            City::new(1, 1),
            City::new(0, 1),
        ])
        .expect("valid")
    }

    #[test]
    fn test_valid_route() {
        let cities = square();
        assert!(TourAnswer::new(4.0, vec![0, 1, 2, 3]).is_valid_route(&cities));
        assert!(TourAnswer::new(4.0, vec![0, 3, 2, 1]).is_valid_route(&cities));
    }

    #[test]
    fn test_invalid_routes() {
        let cities = square();
        // Wrong start.
        assert!(!TourAnswer::new(4.0, vec![1, 0, 2, 3]).is_valid_route(&cities));
        // Repeated city.
        assert!(!TourAnswer::new(4.0, vec![0, 1, 1, 3]).is_valid_route(&cities));
        // Wrong length.
        assert!(!TourAnswer::new(4.0, vec![0, 1, 2]).is_valid_route(&cities));
        // Index out of range.
        assert!(!TourAnswer::new(4.0, vec![0, 1, 2, 4]).is_valid_route(&cities));
    }

    #[test]
    fn test_route_string() {
        let answer = TourAnswer::new(4.0, vec![0, 2, 1, 3]);
        assert_eq!(answer.route_string(), "0 -> 2 -> 1 -> 3 -> 0");
    }
}
