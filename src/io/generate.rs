//! Seeded random instance generation.

use crate::models::{City, CityList, Item, ItemSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random item set with the classic instance distribution:
/// values in `{0.0, 0.1, ..., 19.9}`, weights in `{0.1, 0.2, ..., 20.0}`
/// (weights never zero, so every item costs capacity).
///
/// Returns `None` if `n` exceeds [`MAX_ITEMS`](crate::models::MAX_ITEMS).
///
/// # Examples
///
/// ```
/// use u_exact::io::random_itemset;
///
/// let items = random_itemset(10, 1).unwrap();
/// assert_eq!(items.len(), 10);
/// assert!(items.iter().all(|it| it.weight() > 0.0));
/// ```
pub fn random_itemset(n: usize, seed: u64) -> Option<ItemSet> {
    let mut rng = StdRng::seed_from_u64(seed);
    let items = (0..n)
        .map(|_| {
            let value = 0.1 * rng.random_range(0..200) as f64;
            let weight = 0.1 * rng.random_range(1..=200) as f64;
            Item::new(value, weight)
        })
        .collect();
    ItemSet::new(items)
}

/// Generates `n` random cities inside a `width` x `height` map area.
///
/// X-coordinates leave a small right margin so that the renderer's
/// `C_<i>` labels stay on the map. Returns `None` if `n` exceeds
/// [`MAX_CITIES`](crate::models::MAX_CITIES) or the area is too small.
pub fn random_cities(n: usize, seed: u64, width: u32, height: u32) -> Option<CityList> {
    const LABEL_MARGIN: u32 = 5;
    if width <= LABEL_MARGIN || height == 0 {
        return None;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let cities = (0..n)
        .map(|_| {
            City::new(
                rng.random_range(0..width - LABEL_MARGIN) as i32,
                rng.random_range(0..height) as i32,
            )
        })
        .collect();
    CityList::new(cities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MAX_CITIES, MAX_ITEMS};

    #[test]
    fn test_itemset_distribution_bounds() {
        let items = random_itemset(50, 123).expect("valid");
        assert_eq!(items.len(), 50);
        for item in items.iter() {
            assert!((0.0..20.0).contains(&item.value()));
            assert!(item.weight() > 0.0 && item.weight() <= 20.0);
        }
    }

    #[test]
    fn test_itemset_deterministic() {
        let a = random_itemset(20, 1).expect("valid");
        let b = random_itemset(20, 1).expect("valid");
        assert_eq!(a.as_slice(), b.as_slice());
        let c = random_itemset(20, 2).expect("valid");
        assert_ne!(a.as_slice(), c.as_slice());
    }

    #[test]
    fn test_itemset_over_limit() {
        assert!(random_itemset(MAX_ITEMS + 1, 1).is_none());
    }

    #[test]
    fn test_cities_stay_on_map() {
        let cities = random_cities(40, 9, 70, 40).expect("valid");
        assert_eq!(cities.len(), 40);
        for city in cities.iter() {
            assert!((0..65).contains(&city.x()));
            assert!((0..40).contains(&city.y()));
        }
    }

    #[test]
    fn test_cities_deterministic() {
        let a = random_cities(10, 5, 70, 40).expect("valid");
        let b = random_cities(10, 5, 70, 40).expect("valid");
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_cities_invalid_area() {
        assert!(random_cities(5, 1, 4, 40).is_none());
        assert!(random_cities(5, 1, 70, 0).is_none());
        assert!(random_cities(MAX_CITIES + 1, 1, 70, 40).is_none());
    }
}
