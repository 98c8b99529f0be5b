//! City and city list types for the TSP.

use serde::{Deserialize, Serialize};

/// Maximum number of cities a [`CityList`] may hold.
pub const MAX_CITIES: usize = 100;

/// A city on the integer grid.
///
/// Immutable once constructed; cities are owned collectively by a
/// [`CityList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    x: i32,
    y: i32,
}

impl City {
    /// Creates a city at the given grid coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// An ordered, read-only list of cities.
///
/// The order is fixed by the loading source; index 0 is always treated as
/// the start of the tour.
///
/// # Examples
///
/// ```
/// use u_exact::models::{City, CityList};
///
/// let cities = CityList::new(vec![City::new(0, 0), City::new(3, 4)]).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert!((cities.get(0).distance_to(cities.get(1)) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityList {
    cities: Vec<City>,
}

impl CityList {
    /// Creates a city list.
    ///
    /// Returns `None` if there are more than [`MAX_CITIES`] cities.
    pub fn new(cities: Vec<City>) -> Option<Self> {
        if cities.len() > MAX_CITIES {
            return None;
        }
        Some(Self { cities })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the city at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// Iterates over the cities in load order.
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// All cities as a slice.
    pub fn as_slice(&self) -> &[City] {
        &self.cities
    }
}
