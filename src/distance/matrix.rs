//! Dense distance matrix and tour length.

use crate::models::{City, CityList};

/// Euclidean distance between two cities: `sqrt(dx^2 + dy^2)`.
pub fn euclidean(a: &City, b: &City) -> f64 {
    a.distance_to(b)
}

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Both TSP engines evaluate tour lengths many times over the same city
/// set, so pairwise distances are computed once up front.
///
/// # Examples
///
/// ```
/// use u_exact::models::{City, CityList};
/// use u_exact::distance::DistanceMatrix;
///
/// let cities = CityList::new(vec![
///     City::new(0, 0),
///     City::new(3, 4),
///     City::new(6, 8),
/// ])
/// .unwrap();
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix for a city list.
    pub fn from_cities(cities: &CityList) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = euclidean(cities.get(i), cities.get(j));
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Total length of the closed tour `route[0] -> ... -> route[n-1] -> route[0]`.
///
/// # Panics
///
/// Panics if any route entry is out of bounds for the matrix.
///
/// # Examples
///
/// ```
/// use u_exact::models::{City, CityList};
/// use u_exact::distance::{tour_length, DistanceMatrix};
///
/// let cities = CityList::new(vec![
///     City::new(0, 0),
///     City::new(1, 0),
///     City::new(1, 1),
///     City::new(0, 1),
/// ])
/// .unwrap();
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((tour_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(route: &[usize], distances: &DistanceMatrix) -> f64 {
    if route.len() < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..route.len() {
        let c0 = route[i];
        let c1 = route[(i + 1) % route.len()];
        sum += distances.get(c0, c1);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn sample_cities() -> CityList {
        CityList::new(vec![City::new(0, 0), City::new(3, 4), City::new(0, 8)]).expect("valid")
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!(dm.get(0, 0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_euclidean() {
        let a = City::new(0, 0);
        let b = City::new(3, 4);
        assert!((euclidean(&a, &b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length_square() {
        let cities = CityList::new(vec![
            City::new(0, 0),
            City::new(1, 0),
            City::new(1, 1),
            City::new(0, 1),
        ])
        .expect("valid");
        let dm = DistanceMatrix::from_cities(&cities);
        assert!((tour_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
        // Diagonal order is longer.
        assert!(tour_length(&[0, 2, 1, 3], &dm) > 4.0);
    }

    #[test]
    fn test_tour_length_degenerate() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(tour_length(&[], &dm), 0.0);
        assert_eq!(tour_length(&[1], &dm), 0.0);
    }

    #[test]
    fn test_tour_length_two_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        // There and back: 0 -> 1 -> 0.
        assert!((tour_length(&[0, 1], &dm) - 10.0).abs() < 1e-10);
    }
}
