//! Branch-and-bound enumeration of Hamiltonian cycles.
//!
//! # Algorithm
//!
//! Fixes `route[0] = 0` and fills the remaining positions depth-first,
//! trying every unvisited city at each depth. The identity-order tour
//! seeds the incumbent bound; a branch is cut as soon as its partial
//! accumulated distance reaches the best complete tour seen so far, which
//! cannot discard an improving cycle because edge lengths are
//! non-negative. At depth n the cycle is closed with the edge
//! `route[n-1] -> route[0]` and compared against the incumbent.
//!
//! # Complexity
//!
//! O((n-1)!) in the worst case. Only viable for very small n; use
//! [`hill_climb`](crate::tsp::hill_climb) beyond roughly 10 cities.

use crate::distance::{tour_length, DistanceMatrix};
use crate::models::{CityList, TourAnswer};

/// Finds the shortest closed tour through every city, exactly.
///
/// The returned route is a permutation of `[0, n)` starting at city 0.
/// The first route attaining the minimum distance is kept; later
/// equal-length cycles do not replace it.
///
/// # Panics
///
/// Panics if `cities` is empty or its size disagrees with `distances`.
///
/// # Examples
///
/// ```
/// use u_exact::models::{City, CityList};
/// use u_exact::distance::DistanceMatrix;
/// use u_exact::tsp::exhaustive;
///
/// let cities = CityList::new(vec![
///     City::new(0, 0),
///     City::new(1, 0),
///     City::new(1, 1),
///     City::new(0, 1),
/// ])
/// .unwrap();
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let answer = exhaustive::solve(&cities, &dm);
/// assert!((answer.total_distance - 4.0).abs() < 1e-9);
/// assert!(answer.is_valid_route(&cities));
/// ```
pub fn solve(cities: &CityList, distances: &DistanceMatrix) -> TourAnswer {
    let n = cities.len();
    assert!(n >= 1, "at least one city is required");
    assert_eq!(distances.size(), n, "distance matrix size mismatch");

    // Identity-order tour: incumbent bound and fallback witness.
    let mut best_route: Vec<usize> = (0..n).collect();
    let mut best_distance = tour_length(&best_route, distances);

    let mut route = best_route.clone();
    let mut visited = vec![false; n];
    visited[0] = true;

    search(
        1,
        distances,
        &mut route,
        &mut visited,
        0.0,
        &mut best_distance,
        &mut best_route,
    );

    TourAnswer::new(best_distance, best_route)
}

/// Extends the partial tour `route[..position]` with every unvisited city,
/// recording completed cycles that beat the incumbent.
///
/// `route` and `visited` are caller-owned buffers mutated in place; each
/// loop iteration marks a city, recurses, and unmarks it before trying the
/// next sibling.
fn search(
    position: usize,
    distances: &DistanceMatrix,
    route: &mut [usize],
    visited: &mut [bool],
    sum_d: f64,
    best_distance: &mut f64,
    best_route: &mut [usize],
) {
    let n = distances.size();
    assert!(sum_d >= 0.0, "accumulated distance must stay non-negative");

    // The partial path already matches the incumbent; no completion of it
    // can be strictly shorter.
    if sum_d >= *best_distance {
        return;
    }

    if position == n {
        let total = sum_d + distances.get(route[n - 1], route[0]);
        if total < *best_distance {
            *best_distance = total;
            best_route.copy_from_slice(route);
        }
        return;
    }

    for city in 1..n {
        if !visited[city] {
            route[position] = city;
            visited[city] = true;
            let edge = distances.get(route[position - 1], city);
            search(
                position + 1,
                distances,
                route,
                visited,
                sum_d + edge,
                best_distance,
                best_route,
            );
            visited[city] = false;
        }
    }
}
