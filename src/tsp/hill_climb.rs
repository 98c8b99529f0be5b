//! Multi-restart steepest-descent local search for the TSP.
//!
//! # Algorithm
//!
//! The identity tour seeds the global best. Each restart shuffles a
//! working route with a fixed budget of random pairwise swaps over
//! positions `[1, n)` (city 0 stays anchored), then runs a steepest
//! improvement pass: scan every position pair `(i, j)` with
//! `1 <= i < j < n`, evaluate the full cycle length after swapping them,
//! apply the single best strictly-improving swap, and rescan until no
//! pair improves (a local optimum). The global best is updated whenever a
//! restart's local optimum is strictly shorter.
//!
//! This is a restart-based 2-opt-style search: it scales to the 100-city
//! bound but does not guarantee global optimality. Quality depends on the
//! restart and shuffle budgets, both tunable via [`HillClimbConfig`].

use crate::distance::{tour_length, DistanceMatrix};
use crate::models::{CityList, TourAnswer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the hill-climbing TSP solver.
///
/// Budgets are per city: an instance with `n` cities gets
/// `restarts_per_city * n` restarts of `shuffle_swaps_per_city * n`
/// random swaps each.
///
/// # Examples
///
/// ```
/// use u_exact::tsp::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_restarts_per_city(20)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbConfig {
    /// Restart count multiplier. Each restart climbs from a fresh shuffle.
    pub restarts_per_city: usize,

    /// Random pairwise swaps applied to the working route per restart.
    pub shuffle_swaps_per_city: usize,

    /// Random seed for reproducibility. `None` draws a seed from the
    /// process RNG at entry.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            restarts_per_city: 10,
            shuffle_swaps_per_city: 3,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    pub fn with_restarts_per_city(mut self, n: usize) -> Self {
        self.restarts_per_city = n;
        self
    }

    pub fn with_shuffle_swaps_per_city(mut self, n: usize) -> Self {
        self.shuffle_swaps_per_city = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.restarts_per_city == 0 {
            return Err("restarts_per_city must be at least 1".into());
        }
        if self.shuffle_swaps_per_city == 0 {
            return Err("shuffle_swaps_per_city must be at least 1".into());
        }
        Ok(())
    }
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult {
    /// The best tour found across all restarts.
    pub best: TourAnswer,

    /// Number of restarts performed.
    pub restarts: usize,

    /// Restarts whose local optimum improved the global best.
    pub improved_restarts: usize,

    /// Global best distance after each restart, seeded with the identity
    /// tour's distance. Non-increasing.
    pub history: Vec<f64>,
}

/// Runs multi-restart hill climbing on the given instance.
///
/// # Panics
///
/// Panics if `cities` is empty, if its size disagrees with `distances`,
/// or if `config` fails validation.
///
/// # Examples
///
/// ```
/// use u_exact::models::{City, CityList};
/// use u_exact::distance::DistanceMatrix;
/// use u_exact::tsp::{hill_climb, HillClimbConfig};
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
/// let result = hill_climb::solve(&cities, &dm, &HillClimbConfig::default().with_seed(1));
/// assert!((result.best.total_distance - 4.0).abs() < 1e-9);
/// ```
pub fn solve(
    cities: &CityList,
    distances: &DistanceMatrix,
    config: &HillClimbConfig,
) -> HillClimbResult {
    config.validate().expect("invalid HillClimbConfig");
    let n = cities.len();
    assert!(n >= 1, "at least one city is required");
    assert_eq!(distances.size(), n, "distance matrix size mismatch");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut best_route: Vec<usize> = (0..n).collect();
    let mut best_distance = tour_length(&best_route, distances);
    let mut history = vec![best_distance];

    // With city 0 anchored there is nothing to permute below three cities.
    if n < 3 {
        return HillClimbResult {
            best: TourAnswer::new(best_distance, best_route),
            restarts: 0,
            improved_restarts: 0,
            history,
        };
    }

    let restarts = config.restarts_per_city * n;
    let shuffle_swaps = config.shuffle_swaps_per_city * n;
    let mut improved_restarts = 0;
    let mut working = best_route.clone();

    for _ in 0..restarts {
        for _ in 0..shuffle_swaps {
            let a = rng.random_range(1..n);
            let b = rng.random_range(1..n);
            working.swap(a, b);
        }

        let (route, dist) = steepest_descent(&working, distances);
        // The next restart shuffles from this local optimum.
        working.copy_from_slice(&route);

        if dist < best_distance {
            best_distance = dist;
            best_route = route;
            improved_restarts += 1;
        }
        history.push(best_distance);
    }

    HillClimbResult {
        best: TourAnswer::new(best_distance, best_route),
        restarts,
        improved_restarts,
        history,
    }
}

/// Steepest pairwise-swap descent to a local optimum.
///
/// Each pass evaluates every swap of positions `(i, j)` with
/// `1 <= i < j < n` against the full cycle length, then applies only the
/// best strictly-improving one. Terminates when a full pass finds no
/// improvement.
fn steepest_descent(start: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let n = start.len();
    let mut current = start.to_vec();
    let mut current_distance = tour_length(&current, distances);

    loop {
        let mut best_swap: Option<(usize, usize)> = None;
        let mut best_distance = current_distance;

        for i in 1..n.saturating_sub(1) {
            for j in (i + 1)..n {
                current.swap(i, j);
                let candidate = tour_length(&current, distances);
                current.swap(i, j);
                if candidate < best_distance {
                    best_distance = candidate;
                    best_swap = Some((i, j));
                }
            }
        }

        match best_swap {
            Some((i, j)) => {
                current.swap(i, j);
                current_distance = best_distance;
            }
            None => return (current, current_distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn unit_square() -> (CityList, DistanceMatrix) {
        let cities = CityList::new(vec![
            City::new(0, 0),
            City::new(1, 0),
            City::new(1, 1),
            City::new(0, 1),
        ])
        .expect("valid");
        let dm = DistanceMatrix::from_cities(&cities);
        (cities, dm)
    }

    fn ring_cities(n: usize, radius: f64) -> CityList {
        let cities: Vec<City> = (0..n)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                City::new(
                    (radius * angle.cos()).round() as i32,
                    (radius * angle.sin()).round() as i32,
                )
            })
            .collect();
        CityList::new(cities).expect("valid")
    }

    #[test]
    fn test_unit_square_reaches_perimeter() {
        let (cities, dm) = unit_square();
        let config = HillClimbConfig::default().with_seed(7);
        let result = solve(&cities, &dm, &config);
        assert!((result.best.total_distance - 4.0).abs() < 1e-9);
        assert!(result.best.is_valid_route(&cities));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let cities = ring_cities(20, 15.0);
        let dm = DistanceMatrix::from_cities(&cities);
        let config = HillClimbConfig::default().with_seed(42);
        let a = solve(&cities, &dm, &config);
        let b = solve(&cities, &dm, &config);
        assert_eq!(a.best.route, b.best.route);
        assert_eq!(a.best.total_distance, b.best.total_distance);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_history_non_increasing() {
        let cities = ring_cities(15, 12.0);
        let dm = DistanceMatrix::from_cities(&cities);
        let result = solve(&cities, &dm, &HillClimbConfig::default().with_seed(3));
        assert_eq!(result.history.len(), result.restarts + 1);
        for window in result.history.windows(2) {
            assert!(
                window[1] <= window[0],
                "running best increased: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_never_worse_than_identity() {
        let cities = ring_cities(25, 20.0);
        let dm = DistanceMatrix::from_cities(&cities);
        let identity: Vec<usize> = (0..cities.len()).collect();
        let identity_distance = tour_length(&identity, &dm);
        let result = solve(&cities, &dm, &HillClimbConfig::default().with_seed(11));
        assert!(result.best.total_distance <= identity_distance);
        assert!(result.best.is_valid_route(&cities));
    }

    #[test]
    fn test_matches_exhaustive_on_small_instance() {
        let cities = CityList::new(vec![
            City::new(0, 0),
            City::new(9, 1),
            City::new(3, 8),
            City::new(7, 6),
            City::new(1, 4),
            City::new(5, 2),
        ])
        .expect("valid");
        let dm = DistanceMatrix::from_cities(&cities);
        let exact = crate::tsp::exhaustive::solve(&cities, &dm);
        let config = HillClimbConfig::default()
            .with_restarts_per_city(30)
            .with_seed(5);
        let result = solve(&cities, &dm, &config);
        // On tiny instances the restart budget finds the global optimum.
        assert!((result.best.total_distance - exact.total_distance).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_sizes() {
        for n in 1..3 {
            let cities = ring_cities(n, 5.0);
            let dm = DistanceMatrix::from_cities(&cities);
            let result = solve(&cities, &dm, &HillClimbConfig::default().with_seed(0));
            assert_eq!(result.restarts, 0);
            assert_eq!(result.best.route, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_distance_matches_route() {
        let cities = ring_cities(12, 10.0);
        let dm = DistanceMatrix::from_cities(&cities);
        let result = solve(&cities, &dm, &HillClimbConfig::default().with_seed(9));
        let recomputed = tour_length(&result.best.route, &dm);
        assert!((recomputed - result.best.total_distance).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_zero_budgets() {
        assert!(HillClimbConfig::default()
            .with_restarts_per_city(0)
            .validate()
            .is_err());
        assert!(HillClimbConfig::default()
            .with_shuffle_swaps_per_city(0)
            .validate()
            .is_err());
        assert!(HillClimbConfig::default().validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid HillClimbConfig")]
    fn test_solve_panics_on_invalid_config() {
        let (cities, dm) = unit_square();
        let config = HillClimbConfig::default().with_restarts_per_city(0);
        solve(&cities, &dm, &config);
    }
}
