//! # u-exact
//!
//! Exact and local-search solvers for two classical combinatorial
//! optimization problems: the 0/1 knapsack problem and the Euclidean
//! traveling salesman problem (TSP).
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Item, ItemSet, City, CityList, answers)
//! - [`distance`] — Euclidean distance matrix and tour length
//! - [`knapsack`] — Exhaustive recursive 0/1 knapsack search
//! - [`tsp`] — Branch-and-bound and restart hill-climbing TSP solvers
//! - [`io`] — Random instance generation and binary instance files
//! - [`render`] — ASCII map plotting of city layouts and routes
//!
//! ## Example
//!
//! ```
//! use u_exact::models::{City, CityList};
//! use u_exact::distance::DistanceMatrix;
//! use u_exact::tsp;
//!
//! // Unit square: the optimal tour is the perimeter.
//! let cities = CityList::new(vec![
//!     City::new(0, 0),
//!     City::new(1, 0),
//!     City::new(1, 1),
//!     City::new(0, 1),
//! ])
//! .unwrap();
//! let dm = DistanceMatrix::from_cities(&cities);
//!
//! let answer = tsp::exhaustive::solve(&cities, &dm);
//! assert!((answer.total_distance - 4.0).abs() < 1e-9);
//! ```

pub mod distance;
pub mod io;
pub mod knapsack;
pub mod models;
pub mod render;
pub mod tsp;
