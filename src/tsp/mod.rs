//! TSP solvers over a fixed-start closed tour.
//!
//! - [`exhaustive`] — Branch-and-bound enumeration of all `(n-1)!` cycles,
//!   a correctness reference for very small instances (n ≤ 10)
//! - [`hill_climb`] — Randomized multi-restart steepest-descent local
//!   search, the production path for realistic sizes (n ≤ 100)
//!
//! Both engines fix city 0 as the tour start and return a [`TourAnswer`]
//! whose route is a permutation of `[0, n)`.
//!
//! [`TourAnswer`]: crate::models::TourAnswer

pub mod exhaustive;
pub mod hill_climb;

pub use hill_climb::{HillClimbConfig, HillClimbResult};
