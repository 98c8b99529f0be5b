//! Distance computation for TSP instances.
//!
//! Provides the Euclidean distance function, a dense precomputed distance
//! matrix, and the closed-tour length objective shared by both TSP engines.

mod matrix;

pub use matrix::{euclidean, tour_length, DistanceMatrix};
