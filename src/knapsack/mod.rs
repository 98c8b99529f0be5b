//! Exhaustive recursive search for the 0/1 knapsack problem.
//!
//! - [`solve`] — Depth-first exploration of every include/exclude decision

mod search;

pub use search::solve;
