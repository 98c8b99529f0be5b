//! Problem instance sources: random generation and binary instance files.
//!
//! - [`random_itemset`] / [`random_cities`] — Seeded random instances
//! - [`load_itemset`] / [`save_itemset`] — Knapsack instance files
//! - [`load_cities`] / [`save_cities`] — TSP instance files
//!
//! The binary layouts are fixed, little-endian formats: a 4-byte count
//! followed by the value array then weight array (8-byte floats) for
//! items, or interleaved 4-byte x/y pairs for cities.

mod binary;
mod generate;

pub use binary::{load_cities, load_itemset, save_cities, save_itemset};
pub use generate::{random_cities, random_itemset};
