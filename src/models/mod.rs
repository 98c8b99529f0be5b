//! Domain model types for knapsack and TSP instances.
//!
//! Provides the problem representations (weighted/valued items, 2D city
//! coordinates) and the answer types that carry an objective value together
//! with its witness (inclusion flags or route).

mod answer;
mod city;
mod item;

pub use answer::{KnapsackAnswer, TourAnswer};
pub use city::{City, CityList, MAX_CITIES};
pub use item::{Item, ItemSet, MAX_ITEMS};
