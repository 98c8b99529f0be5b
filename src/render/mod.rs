//! ASCII map rendering of city layouts and routes.
//!
//! A diagnostic consumer only: the renderer reads a [`CityList`] and an
//! optional route and produces a character grid, with no feedback into
//! the solvers.
//!
//! [`CityList`]: crate::models::CityList

mod map;

pub use map::TextMap;
