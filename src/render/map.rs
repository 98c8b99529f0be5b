//! Character-grid plotting.

use crate::models::CityList;

/// An ASCII drawing surface for city maps.
///
/// Cities are labeled `C_<i>` at their grid coordinates; route edges are
/// drawn with `*` between consecutive cities, wrapping from the last city
/// back to the first. Labels win over route markers, and anything that
/// falls outside the grid is clipped.
///
/// # Examples
///
/// ```
/// use u_exact::models::{City, CityList};
/// use u_exact::render::TextMap;
///
/// let cities = CityList::new(vec![City::new(1, 1), City::new(10, 1)]).unwrap();
/// let map = TextMap::default();
/// let plot = map.plot(&cities, Some(&[0, 1]));
/// assert!(plot.contains("C_0"));
/// assert!(plot.contains("C_1"));
/// assert!(plot.contains('*'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextMap {
    width: usize,
    height: usize,
}

impl Default for TextMap {
    /// The classic 70x40 terminal map.
    fn default() -> Self {
        Self {
            width: 70,
            height: 40,
        }
    }
}

impl TextMap {
    /// Creates a map surface of the given size.
    ///
    /// Returns `None` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Map width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Renders the cities (and the route, when given) to a newline-joined
    /// character grid.
    pub fn plot(&self, cities: &CityList, route: Option<&[usize]>) -> String {
        let mut grid = vec![b' '; self.width * self.height];

        for (i, city) in cities.iter().enumerate() {
            let label = format!("C_{i}");
            for (j, ch) in label.bytes().enumerate() {
                self.put(&mut grid, city.x() + j as i32, city.y(), ch, true);
            }
        }

        if let Some(route) = route {
            for i in 0..route.len() {
                let a = cities.get(route[i]);
                let b = cities.get(route[(i + 1) % route.len()]);
                self.draw_line(&mut grid, (a.x(), a.y()), (b.x(), b.y()));
            }
        }

        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(grid[y * self.width + x] as char);
            }
            out.push('\n');
        }
        out
    }

    /// Walks `max(|dx|, |dy|)` interpolation steps between two cities,
    /// marking blank cells with `*`.
    fn draw_line(&self, grid: &mut [u8], a: (i32, i32), b: (i32, i32)) {
        let steps = (a.0 - b.0).abs().max((a.1 - b.1).abs());
        for i in 1..=steps {
            let x = a.0 + i * (b.0 - a.0) / steps;
            let y = a.1 + i * (b.1 - a.1) / steps;
            self.put(grid, x, y, b'*', false);
        }
    }

    /// Writes a cell if it is on the grid; `overwrite` lets labels replace
    /// route markers but never the other way around.
    fn put(&self, grid: &mut [u8], x: i32, y: i32, ch: u8, overwrite: bool) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let cell = &mut grid[y as usize * self.width + x as usize];
        if overwrite || *cell == b' ' {
            *cell = ch;
        }
    }
}
