//! Distance estimates between two grid coordinates, used to guide best-first search and A*.
//!
//! Every move costs at least 1, so Manhattan and Euclidean never overestimate on a 4-grid and
//! Chebyshev never overestimates on either grid. Manhattan does overestimate on an 8-grid.
use grid_util::point::Point;
use strum_macros::{Display, EnumIter, EnumString};

/// A heuristic maps `(x0, y0, x1, y1)` to a non-negative distance estimate.
pub type HeuristicFn = fn(i32, i32, i32, i32) -> f64;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry).
pub fn manhattan(x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
    ((x1 - x0).abs() + (y1 - y0).abs()) as f64
}

/// [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance).
pub fn euclidean(x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
    let dx = (x1 - x0) as f64;
    let dy = (y1 - y0) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance).
pub fn chebyshev(x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
    (x1 - x0).abs().max((y1 - y0).abs()) as f64
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl Heuristic {
    pub fn function(self) -> HeuristicFn {
        match self {
            Heuristic::Manhattan => manhattan,
            Heuristic::Euclidean => euclidean,
            Heuristic::Chebyshev => chebyshev,
        }
    }

    pub fn distance(self, p1: &Point, p2: &Point) -> f64 {
        (self.function())(p1.x, p1.y, p2.x, p2.y)
    }
}
