//! # grid_search
//!
//! State-space search on a rectangular grid of weighted cells. Implements
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [greedy best-first](https://en.wikipedia.org/wiki/Best-first_search),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search over a [PathingGrid].
//!
//! Cells are addressed by the linear index `x + y * width`. A cell with a cost below 1 is a wall.
//! Stepping onto a neighbour costs `max(1, neighbour - current)`: climbing is charged the full
//! difference while flat and downhill moves cost 1, so edge costs depend on the direction of
//! travel. Every search returns the set of discovered cells alongside the path, which is empty
//! when the goal cannot be reached.
//!
//! ```
//! use grid_search::{search, Heuristic, PathingGrid, Strategy};
//!
//! let grid = PathingGrid::new(4, 1);
//! let result = search(Strategy::AStar, Heuristic::Manhattan, 0, 3, &grid).unwrap();
//! assert_eq!(result.path, vec![0, 1, 2, 3]);
//! ```
pub mod direction;
pub mod error;
pub mod heuristics;
pub mod pathing_grid;
pub mod priority_queue;
pub mod search;
pub mod solver;

pub use direction::{Connectivity, Direction};
pub use error::SearchError;
pub use heuristics::{Heuristic, HeuristicFn};
pub use pathing_grid::PathingGrid;
pub use search::SearchResult;
pub use solver::{GridSolver, Strategy};

/// Pops after which breadth- and depth-first search give up.
pub const MAX_UNWEIGHTED_ITERATIONS: usize = 10_000;
/// Conventional cost of a wall. Any cost below 1 blocks a cell.
pub const WALL_COST: i32 = -1;
/// Cost of the cells of a new grid.
pub const DEFAULT_COST: i32 = 1;
/// Inline capacity of neighbour lists.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Runs `strategy` from `start` to `goal` on `grid`. `heuristic` is only used by best-first
/// search and A*.
pub fn search(
    strategy: Strategy,
    heuristic: Heuristic,
    start: usize,
    goal: usize,
    grid: &PathingGrid,
) -> Result<SearchResult, SearchError> {
    strategy.search(grid, start, goal, heuristic.function())
}
