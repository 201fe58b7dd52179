use crate::direction::{Connectivity, Direction};
use crate::error::SearchError;
use crate::{DEFAULT_COST, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Cost of stepping from a cell of cost `from` onto a neighbour of cost `to`. Climbing costs the
/// full difference, flat and downhill moves cost 1.
#[inline]
pub fn step_cost(from: i32, to: i32) -> i32 {
    1.max(to - from)
}

/// [PathingGrid] stores one signed traversal cost per cell, addressed by the linear index
/// `x + y * width`. Cells with a cost below 1 are walls. Connected components are maintained
/// using a [UnionFind] structure so that reachability can be queried without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    width: usize,
    height: usize,
    costs: Vec<i32>,
    connectivity: Connectivity,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(0, 0)
    }
}

impl PathingGrid {
    /// Creates a 4-connected grid where every cell has [DEFAULT_COST].
    pub fn new(width: usize, height: usize) -> PathingGrid {
        let mut grid = PathingGrid {
            width,
            height,
            costs: vec![DEFAULT_COST; width * height],
            connectivity: Connectivity::default(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Creates a grid from row-major costs.
    pub fn from_costs(
        width: usize,
        height: usize,
        costs: Vec<i32>,
    ) -> Result<PathingGrid, SearchError> {
        if costs.len() != width * height {
            return Err(SearchError::DimensionMismatch {
                expected: width * height,
                actual: costs.len(),
            });
        }
        let mut grid = PathingGrid {
            width,
            height,
            costs,
            connectivity: Connectivity::default(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of cells, one past the largest valid index.
    pub fn size(&self) -> usize {
        self.costs.len()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
    /// Switches between 4- and 8-connectivity. Marks components dirty when the mode changes.
    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        if self.connectivity != connectivity {
            self.connectivity = connectivity;
            self.components_dirty = true;
        }
    }
    /// The directions expanded from each cell, in expansion order.
    pub fn valid_directions(&self) -> &'static [Direction] {
        self.connectivity.directions()
    }

    /// Offset of a raw direction value, see [Direction::from_raw].
    pub fn neighbor_offset(direction: u8) -> Result<(i32, i32), SearchError> {
        Direction::from_raw(direction).map(Direction::offset)
    }

    #[inline]
    pub fn to_idx(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y));
        x as usize + y as usize * self.width
    }
    #[inline]
    pub fn from_idx(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    fn check_idx(&self, idx: usize) -> Result<(), SearchError> {
        if idx < self.costs.len() {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds {
                idx,
                size: self.costs.len(),
            })
        }
    }

    pub fn get_cost(&self, idx: usize) -> Result<i32, SearchError> {
        self.check_idx(idx)?;
        Ok(self.costs[idx])
    }

    /// Updates the cost of a cell. No clamping is applied. Opening a cell joins it to the
    /// components of its neighbours; walling off a passable cell flags the components as dirty
    /// since they may have been broken apart.
    pub fn set_cost(&mut self, idx: usize, cost: i32) -> Result<(), SearchError> {
        self.check_idx(idx)?;
        self.write_cost(idx, cost);
        Ok(())
    }

    /// [set_cost](Self::set_cost) for an index already known to be in bounds.
    fn write_cost(&mut self, idx: usize, cost: i32) {
        let was_passable = self.costs[idx] >= 1;
        self.costs[idx] = cost;
        if cost < 1 {
            if was_passable {
                self.components_dirty = true;
            }
        } else {
            for (n, _) in self.neighbours_of(idx) {
                self.components.union(idx, n);
            }
        }
    }

    /// Sets every cell to `cost` and regenerates the components.
    pub fn fill(&mut self, cost: i32) {
        self.costs.fill(cost);
        self.generate_components();
    }

    /// Sets the cost of every cell in the rectangle with top-left corner `(x, y)`. Parts of the
    /// rectangle outside the grid are ignored.
    pub fn set_rect(&mut self, x: usize, y: usize, width: usize, height: usize, cost: i32) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for (cy, cx) in iproduct!(y..y_end, x..x_end) {
            self.write_cost(cx + cy * self.width, cost);
        }
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// True iff `(x, y)` lies on the grid and is not a wall.
    #[inline]
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.costs[self.to_idx(x, y)] >= 1
    }

    /// Cost of moving from cell `from` to cell `to`, see [step_cost].
    pub fn edge_cost(&self, from: usize, to: usize) -> Result<i32, SearchError> {
        Ok(step_cost(self.get_cost(from)?, self.get_cost(to)?))
    }

    /// Sum of the edge costs along a path. Empty and single-cell paths cost 0.
    pub fn path_cost(&self, path: &[usize]) -> Result<i32, SearchError> {
        path.iter()
            .tuple_windows()
            .map(|(&from, &to)| self.edge_cost(from, to))
            .sum()
    }

    /// Valid neighbours of a cell in [valid_directions](Self::valid_directions) order, each
    /// paired with the cost of stepping onto it.
    pub fn neighbours(
        &self,
        idx: usize,
    ) -> Result<SmallVec<[(usize, i32); N_SMALLVEC_SIZE]>, SearchError> {
        self.check_idx(idx)?;
        Ok(self.neighbours_of(idx))
    }

    /// [neighbours](Self::neighbours) for an index already known to be in bounds.
    pub(crate) fn neighbours_of(&self, idx: usize) -> SmallVec<[(usize, i32); N_SMALLVEC_SIZE]> {
        let p = self.from_idx(idx);
        let cost = self.costs[idx];
        self.valid_directions()
            .iter()
            .map(|dir| {
                let (dx, dy) = dir.offset();
                (p.x + dx, p.y + dy)
            })
            .filter(|&(nx, ny)| self.is_valid(nx, ny))
            .map(|(nx, ny)| {
                let n = self.to_idx(nx, ny);
                (n, step_cost(cost, self.costs[n]))
            })
            .collect()
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, idx: usize) -> Result<usize, SearchError> {
        self.check_idx(idx)?;
        Ok(self.components.find(idx))
    }

    /// Checks if goal can be reached from start. Both cells have to be passable. Only accurate
    /// when the components are not dirty, see [update](Self::update).
    pub fn reachable(&self, start: usize, goal: usize) -> bool {
        start < self.size()
            && goal < self.size()
            && self.costs[start] >= 1
            && self.costs[goal] >= 1
            && self.components.equiv(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up valid neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.size());
        self.components_dirty = false;
        for idx in 0..self.size() {
            if self.costs[idx] >= 1 {
                for (n, _) in self.neighbours_of(idx) {
                    self.components.union(idx, n);
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.costs.chunks(self.width.max(1)) {
            let values = row
                .iter()
                .map(|&c| {
                    if c < 1 {
                        format!("{:>2}", "#")
                    } else {
                        format!("{:>2}", c)
                    }
                })
                .join(" ");
            writeln!(f, "{}", values)?;
        }
        Ok(())
    }
}
