use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::search::{reconstruct_path, FxIndexMap, FxIndexSet, NodeInfo, SearchResult};
use crate::solver::{GridSolver, Strategy};
use crate::MAX_UNWEIGHTED_ITERATIONS;

/// Depth-first search over a stack of `(cell, pusher)` pairs. A cell may be pushed several
/// times; it is closed on its first pop with the most recent pusher as parent, which makes the
/// parent links a depth-first tree.
#[derive(Clone, Debug)]
pub struct DepthFirstSolver {
    /// Number of pops after which the search is aborted.
    pub iteration_limit: usize,
}

impl DepthFirstSolver {
    pub fn new() -> DepthFirstSolver {
        DepthFirstSolver {
            iteration_limit: MAX_UNWEIGHTED_ITERATIONS,
        }
    }
}

impl Default for DepthFirstSolver {
    fn default() -> Self {
        DepthFirstSolver::new()
    }
}

impl GridSolver for DepthFirstSolver {
    fn strategy(&self) -> Strategy {
        Strategy::DepthFirst
    }

    fn solve(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult, SearchError> {
        let mut open: Vec<(usize, Option<usize>)> = vec![(start, None)];
        let mut discovered: FxIndexSet<usize> = FxIndexSet::default();
        discovered.insert(start);
        // Closed cells and their parents.
        let mut info: FxIndexMap<usize, NodeInfo> = FxIndexMap::default();

        let mut iterations = 0;
        while let Some((idx, parent)) = open.pop() {
            iterations += 1;
            if iterations > self.iteration_limit {
                return Err(SearchError::SearchAborted {
                    iterations: self.iteration_limit,
                });
            }
            if info.contains_key(&idx) {
                continue;
            }
            let node = match parent {
                Some(p) => NodeInfo::child(p, info[&p].g_score + 1.0),
                None => NodeInfo::root(),
            };
            info.insert(idx, node);
            if idx == goal {
                let path = reconstruct_path(&info, goal);
                return Ok(SearchResult::new(discovered, path));
            }
            for (successor, _) in grid.neighbours_of(idx) {
                if !info.contains_key(&successor) {
                    discovered.insert(successor);
                    open.push((successor, Some(idx)));
                }
            }
        }
        Ok(SearchResult::unreachable(discovered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WALL_COST;

    #[test]
    fn follows_last_pushed_direction() {
        // West is pushed last on a 4-grid and therefore explored first.
        let grid = PathingGrid::new(3, 2);
        let path = DepthFirstSolver::new().get_path(&grid, 2, 5).unwrap();
        assert_eq!(path, vec![2, 1, 0, 3, 4, 5]);
    }

    #[test]
    fn path_is_connected() {
        let mut grid = PathingGrid::new(6, 6);
        grid.set_rect(1, 0, 1, 5, WALL_COST);
        grid.set_rect(3, 1, 1, 5, WALL_COST);
        let path = DepthFirstSolver::new().get_path(&grid, 0, 35).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&35));
        for pair in path.windows(2) {
            let (a, b) = (grid.from_idx(pair[0]), grid.from_idx(pair[1]));
            assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
        }
    }

    #[test]
    fn visited_contains_discovered_cells() {
        let mut grid = PathingGrid::new(3, 3);
        grid.set_rect(0, 1, 3, 1, WALL_COST);
        let result = DepthFirstSolver::new().search(&grid, 0, 8).unwrap();
        assert!(result.path.is_empty());
        let mut visited = result.visited.iter().copied().collect::<Vec<_>>();
        visited.sort();
        assert_eq!(visited, vec![0, 1, 2]);
    }

    #[test]
    fn aborts_on_large_grid() {
        let grid = PathingGrid::new(200, 200);
        assert!(matches!(
            DepthFirstSolver::new().search(&grid, 0, grid.size() - 1),
            Err(SearchError::SearchAborted { .. })
        ));
    }
}
