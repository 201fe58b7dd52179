use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::search::{weighted_search, ExpansionRules, FrontierOrder, SearchResult};
use crate::solver::{GridSolver, Strategy};

const RULES: ExpansionRules = ExpansionRules {
    order: FrontierOrder::PathCost,
    stop_at_goal: false,
    revise_closed: true,
};

/// Uniform-cost search. Expands every cell reachable from the start before reconstructing the
/// path, and lowers the cost of already closed cells if a cheaper way onto them turns up.
#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn strategy(&self) -> Strategy {
        Strategy::Dijkstra
    }

    fn solve(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult, SearchError> {
        Ok(weighted_search(grid, start, goal, RULES, |_| 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WALL_COST;

    #[test]
    fn avoids_climbing() {
        // | 1 9 1 |
        // | 1 1 1 |
        let grid = PathingGrid::from_costs(3, 2, vec![1, 9, 1, 1, 1, 1]).unwrap();
        let path = DijkstraSolver.get_path(&grid, 0, 2).unwrap();
        assert_eq!(path, vec![0, 3, 4, 5, 2]);
        assert_eq!(DijkstraSolver.get_path_cost(&path, &grid), Ok(4));
    }

    #[test]
    fn downhill_is_free() {
        let grid = PathingGrid::from_costs(3, 1, vec![1, 5, 1]).unwrap();
        let up = DijkstraSolver.get_path(&grid, 0, 1).unwrap();
        let down = DijkstraSolver.get_path(&grid, 1, 0).unwrap();
        assert_eq!(grid.path_cost(&up), Ok(4));
        assert_eq!(grid.path_cost(&down), Ok(1));
    }

    #[test]
    fn expands_whole_component() {
        let mut grid = PathingGrid::new(5, 2);
        grid.set_cost(3, WALL_COST).unwrap();
        grid.set_cost(8, WALL_COST).unwrap();
        let result = DijkstraSolver.search(&grid, 0, 1).unwrap();
        assert_eq!(result.path, vec![0, 1]);
        // Everything left of the wall is discovered even though the goal is adjacent.
        let mut visited = result.visited.iter().copied().collect::<Vec<_>>();
        visited.sort();
        assert_eq!(visited, vec![0, 1, 2, 5, 6, 7]);
    }

    #[test]
    fn unreachable_goal() {
        let mut grid = PathingGrid::new(5, 2);
        grid.set_rect(2, 0, 1, 2, WALL_COST);
        let result = DijkstraSolver.search(&grid, 0, 9).unwrap();
        assert!(result.path.is_empty());
        assert_eq!(result.visited.len(), 4);
    }
}
