use crate::error::SearchError;
use crate::heuristics::HeuristicFn;
use crate::pathing_grid::PathingGrid;
use crate::search::SearchResult;
use log::{debug, info, warn};
use strum_macros::{Display, EnumIter, EnumString};

pub mod astar;
pub mod best_first;
pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;

use astar::AstarSolver;
use best_first::BestFirstSolver;
use breadth_first::BreadthFirstSolver;
use depth_first::DepthFirstSolver;
use dijkstra::DijkstraSolver;

/// The search strategies offered by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    BestFirst,
    Dijkstra,
    #[strum(serialize = "astar")]
    AStar,
}

impl Strategy {
    /// Whether the strategy consults a heuristic at all.
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::BestFirst | Strategy::AStar)
    }

    /// Runs the solver for this strategy with its default settings. `heuristic` is ignored by
    /// strategies that do not use one.
    pub fn search(
        self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
        heuristic: HeuristicFn,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Strategy::BreadthFirst => BreadthFirstSolver::new().search(grid, start, goal),
            Strategy::DepthFirst => DepthFirstSolver::new().search(grid, start, goal),
            Strategy::BestFirst => BestFirstSolver::new(heuristic).search(grid, start, goal),
            Strategy::Dijkstra => DijkstraSolver.search(grid, start, goal),
            Strategy::AStar => AstarSolver::new(heuristic).search(grid, start, goal),
        }
    }
}

pub trait GridSolver {
    fn strategy(&self) -> Strategy;

    /// Runs the search proper. Called by [search](Self::search) once both endpoints are known to
    /// be on the grid and passable.
    fn solve(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult, SearchError>;

    /// Searches for a path from `start` to `goal`. Fails if either index is off the grid or the
    /// solver gives up; an unreachable goal yields an empty path.
    fn search(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult, SearchError> {
        if grid.get_cost(start)? < 1 {
            warn!("{}: start {} is a wall", self.strategy(), start);
            return Ok(SearchResult::default());
        }
        if grid.get_cost(goal)? < 1 {
            warn!("{}: goal {} is a wall", self.strategy(), goal);
            return Ok(SearchResult::default());
        }
        debug!("{}: searching from {} to {}", self.strategy(), start, goal);
        match self.solve(grid, start, goal) {
            Ok(result) => {
                if result.is_found() {
                    info!(
                        "{}: found path of {} cells, visited {}",
                        self.strategy(),
                        result.path.len(),
                        result.visited.len()
                    );
                } else {
                    info!(
                        "{}: {} is not reachable from {}, visited {}",
                        self.strategy(),
                        goal,
                        start,
                        result.visited.len()
                    );
                }
                Ok(result)
            }
            Err(err) => {
                warn!("{}: {}", self.strategy(), err);
                Err(err)
            }
        }
    }

    fn get_path(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<Vec<usize>, SearchError> {
        self.search(grid, start, goal).map(|result| result.path)
    }

    fn get_path_cost(&self, path: &[usize], grid: &PathingGrid) -> Result<i32, SearchError> {
        grid.path_cost(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::manhattan;
    use crate::WALL_COST;
    use strum::IntoEnumIterator;

    #[test]
    fn every_strategy_walks_a_corridor() {
        let grid = PathingGrid::new(4, 1);
        for strategy in Strategy::iter() {
            let result = strategy.search(&grid, 0, 3, manhattan).unwrap();
            assert_eq!(result.path, vec![0, 1, 2, 3], "{strategy}");
        }
    }

    #[test]
    fn every_strategy_stops_at_a_wall() {
        let grid = PathingGrid::from_costs(3, 1, vec![1, WALL_COST, 1]).unwrap();
        for strategy in Strategy::iter() {
            let result = strategy.search(&grid, 0, 2, manhattan).unwrap();
            assert!(result.path.is_empty(), "{strategy}");
            assert!(!result.visited.contains(&1), "{strategy}");
        }
    }

    #[test]
    fn wall_goal_has_no_path() {
        let mut grid = PathingGrid::new(3, 3);
        grid.set_cost(8, WALL_COST).unwrap();
        for strategy in Strategy::iter() {
            assert!(strategy.search(&grid, 0, 8, manhattan).unwrap().path.is_empty());
            assert!(strategy.search(&grid, 8, 8, manhattan).unwrap().path.is_empty());
        }
    }

    #[test]
    fn wall_start_has_no_path() {
        let grid = PathingGrid::from_costs(3, 1, vec![WALL_COST, 1, 1]).unwrap();
        assert!(!grid.reachable(0, 2));
        for strategy in Strategy::iter() {
            let result = strategy.search(&grid, 0, 2, manhattan).unwrap();
            assert!(result.path.is_empty(), "{strategy}");
            assert!(result.visited.is_empty(), "{strategy}");
        }
    }

    #[test]
    fn endpoints_must_be_on_the_grid() {
        let grid = PathingGrid::new(2, 2);
        for strategy in Strategy::iter() {
            assert_eq!(
                strategy.search(&grid, 0, 4, manhattan).err(),
                Some(SearchError::OutOfBounds { idx: 4, size: 4 })
            );
            assert!(strategy.search(&grid, 9, 0, manhattan).is_err());
        }
    }

    #[test]
    fn equal_start_goal() {
        let grid = PathingGrid::new(3, 3);
        for strategy in Strategy::iter() {
            assert_eq!(strategy.search(&grid, 4, 4, manhattan).unwrap().path, vec![4]);
        }
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Strategy::AStar.to_string(), "astar");
        assert_eq!(Strategy::BreadthFirst.to_string(), "breadth-first");
        for strategy in Strategy::iter() {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("Dijkstra".parse::<Strategy>(), Ok(Strategy::Dijkstra));
        assert!(Strategy::AStar.uses_heuristic());
        assert!(!Strategy::Dijkstra.uses_heuristic());
    }
}
