use crate::error::SearchError;
use crate::heuristics::{manhattan, HeuristicFn};
use crate::pathing_grid::PathingGrid;
use crate::search::{weighted_search, ExpansionRules, FrontierOrder, SearchResult};
use crate::solver::{GridSolver, Strategy};

const RULES: ExpansionRules = ExpansionRules {
    order: FrontierOrder::Estimate,
    stop_at_goal: true,
    revise_closed: false,
};

/// A* search ordered by path cost plus the heuristic estimate times `heuristic_factor`. A factor
/// above 1 trades optimality for fewer expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic: HeuristicFn,
    pub heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new(heuristic: HeuristicFn) -> AstarSolver {
        AstarSolver {
            heuristic,
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new(manhattan)
    }
}

impl GridSolver for AstarSolver {
    fn strategy(&self) -> Strategy {
        Strategy::AStar
    }

    fn solve(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult, SearchError> {
        let target = grid.from_idx(goal);
        Ok(weighted_search(grid, start, goal, RULES, |p| {
            (self.heuristic)(p.x, p.y, target.x, target.y) * self.heuristic_factor
        }))
    }
}
