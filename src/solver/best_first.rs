use crate::error::SearchError;
use crate::heuristics::{manhattan, HeuristicFn};
use crate::pathing_grid::PathingGrid;
use crate::search::{weighted_search, ExpansionRules, FrontierOrder, SearchResult};
use crate::solver::{GridSolver, Strategy};

const RULES: ExpansionRules = ExpansionRules {
    order: FrontierOrder::Heuristic,
    stop_at_goal: true,
    revise_closed: false,
};

/// Greedy best-first search: always expands the frontier cell that the heuristic deems closest
/// to the goal. Path costs are still tracked to pick parents, but do not affect the order.
#[derive(Clone, Debug)]
pub struct BestFirstSolver {
    pub heuristic: HeuristicFn,
}

impl BestFirstSolver {
    pub fn new(heuristic: HeuristicFn) -> BestFirstSolver {
        BestFirstSolver { heuristic }
    }
}

impl Default for BestFirstSolver {
    fn default() -> Self {
        BestFirstSolver::new(manhattan)
    }
}

impl GridSolver for BestFirstSolver {
    fn strategy(&self) -> Strategy {
        Strategy::BestFirst
    }

    fn solve(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult, SearchError> {
        let target = grid.from_idx(goal);
        Ok(weighted_search(grid, start, goal, RULES, |p| {
            (self.heuristic)(p.x, p.y, target.x, target.y)
        }))
    }
}
