use indexmap::map::Entry::Vacant;
use std::collections::VecDeque;

use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::search::{FxIndexMap, NodeInfo, SearchResult};
use crate::solver::{GridSolver, Strategy};
use crate::MAX_UNWEIGHTED_ITERATIONS;

/// Breadth-first search. Every move counts as one step regardless of cell cost, so the path found
/// has the fewest cells. A cell's parent is fixed when it is first discovered.
#[derive(Clone, Debug)]
pub struct BreadthFirstSolver {
    /// Number of dequeues after which the search is aborted.
    pub iteration_limit: usize,
}

impl BreadthFirstSolver {
    pub fn new() -> BreadthFirstSolver {
        BreadthFirstSolver {
            iteration_limit: MAX_UNWEIGHTED_ITERATIONS,
        }
    }
}

impl Default for BreadthFirstSolver {
    fn default() -> Self {
        BreadthFirstSolver::new()
    }
}

impl GridSolver for BreadthFirstSolver {
    fn strategy(&self) -> Strategy {
        Strategy::BreadthFirst
    }

    fn solve(
        &self,
        grid: &PathingGrid,
        start: usize,
        goal: usize,
    ) -> Result<SearchResult, SearchError> {
        let mut open = VecDeque::new();
        let mut info: FxIndexMap<usize, NodeInfo> = FxIndexMap::default();
        info.insert(start, NodeInfo::root());
        open.push_back(start);

        let mut iterations = 0;
        while let Some(idx) = open.pop_front() {
            iterations += 1;
            if iterations > self.iteration_limit {
                return Err(SearchError::SearchAborted {
                    iterations: self.iteration_limit,
                });
            }
            if idx == goal {
                return Ok(SearchResult::from_info(&info, goal));
            }
            let depth = info[&idx].g_score;
            for (successor, _) in grid.neighbours_of(idx) {
                if let Vacant(e) = info.entry(successor) {
                    e.insert(NodeInfo::child(idx, depth + 1.0));
                    open.push_back(successor);
                }
            }
        }
        Ok(SearchResult::from_info(&info, goal))
    }
}
