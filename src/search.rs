//! Per-invocation search bookkeeping and the expansion loop shared by the weighted solvers.
//! Structured like [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! except that the frontier supports removal so each cell is enqueued at most once.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::pathing_grid::PathingGrid;
use crate::priority_queue::PriorityQueue;
use grid_util::point::Point;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Bookkeeping for a discovered cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeInfo {
    pub parent: Option<usize>,
    /// Accumulated cost from the start along the best known path. Step count for the unweighted
    /// solvers.
    pub g_score: f64,
    /// `g_score` plus the heuristic estimate, only tracked by A*.
    pub f_score: Option<f64>,
}

impl NodeInfo {
    pub fn root() -> NodeInfo {
        NodeInfo {
            parent: None,
            g_score: 0.0,
            f_score: None,
        }
    }
    pub fn child(parent: usize, g_score: f64) -> NodeInfo {
        NodeInfo {
            parent: Some(parent),
            g_score,
            f_score: None,
        }
    }
}

/// Outcome of a single search.
#[derive(Clone, Debug, Default)]
pub struct SearchResult {
    /// Every discovered cell, in discovery order.
    pub visited: FxIndexSet<usize>,
    /// Cells from start to goal inclusive, empty if the goal was not reached.
    pub path: Vec<usize>,
}

impl SearchResult {
    pub fn new(visited: FxIndexSet<usize>, path: Vec<usize>) -> SearchResult {
        SearchResult { visited, path }
    }
    pub fn unreachable(visited: FxIndexSet<usize>) -> SearchResult {
        SearchResult::new(visited, Vec::new())
    }
    /// Builds the result from the bookkeeping map, with the path to `goal` if it was discovered.
    pub fn from_info(info: &FxIndexMap<usize, NodeInfo>, goal: usize) -> SearchResult {
        let path = if info.contains_key(&goal) {
            reconstruct_path(info, goal)
        } else {
            Vec::new()
        };
        SearchResult::new(info.keys().copied().collect(), path)
    }
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Walks the parent links back from `goal` and returns the cells in start to goal order.
pub fn reconstruct_path(info: &FxIndexMap<usize, NodeInfo>, goal: usize) -> Vec<usize> {
    let mut path: Vec<usize> =
        std::iter::successors(Some(goal), |node| info.get(node).and_then(|n| n.parent)).collect();
    path.reverse();
    path
}

/// Key by which the weighted frontier is ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrontierOrder {
    /// Heuristic estimate to the goal only.
    Heuristic,
    /// Accumulated path cost.
    PathCost,
    /// Path cost plus heuristic estimate.
    Estimate,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ExpansionRules {
    pub order: FrontierOrder,
    /// Return as soon as the goal is popped instead of exhausting the frontier.
    pub stop_at_goal: bool,
    /// Lower the cost and reparent closed cells when a cheaper way onto them is found. The
    /// correction is not propagated to their descendants.
    pub revise_closed: bool,
}

/// Priority-queue driven expansion shared by best-first search, Dijkstra and A*. Moves are
/// charged with [step_cost](crate::pathing_grid::step_cost). `heuristic` estimates the
/// remaining cost from a cell to the goal and is only consulted when the frontier order needs it.
pub(crate) fn weighted_search<FH>(
    grid: &PathingGrid,
    start: usize,
    goal: usize,
    rules: ExpansionRules,
    mut heuristic: FH,
) -> SearchResult
where
    FH: FnMut(&Point) -> f64,
{
    let mut open: PriorityQueue<usize, f64> = PriorityQueue::new();
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut info: FxIndexMap<usize, NodeInfo> = FxIndexMap::default();

    let mut root = NodeInfo::root();
    if rules.order == FrontierOrder::Estimate {
        root.f_score = Some(heuristic(&grid.from_idx(start)));
    }
    info.insert(start, root);
    open.enqueue(start, 0.0);

    while let Some((idx, _)) = open.dequeue_min() {
        if rules.stop_at_goal && idx == goal {
            break;
        }
        closed.insert(idx);
        let g_score = info[&idx].g_score;
        for (successor, move_cost) in grid.neighbours_of(idx) {
            let tentative = g_score + move_cost as f64;
            if closed.contains(&successor) {
                // Never taken by Dijkstra, which pops in exact g order with steps of at least 1.
                if rules.revise_closed {
                    if let Some(node) = info.get_mut(&successor) {
                        if tentative < node.g_score {
                            node.parent = Some(idx);
                            node.g_score = tentative;
                        }
                    }
                }
                continue;
            }
            let entry = match info.entry(successor) {
                Vacant(e) => e.insert(NodeInfo::child(idx, tentative)),
                Occupied(e) => {
                    if tentative >= e.get().g_score {
                        continue;
                    }
                    open.remove(&successor);
                    let node = e.into_mut();
                    *node = NodeInfo::child(idx, tentative);
                    node
                }
            };
            let priority = match rules.order {
                FrontierOrder::Heuristic => heuristic(&grid.from_idx(successor)),
                FrontierOrder::PathCost => tentative,
                FrontierOrder::Estimate => {
                    let f_score = tentative + heuristic(&grid.from_idx(successor));
                    entry.f_score = Some(f_score);
                    f_score
                }
            };
            open.enqueue(successor, priority);
        }
    }
    debug!(
        "Expanded {} of {} discovered cells",
        closed.len(),
        info.len()
    );
    SearchResult::from_info(&info, goal)
}
