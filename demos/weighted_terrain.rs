use grid_search::{
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver},
    Connectivity, GridSolver, Heuristic, PathingGrid,
};

// A hill in the middle of the map. Climbing it is expensive, walking around it is cheap and
// descending costs nothing extra.
fn main() {
    let mut grid = PathingGrid::new(12, 9);
    grid.set_connectivity(Connectivity::Eight);
    for (height, inset) in [(4, 2), (8, 3), (16, 4)] {
        grid.set_rect(inset, inset - 1, 12 - 2 * inset, 9 - 2 * (inset - 1), height);
    }
    println!("{grid}");

    let start = grid.to_idx(0, 4);
    let goal = grid.to_idx(11, 4);
    let astar = AstarSolver::new(Heuristic::Chebyshev.function());
    for (name, solver) in [
        ("A*", &astar as &dyn GridSolver),
        ("Dijkstra", &DijkstraSolver as &dyn GridSolver),
    ] {
        match solver.search(&grid, start, goal) {
            Ok(result) => {
                let cost = grid.path_cost(&result.path).unwrap_or_default();
                println!(
                    "{name}: {} cells, cost {cost}, {} cells visited",
                    result.path.len(),
                    result.visited.len()
                );
            }
            Err(err) => println!("{name}: {err}"),
        }
    }
}
