use grid_search::{search, Heuristic, PathingGrid, Strategy, WALL_COST};
use strum::IntoEnumIterator;

// Runs every strategy with every heuristic on the same walled grid and prints a summary table.
fn main() {
    let mut grid = PathingGrid::new(40, 30);
    for x in (5..40).step_by(5) {
        let (y, len) = if x % 10 == 0 { (5, 25) } else { (0, 25) };
        grid.set_rect(x, y, 1, len, WALL_COST);
    }
    let start = 0;
    let goal = grid.to_idx(37, 22);
    println!("{:<16}{:<12}{:>8}{:>8}{:>10}", "strategy", "heuristic", "cells", "cost", "visited");
    for strategy in Strategy::iter() {
        let heuristics: Vec<Heuristic> = if strategy.uses_heuristic() {
            Heuristic::iter().collect()
        } else {
            vec![Heuristic::default()]
        };
        for heuristic in heuristics {
            match search(strategy, heuristic, start, goal, &grid) {
                Ok(result) => println!(
                    "{:<16}{:<12}{:>8}{:>8}{:>10}",
                    strategy.to_string(),
                    heuristic.to_string(),
                    result.path.len(),
                    grid.path_cost(&result.path).unwrap_or_default(),
                    result.visited.len()
                ),
                Err(err) => println!("{:<16}{:<12}{err}", strategy.to_string(), heuristic.to_string()),
            }
        }
    }
}
