use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{search, Connectivity, Heuristic, PathingGrid, Strategy, WALL_COST};
use rand::prelude::*;
use std::hint::black_box;
use strum::IntoEnumIterator;

const WIDTH: usize = 40;
const HEIGHT: usize = 30;

fn random_terrain(rng: &mut StdRng, connectivity: Connectivity) -> PathingGrid {
    let mut grid = PathingGrid::new(WIDTH, HEIGHT);
    grid.set_connectivity(connectivity);
    for idx in 0..grid.size() {
        let cost = if rng.gen_bool(0.15) {
            WALL_COST
        } else {
            rng.gen_range(1..=32)
        };
        grid.set_cost(idx, cost).unwrap();
    }
    grid.update();
    grid
}

fn random_scenarios(grid: &PathingGrid, rng: &mut StdRng, n: usize) -> Vec<(usize, usize)> {
    let mut scenarios = Vec::with_capacity(n);
    while scenarios.len() < n {
        let start = rng.gen_range(0..grid.size());
        let goal = rng.gen_range(0..grid.size());
        if grid.reachable(start, goal) {
            scenarios.push((start, goal));
        }
    }
    scenarios
}

fn strategy_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        let grid = random_terrain(&mut rng, connectivity);
        let scenarios = random_scenarios(&grid, &mut rng, 50);
        let diag_str = match connectivity {
            Connectivity::Four => "4-grid",
            Connectivity::Eight => "8-grid",
        };
        for strategy in Strategy::iter() {
            c.bench_function(format!("{strategy}, {diag_str}").as_str(), |b| {
                b.iter(|| {
                    for &(start, goal) in &scenarios {
                        // The unweighted strategies never hit their budget on a grid this size.
                        let _ = black_box(search(
                            strategy,
                            Heuristic::Manhattan,
                            start,
                            goal,
                            &grid,
                        ));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
