use grid_search::{search, Heuristic, PathingGrid, Strategy, WALL_COST};

// In this example a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let mut grid = PathingGrid::new(5, 5);
    grid.fill(WALL_COST);
    grid.set_rect(1, 1, 3, 3, 1);
    grid.set_cost(grid.to_idx(2, 2), WALL_COST).unwrap();
    let start = grid.to_idx(1, 1);
    let end = grid.to_idx(3, 3);
    match search(Strategy::AStar, Heuristic::Manhattan, start, end, &grid) {
        Ok(result) if result.is_found() => {
            println!("A path has been found:");
            for idx in result.path {
                println!("{:?}", grid.from_idx(idx));
            }
        }
        Ok(_) => println!("No path exists"),
        Err(err) => println!("Search failed: {err}"),
    }
}
