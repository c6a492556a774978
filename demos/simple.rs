use bidir_pathfinding::solver::bidirectional::{BidirectionalSolver, SearchContext};
use bidir_pathfinding::{PathMap, TileTerrain, WALL_WEIGHT};

// In this example a path is found on a terrain with shape
// #######
// #S 3  #
// # ### #
// #    E#
// #######
// S marks the start, E marks the end and 3 a tile that is three times as costly to enter.
fn main() {
    let (w, h) = (7, 5);
    let mut terrain = TileTerrain::new(w, h, vec![1.0; w * h]).unwrap();
    for x in 0..w {
        terrain.set_tile(x, 0, WALL_WEIGHT);
        terrain.set_tile(x, h - 1, WALL_WEIGHT);
    }
    for y in 0..h {
        terrain.set_tile(0, y, WALL_WEIGHT);
        terrain.set_tile(w - 1, y, WALL_WEIGHT);
    }
    for x in 2..5 {
        terrain.set_tile(x, 2, WALL_WEIGHT);
    }
    terrain.set_tile(3, 1, 3.0);
    let map = PathMap::new(&terrain).unwrap();
    println!("{}", map);

    let solver = BidirectionalSolver::new();
    let mut ct = SearchContext::new();
    let start = map.node(1, 1).unwrap();
    let end = map.node(5, 3).unwrap();
    let outcome = solver.search_with(&mut ct, &map, start, end);
    if outcome.found() {
        println!(
            "A path has been found after {} expansions, meeting at {:?}:",
            outcome.expanded,
            outcome.meeting.and_then(|id| map.node_by_id(id)).map(|n| n.point)
        );
        for node in outcome.path {
            println!("{:?}", node.point);
        }
    }
}
