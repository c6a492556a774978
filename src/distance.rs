use grid_util::point::Point;
use itertools::Itertools;

use crate::node::Node;
use crate::path_map::PathMap;

/// `sqrt(2) - 1`, the extra cost of a diagonal step over a straight one.
const DIAGONAL_SURPLUS: f64 = std::f64::consts::SQRT_2 - 1.0;

/// Octile distance: the length of the shortest 8-connected route between two points on
/// an empty grid where straight steps cost 1 and diagonal steps cost `sqrt(2)`.
pub fn octile_distance(p1: &Point, p2: &Point) -> f64 {
    let delta_x = (p1.x - p2.x).unsigned_abs() as f64;
    let delta_y = (p1.y - p2.y).unsigned_abs() as f64;
    delta_x.max(delta_y) + DIAGONAL_SURPLUS * delta_x.min(delta_y)
}

/// [octile_distance] between the coordinates of two nodes.
pub fn distance_finder(a: &Node, b: &Node) -> f64 {
    octile_distance(&a.point, &b.point)
}

/// Cost of moving from `from` into the adjacent `to`.
pub fn step_cost(from: &Node, to: &Node) -> f64 {
    distance_finder(from, to) * to.weight
}

/// Sums the [step_cost] of every consecutive pair of a path. Empty and single-node paths
/// cost nothing.
pub fn path_cost(path: &[&Node]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| step_cost(a, b))
        .sum()
}

/// [path_cost] of a path given as points. Points that are not on the map are skipped.
pub fn point_path_cost(map: &PathMap, path: &[Point]) -> f64 {
    let nodes = path
        .iter()
        .filter_map(|p| map.node_at(*p))
        .collect::<Vec<&Node>>();
    path_cost(&nodes)
}
