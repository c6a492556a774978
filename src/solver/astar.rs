use log::debug;

use crate::distance::distance_finder;
use crate::node::Node;
use crate::path_map::PathMap;
use crate::solver::{Direction, Frontier, PathSolver};

/// Plain single-frontier A* using the same expansion step as the bidirectional search.
/// Finds optimal paths whenever all weights are at least 1 and the heuristic factor is 1.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }
    /// The octile distance times the heuristic factor.
    pub fn heuristic(&self, a: &Node, b: &Node) -> f64 {
        distance_finder(a, b) * self.heuristic_factor
    }
}

impl PathSolver for AstarSolver {
    fn find_path<'a>(&self, map: &'a PathMap, start: &Node, goal: &Node) -> Vec<&'a Node> {
        if !map.contains(start) || !map.contains(goal) || start.wall || goal.wall {
            return Vec::new();
        }
        if map.unreachable(&start.point, &goal.point) {
            debug!("{:?} is not reachable from {:?}", goal.point, start.point);
            return Vec::new();
        }
        let heuristic = |a: &Node, b: &Node| self.heuristic(a, b);
        let mut frontier = Frontier::new(Direction::Forward);
        frontier.seed(start, heuristic(start, goal));
        while let Some(id) = frontier.pop_next() {
            if id == goal.id {
                return frontier.path_to(map, id);
            }
            if let Some(current) = map.node_by_id(id) {
                frontier.expand(map, current, goal, &heuristic);
            }
        }
        Vec::new()
    }
}
