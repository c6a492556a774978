//! Bidirectional A*: one frontier grows from the start towards the goal, the other from the
//! goal towards the start. They take turns popping their cheapest open node; the first
//! node popped by one frontier that the other has already closed is the meeting node, and
//! the path is the forward back-pointer chain up to it followed by the backward chain
//! down to the goal.
use log::{debug, warn};

use crate::distance::distance_finder;
use crate::node::{Node, NodeId};
use crate::path_map::PathMap;
use crate::solver::{Direction, Frontier, PathSolver};

/// Reusable per-search state. Nodes never hold search state themselves, so any number of
/// contexts can search the same [PathMap] concurrently.
#[derive(Clone, Debug)]
pub struct SearchContext {
    pub forward: Frontier,
    pub backward: Frontier,
    meeting: Option<NodeId>,
}

impl Default for SearchContext {
    fn default() -> SearchContext {
        SearchContext {
            forward: Frontier::new(Direction::Forward),
            backward: Frontier::new(Direction::Backward),
            meeting: None,
        }
    }
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }
    /// Forgets the previous search, including its meeting node, keeping allocations.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
        self.meeting = None;
    }
    /// Clears the state left by the previous search and seeds both frontiers: the start
    /// with its estimate to the goal and the goal with its estimate to the start.
    pub fn reset<F>(&mut self, start: &Node, goal: &Node, heuristic: &F)
    where
        F: Fn(&Node, &Node) -> f64,
    {
        self.clear();
        self.forward.seed(start, heuristic(start, goal));
        self.backward.seed(goal, heuristic(goal, start));
    }
    /// The meeting node of the last search, if it succeeded.
    pub fn meeting(&self) -> Option<NodeId> {
        self.meeting
    }
    pub fn frontier(&self, direction: Direction) -> &Frontier {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }
    /// Stitches the path together at `meeting`: start up to and including the meeting
    /// node, then the backward chain from the meeting node's successor to the goal.
    pub fn make_path<'a>(&self, map: &'a PathMap, meeting: NodeId) -> Vec<&'a Node> {
        let mut path = self.forward.path_to(map, meeting);
        path.extend(
            self.backward
                .back_pointers(self.backward.previous(meeting))
                .filter_map(|id| map.node_by_id(id)),
        );
        path
    }
}

/// Result of a single search.
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome<'a> {
    /// Start to goal inclusive, empty if no path was found.
    pub path: Vec<&'a Node>,
    pub meeting: Option<NodeId>,
    /// Number of node expansions over both frontiers.
    pub expanded: usize,
}

impl<'a> SearchOutcome<'a> {
    fn unreachable(expanded: usize) -> SearchOutcome<'a> {
        SearchOutcome {
            path: Vec::new(),
            meeting: None,
            expanded,
        }
    }
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct BidirectionalSolver {
    /// Multiplies the octile heuristic. Values above 1 trade path quality for speed.
    pub heuristic_factor: f64,
    /// Gives up, returning no path, after this many expansions.
    pub max_expansions: Option<usize>,
    /// Rejects queries between different connected components before searching.
    pub prune_unreachable: bool,
}

impl Default for BidirectionalSolver {
    fn default() -> BidirectionalSolver {
        BidirectionalSolver {
            heuristic_factor: 1.0,
            max_expansions: None,
            prune_unreachable: true,
        }
    }
}

impl BidirectionalSolver {
    pub fn new() -> BidirectionalSolver {
        BidirectionalSolver::default()
    }
    pub fn heuristic(&self, a: &Node, b: &Node) -> f64 {
        distance_finder(a, b) * self.heuristic_factor
    }
    /// Runs a search with a fresh [SearchContext].
    pub fn search<'a>(&self, map: &'a PathMap, start: &Node, goal: &Node) -> SearchOutcome<'a> {
        let mut ct = SearchContext::new();
        self.search_with(&mut ct, map, start, goal)
    }
    /// Runs a search reusing the allocations of `ct`.
    pub fn search_with<'a>(
        &self,
        ct: &mut SearchContext,
        map: &'a PathMap,
        start: &Node,
        goal: &Node,
    ) -> SearchOutcome<'a> {
        ct.clear();
        let (start, goal) = match (map.node_by_id(start.id), map.node_by_id(goal.id)) {
            (Some(s), Some(g)) if s == start && g == goal => (s, g),
            _ => {
                debug!("{:?} or {:?} is not on this map", start.point, goal.point);
                return SearchOutcome::unreachable(0);
            }
        };
        if start.wall || goal.wall {
            debug!("{:?} or {:?} is a wall", start.point, goal.point);
            return SearchOutcome::unreachable(0);
        }
        let heuristic = |a: &Node, b: &Node| self.heuristic(a, b);
        ct.reset(start, goal, &heuristic);
        if start.id == goal.id {
            ct.meeting = Some(start.id);
            return SearchOutcome {
                path: vec![start],
                meeting: ct.meeting,
                expanded: 0,
            };
        }
        if self.prune_unreachable && map.unreachable(&start.point, &goal.point) {
            debug!("{:?} is not reachable from {:?}", goal.point, start.point);
            return SearchOutcome::unreachable(0);
        }

        let mut direction = Direction::Forward;
        let mut expanded = 0;
        while !ct.forward.is_exhausted() && !ct.backward.is_exhausted() {
            let (frontier, opposite, target) = match direction {
                Direction::Forward => (&mut ct.forward, &ct.backward, goal),
                Direction::Backward => (&mut ct.backward, &ct.forward, start),
            };
            let Some(id) = frontier.pop_next() else {
                break;
            };
            if opposite.is_closed(id) {
                ct.meeting = Some(id);
                let path = ct.make_path(map, id);
                debug!(
                    "Frontiers met at {:?} after {} expansions, path of {} nodes",
                    map.node_by_id(id).map(|n| n.point),
                    expanded,
                    path.len()
                );
                return SearchOutcome {
                    path,
                    meeting: ct.meeting,
                    expanded,
                };
            }
            if self.max_expansions.is_some_and(|max| expanded >= max) {
                warn!(
                    "Search from {:?} to {:?} aborted after {} expansions",
                    start.point, goal.point, expanded
                );
                return SearchOutcome::unreachable(expanded);
            }
            if let Some(current) = map.node_by_id(id) {
                frontier.expand(map, current, target, &heuristic);
                expanded += 1;
            }
            direction = direction.opposite();
        }
        debug!(
            "A frontier was exhausted after {} expansions, {:?} is not reachable from {:?}",
            expanded, goal.point, start.point
        );
        SearchOutcome::unreachable(expanded)
    }
    /// [find_path](PathSolver::find_path) reusing the allocations of `ct`.
    pub fn find_path_with<'a>(
        &self,
        ct: &mut SearchContext,
        map: &'a PathMap,
        start: &Node,
        goal: &Node,
    ) -> Vec<&'a Node> {
        self.search_with(ct, map, start, goal).path
    }
}

impl PathSolver for BidirectionalSolver {
    fn find_path<'a>(&self, map: &'a PathMap, start: &Node, goal: &Node) -> Vec<&'a Node> {
        self.search(map, start, goal).path
    }
}

/// Finds a path from `start` to `goal` with a default [BidirectionalSolver]. Returns an
/// empty path if the goal cannot be reached.
pub fn find_path<'a>(start: &Node, goal: &Node, map: &'a PathMap) -> Vec<&'a Node> {
    BidirectionalSolver::new().find_path(map, start, goal)
}
