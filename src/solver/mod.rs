use fxhash::FxHashSet;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use log::trace;

use crate::distance;
use crate::heap::{BinaryHeap, Prioritized};
use crate::node::{Node, NodeId};
use crate::path_map::PathMap;
use crate::FxIndexMap;

pub mod astar;
pub mod bidirectional;

/// Which end of the query a [Frontier] grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Per-search bookkeeping of a node within one frontier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRecord {
    /// Cost from the frontier's origin.
    pub g: f64,
    /// Heuristic estimate to the frontier's target.
    pub h: f64,
    pub f: f64,
    /// The node this one was reached from, [None] for the origin.
    pub previous: Option<NodeId>,
}

#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f: f64,
    id: NodeId,
}

impl Prioritized for OpenEntry {
    fn f(&self) -> f64 {
        self.f
    }
}

/// One direction of a search: an open heap, the records of every discovered node (which
/// double as the open-set lookup) and the set of closed nodes.
#[derive(Clone, Debug)]
pub struct Frontier {
    pub direction: Direction,
    open: BinaryHeap<OpenEntry>,
    records: FxIndexMap<NodeId, SearchRecord>,
    closed: FxHashSet<NodeId>,
}

impl Frontier {
    pub fn new(direction: Direction) -> Frontier {
        Frontier {
            direction,
            open: BinaryHeap::new(),
            records: FxIndexMap::default(),
            closed: FxHashSet::default(),
        }
    }
    /// Forgets all state of the previous search, keeping allocations.
    pub fn clear(&mut self) {
        self.open.clear();
        self.records.clear();
        self.closed.clear();
    }
    /// Makes `origin` the root of this frontier with `g = 0`.
    pub fn seed(&mut self, origin: &Node, h: f64) {
        let record = SearchRecord {
            g: 0.0,
            h,
            f: h,
            previous: None,
        };
        self.records.insert(origin.id, record);
        self.open.push(OpenEntry {
            f: record.f,
            id: origin.id,
        });
    }
    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }
    pub fn is_closed(&self, id: NodeId) -> bool {
        self.closed.contains(&id)
    }
    pub fn record(&self, id: NodeId) -> Option<&SearchRecord> {
        self.records.get(&id)
    }
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.records.get(&id).and_then(|r| r.previous)
    }
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }
    /// Pops the cheapest open node. A node may sit in the heap several times if a cheaper
    /// way to it was found after it was first pushed; copies of already closed nodes are
    /// discarded.
    pub fn pop_next(&mut self) -> Option<NodeId> {
        while let Some(OpenEntry { id, .. }) = self.open.pop() {
            if !self.closed.contains(&id) {
                return Some(id);
            }
        }
        None
    }
    /// Relaxes every passable, unclosed neighbour of `current` and then closes `current`.
    /// The step into a neighbour costs the octile distance times the neighbour's weight.
    /// Returns how many neighbours were (re)opened.
    pub fn expand<F>(
        &mut self,
        map: &PathMap,
        current: &Node,
        target: &Node,
        heuristic: &F,
    ) -> usize
    where
        F: Fn(&Node, &Node) -> f64,
    {
        let current_g = self.records.get(&current.id).map_or(0.0, |r| r.g);
        let mut relaxed = 0;
        for neighbor in map.neighbors(current) {
            if neighbor.wall || self.closed.contains(&neighbor.id) {
                continue;
            }
            let tentative_g = current_g + distance::step_cost(current, neighbor);
            let record = match self.records.entry(neighbor.id) {
                Vacant(e) => {
                    let h = heuristic(neighbor, target);
                    *e.insert(SearchRecord {
                        g: tentative_g,
                        h,
                        f: tentative_g + h,
                        previous: Some(current.id),
                    })
                }
                Occupied(mut e) => {
                    if tentative_g < e.get().g {
                        let h = heuristic(neighbor, target);
                        e.insert(SearchRecord {
                            g: tentative_g,
                            h,
                            f: tentative_g + h,
                            previous: Some(current.id),
                        });
                        *e.get()
                    } else {
                        continue;
                    }
                }
            };
            self.open.push(OpenEntry {
                f: record.f,
                id: neighbor.id,
            });
            relaxed += 1;
        }
        self.closed.insert(current.id);
        trace!(
            "{:?} expanded {:?} (g = {}), {} neighbours relaxed",
            self.direction,
            current.point,
            current_g,
            relaxed
        );
        relaxed
    }
    /// Ids along the back-pointers starting at `from`, ending at the frontier's origin.
    pub fn back_pointers(&self, from: Option<NodeId>) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(from, move |id| self.previous(*id))
    }
    /// The nodes from the frontier's origin up to and including `id`.
    pub fn path_to<'a>(&self, map: &'a PathMap, id: NodeId) -> Vec<&'a Node> {
        let mut path = self
            .back_pointers(Some(id))
            .filter_map(|id| map.node_by_id(id))
            .collect::<Vec<&Node>>();
        path.reverse();
        path
    }
}

/// A pathfinding strategy over a [PathMap]. An empty result means the goal cannot be
/// reached from the start; it is not an error.
pub trait PathSolver {
    /// Computes a path from `start` to `goal`, both inclusive.
    fn find_path<'a>(&self, map: &'a PathMap, start: &Node, goal: &Node) -> Vec<&'a Node>;

    /// Like [find_path](Self::find_path) but addressed by coordinates. Points off the map
    /// yield an empty path.
    fn find_point_path(&self, map: &PathMap, start: Point, goal: Point) -> Vec<Point> {
        match (map.node_at(start), map.node_at(goal)) {
            (Some(s), Some(g)) => self
                .find_path(map, s, g)
                .into_iter()
                .map(|n| n.point)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn path_cost(&self, path: &[&Node]) -> f64 {
        distance::path_cost(path)
    }
}
