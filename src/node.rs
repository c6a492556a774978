use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{N_SMALLVEC_SIZE, WALL_WEIGHT};

/// Packed identifier of a grid cell, `y * width + x`. Unique per coordinate within one
/// [PathMap](crate::PathMap) and cheap to hash and compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Relative offsets of the Moore neighbourhood, in the order neighbours are listed:
/// north, south, east, west, then the four diagonals.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

/// A single traversable grid cell. Nodes are immutable once their [PathMap](crate::PathMap)
/// has been built; all per-search bookkeeping is kept outside of them.
#[derive(Clone, Debug)]
pub struct Node {
    pub point: Point,
    pub id: NodeId,
    pub weight: f64,
    pub wall: bool,
    pub(crate) neighbors: SmallVec<[NodeId; N_SMALLVEC_SIZE]>,
}

impl Node {
    pub fn new(point: Point, id: NodeId, weight: f64) -> Node {
        Node {
            point,
            id,
            weight,
            wall: weight == WALL_WEIGHT,
            neighbors: SmallVec::new(),
        }
    }
    pub fn x(&self) -> i32 {
        self.point.x
    }
    pub fn y(&self) -> i32 {
        self.point.y
    }
    /// Ids of the in-bounds adjacent cells, walls included.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.point == other.point
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_is_exact_weight() {
        assert!(Node::new(Point::new(0, 0), NodeId(0), 100.0).wall);
        assert!(!Node::new(Point::new(0, 0), NodeId(0), 99.0).wall);
        assert!(!Node::new(Point::new(0, 0), NodeId(0), 101.0).wall);
        assert!(!Node::new(Point::new(0, 0), NodeId(0), 1.0).wall);
    }

    #[test]
    fn offsets_are_distinct_and_exclude_origin() {
        for (i, a) in NEIGHBOUR_OFFSETS.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            for b in &NEIGHBOUR_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
