use core::fmt;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use thiserror::Error;

use crate::grid::Grid;
use crate::node::{Node, NodeId, NEIGHBOUR_OFFSETS};
use crate::terrain::Terrain;
use crate::N_SMALLVEC_SIZE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathMapError {
    #[error("terrain has no tiles ({width}x{height})")]
    Empty { width: usize, height: usize },
    #[error("terrain of {width}x{height} does not fit in packed node ids")]
    TooLarge { width: usize, height: usize },
}

/// [PathMap] owns the [Grid] of [Node]s derived from a [Terrain], with every node's
/// neighbour list resolved once at construction. It also keeps the connected components
/// of the passable nodes in a [UnionFind] structure so that searches between unconnected
/// nodes can be rejected without flood-filling.
///
/// A [PathMap] is read-only once built. If the terrain changes, build a new one.
///
/// ```compile_fail
/// use bidir_pathfinding::{Node, NodeId, PathMap, TileTerrain};
/// use grid_util::point::Point;
///
/// let mut map = PathMap::new(&TileTerrain::new(2, 1, vec![1.0; 2]).unwrap()).unwrap();
/// map.grid.set(1, 0, Node::new(Point::new(1, 0), NodeId(1), 1.0));
/// ```
#[derive(Clone, Debug)]
pub struct PathMap {
    grid: Grid<Node>,
    components: UnionFind<usize>,
}

impl PathMap {
    pub fn new<T: Terrain + ?Sized>(terrain: &T) -> Result<PathMap, PathMapError> {
        let (width, height) = terrain.dimensions();
        if width == 0 || height == 0 {
            return Err(PathMapError::Empty { width, height });
        }
        let fits = width
            .checked_mul(height)
            .is_some_and(|n| n <= u32::MAX as usize)
            && width <= i32::MAX as usize
            && height <= i32::MAX as usize;
        if !fits {
            return Err(PathMapError::TooLarge { width, height });
        }
        info!("Building path map of {}x{}", width, height);
        let grid = Grid::from_fn(width, height, |x, y| {
            let point = Point::new(x as i32, y as i32);
            let id = NodeId((y * width + x) as u32);
            Node::new(point, id, terrain.weight_at(x, y))
        });
        let mut map = PathMap {
            grid,
            components: UnionFind::new(width * height),
        };
        map.resolve_neighbors();
        map.generate_components();
        Ok(map)
    }

    /// Second construction pass: every node probes its eight surrounding coordinates
    /// through the grid, which only yields in-bounds nodes.
    fn resolve_neighbors(&mut self) {
        let resolved = self
            .grid
            .iter()
            .map(|node| {
                NEIGHBOUR_OFFSETS
                    .iter()
                    .filter_map(|(dx, dy)| self.grid.get(node.point.x + dx, node.point.y + dy))
                    .map(|n| n.id)
                    .collect::<SmallVec<[NodeId; N_SMALLVEC_SIZE]>>()
            })
            .collect::<Vec<_>>();
        for (node, neighbors) in self.grid.iter_mut().zip(resolved) {
            node.neighbors = neighbors;
        }
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    fn generate_components(&mut self) {
        info!("Generating connected components");
        let mut components = UnionFind::new(self.grid.len());
        for node in self.grid.iter().filter(|n| !n.wall) {
            for neighbor in self.neighbors(node).filter(|n| !n.wall) {
                components.union(node.id.index(), neighbor.id.index());
            }
        }
        self.components = components;
    }

    pub fn grid(&self) -> &Grid<Node> {
        &self.grid
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn len(&self) -> usize {
        self.grid.len()
    }
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
    pub fn node(&self, x: i32, y: i32) -> Option<&Node> {
        self.grid.get(x, y)
    }
    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.grid.get_point(point)
    }
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.grid.get_ix(id.index())
    }
    /// Whether `node` is the node this map holds at its coordinates.
    pub fn contains(&self, node: &Node) -> bool {
        self.node_by_id(node.id).is_some_and(|n| n == node)
    }
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.grid.iter()
    }
    pub fn neighbors<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.neighbors
            .iter()
            .filter_map(move |id| self.node_by_id(*id))
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn component(&self, point: &Point) -> Option<usize> {
        self.node_at(*point)
            .map(|n| self.components.find(n.id.index()))
    }
    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start or goal is off the map, is a wall, or lies on a different component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.node_at(*start), self.node_at(*goal)) {
            (Some(s), Some(g)) => {
                s.wall || g.wall || !self.components.equiv(s.id.index(), g.id.index())
            }
            _ => true,
        }
    }
}

impl fmt::Display for PathMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Weights:")?;
        for y in 0..self.grid.height as i32 {
            let values = (0..self.grid.width as i32)
                .filter_map(|x| self.grid.get(x, y))
                .map(|n| n.weight)
                .collect::<Vec<f64>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
