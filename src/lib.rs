//! # bidir_pathfinding
//!
//! Bidirectional [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on
//! weighted 8-connected grids. A [PathMap] is built once from a [Terrain] and then
//! queried any number of times. Two frontiers, one grown from the start and one from
//! the goal, are expanded in turn until a node closed by one of them is popped by the
//! other; the path is stitched together at that meeting node.
//!
//! Step costs are the [octile distance](distance::octile_distance) between adjacent
//! cells multiplied by the weight of the entered cell. Cells with weight exactly
//! [WALL_WEIGHT] are walls and are never entered. Connected components are
//! pre-computed to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use bidir_pathfinding::{PathMap, TileTerrain};
//! use bidir_pathfinding::solver::{bidirectional::BidirectionalSolver, PathSolver};
//! use grid_util::point::Point;
//!
//! let terrain = TileTerrain::new(3, 3, vec![1.0; 9]).unwrap();
//! let map = PathMap::new(&terrain).unwrap();
//! let path = BidirectionalSolver::new().find_point_path(&map, Point::new(0, 0), Point::new(2, 2));
//! assert_eq!(path.len(), 3);
//! ```
pub mod distance;
pub mod grid;
pub mod heap;
pub mod node;
pub mod path_map;
pub mod solver;
pub mod terrain;

pub use crate::grid::Grid;
pub use crate::heap::{BinaryHeap, Prioritized};
pub use crate::node::{Node, NodeId};
pub use crate::path_map::{PathMap, PathMapError};
pub use crate::solver::bidirectional::find_path;
pub use crate::terrain::{Terrain, TerrainError, Tile, TileTerrain};

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Terrain weight marking a cell as impassable. Compared by exact equality.
pub const WALL_WEIGHT: f64 = 100.0;
/// Inline capacity of neighbour lists: the size of the Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
