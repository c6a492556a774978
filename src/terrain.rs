//! The terrain a [PathMap](crate::PathMap) is built from.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    #[error("terrain of {x_count}x{y_count} expects {expected} tiles, got {actual}")]
    TileCountMismatch {
        x_count: usize,
        y_count: usize,
        expected: usize,
        actual: usize,
    },
    #[error("terrain of {x_count}x{y_count} has more tiles than can be addressed")]
    TooLarge { x_count: usize, y_count: usize },
}

/// Read-only capability a [PathMap](crate::PathMap) needs from the surrounding world.
pub trait Terrain {
    /// Number of tiles along the x and y axis.
    fn dimensions(&self) -> (usize, usize);
    /// Movement cost multiplier of the tile at `(x, y)`. Only called for in-bounds
    /// coordinates.
    fn weight_at(&self, x: usize, y: usize) -> f64;
}

/// A single terrain tile.
pub trait Tile {
    fn weight(&self) -> f64;
}

impl Tile for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

impl Tile for f32 {
    fn weight(&self) -> f64 {
        *self as f64
    }
}

impl Tile for u8 {
    fn weight(&self) -> f64 {
        *self as f64
    }
}

impl Tile for u32 {
    fn weight(&self) -> f64 {
        *self as f64
    }
}

/// Flat, row-major tile store.
#[derive(Clone, Debug)]
pub struct TileTerrain<T> {
    pub x_count: usize,
    pub y_count: usize,
    tiles: Vec<T>,
}

impl<T: Tile> TileTerrain<T> {
    pub fn new(
        x_count: usize,
        y_count: usize,
        tiles: Vec<T>,
    ) -> Result<TileTerrain<T>, TerrainError> {
        let expected = x_count
            .checked_mul(y_count)
            .ok_or(TerrainError::TooLarge { x_count, y_count })?;
        if tiles.len() != expected {
            return Err(TerrainError::TileCountMismatch {
                x_count,
                y_count,
                expected,
                actual: tiles.len(),
            });
        }
        Ok(TileTerrain {
            x_count,
            y_count,
            tiles,
        })
    }
    /// Maps a coordinate to its index in the tile store.
    pub fn conv2dpos(&self, x: usize, y: usize) -> usize {
        y * self.x_count + x
    }
    pub fn tile(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.x_count && y < self.y_count {
            self.tiles.get(self.conv2dpos(x, y))
        } else {
            None
        }
    }
    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }
    /// Replaces a tile. A [PathMap](crate::PathMap) built earlier does not see the change
    /// and has to be rebuilt.
    pub fn set_tile(&mut self, x: usize, y: usize, tile: T) -> bool {
        if x < self.x_count && y < self.y_count {
            let ix = self.conv2dpos(x, y);
            self.tiles[ix] = tile;
            true
        } else {
            false
        }
    }
}

impl<T: Tile> Terrain for TileTerrain<T> {
    fn dimensions(&self) -> (usize, usize) {
        (self.x_count, self.y_count)
    }
    fn weight_at(&self, x: usize, y: usize) -> f64 {
        self.tiles[self.conv2dpos(x, y)].weight()
    }
}
