use grid_util::point::Point;

/// Fixed-size, row-major 2D store. Cells are created once at construction; access outside
/// of the `width × height` rectangle yields [None] rather than panicking, which is what
/// neighbour resolution relies on.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f(x, y)` for every cell, row by row.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Grid<T>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Grid {
            width,
            height,
            cells,
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn index_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.index_in_bounds(point.x, point.y)
    }
    /// Linear index of an in-bounds coordinate.
    pub fn compute_ix(&self, x: i32, y: i32) -> Option<usize> {
        if self.index_in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.compute_ix(x, y).map(|ix| &self.cells[ix])
    }
    pub fn get_point(&self, point: Point) -> Option<&T> {
        self.get(point.x, point.y)
    }
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.compute_ix(x, y).map(move |ix| &mut self.cells[ix])
    }
    pub fn get_ix(&self, ix: usize) -> Option<&T> {
        self.cells.get(ix)
    }
    /// Replaces the value at `(x, y)`. Returns `false` and leaves the grid untouched if the
    /// coordinate is out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_not_found() {
        let grid = Grid::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(grid.get(2, 1), Some(&(2, 1)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
    }

    #[test]
    fn set_respects_bounds() {
        let mut grid = Grid::from_fn(2, 2, |_, _| 0);
        assert!(grid.set(1, 1, 7));
        assert!(!grid.set(2, 1, 9));
        assert_eq!(grid.get(1, 1), Some(&7));
        assert_eq!(grid.iter().sum::<i32>(), 7);
    }

    #[test]
    fn row_major_layout() {
        let grid = Grid::from_fn(4, 3, |x, y| y * 4 + x);
        for y in 0..3 {
            for x in 0..4 {
                let ix = grid.compute_ix(x, y).unwrap();
                assert_eq!(grid.get_ix(ix), grid.get(x, y));
            }
        }
        assert_eq!(grid.len(), 12);
    }
}
