use std::iter::FusedIterator;

use crate::error::GridError;
use crate::model::Coord;

/// Moore-neighborhood offsets in the fixed order NW, N, NE, W, E, SW, S, SE.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size 2D grid whose edges wrap around (a torus).
///
/// Cells are stored row-major: linear index = `y * width + x`. Every
/// coordinate, including negative and out-of-range ones, is wrapped with
/// Euclidean modulo before indexing, so `get`/`set` are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToroidalGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> ToroidalGrid<T> {
    /// Create a `width` x `height` grid with every cell set to `fill`.
    pub fn new(width: i64, height: i64, fill: T) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let too_large = GridError::TooLarge { width, height };
        let (w, h) = match (usize::try_from(width), usize::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(too_large),
        };
        let len = w.checked_mul(h).ok_or_else(|| too_large.clone())?;
        if len > isize::MAX as usize / std::mem::size_of::<T>().max(1) {
            return Err(too_large);
        }
        Ok(Self {
            width: w,
            height: h,
            cells: vec![fill; len],
        })
    }

    /// Reset every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> ToroidalGrid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Normalize a coordinate onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> Coord {
        Coord::new(
            x.rem_euclid(self.width as i64),
            y.rem_euclid(self.height as i64),
        )
    }

    fn index(&self, x: i64, y: i64) -> usize {
        let c = self.wrap(x, y);
        c.y as usize * self.width + c.x as usize
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new((index % self.width) as i64, (index / self.width) as i64)
    }

    pub fn get(&self, x: i64, y: i64) -> &T {
        &self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: i64, y: i64, value: T) {
        let i = self.index(x, y);
        self.cells[i] = value;
    }

    /// Wrapped coordinates of the 8 Moore neighbors, in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbor_coords(&self, x: i64, y: i64) -> [Coord; 8] {
        let c = self.wrap(x, y);
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.wrap(c.x + dx, c.y + dy))
    }

    /// The 8 Moore neighbors of `(x, y)`, in [`NEIGHBOR_OFFSETS`] order.
    ///
    /// On grids narrower or shorter than 3 the same cell can appear more
    /// than once (or be the center cell itself).
    pub fn neighbors(&self, x: i64, y: i64) -> [&T; 8] {
        let c = self.wrap(x, y);
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.get(c.x + dx, c.y + dy))
    }

    /// Row-major pass over `(coordinate, value)` pairs. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            grid: self,
            next: 0,
        }
    }
}

/// Row-major iterator over a [`ToroidalGrid`] (y outer, x inner).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    grid: &'a ToroidalGrid<T>,
    next: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Coord, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.grid.cells.get(self.next)?;
        let coord = self.grid.coord_of(self.next);
        self.next += 1;
        Some((coord, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ToroidalGrid<T> {
    type Item = (Coord, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
