use crate::{GetNeighbors, Glyph, GridError, GridResult, MooreNeighbors, Neighborhood};
use boolinator::Boolinator;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::io::{self, Write};

/// A fixed-size grid of cells whose edges wrap around.
///
/// Cells are stored row-major. Every coordinate, including negative ones, maps onto a cell with
/// Euclidean modulo, so no access can ever be out of bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToroidalGrid<C> {
    cells: Vec<C>,
    width: usize,
    height: usize,
}

/// Checks that a grid of `width` by `height` cells is non-empty and addressable with `isize`.
fn check_dimensions(width: usize, height: usize) -> GridResult<usize> {
    let invalid = GridError::InvalidDimension { width, height };
    Boolinator::ok_or(width > 0 && height > 0, invalid)?;
    let size = width.checked_mul(height).ok_or(invalid)?;
    Boolinator::ok_or(size <= isize::MAX as usize, invalid)?;
    Ok(size)
}

#[inline]
fn wrap(coord: isize, len: usize) -> usize {
    coord.rem_euclid(len as isize) as usize
}

impl<C> ToroidalGrid<C> {
    /// Make a new grid using the Cell's Default impl.
    pub fn new(width: usize, height: usize) -> GridResult<Self>
    where
        C: Default,
    {
        let size = check_dimensions(width, height)?;
        debug!("creating {}x{} toroidal grid", width, height);
        Ok(ToroidalGrid {
            cells: (0..size).map(|_| C::default()).collect(),
            width,
            height,
        })
    }

    /// Make a new grid by cloning a default Cell.
    pub fn new_default(width: usize, height: usize, default: C) -> GridResult<Self>
    where
        C: Clone,
    {
        let size = check_dimensions(width, height)?;
        debug!("creating {}x{} toroidal grid", width, height);
        Ok(ToroidalGrid {
            cells: vec![default; size],
            width,
            height,
        })
    }

    /// Make a new grid directly from row-major cells. Cells beyond `width * height` are ignored.
    pub fn new_iter<I>(width: usize, height: usize, iter: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = C>,
    {
        let size = check_dimensions(width, height)?;
        let cells: Vec<_> = iter.into_iter().take(size).collect();
        if cells.len() != size {
            return Err(GridError::CellCount {
                expected: size,
                actual: cells.len(),
            });
        }
        Ok(ToroidalGrid {
            cells,
            width,
            height,
        })
    }

    /// Index of the cell at the wrapped coordinate.
    #[inline]
    pub fn index(&self, x: isize, y: isize) -> usize {
        wrap(y, self.height) * self.width + wrap(x, self.width)
    }

    /// Offset an index to a new index, wrapping around both edges.
    #[inline]
    pub fn delta_index(&self, i: usize, delta: (isize, isize)) -> usize {
        let x = (i % self.width + wrap(delta.0, self.width)) % self.width;
        let y = (i / self.width % self.height + wrap(delta.1, self.height)) % self.height;
        y * self.width + x
    }

    /// Get a &Cell by index. Panics if out of bounds.
    #[inline]
    pub fn get_cell(&self, i: usize) -> &C {
        &self.cells[i]
    }

    #[inline]
    pub fn get(&self, x: isize, y: isize) -> &C {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: isize, y: isize) -> &mut C {
        let ix = self.index(x, y);
        &mut self.cells[ix]
    }

    #[inline]
    pub fn set(&mut self, x: isize, y: isize, cell: C) {
        *self.get_mut(x, y) = cell;
    }

    /// The 8 cells surrounding the wrapped coordinate.
    #[inline]
    pub fn neighbors(&self, x: isize, y: isize) -> MooreNeighbors<&C> {
        self.get_neighbors((x, y))
    }

    /// Count how many of the 8 cells surrounding the wrapped coordinate match `predicate`.
    pub fn count_neighbors<P>(&self, x: isize, y: isize, mut predicate: P) -> usize
    where
        P: FnMut(&C) -> bool,
    {
        self.neighbors(x, y).iter().filter(|&c| predicate(c)).count()
    }

    /// Get the Grid's Cell slice in row-major order.
    #[inline]
    pub fn cells(&self) -> &[C] {
        &self.cells[..]
    }

    /// Iterate over the rows of the grid from top to bottom.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, C> {
        self.cells.chunks_exact(self.width)
    }

    /// Iterate over every `(x, y)` coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| (x, y))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the Grid's size.
    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Replace every cell at once, returning the previous cells.
    pub(crate) fn replace_cells(&mut self, cells: Vec<C>) -> Vec<C> {
        debug_assert_eq!(cells.len(), self.size());
        std::mem::replace(&mut self.cells, cells)
    }
}

impl<C: Glyph> ToroidalGrid<C> {
    /// Write one glyph per cell, one row per line.
    pub fn render<W: Write>(&self, mut out: W) -> io::Result<()> {
        for row in self.rows() {
            let mut line: String = row.iter().map(Glyph::glyph).collect();
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

impl<C: Glyph> fmt::Display for ToroidalGrid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                fmt::Write::write_char(f, cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            ToroidalGrid::<bool>::new(0, 4),
            Err(GridError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
        assert!(ToroidalGrid::new_default(3, 0, false).is_err());
        assert!(ToroidalGrid::new_iter(0, 0, vec![true]).is_err());
        assert!(ToroidalGrid::<bool>::new(usize::MAX, 2).is_err());
        assert_eq!(
            ToroidalGrid::<()>::new(isize::MAX as usize, 2),
            Err(GridError::InvalidDimension {
                width: isize::MAX as usize,
                height: 2
            })
        );
    }

    #[test]
    fn new_iter_needs_enough_cells() {
        assert_eq!(
            ToroidalGrid::new_iter(2, 2, vec![1, 2, 3]),
            Err(GridError::CellCount {
                expected: 4,
                actual: 3
            })
        );
        let grid = ToroidalGrid::new_iter(2, 2, 0..).unwrap();
        assert_eq!(grid.cells(), &[0, 1, 2, 3]);
        assert_eq!(*grid.get(1, 1), 3);
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = ToroidalGrid::<bool>::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.size(), 12);
        assert!(grid.cells().iter().all(|&c| !c));
    }

    #[test]
    fn isolated_cell_neighbor_counts() {
        let mut grid = ToroidalGrid::new(5, 4).unwrap();
        grid.set(2, 1, true);
        for (x, y) in grid.coords() {
            let (x, y) = (x as isize, y as isize);
            let count = grid.count_neighbors(x, y, |&c| c);
            let adjacent = (x - 2).abs() <= 1 && (y - 1).abs() <= 1 && (x, y) != (2, 1);
            assert_eq!(count, adjacent as usize, "at ({}, {})", x, y);
        }
    }

    #[test]
    fn corner_wraps_to_opposite_corner() {
        let mut grid = ToroidalGrid::new(6, 4).unwrap();
        grid.set(5, 3, true);
        let neighbors = grid.neighbors(0, 0);
        assert!(*neighbors.up_left);
        assert_eq!(neighbors.iter().filter(|&&c| c).count(), 1);
    }

    #[test]
    fn delta_index_wraps() {
        let grid = ToroidalGrid::<bool>::new(3, 2).unwrap();
        assert_eq!(grid.delta_index(0, (-1, -1)), 5);
        assert_eq!(grid.delta_index(5, (1, 1)), 0);
        assert_eq!(grid.delta_index(4, (isize::MIN, isize::MAX)), 2);
    }

    #[test]
    fn one_by_one_grid_is_its_own_neighbor() {
        let mut grid = ToroidalGrid::new(1, 1).unwrap();
        grid.set(7, -3, true);
        assert_eq!(grid.count_neighbors(0, 0, |&c| c), 8);
    }

    #[test]
    fn rows_and_render() {
        let mut grid = ToroidalGrid::new(3, 2).unwrap();
        grid.set(0, 0, true);
        grid.set(-1, -1, true);
        assert_eq!(grid.rows().count(), 2);
        let mut out = Vec::new();
        grid.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "*  \n  *\n");
        assert_eq!(grid.to_string(), "*  \n  *\n");
    }

    proptest! {
        #[test]
        fn set_then_get_wraps(
            width in 1usize..16,
            height in 1usize..16,
            x in any::<isize>(),
            y in any::<isize>(),
        ) {
            let mut grid = ToroidalGrid::new(width, height).unwrap();
            grid.set(x, y, true);
            let wx = x.rem_euclid(width as isize) as usize;
            let wy = y.rem_euclid(height as isize) as usize;
            prop_assert!(*grid.get(x, y));
            prop_assert!(grid.cells()[wy * width + wx]);
            prop_assert_eq!(grid.cells().iter().filter(|&&c| c).count(), 1);
        }

        #[test]
        fn delta_index_matches_coordinates(
            width in 1usize..16,
            height in 1usize..16,
            x in 0isize..16,
            y in 0isize..16,
            dx in -40isize..40,
            dy in -40isize..40,
        ) {
            let grid = ToroidalGrid::<bool>::new(width, height).unwrap();
            let ix = grid.index(x, y);
            prop_assert_eq!(grid.delta_index(ix, (dx, dy)), grid.index(x + dx, y + dy));
        }
    }
}
