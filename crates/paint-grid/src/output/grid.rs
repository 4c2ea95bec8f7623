//! Grid and GridResult, the canonical output of a build.

use super::legend::Legend;
use crate::color::Rgb;
use crate::palette::Palette;

/// A single grid cell: its quantized color and legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Quantized color (always a palette member)
    pub color: Rgb,
    /// Legend label for `color`
    pub label: u32,
}

/// A `rows` x `cols` array of cells stored in row-major order.
///
/// # Example
///
/// ```
/// use paint_grid::{Cell, Grid, Rgb};
///
/// let cell = Cell { color: Rgb::BLACK, label: 1 };
/// let grid = Grid::new(vec![cell; 6], 2, 3);
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.get(1, 2), Some(&cell));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid from cells in row-major order.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == rows * cols`.
    pub fn new(cells: Vec<Cell>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(
            cells.len(),
            rows * cols,
            "cells length ({}) must match rows * cols ({}x{}={})",
            cells.len(),
            rows,
            cols,
            rows * cols,
        );
        Self { cells, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at (`row`, `col`), if inside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterate over `(row, col, cell)` in scan order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    /// One pixel per cell as `[R, G, B, R, G, B, ...]`.
    ///
    /// The returned buffer has length `rows * cols * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|cell| cell.color.to_bytes())
            .collect()
    }
}

/// Everything a build produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridResult {
    /// The labeled cells
    pub grid: Grid,
    /// Label ids in first-seen order
    pub legend: Legend,
    /// The palette cells were quantized against
    pub palette: Palette,
}
