//! GridBuilder -- the primary entry point for the crate.
//!
//! [`GridBuilder`] wraps the pipeline (palette generation, gradient
//! sampling, ordered dithering, quantization, labeling) behind a fluent
//! builder API with sensible defaults.

use super::error::GridError;
use super::request::GridRequest;
use crate::color::Rgb;
use crate::dither::OrderedDither;
use crate::gradient::{GradientKind, GradientSampler};
use crate::output::{Cell, Grid, GridResult, Legend};
use crate::palette::Palette;

/// High-level grid builder.
///
/// # Design
///
/// - Constructor requires the color stops; everything else has a default
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`build()`](Self::build) takes `&self` so one builder can produce grids
///   of several sizes
///
/// A build runs in two passes. The first computes every cell's quantized
/// color independently (no cell reads another). The second walks the cells
/// in row-major order and assigns legend labels, which is the only step
/// whose result depends on scan order.
///
/// # Example
///
/// ```
/// use paint_grid::{GradientKind, GridBuilder, Rgb};
///
/// let result = GridBuilder::new(vec![Rgb::BLACK, Rgb::WHITE])
///     .gradient(GradientKind::Horizontal)
///     .subdivisions(2)
///     .build(2, 2)
///     .unwrap();
///
/// assert_eq!(result.grid.get(0, 0).unwrap().label, 1);
/// assert_eq!(result.legend.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder {
    stops: Vec<Rgb>,
    gradient: GradientKind,
    subdivisions: usize,
}

impl GridBuilder {
    /// Palette entries per stop pair when none is configured.
    pub const DEFAULT_SUBDIVISIONS: usize = 10;

    /// Create a builder over the given stops.
    ///
    /// Defaults: horizontal gradient, [`DEFAULT_SUBDIVISIONS`](Self::DEFAULT_SUBDIVISIONS).
    pub fn new(stops: Vec<Rgb>) -> Self {
        Self {
            stops,
            gradient: GradientKind::default(),
            subdivisions: Self::DEFAULT_SUBDIVISIONS,
        }
    }

    /// Builder preloaded from a request (its dimensions are not stored).
    pub fn from_request(request: &GridRequest) -> Self {
        Self {
            stops: request.stops.clone(),
            gradient: request.gradient,
            subdivisions: request.subdivisions,
        }
    }

    /// Set the gradient kind.
    #[inline]
    pub fn gradient(mut self, kind: GradientKind) -> Self {
        self.gradient = kind;
        self
    }

    /// Set the number of palette entries generated per stop pair.
    #[inline]
    pub fn subdivisions(mut self, count: usize) -> Self {
        self.subdivisions = count;
        self
    }

    /// Build a `rows` x `cols` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidInput`] when a dimension is zero, fewer
    /// than two stops are configured, or the subdivision count is zero.
    /// Validation completes before any cell is computed.
    pub fn build(&self, rows: usize, cols: usize) -> Result<GridResult, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::NON_POSITIVE_DIMENSIONS);
        }
        let palette = Palette::generate(&self.stops, self.subdivisions)?;
        let sampler = GradientSampler::new(self.gradient, &self.stops)?;

        let colors: Vec<Rgb> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let raw = sampler.sample(col, row, cols, rows);
                palette.quantize(OrderedDither.dither(raw, col, row))
            })
            .collect();

        let mut legend = Legend::new();
        let cells = colors
            .into_iter()
            .map(|color| Cell {
                color,
                label: legend.label_for(color),
            })
            .collect();

        Ok(GridResult {
            grid: Grid::new(cells, rows, cols),
            legend,
            palette,
        })
    }
}

/// Validate `request` and build its grid.
///
/// # Example
///
/// ```
/// use paint_grid::{build_grid, GradientKind, GridRequest, Rgb};
///
/// let request = GridRequest::new(1, 1, GradientKind::Radial, vec![Rgb::BLACK, Rgb::WHITE], 1);
/// let result = build_grid(&request).unwrap();
/// assert_eq!(result.legend.len(), 1);
/// ```
pub fn build_grid(request: &GridRequest) -> Result<GridResult, GridError> {
    request.validate()?;
    GridBuilder::from_request(request).build(request.rows, request.cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgb = Rgb::new(127, 127, 127);

    #[test]
    fn test_two_by_two_black_white_scenario() {
        let result = GridBuilder::new(vec![Rgb::BLACK, Rgb::WHITE])
            .gradient(GradientKind::Horizontal)
            .subdivisions(2)
            .build(2, 2)
            .unwrap();

        assert_eq!(result.palette.colors(), &[Rgb::BLACK, GREY]);

        // Column 0 samples black, column 1 clamps to white; white minus any
        // dither offset is still nearer grey than black.
        let expect = [(0, 0, Rgb::BLACK, 1), (0, 1, GREY, 2), (1, 0, Rgb::BLACK, 1), (1, 1, GREY, 2)];
        for (row, col, color, label) in expect {
            let cell = result.grid.get(row, col).unwrap();
            assert_eq!((cell.color, cell.label), (color, label), "cell ({row}, {col})");
        }

        let legend: Vec<(u32, Rgb)> = result.legend.iter().map(|e| (e.label, e.color)).collect();
        assert_eq!(legend, vec![(1, Rgb::BLACK), (2, GREY)]);
    }

    #[test]
    fn test_single_entry_palette_single_label() {
        let red = Rgb::new(255, 0, 0);
        let result = GridBuilder::new(vec![red, Rgb::new(0, 0, 255)])
            .subdivisions(1)
            .gradient(GradientKind::Radial)
            .build(5, 7)
            .unwrap();

        assert_eq!(result.palette.len(), 1);
        assert!(result.grid.cells().iter().all(|c| c.color == red && c.label == 1));
        assert_eq!(result.legend.len(), 1);
        assert_eq!(result.legend.color_of(1), Some(red));
    }

    #[test]
    fn test_validation_before_computation() {
        let builder = GridBuilder::new(vec![Rgb::BLACK, Rgb::WHITE]);
        assert_eq!(builder.build(0, 3), Err(GridError::NON_POSITIVE_DIMENSIONS));
        assert_eq!(builder.build(3, 0), Err(GridError::NON_POSITIVE_DIMENSIONS));
        assert_eq!(
            builder.clone().subdivisions(0).build(2, 2),
            Err(GridError::NON_POSITIVE_SUBDIVISIONS)
        );
        assert_eq!(
            GridBuilder::new(vec![Rgb::BLACK]).build(2, 2),
            Err(GridError::TOO_FEW_STOPS)
        );
    }

    #[test]
    fn test_build_grid_matches_builder() {
        let request = GridRequest::new(
            6,
            9,
            GradientKind::Diagonal,
            vec![Rgb::new(200, 30, 30), Rgb::new(30, 200, 30), Rgb::new(30, 30, 200)],
            4,
        );
        let a = build_grid(&request).unwrap();
        let b = GridBuilder::new(request.stops.clone())
            .gradient(GradientKind::Diagonal)
            .subdivisions(4)
            .build(6, 9)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_grid_validates_request() {
        let request = GridRequest::new(2, 2, GradientKind::Vertical, vec![Rgb::BLACK], 3);
        assert_eq!(build_grid(&request), Err(GridError::TOO_FEW_STOPS));
    }

    #[test]
    fn test_every_cell_is_a_palette_member_with_consistent_label() {
        let result = GridBuilder::new(vec![Rgb::new(10, 80, 160), Rgb::new(250, 200, 20)])
            .gradient(GradientKind::Radial)
            .subdivisions(6)
            .build(12, 17)
            .unwrap();

        for (_, _, cell) in result.grid.iter_cells() {
            assert!(result.palette.colors().contains(&cell.color));
            assert_eq!(result.legend.label_of(cell.color), Some(cell.label));
        }
    }

    #[test]
    fn test_single_row_vertical_grid_is_defined() {
        let result = GridBuilder::new(vec![Rgb::BLACK, Rgb::WHITE])
            .gradient(GradientKind::Vertical)
            .subdivisions(4)
            .build(1, 8)
            .unwrap();
        assert_eq!(result.grid.cols(), 8);
        // factor 0 everywhere: raw black, dithered by at most +7, stays black
        assert!(result.grid.cells().iter().all(|c| c.color == Rgb::BLACK));
    }
}
