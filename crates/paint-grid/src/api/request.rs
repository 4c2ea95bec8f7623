//! GridRequest, the validated input record for a build.

use super::error::GridError;
use crate::color::Rgb;
use crate::gradient::GradientKind;

/// Everything needed to build one grid.
///
/// Fields are public so callers can assemble a request however they
/// gather input; [`validate`](GridRequest::validate) checks the
/// constraints and every build calls it before computing any cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRequest {
    /// Number of rows (> 0)
    pub rows: usize,
    /// Number of columns (> 0)
    pub cols: usize,
    /// Gradient shape
    pub gradient: GradientKind,
    /// Ordered color stops (at least two)
    pub stops: Vec<Rgb>,
    /// Palette entries generated per stop pair (> 0)
    pub subdivisions: usize,
}

impl GridRequest {
    /// Assemble a request. Nothing is checked until [`validate`](Self::validate).
    pub fn new(
        rows: usize,
        cols: usize,
        gradient: GradientKind,
        stops: Vec<Rgb>,
        subdivisions: usize,
    ) -> Self {
        Self {
            rows,
            cols,
            gradient,
            stops,
            subdivisions,
        }
    }

    /// Check every constraint, in the order they are reported.
    ///
    /// Channel ranges are guaranteed by [`Rgb`] itself; use
    /// [`Rgb::checked`] when building stops from wide integers.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::NON_POSITIVE_DIMENSIONS);
        }
        if self.stops.len() < 2 {
            return Err(GridError::TOO_FEW_STOPS);
        }
        if self.subdivisions == 0 {
            return Err(GridError::NON_POSITIVE_SUBDIVISIONS);
        }
        Ok(())
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}
