//! Unified error type for the paint-grid public API.
//!
//! All validation happens before any cell is computed, so a [`GridError`]
//! always means "nothing was built".

use std::fmt;

/// Error returned when a grid request fails validation.
///
/// The message is a fixed, human-readable description of the violated
/// constraint; the associated constants name each one.
///
/// # Example
///
/// ```
/// use paint_grid::{GradientKind, GridError, GridRequest, Rgb};
///
/// let request = GridRequest::new(0, 4, GradientKind::Horizontal, vec![Rgb::BLACK, Rgb::WHITE], 4);
/// assert_eq!(request.validate(), Err(GridError::NON_POSITIVE_DIMENSIONS));
/// assert_eq!(
///     GridError::NON_POSITIVE_DIMENSIONS.to_string(),
///     "invalid input: grid dimensions must be positive"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A request field violates its constraint
    InvalidInput(&'static str),
}

impl GridError {
    /// `rows` or `cols` is zero.
    pub const NON_POSITIVE_DIMENSIONS: GridError =
        GridError::InvalidInput("grid dimensions must be positive");
    /// Fewer than two color stops were supplied.
    pub const TOO_FEW_STOPS: GridError = GridError::InvalidInput("need at least two color stops");
    /// A color channel lies outside `0..=255`.
    pub const CHANNEL_OUT_OF_RANGE: GridError = GridError::InvalidInput("channel out of range");
    /// The subdivision count is zero.
    pub const NON_POSITIVE_SUBDIVISIONS: GridError =
        GridError::InvalidInput("subdivision count must be positive");
    /// A palette was constructed with no colors.
    pub const EMPTY_PALETTE: GridError = GridError::InvalidInput("palette cannot be empty");

    /// The constraint message without the `invalid input:` prefix.
    pub fn message(&self) -> &'static str {
        match self {
            GridError::InvalidInput(msg) => msg,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}
