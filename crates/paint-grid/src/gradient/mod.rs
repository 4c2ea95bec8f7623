//! Gradient kinds and continuous gradient sampling.
//!
//! A gradient maps every grid coordinate to a factor in `[0, 1]` (the
//! [`GradientKind`] decides how), and the factor selects a position along
//! an ordered list of color stops (the [`GradientSampler`]).

mod sampler;

pub use sampler::GradientSampler;

use std::fmt;
use std::str::FromStr;

/// Shape of the gradient across the grid.
///
/// Parsing accepts the lowercase name, its first letter, or the menu digit
/// used by the interactive prompt (`1` Horizontal, `2` Vertical,
/// `3` Diagonal, `4` Radial).
///
/// # Example
///
/// ```
/// use paint_grid::GradientKind;
///
/// assert_eq!("radial".parse(), Ok(GradientKind::Radial));
/// assert_eq!("2".parse(), Ok(GradientKind::Vertical));
/// assert_eq!(GradientKind::Diagonal.to_string(), "diagonal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKind {
    /// Left to right: `x / (width - 1)`
    #[default]
    Horizontal,
    /// Top to bottom: `y / (height - 1)`
    Vertical,
    /// Top-left to bottom-right: `(x + y) / (width + height - 2)`
    Diagonal,
    /// Outward from the grid center, normalised by the center's distance
    /// to the origin corner
    Radial,
}

impl GradientKind {
    /// Every kind, in menu order.
    pub const ALL: [GradientKind; 4] = [
        GradientKind::Horizontal,
        GradientKind::Vertical,
        GradientKind::Diagonal,
        GradientKind::Radial,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            GradientKind::Horizontal => "horizontal",
            GradientKind::Vertical => "vertical",
            GradientKind::Diagonal => "diagonal",
            GradientKind::Radial => "radial",
        }
    }

    /// One-based position in the interactive menu.
    pub fn menu_index(self) -> usize {
        match self {
            GradientKind::Horizontal => 1,
            GradientKind::Vertical => 2,
            GradientKind::Diagonal => 3,
            GradientKind::Radial => 4,
        }
    }

    /// Gradient factor for cell `(x, y)` of a `width` x `height` grid.
    ///
    /// The result always lies in `[0, 1]`. Degenerate dimensions that would
    /// divide by zero (`width == 1` for Horizontal, `height == 1` for
    /// Vertical, a 1x1 grid for Diagonal) yield `0.0`.
    ///
    /// Requires `x < width` and `y < height`.
    pub fn factor(self, x: usize, y: usize, width: usize, height: usize) -> f64 {
        debug_assert!(x < width && y < height, "({x}, {y}) outside {width}x{height}");

        match self {
            GradientKind::Horizontal => ratio(x, width - 1),
            GradientKind::Vertical => ratio(y, height - 1),
            GradientKind::Diagonal => ratio(x + y, width + height - 2),
            GradientKind::Radial => {
                let cx = width as f64 / 2.0;
                let cy = height as f64 / 2.0;
                let max_dist = (cx * cx + cy * cy).sqrt();
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                (dx * dx + dy * dy).sqrt() / max_dist
            }
        }
    }
}

/// `num / den`, or `0.0` when the span is empty.
#[inline]
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a gradient name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGradientError(String);

impl fmt::Display for ParseGradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown gradient '{}' (expected horizontal, vertical, diagonal, radial or 1-4)",
            self.0
        )
    }
}

impl std::error::Error for ParseGradientError {}

impl FromStr for GradientKind {
    type Err = ParseGradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "h" | "horizontal" => Ok(GradientKind::Horizontal),
            "2" | "v" | "vertical" => Ok(GradientKind::Vertical),
            "3" | "d" | "diagonal" => Ok(GradientKind::Diagonal),
            "4" | "r" | "radial" => Ok(GradientKind::Radial),
            _ => Err(ParseGradientError(s.trim().to_string())),
        }
    }
}
