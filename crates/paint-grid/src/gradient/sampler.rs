//! Piecewise-linear gradient sampling over ordered color stops.

use super::GradientKind;
use crate::api::GridError;
use crate::color::Rgb;

/// Samples a raw (unquantized) color for any grid coordinate.
///
/// The stops split `[0, 1]` into `N - 1` equal segments. A factor in segment
/// `i` interpolates between `stops[i]` and `stops[i + 1]`; a factor that
/// lands on or past the last boundary returns the final stop unchanged.
///
/// # Example
///
/// ```
/// use paint_grid::{GradientKind, GradientSampler, Rgb};
///
/// let stops = [Rgb::BLACK, Rgb::WHITE];
/// let sampler = GradientSampler::new(GradientKind::Horizontal, &stops).unwrap();
///
/// assert_eq!(sampler.sample(0, 0, 3, 1), Rgb::BLACK);
/// assert_eq!(sampler.sample(1, 0, 3, 1), Rgb::new(127, 127, 127));
/// assert_eq!(sampler.sample(2, 0, 3, 1), Rgb::WHITE);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GradientSampler<'a> {
    kind: GradientKind,
    stops: &'a [Rgb],
}

impl<'a> GradientSampler<'a> {
    /// Create a sampler over at least two stops.
    pub fn new(kind: GradientKind, stops: &'a [Rgb]) -> Result<Self, GridError> {
        if stops.len() < 2 {
            return Err(GridError::TOO_FEW_STOPS);
        }
        Ok(Self { kind, stops })
    }

    /// The gradient kind this sampler uses.
    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Raw color for cell `(x, y)` of a `width` x `height` grid.
    pub fn sample(&self, x: usize, y: usize, width: usize, height: usize) -> Rgb {
        self.at(self.kind.factor(x, y, width, height))
    }

    /// Raw color at gradient position `factor` (expected in `[0, 1]`).
    pub fn at(&self, factor: f64) -> Rgb {
        let last = self.stops.len() - 1;
        let segment_size = 1.0 / last as f64;
        let segment_index = (factor / segment_size) as usize;
        if segment_index >= last {
            return self.stops[last];
        }

        let local = (factor - segment_index as f64 * segment_size) / segment_size;
        self.stops[segment_index].lerp(self.stops[segment_index + 1], local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_requires_two_stops() {
        assert_eq!(
            GradientSampler::new(GradientKind::Horizontal, &[RED]).unwrap_err(),
            GridError::TOO_FEW_STOPS
        );
        assert!(GradientSampler::new(GradientKind::Horizontal, &[]).is_err());
    }

    #[test]
    fn test_factor_zero_returns_first_stop() {
        let stops = [RED, GREEN, BLUE];
        for kind in [
            GradientKind::Horizontal,
            GradientKind::Vertical,
            GradientKind::Diagonal,
        ] {
            let sampler = GradientSampler::new(kind, &stops).unwrap();
            assert_eq!(sampler.sample(0, 0, 7, 5), RED, "{kind}");
        }
    }

    #[test]
    fn test_factor_one_clamps_to_last_stop() {
        let stops = [RED, GREEN, BLUE];
        let sampler = GradientSampler::new(GradientKind::Horizontal, &stops).unwrap();
        assert_eq!(sampler.at(1.0), BLUE);
        assert_eq!(sampler.sample(6, 0, 7, 1), BLUE);
    }

    #[test]
    fn test_segment_boundaries_hit_interior_stops() {
        let stops = [RED, GREEN, BLUE];
        let sampler = GradientSampler::new(GradientKind::Horizontal, &stops).unwrap();
        // x = 2 of 5 columns -> factor 0.5 -> start of second segment
        assert_eq!(sampler.sample(2, 0, 5, 1), GREEN);
    }

    #[test]
    fn test_interpolation_within_segment() {
        let stops = [RED, GREEN, BLUE];
        let sampler = GradientSampler::new(GradientKind::Horizontal, &stops).unwrap();
        // factor 0.25 -> local 0.5 in the red->green segment
        assert_eq!(sampler.at(0.25), Rgb::new(127, 127, 0));
        // factor 0.75 -> local 0.5 in the green->blue segment
        assert_eq!(sampler.at(0.75), Rgb::new(0, 127, 127));
    }

    #[test]
    fn test_degenerate_single_column_uses_first_stop() {
        let stops = [RED, BLUE];
        let sampler = GradientSampler::new(GradientKind::Horizontal, &stops).unwrap();
        for y in 0..4 {
            assert_eq!(sampler.sample(0, y, 1, 4), RED);
        }
    }

    #[test]
    fn test_degenerate_single_row_vertical_uses_first_stop() {
        let stops = [RED, BLUE];
        let sampler = GradientSampler::new(GradientKind::Vertical, &stops).unwrap();
        for x in 0..4 {
            assert_eq!(sampler.sample(x, 0, 4, 1), RED);
        }
    }

    #[test]
    fn test_radial_corner_is_last_stop() {
        let stops = [RED, BLUE];
        let sampler = GradientSampler::new(GradientKind::Radial, &stops).unwrap();
        assert_eq!(sampler.sample(0, 0, 4, 4), BLUE);
        assert_eq!(sampler.sample(2, 2, 4, 4), RED);
    }
}
