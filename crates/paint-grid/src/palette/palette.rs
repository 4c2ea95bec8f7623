//! Palette struct with stop-pair generation and nearest-color matching.

use crate::api::GridError;
use crate::color::Rgb;

/// An ordered, non-empty set of colors that quantization snaps to.
///
/// Entries keep their generation order and may repeat (for example when two
/// adjacent stops are equal); duplicates need no special handling because
/// the first matching entry always wins a tie.
///
/// # Example
///
/// ```
/// use paint_grid::{Palette, Rgb};
///
/// let palette = Palette::generate(&[Rgb::BLACK, Rgb::WHITE], 2).unwrap();
/// assert_eq!(palette.colors(), &[Rgb::BLACK, Rgb::new(127, 127, 127)]);
///
/// // Pure white snaps to the nearer of the two entries
/// assert_eq!(palette.quantize(Rgb::WHITE), Rgb::new(127, 127, 127));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from an explicit list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EMPTY_PALETTE`] if `colors` is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, GridError> {
        if colors.is_empty() {
            return Err(GridError::EMPTY_PALETTE);
        }
        Ok(Self { colors })
    }

    /// Generate a palette by subdividing each consecutive pair of stops.
    ///
    /// For every pair `(stops[i], stops[i + 1])`, `subdivisions` colors are
    /// interpolated at `j / subdivisions` for `j` in `0..subdivisions`
    /// (truncating each channel). The pair's end color is therefore never
    /// included; it is the start of the next pair, and the final stop
    /// only appears if some earlier pair happens to produce it.
    ///
    /// The result has exactly `(stops.len() - 1) * subdivisions` entries.
    ///
    /// # Errors
    ///
    /// - [`GridError::TOO_FEW_STOPS`] when fewer than two stops are given
    /// - [`GridError::NON_POSITIVE_SUBDIVISIONS`] when `subdivisions == 0`
    pub fn generate(stops: &[Rgb], subdivisions: usize) -> Result<Self, GridError> {
        if stops.len() < 2 {
            return Err(GridError::TOO_FEW_STOPS);
        }
        if subdivisions == 0 {
            return Err(GridError::NON_POSITIVE_SUBDIVISIONS);
        }

        let colors = stops
            .windows(2)
            .flat_map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                (0..subdivisions).map(move |j| from.lerp(to, j as f64 / subdivisions as f64))
            })
            .collect();

        Ok(Self { colors })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The palette entries in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The color at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// Find the palette entry nearest to `color`.
    ///
    /// Distance is the sum of squared channel differences. Returns
    /// `(index, distance)`; when several entries share the minimum, the
    /// lowest index wins.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, u32) {
        // Linear scan; generated palettes are small
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_idx, best_dist)
    }

    /// Snap `color` to its nearest palette entry.
    ///
    /// Always returns a member of the palette.
    #[inline]
    pub fn quantize(&self, color: Rgb) -> Rgb {
        self.colors[self.find_nearest(color).0]
    }
}
