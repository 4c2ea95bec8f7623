//! 4x4 Bayer ordered dithering.

use crate::color::Rgb;

/// 4x4 Bayer threshold matrix, indexed `[y % 4][x % 4]`.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Centers the `0..=15` thresholds around zero.
const THRESHOLD_BIAS: i32 = 8;

/// Ordered dithering with the 4x4 Bayer matrix.
///
/// Each channel becomes `clamp(channel + threshold - 8, 0, 255)`, so a cell
/// is nudged by between -8 and +7 depending on its position in the tile.
/// Stateless; the same input always produces the same output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedDither;

impl OrderedDither {
    /// Signed offset applied to every channel of cell `(x, y)`.
    #[inline]
    pub fn offset(x: usize, y: usize) -> i32 {
        BAYER_4X4[y % 4][x % 4] as i32 - THRESHOLD_BIAS
    }

    /// Perturb `color` by the threshold for cell `(x, y)`.
    #[inline]
    pub fn dither(&self, color: Rgb, x: usize, y: usize) -> Rgb {
        let offset = Self::offset(x, y);
        let adjust = |c: u8| (c as i32 + offset).clamp(0, 255) as u8;
        Rgb::new(adjust(color.r), adjust(color.g), adjust(color.b))
    }
}
