//! 8-bit RGB color type

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use crate::api::GridError;

/// A color with three 8-bit channels.
///
/// `Rgb` is a plain value type: it is `Copy`, hashable (so it can key the
/// legend), and every channel is always in `0..=255` by construction. Use
/// [`Rgb::checked`] when channel values come from untrusted wide integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from integer channels, rejecting anything outside `0..=255`.
    ///
    /// # Example
    /// ```
    /// use paint_grid::{GridError, Rgb};
    ///
    /// assert_eq!(Rgb::checked(10, 20, 30), Ok(Rgb::new(10, 20, 30)));
    /// assert_eq!(
    ///     Rgb::checked(256, 0, 0),
    ///     Err(GridError::InvalidInput("channel out of range"))
    /// );
    /// ```
    pub fn checked(r: i64, g: i64, b: i64) -> Result<Self, GridError> {
        let channel = |v: i64| u8::try_from(v).map_err(|_| GridError::CHANNEL_OUT_OF_RANGE);
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linearly interpolate from `self` towards `other`.
    ///
    /// Each channel is `a + (b - a) * t`, truncated toward zero. The
    /// truncation (not rounding) is part of the output contract: palettes
    /// and gradient samples must reproduce exactly.
    ///
    /// # Example
    /// ```
    /// use paint_grid::Rgb;
    ///
    /// let mid = Rgb::BLACK.lerp(Rgb::WHITE, 0.5);
    /// assert_eq!(mid, Rgb::new(127, 127, 127));
    /// ```
    #[inline]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| {
            let a = a as f64;
            let v = a + (b as f64 - a) * t;
            (v as i32).clamp(0, 255) as u8
        };
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Sum of squared per-channel differences.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| {
            let diff = a as i32 - b as i32;
            (diff * diff) as u32
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let hex = input.strip_prefix('#').unwrap_or(input);

        let mut digits = [0u8; 6];
        let mut len = 0;
        for c in hex.chars() {
            let d = c.to_digit(16).ok_or_else(|| ParseColorError::digit(input, c))?;
            if len < digits.len() {
                digits[len] = d as u8;
            }
            len += 1;
        }

        match (len, digits) {
            // Shorthand: each digit is doubled (0xF -> 0xFF)
            (3, [r, g, b, ..]) => Ok(Self::new(r * 17, g * 17, b * 17)),
            (6, [r1, r0, g1, g0, b1, b0]) => {
                Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0))
            }
            _ => Err(ParseColorError::length(input, len)),
        }
    }
}
