//! Ordered dithering.
//!
//! Ordered dithering perturbs each pixel by a threshold taken from a small
//! fixed matrix tiled across the image. Unlike error diffusion it has no
//! neighbor dependencies, so every cell can be processed independently
//! and the result depends only on the coordinate and the input color.
//!
//! # Example
//!
//! ```
//! use paint_grid::{OrderedDither, Rgb};
//!
//! let grey = Rgb::new(100, 100, 100);
//! // Top-left threshold is 0, centered to -8
//! assert_eq!(OrderedDither.dither(grey, 0, 0), Rgb::new(92, 92, 92));
//! // The pattern repeats every 4 cells in both directions
//! assert_eq!(OrderedDither.dither(grey, 4, 8), OrderedDither.dither(grey, 0, 0));
//! ```

mod ordered;

pub use ordered::{OrderedDither, BAYER_4X4};
