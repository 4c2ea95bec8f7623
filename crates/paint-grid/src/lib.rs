#![allow(clippy::module_inception)]

//! paint-grid: dithered gradient grids with paint-by-number legends
//!
//! This library turns a handful of color stops into a small grid of
//! quantized colors: it samples a gradient across the grid, perturbs every
//! sample with ordered dithering, snaps it to a palette generated from the
//! same stops, and numbers each distinct color in the order it is first
//! seen.
//!
//! # Quick Start
//!
//! The [`GridBuilder`] is the primary entry point:
//!
//! ```
//! use paint_grid::{GradientKind, GridBuilder};
//!
//! let stops = vec!["#1d3557".parse().unwrap(), "#e63946".parse().unwrap()];
//! let result = GridBuilder::new(stops)
//!     .gradient(GradientKind::Diagonal)
//!     .subdivisions(6)
//!     .build(8, 12)
//!     .unwrap();
//!
//! assert_eq!(result.grid.rows(), 8);
//! assert_eq!(result.grid.get(0, 0).unwrap().label, 1);
//! for entry in &result.legend {
//!     println!("{:>3}  {}", entry.label, entry.color);
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! color stops ──> Palette::generate ──────────────┐  (once, frozen)
//!                                                 v
//! (col, row) ──> GradientSampler ──> OrderedDither ──> Palette::quantize
//!                  raw color          +/- 8 per ch.     nearest entry
//!                                                         |
//!                                   (row-major scan)      v
//!                                   Legend::label_for ──> Cell { color, label }
//! ```
//!
//! ## Gradient factor
//!
//! Each [`GradientKind`] maps a cell to a factor in `[0, 1]`. The stops
//! split that range into equal segments; inside a segment channels are
//! interpolated linearly and truncated toward zero. A factor at or past the
//! last boundary yields the final stop exactly.
//!
//! Grids with a single column (horizontal), a single row (vertical), or a
//! single cell (diagonal) have no span to divide by; their factor is `0`.
//!
//! ## Determinism
//!
//! Nothing in the pipeline is random. Sampling, dithering, and quantization
//! are pure per-cell functions, quantization breaks ties toward the first
//! palette entry, and labels are assigned in one sequential row-major pass.
//! The same request always produces a bit-identical [`GridResult`].

pub mod api;
pub mod color;
pub mod dither;
pub mod gradient;
pub mod output;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use api::{build_grid, GridBuilder, GridError, GridRequest};
pub use color::{ParseColorError, Rgb};
pub use dither::{OrderedDither, BAYER_4X4};
pub use gradient::{GradientKind, GradientSampler, ParseGradientError};
pub use output::{Cell, Grid, GridResult, Legend, LegendEntry};
pub use palette::Palette;
