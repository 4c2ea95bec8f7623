//! Palette generation and nearest-color quantization
//!
//! A [`Palette`] is an ordered, immutable list of colors. It is usually
//! generated from the gradient stops with [`Palette::generate`] and then
//! shared read-only by every cell of a grid build.

mod palette;

pub use palette::Palette;
