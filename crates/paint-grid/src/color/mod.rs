//! Color types and parsing
//!
//! The whole pipeline works on 8-bit-per-channel RGB. [`Rgb`] is the only
//! color type; there is no linear or perceptual space involved, so every
//! operation is exact integer or truncated `f64` arithmetic and results are
//! bit-reproducible.
//!
//! # Example
//!
//! ```
//! use paint_grid::Rgb;
//!
//! let teal: Rgb = "#008080".parse().unwrap();
//! assert_eq!(teal, Rgb::new(0, 128, 128));
//! assert_eq!(teal.to_string(), "#008080");
//! ```

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Rgb;
