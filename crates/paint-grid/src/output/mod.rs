//! Output types for the grid pipeline.
//!
//! A build produces a [`GridResult`]: the [`Grid`] of quantized, labeled
//! cells, the [`Legend`] mapping each label to its color, and the
//! [`Palette`](crate::palette::Palette) the cells were snapped to.
//!
//! All three are immutable once returned and can be handed to any number
//! of renderers.

mod grid;
mod legend;

pub use grid::{Cell, Grid, GridResult};
pub use legend::{Legend, LegendEntry};
