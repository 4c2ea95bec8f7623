//! Public API for the paint-grid crate.
//!
//! This module provides the high-level entry points: the [`GridRequest`]
//! input record, the [`GridBuilder`] that runs the pipeline, and the
//! [`GridError`] validation error.

mod builder;
mod error;
mod request;

pub use builder::{build_grid, GridBuilder};
pub use error::GridError;
pub use request::GridRequest;
