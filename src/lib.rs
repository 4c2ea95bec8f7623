//! Pixelpaint - paint-by-number gradient art
//!
//! Collects grid parameters, builds a dithered, quantized grid with
//! `paint-grid`, and exports it as labeled and plain PNGs.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
