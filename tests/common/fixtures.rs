//! Test fixtures: configs, exporters and grids.

use paint_grid::{GradientKind, GridBuilder, GridResult, Rgb};
use pixelpaint::models::AppConfig;
use pixelpaint::rendering::SvgRasterizer;
use pixelpaint::services::Exporter;
use resvg::usvg::fontdb;
use std::path::Path;
use std::sync::Arc;

/// Small cells so rasters stay tiny
pub const CELL: u32 = 10;

/// Config writing into `dir` with small cells and no PNG optimization
pub fn test_config(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.render.cell_size = CELL;
    config.render.font_size = 6;
    config.render.optimize = false;
    config.output.dir = dir.to_path_buf();
    config
}

/// Exporter without system fonts (labels are laid out but not drawn)
pub fn exporter(config: &AppConfig) -> Exporter {
    let rasterizer = SvgRasterizer::with_fontdb(
        Arc::new(fontdb::Database::new()),
        config.render.background,
        config.render.optimize,
    );
    Exporter::with_rasterizer(config, rasterizer).expect("grid template compiles")
}

/// The 2x2 black/white grid: labels [[1, 2], [1, 2]]
pub fn black_white_2x2() -> GridResult {
    GridBuilder::new(vec![Rgb::BLACK, Rgb::WHITE])
        .gradient(GradientKind::Horizontal)
        .subdivisions(2)
        .build(2, 2)
        .expect("valid grid")
}

/// A colorful grid with many labels
pub fn rainbow(rows: usize, cols: usize) -> GridResult {
    GridBuilder::new(vec![
        Rgb::new(230, 57, 70),
        Rgb::new(241, 250, 238),
        Rgb::new(69, 123, 157),
        Rgb::new(29, 53, 87),
    ])
    .gradient(GradientKind::Diagonal)
    .subdivisions(5)
    .build(rows, cols)
    .expect("valid grid")
}
