//! Grid layout as SVG
//!
//! One square per cell, optionally outlined and numbered, produced from the
//! embedded `grid.svg` Tera template.

use crate::assets::AssetLoader;
use crate::error::RenderError;
use crate::models::RenderConfig;
use paint_grid::{GridResult, Rgb};
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATE: &str = "grid.svg";

/// How a grid is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Pixel size of one cell
    pub cell_size: u32,
    /// Draw a 1px border along the inside edge of every cell
    pub grid_lines: bool,
    /// Draw the legend label centered in every cell
    pub labels: bool,
    pub font_size: u32,
    pub font_family: String,
    pub border_color: Rgb,
    pub label_color: Rgb,
    pub background: Rgb,
}

impl RenderOptions {
    /// Grid lines and labels on (the paint-by-number sheet)
    pub fn labeled(config: &RenderConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            grid_lines: true,
            labels: true,
            font_size: config.font_size,
            font_family: config.font_family.clone(),
            border_color: config.border_color,
            label_color: config.label_color,
            background: config.background,
        }
    }

    /// Colors only
    pub fn plain(config: &RenderConfig) -> Self {
        Self {
            grid_lines: false,
            labels: false,
            ..Self::labeled(config)
        }
    }

    /// Canvas size in pixels for a `rows` x `cols` grid
    pub fn canvas_size(&self, rows: usize, cols: usize) -> Result<(u32, u32), RenderError> {
        let scale = |n: usize| {
            u32::try_from(n)
                .ok()
                .and_then(|n| n.checked_mul(self.cell_size))
                .filter(|&px| px > 0)
        };
        match (scale(cols), scale(rows)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(RenderError::UnsupportedDimensions {
                width: (cols as u32).saturating_mul(self.cell_size),
                height: (rows as u32).saturating_mul(self.cell_size),
            }),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::labeled(&RenderConfig::default())
    }
}

#[derive(Serialize)]
struct SvgCell {
    x: u32,
    y: u32,
    inset_x: u32,
    inset_y: u32,
    cx: f64,
    baseline: f64,
    fill: String,
    label: u32,
}

#[derive(Serialize)]
struct SvgContext<'a> {
    width: u32,
    height: u32,
    cell_size: u32,
    inner_size: u32,
    background: String,
    grid_lines: bool,
    border_color: String,
    labels: bool,
    label_color: String,
    font_size: u32,
    font_family: &'a str,
    cells: Vec<SvgCell>,
}

/// Renders a [`GridResult`] to SVG markup
pub struct GridSvg {
    tera: Tera,
}

impl GridSvg {
    /// Compile the embedded grid template
    pub fn new() -> Result<Self, RenderError> {
        let source = AssetLoader::read_template(TEMPLATE)
            .map_err(|e| RenderError::TemplateNotFound(e.to_string()))?;
        Self::from_template(&source)
    }

    /// Compile a caller-supplied template with the same context as `grid.svg`
    pub fn from_template(source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE, source)?;
        Ok(Self { tera })
    }

    /// Render `result` with `options`
    pub fn render(&self, result: &GridResult, options: &RenderOptions) -> Result<String, RenderError> {
        let grid = &result.grid;
        let (width, height) = options.canvas_size(grid.rows(), grid.cols())?;

        let size = options.cell_size;
        let half = f64::from(size) / 2.0;
        // Approximate cap height so digits sit visually centered
        let baseline_shift = f64::from((options.font_size * 7 + 10) / 20);

        let cells = grid
            .iter_cells()
            .map(|(row, col, cell)| {
                // canvas_size already proved these products fit in u32
                let x = col as u32 * size;
                let y = row as u32 * size;
                SvgCell {
                    x,
                    y,
                    inset_x: x + 1,
                    inset_y: y + 1,
                    cx: f64::from(x) + half,
                    baseline: f64::from(y) + half + baseline_shift,
                    fill: cell.color.to_string(),
                    label: cell.label,
                }
            })
            .collect();

        let data = SvgContext {
            width,
            height,
            cell_size: size,
            inner_size: size.saturating_sub(2),
            background: options.background.to_string(),
            grid_lines: options.grid_lines,
            border_color: options.border_color.to_string(),
            labels: options.labels,
            label_color: options.label_color.to_string(),
            font_size: options.font_size,
            font_family: &options.font_family,
            cells,
        };

        let context = Context::from_serialize(&data)?;
        let svg = self.tera.render(TEMPLATE, &context)?;
        tracing::debug!(width, height, bytes = svg.len(), "Rendered grid SVG");
        Ok(svg)
    }
}
