use crate::error::{ExportError, RenderError};
use crate::models::{AppConfig, OutputConfig};
use crate::rendering::{GridSvg, RenderOptions, SvgRasterizer};
use paint_grid::{GridResult, Legend};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One legend row in the JSON sidecar
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LegendRecord {
    pub label: u32,
    pub hex: String,
    pub rgb: [u8; 3],
}

impl LegendRecord {
    /// Records in label order
    pub fn from_legend(legend: &Legend) -> Vec<Self> {
        legend
            .iter()
            .map(|entry| Self {
                label: entry.label,
                hex: entry.color.to_string(),
                rgb: entry.color.to_bytes(),
            })
            .collect()
    }
}

/// Paths written by one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub labeled: PathBuf,
    pub plain: PathBuf,
    pub legend: Option<PathBuf>,
}

impl ExportReport {
    /// All written files, labeled image first
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        [Some(&self.labeled), Some(&self.plain), self.legend.as_ref()]
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
    }
}

/// Renders a grid twice (labeled and plain) and writes the results to disk
pub struct Exporter {
    svg: GridSvg,
    rasterizer: SvgRasterizer,
    labeled: RenderOptions,
    plain: RenderOptions,
    output: OutputConfig,
}

impl Exporter {
    /// Create an exporter that loads system fonts for labels
    pub fn new(config: &AppConfig) -> Result<Self, RenderError> {
        let rasterizer = SvgRasterizer::new(config.render.background, config.render.optimize);
        Self::with_rasterizer(config, rasterizer)
    }

    /// Create an exporter around an existing rasterizer
    pub fn with_rasterizer(config: &AppConfig, rasterizer: SvgRasterizer) -> Result<Self, RenderError> {
        Ok(Self {
            svg: GridSvg::new()?,
            rasterizer,
            labeled: RenderOptions::labeled(&config.render),
            plain: RenderOptions::plain(&config.render),
            output: config.output.clone(),
        })
    }

    /// Directory files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output.dir
    }

    /// Render the labeled and plain PNGs without touching the filesystem
    pub fn render_pngs(&self, result: &GridResult) -> Result<(Vec<u8>, Vec<u8>), RenderError> {
        let labeled = self.render_png(result, &self.labeled)?;
        let plain = self.render_png(result, &self.plain)?;
        Ok((labeled, plain))
    }

    fn render_png(&self, result: &GridResult, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let svg = self.svg.render(result, options)?;
        self.rasterizer.render_png(&svg)
    }

    /// Write the labeled PNG, the plain PNG and (if configured) the JSON legend
    pub fn export(&self, result: &GridResult) -> Result<ExportReport, ExportError> {
        let dir = &self.output.dir;
        fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.clone(),
            source,
        })?;

        let (labeled_png, plain_png) = self.render_pngs(result)?;

        let labeled = dir.join(&self.output.labeled);
        write_file(&labeled, &labeled_png)?;
        let plain = dir.join(&self.output.plain);
        write_file(&plain, &plain_png)?;

        let legend = match &self.output.legend {
            Some(name) => {
                let path = dir.join(name);
                let json = serde_json::to_string_pretty(&LegendRecord::from_legend(&result.legend))?;
                write_file(&path, json.as_bytes())?;
                Some(path)
            }
            None => None,
        };

        Ok(ExportReport {
            labeled,
            plain,
            legend,
        })
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}
